use crate::commands::print_header;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::rpc::{NodeStatus, RpcClient};
use prettytable::{Cell, Row, Table};
use std::io::Write;

/// Query `status` and print node identity and sync state.
///
/// The result is fully decoded before the first line is written, so a failed
/// call or a malformed result leaves `out` untouched.
pub async fn print_node_info(
    client: &RpcClient,
    format: OutputFormat,
    out: &mut (dyn Write + Send),
) -> Result<()> {
    let status = client.status().await?;
    render(&status, format, out)
}

pub fn render(status: &NodeStatus, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(status).map_err(std::io::Error::from)?)?;
        }
        OutputFormat::Text => {
            print_header(out, "Node Information:")?;
            writeln!(out, "Node ID: {}", status.node_info.id)?;
            writeln!(out, "Moniker: {}", status.node_info.moniker)?;
            writeln!(out, "Network: {}", status.node_info.network)?;
            writeln!(out, "Latest Block Height: {}", status.sync_info.latest_block_height)?;
            writeln!(out, "Catching Up: {}", capitalized_bool(status.sync_info.catching_up))?;
        }
        OutputFormat::Table => {
            print_header(out, "Node Information")?;

            let mut table = Table::new();
            table.add_row(Row::new(vec![
                Cell::new("Node ID").style_spec("bFg"),
                Cell::new(&status.node_info.id),
            ]));
            table.add_row(Row::new(vec![
                Cell::new("Moniker").style_spec("bFg"),
                Cell::new(&status.node_info.moniker),
            ]));
            table.add_row(Row::new(vec![
                Cell::new("Network").style_spec("bFg"),
                Cell::new(&status.node_info.network),
            ]));
            table.add_row(Row::new(vec![
                Cell::new("Latest Block Height").style_spec("bFg"),
                Cell::new(&status.sync_info.latest_block_height.to_string()),
            ]));
            table.add_row(Row::new(vec![
                Cell::new("Catching Up").style_spec("bFg"),
                Cell::new(if status.sync_info.catching_up { "Yes" } else { "No" })
                    .style_spec(if status.sync_info.catching_up { "Fy" } else { "Fg" }),
            ]));

            table.print(out)?;
        }
    }

    Ok(())
}

/// `True`/`False` in the text view.
fn capitalized_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init_color;
    use crate::config::ColorMode;
    use crate::rpc::{BlockHeight, NodeInfo, SyncInfo};

    fn sample() -> NodeStatus {
        NodeStatus {
            node_info: NodeInfo {
                id: "8f1e3c".to_string(),
                moniker: "story-node".to_string(),
                network: "odyssey".to_string(),
            },
            sync_info: SyncInfo {
                latest_block_height: BlockHeight::Text("1200".to_string()),
                catching_up: false,
            },
        }
    }

    fn rendered(format: OutputFormat) -> String {
        init_color(ColorMode::Never);
        let mut out = Vec::new();
        render(&sample(), format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_lines_in_order() {
        let text = rendered(OutputFormat::Text);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Node Information:",
                "Node ID: 8f1e3c",
                "Moniker: story-node",
                "Network: odyssey",
                "Latest Block Height: 1200",
                "Catching Up: False",
            ]
        );
    }

    #[test]
    fn test_catching_up_true_is_capitalized() {
        init_color(ColorMode::Never);
        let mut status = sample();
        status.sync_info.catching_up = true;

        let mut out = Vec::new();
        render(&status, OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().last(), Some("Catching Up: True"));
    }

    #[test]
    fn test_json_is_parseable() {
        let text = rendered(OutputFormat::Json);
        let decoded: NodeStatus = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn test_table_contains_every_field() {
        let text = rendered(OutputFormat::Table);
        for needle in ["8f1e3c", "story-node", "odyssey", "1200", "No"] {
            assert!(text.contains(needle), "missing {needle} in\n{text}");
        }
    }
}
