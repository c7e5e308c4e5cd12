use crate::error::{CliError, Result};
use log::{debug, trace};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::time::Duration;

/// Every request carries this id; responses are never matched against it.
pub const REQUEST_ID: u64 = 1;
pub const JSONRPC_VERSION: &str = "2.0";

#[derive(Debug, Clone)]
pub struct RpcClient {
    client: Client,
    url: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(method: &str, params: Option<Vec<Value>>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: REQUEST_ID,
            method: method.to_string(),
            params: params.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

/// Subset of the `status` result this tool reads. Unknown fields are ignored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NodeStatus {
    pub node_info: NodeInfo,
    pub sync_info: SyncInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NodeInfo {
    pub id: String,
    pub moniker: String,
    pub network: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SyncInfo {
    pub latest_block_height: BlockHeight,
    pub catching_up: bool,
}

/// Tendermint-style nodes encode heights as decimal strings, others as
/// numbers. Both are shown exactly as the node sent them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum BlockHeight {
    Number(Number),
    Text(String),
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockHeight::Number(height) => write!(f, "{}", height),
            BlockHeight::Text(height) => f.write_str(height),
        }
    }
}

impl RpcClient {
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(CliError::Client)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one JSON-RPC call and return its `result` field.
    pub async fn make_request(&self, method: &str, params: Option<Vec<Value>>) -> Result<Value> {
        let request = RpcRequest::new(method, params);
        debug!("POST {} method={}", self.url, method);

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|source| CliError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        trace!("{} answered {}", self.url, status);
        if !status.is_success() {
            return Err(CliError::HttpStatus {
                url: self.url.clone(),
                status,
            });
        }

        let mut body: Value = response.json().await.map_err(CliError::Decode)?;

        if let Some(error) = body.get("error").filter(|e| !e.is_null()) {
            return Err(match serde_json::from_value::<RpcErrorObject>(error.clone()) {
                Ok(error) => CliError::Rpc {
                    code: error.code,
                    message: error.message,
                    data: error.data,
                },
                Err(_) => CliError::Rpc {
                    code: 0,
                    message: error.to_string(),
                    data: None,
                },
            });
        }

        match body.get_mut("result").map(Value::take) {
            Some(result) if !result.is_null() => Ok(result),
            _ => Err(CliError::MissingResult {
                method: method.to_string(),
            }),
        }
    }

    pub async fn call<T>(&self, method: &str, params: Option<Vec<Value>>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let result = self.make_request(method, params).await?;
        serde_json::from_value(result).map_err(|source| CliError::MalformedResult {
            method: method.to_string(),
            source,
        })
    }

    pub async fn status(&self) -> Result<NodeStatus> {
        self.call("status", None).await
    }
}
