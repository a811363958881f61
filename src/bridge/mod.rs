//! Line-delimited JSON transport over standard input/output.
//!
//! One JSON object per line in each direction: requests are
//! `{id, method, params}`, responses are `{id, result}` or
//! `{id, error: {code, message}}`. Processing is strictly sequential —
//! one line is read, dispatched, and answered before the next is read.
//!
//! Log output goes to stderr; stdout carries only response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::api::TradovateApi;
use crate::registry::{Params, Registry};
use crate::{Error, Result};

/// Error code for envelopes rejected before dispatch.
const INVALID_REQUEST: i64 = 400;

/// An incoming request envelope.
#[derive(Debug, Deserialize)]
pub struct Request {
    /// Caller-chosen identifier, echoed back in the response
    #[serde(default)]
    pub id: Option<Value>,
    /// Operation name to dispatch
    pub method: String,
    /// Operation parameters; must be an object when present
    #[serde(default)]
    pub params: Option<Value>,
}

/// An outgoing response envelope.
#[derive(Debug, Serialize)]
pub struct Response {
    /// Identifier of the request being answered
    pub id: Option<Value>,
    /// Operation result on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error details on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
}

/// The error half of a response envelope.
#[derive(Debug, Serialize)]
pub struct ResponseError {
    /// Transport error code
    pub code: i64,
    /// Human-readable message
    pub message: String,
}

impl Response {
    fn result(id: Option<Value>, result: Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Option<Value>, code: i64, message: impl Into<String>) -> Self {
        Self {
            id,
            result: None,
            error: Some(ResponseError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Map a bridge error onto a transport error code.
pub fn error_code(err: &Error) -> i64 {
    match err {
        e if e.is_validation() => 400,
        Error::Authentication(_) => 401,
        Error::UnknownOperation(_) => 404,
        Error::Api { status, .. } => i64::from(*status),
        _ => 500,
    }
}

/// The stdio front-end: reads request lines, dispatches through the
/// registry, writes response lines.
pub struct Bridge<C> {
    registry: Registry<C>,
}

impl<C: TradovateApi> Bridge<C> {
    /// Create a bridge over the given client.
    pub fn new(client: C) -> Self {
        Self {
            registry: Registry::new(client),
        }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry<C> {
        &self.registry
    }

    /// Serve requests from standard input until EOF.
    ///
    /// Request handling never terminates the loop: every failure is
    /// scoped to the single request being processed and answered with an
    /// error envelope.
    pub async fn run(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        let mut stdout = tokio::io::stdout();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let response = self.handle_line(&line).await;
            let mut bytes = serde_json::to_vec(&response)?;
            bytes.push(b'\n');
            stdout.write_all(&bytes).await?;
            stdout.flush().await?;
        }

        Ok(())
    }

    /// Handle one raw input line.
    ///
    /// Malformed envelopes are rejected with code 400 before any
    /// dispatch is attempted.
    pub async fn handle_line(&self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle_request(request).await,
            Err(err) => {
                tracing::warn!(error = %err, "rejecting malformed request line");
                Response::error(None, INVALID_REQUEST, format!("invalid request: {err}"))
            }
        }
    }

    /// Handle one decoded request envelope.
    pub async fn handle_request(&self, request: Request) -> Response {
        let Request { id, method, params } = request;

        // Liveness probe, answered without touching the registry.
        if method == "ping" {
            return Response::result(id, Value::String("pong".to_string()));
        }

        let params: Params = match params {
            None | Some(Value::Null) => Params::new(),
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Response::error(id, INVALID_REQUEST, "params must be an object");
            }
        };

        tracing::debug!(%method, "dispatching");
        match self.registry.dispatch(&method, &params).await {
            Ok(result) => Response::result(id, result),
            Err(err) => {
                tracing::warn!(%method, error = %err, "operation failed");
                Response::error(id, error_code(&err), err.to_string())
            }
        }
    }
}
