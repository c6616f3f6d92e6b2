// Outbound HTTP plumbing shared by the Harvest and Tempo clients.
//
// Any status outside 2xx is an error, mirroring how both upstream APIs signal
// failure. The body of a failed response is kept so the log line says why.

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request to {url} failed: {message}")]
    Unreachable { url: String, message: String },

    #[error("{url} answered {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {url}: {message}")]
    InvalidBody { url: String, message: String },
}

impl GatewayError {
    pub fn unreachable(url: &str, error: reqwest::Error) -> Self {
        Self::Unreachable {
            url: url.to_string(),
            message: error.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

async fn ensure_success(url: &str, response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::Status {
        url: url.to_string(),
        status: status.as_u16(),
        body,
    })
}

/// Turns a non-2xx response into [`GatewayError::Status`], otherwise decodes the JSON body.
pub async fn read_json<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, GatewayError> {
    ensure_success(url, response)
        .await?
        .json::<T>()
        .await
        .map_err(|err| GatewayError::InvalidBody {
            url: url.to_string(),
            message: err.to_string(),
        })
}

/// Like [`read_json`] but keeps whatever a 2xx answered: no body is `null`, a non-JSON body a string.
pub async fn read_value(url: &str, response: Response) -> Result<Value, GatewayError> {
    let bytes = ensure_success(url, response)
        .await?
        .bytes()
        .await
        .map_err(|err| GatewayError::InvalidBody {
            url: url.to_string(),
            message: err.to_string(),
        })?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned())))
}
