//! HTTP plumbing shared by all resource gateways.
//!
//! The backend wraps every response in `{ success, data?, message? }`; this
//! module decodes that envelope into a discriminated `Result` so callers never
//! poke at duck-typed fields.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Compile-time API base, e.g. `https://api.example.com/api`.
pub const API_BASE: &str = match option_env!("LMS_API_BASE") {
    Some(base) => base,
    None => "/api",
};

pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway failure taxonomy. All variants are non-retryable from the
/// synchronizer's point of view; the user may retry manually.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Backend answered 2xx but reported `success: false`.
    #[error("{message}")]
    Rejected { message: String },
    /// Non-2xx status with no usable envelope message.
    #[error("request failed with HTTP {status}")]
    Status { status: u16 },
    /// Transport-level failure (offline, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// 2xx body that did not match the expected envelope.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for a toast: the server's words when it sent any,
    /// a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message } => message.clone(),
            ApiError::Status { .. } | ApiError::Network(_) | ApiError::Decode(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

/// Backend response envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Collapse an envelope into the discriminated result the synchronizer
/// consumes: `success:true` must carry data, `success:false` carries a message.
pub fn unwrap_envelope<T>(env: Envelope<T>) -> ApiResult<T> {
    if env.success {
        env.data
            .ok_or_else(|| ApiError::Decode("missing data field".to_string()))
    } else {
        Err(ApiError::Rejected {
            message: env
                .message
                .unwrap_or_else(|| "Request rejected by server".to_string()),
        })
    }
}

/// Like [`unwrap_envelope`] but for operations whose success carries no body
/// (delete).
pub fn unwrap_ack<T>(env: Envelope<T>) -> ApiResult<()> {
    if env.success {
        Ok(())
    } else {
        Err(ApiError::Rejected {
            message: env
                .message
                .unwrap_or_else(|| "Request rejected by server".to_string()),
        })
    }
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Decode a response body as an envelope around `T`. Non-2xx responses are
/// mined for an envelope message before falling back to a bare status error.
async fn decode<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    let status = resp.status();
    if !resp.ok() {
        if let Ok(env) = resp.json::<Envelope<serde_json::Value>>().await {
            if let Some(message) = env.message {
                return Err(ApiError::Rejected { message });
            }
        }
        return Err(ApiError::Status { status });
    }
    let env: Envelope<T> = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    unwrap_envelope(env)
}

async fn decode_ack(resp: Response) -> ApiResult<()> {
    let status = resp.status();
    if !resp.ok() {
        return Err(ApiError::Status { status });
    }
    let env: Envelope<serde_json::Value> = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    unwrap_ack(env)
}

/// GET with query pairs; unset filters must already be omitted by the caller.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&'static str, String)],
) -> ApiResult<T> {
    let resp = Request::get(&api_url(path))
        .query(query.iter().map(|(k, v)| (*k, v.as_str())))
        .send()
        .await
        .map_err(network)?;
    decode(resp).await
}

pub async fn post_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> ApiResult<T> {
    let resp = Request::post(&api_url(path))
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(resp).await
}

pub async fn put_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> ApiResult<T> {
    let resp = Request::put(&api_url(path))
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(resp).await
}

pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: &web_sys::FormData,
) -> ApiResult<T> {
    let resp = Request::post(&api_url(path))
        .body(form.clone())
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(resp).await
}

pub async fn put_form<T: DeserializeOwned>(path: &str, form: &web_sys::FormData) -> ApiResult<T> {
    let resp = Request::put(&api_url(path))
        .body(form.clone())
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(resp).await
}

pub async fn patch_empty<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let resp = Request::patch(&api_url(path))
        .send()
        .await
        .map_err(network)?;
    decode(resp).await
}

pub async fn delete(path: &str) -> ApiResult<()> {
    let resp = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(network)?;
    decode_ack(resp).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_data() {
        let env: Envelope<u32> = serde_json::from_str(r#"{"success":true,"data":7}"#).unwrap();
        assert_eq!(unwrap_envelope(env), Ok(7));
    }

    #[test]
    fn failure_envelope_carries_server_message() {
        let env: Envelope<u32> =
            serde_json::from_str(r#"{"success":false,"message":"name taken"}"#).unwrap();
        assert_eq!(
            unwrap_envelope(env),
            Err(ApiError::Rejected {
                message: "name taken".to_string()
            })
        );
    }

    #[test]
    fn failure_envelope_without_message_gets_fallback() {
        let env: Envelope<u32> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        let err = unwrap_envelope(env).unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));
    }

    #[test]
    fn success_without_data_is_a_decode_error() {
        let env: Envelope<u32> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(unwrap_envelope(env), Err(ApiError::Decode(_))));
    }

    #[test]
    fn ack_ignores_missing_data() {
        let env: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":true,"message":"deleted"}"#).unwrap();
        assert_eq!(unwrap_ack(env), Ok(()));
    }

    #[test]
    fn user_message_prefers_server_words() {
        let rejected = ApiError::Rejected {
            message: "title exists".to_string(),
        };
        assert_eq!(rejected.user_message(), "title exists");
        let status = ApiError::Status { status: 500 };
        assert_eq!(status.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn api_url_joins_base_and_path() {
        assert!(api_url("/category/get").ends_with("/category/get"));
    }
}
