use crate::providers::efficientip::types::ApiFailure;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EfficientIpError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Authentication rejected: {0}")]
    Unauthorized(String),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("Request reported failure: {0}")]
    Unsuccessful(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EfficientIpError {
    pub(crate) fn from_failure(status: StatusCode, failure: ApiFailure) -> Self {
        let message = match (failure.errno, failure.errmsg) {
            (Some(errno), Some(errmsg)) => format!("{errmsg} (errno {errno})"),
            (None, Some(errmsg)) => errmsg,
            (Some(errno), None) => format!("errno {errno}"),
            (None, None) => "Unknown error".to_string(),
        };
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                EfficientIpError::Unauthorized(message)
            }
            _ if status.is_success() => EfficientIpError::Unsuccessful(message),
            _ => EfficientIpError::Api { status, message },
        }
    }
}

use crate::error::Error;

pub fn map_error(e: EfficientIpError) -> Error {
    use EfficientIpError::*;
    match e {
        Http(err) => Error::ProviderError(err.to_string()),
        Decode(err) => Error::ProviderError(err.to_string()),
        Unauthorized(msg) => Error::CredentialError(msg),
        Api { status, message } => Error::ProviderError(format!("{status}: {message}")),
        Unsuccessful(msg) => Error::ProviderError(msg),
        InvalidInput(msg) => Error::InvalidInput(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn failure(errno: Option<&str>, errmsg: Option<&str>) -> ApiFailure {
        ApiFailure {
            errno: errno.map(String::from),
            errmsg: errmsg.map(String::from),
        }
    }

    #[test]
    fn test_from_failure_by_status() {
        let err = EfficientIpError::from_failure(
            StatusCode::UNAUTHORIZED,
            failure(None, Some("bad credentials")),
        );
        assert!(matches!(err, EfficientIpError::Unauthorized(msg) if msg == "bad credentials"));

        let err = EfficientIpError::from_failure(
            StatusCode::BAD_REQUEST,
            failure(Some("1101"), Some("zone not found")),
        );
        assert!(matches!(
            err,
            EfficientIpError::Api { status, message }
                if status == StatusCode::BAD_REQUEST && message == "zone not found (errno 1101)"
        ));

        let err = EfficientIpError::from_failure(StatusCode::OK, failure(None, None));
        assert!(matches!(err, EfficientIpError::Unsuccessful(msg) if msg == "Unknown error"));
    }

    #[test]
    fn test_map_error_variants() {
        use EfficientIpError::*;

        let err = map_error(Unauthorized("fail".to_string()));
        assert!(matches!(err, Error::CredentialError(_)));
        let err = map_error(Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".to_string(),
        });
        assert!(matches!(err, Error::ProviderError(msg) if msg.contains("boom")));
        let err = map_error(Unsuccessful("fail".to_string()));
        assert!(matches!(err, Error::ProviderError(_)));
        let err = map_error(InvalidInput("bad".to_string()));
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
