mod settings;
mod swap;

pub use settings::{
    Currency, Discovery, Endpoint, EndpointCategory, EndpointCurrency, Exchange, Network, Settings,
};
pub use swap::{Swap, SwapEndpoint, SwapStatus, Transaction};

use crate::Error;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiError {
    pub code: Option<String>,
    pub message: String,
}

/// Envelope wrapping every API payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    /// An `error` in the envelope takes precedence over any `data` sent alongside it.
    pub fn into_result(self) -> Result<T, Error> {
        match (self.error, self.data) {
            (Some(ApiError { code, message }), _) => Err(Error::Api { code, message }),
            (None, Some(data)) => Ok(data),
            (None, None) => Err(Error::EmptyResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_error_becomes_api_error_with_bare_message() {
        let response: ApiResponse<Swap> = serde_json::from_str(
            r#"{ "data": null, "error": { "code": "SWAP_NOT_FOUND", "message": "Not found" } }"#,
        )
        .unwrap();

        let error = response.into_result().unwrap_err();
        assert_eq!(error.to_string(), "Not found");
        assert!(matches!(error, Error::Api { code: Some(ref code), .. } if code == "SWAP_NOT_FOUND"));
    }

    #[test]
    fn envelope_without_data_or_error_is_empty() {
        let response: ApiResponse<Settings> = serde_json::from_str("{}").unwrap();
        assert!(matches!(response.into_result(), Err(Error::EmptyResponse)));
    }

    #[test]
    fn envelope_data_is_unwrapped() {
        let response: ApiResponse<Swap> =
            serde_json::from_str(r#"{ "data": { "id": "abc123", "status": "pending" } }"#).unwrap();
        let swap = response.into_result().unwrap();
        assert_eq!(swap.id, "abc123");
        assert_eq!(swap.status, SwapStatus::Pending);
    }
}
