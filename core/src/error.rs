// The Serialize and Deserialize traits are derived to ensure that Errors can be
// stored inside reactive resources and stores.
#[derive(thiserror::Error, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Generic(String),

    #[error("{0}")]
    Request(String),

    // Only the message is shown; it is what the user sees in the notification.
    #[error("{message}")]
    Api {
        code: Option<String>,
        message: String,
    },

    #[error("Serde Error: {0}")]
    Serde(String),
}

impl Error {
    pub fn generic(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Generic(message)
    }
    pub fn serde(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Serde(message)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Generic(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Generic(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Serde(error.to_string())
    }
}

impl From<layerswap_sdk::Error> for Error {
    fn from(error: layerswap_sdk::Error) -> Self {
        use layerswap_sdk::Error as SdkError;

        match error {
            SdkError::Api { code, message } => Error::Api { code, message },
            SdkError::Serde(error) => Error::Serde(error.to_string()),
            error @ (SdkError::Request(_) | SdkError::Http { .. } | SdkError::EmptyResponse) => {
                Error::Request(error.to_string())
            }
        }
    }
}
