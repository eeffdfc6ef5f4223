#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// An error reported by the API inside its response envelope.
    #[error("{message}")]
    Api {
        code: Option<String>,
        message: String,
    },

    #[error("Request failed with status {status}")]
    Http { status: u16, body: String },

    #[error("Serde Error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("The response contained no data")]
    EmptyResponse,
}
