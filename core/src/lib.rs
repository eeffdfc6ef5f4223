pub mod constants;
mod error;
pub mod fetch;
pub mod prelude;
pub mod resolve;
pub mod state;
pub mod types;
pub mod utils;

pub use constants::{BASE_URL, LAYERSWAP_API_URL};
pub use error::Error;
pub use state::{ApiEndpoint, ReferenceData};
