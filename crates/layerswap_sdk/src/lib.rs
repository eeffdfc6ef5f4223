mod client;
mod error;
pub mod models;

pub use client::{LayerswapApiClient, SwapDetailsSource};
pub use error::Error;
