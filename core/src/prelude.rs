pub use crate::constants::*;
pub use crate::error::Error;
pub use crate::state::{ApiEndpoint, ReferenceData};
pub use crate::types::AssetAmount;
pub use crate::utils::*;
pub use layerswap_sdk::models::{Settings, Swap, SwapStatus};
