use std::time::Duration;

pub const BASE_URL: &str = "/layerswap-explorer";

// Compile-time configuration for the API the explorer talks to
pub const LAYERSWAP_API_URL: &str = if cfg!(feature = "mainnet") {
    "https://api.layerswap.io"
} else {
    "https://api-sandbox.layerswap.cloud"
};

/// How long a notification stays on screen.
pub const TOAST_TIMEOUT: Duration = Duration::from_secs(5);

// Destination addresses are shortened to the first 8 and last 5 characters.
pub const ADDRESS_HEAD: usize = 8;
pub const ADDRESS_TAIL: usize = 5;
