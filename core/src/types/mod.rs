use serde::{Deserialize, Serialize};

/// An already formatted amount, followed by its asset symbol when one could be resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetAmount {
    pub amount: String,
    pub asset: Option<String>,
}

impl AssetAmount {
    pub fn new(amount: impl Into<String>, asset: Option<String>) -> Self {
        Self {
            amount: amount.into(),
            asset,
        }
    }
}

impl std::fmt::Display for AssetAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.asset {
            Some(asset) => write!(f, "{} {}", self.amount, asset),
            None => write!(f, "{}", self.amount),
        }
    }
}
