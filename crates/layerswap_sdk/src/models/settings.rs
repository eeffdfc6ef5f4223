use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointCategory {
    Exchanges,
    Networks,
}

impl EndpointCategory {
    /// Returns the path segment used for this category in the resource storage
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointCategory::Exchanges => "exchanges",
            EndpointCategory::Networks => "networks",
        }
    }
}

/// A currency as supported by a particular exchange or network.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct EndpointCurrency {
    #[serde(default)]
    pub asset: String,
    /// The network this currency runs on.
    pub network: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Exchange {
    #[serde(default)]
    pub internal_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub currencies: Vec<EndpointCurrency>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Network {
    #[serde(default)]
    pub internal_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub currencies: Vec<EndpointCurrency>,
}

/// Shared shape of exchanges and networks, the two things a swap can move funds between.
pub trait Endpoint {
    const CATEGORY: EndpointCategory;

    fn internal_name(&self) -> &str;
    fn display_name(&self) -> &str;
    fn currencies(&self) -> &[EndpointCurrency];

    /// Finds the currency running on `network`, compared case-insensitively.
    fn currency_on_network(&self, network: &str) -> Option<&EndpointCurrency> {
        self.currencies().iter().find(|currency| {
            currency
                .network
                .as_deref()
                .is_some_and(|code| code.eq_ignore_ascii_case(network))
        })
    }
}

impl Endpoint for Exchange {
    const CATEGORY: EndpointCategory = EndpointCategory::Exchanges;

    fn internal_name(&self) -> &str {
        &self.internal_name
    }
    fn display_name(&self) -> &str {
        &self.display_name
    }
    fn currencies(&self) -> &[EndpointCurrency] {
        &self.currencies
    }
}

impl Endpoint for Network {
    const CATEGORY: EndpointCategory = EndpointCategory::Networks;

    fn internal_name(&self) -> &str {
        &self.internal_name
    }
    fn display_name(&self) -> &str {
        &self.display_name
    }
    fn currencies(&self) -> &[EndpointCurrency] {
        &self.currencies
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Currency {
    pub asset: String,
    /// Number of decimal places used when displaying amounts of this asset.
    pub precision: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Discovery {
    pub resource_storage_url: String,
}

/// Reference data returned by `GET /api/settings`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Settings {
    #[serde(default)]
    pub exchanges: Vec<Exchange>,
    #[serde(default)]
    pub networks: Vec<Network>,
    #[serde(default)]
    pub currencies: Vec<Currency>,
    #[serde(default)]
    pub discovery: Discovery,
}

impl Settings {
    pub fn find_exchange(&self, code: &str) -> Option<&Exchange> {
        find_by_code(&self.exchanges, code)
    }

    pub fn find_network(&self, code: &str) -> Option<&Network> {
        find_by_code(&self.networks, code)
    }

    /// Asset symbols are matched exactly.
    pub fn find_currency(&self, asset: &str) -> Option<&Currency> {
        self.currencies
            .iter()
            .find(|currency| currency.asset == asset)
    }
}

fn find_by_code<'a, E: Endpoint>(endpoints: &'a [E], code: &str) -> Option<&'a E> {
    endpoints
        .iter()
        .find(|endpoint| endpoint.internal_name().eq_ignore_ascii_case(code))
}
