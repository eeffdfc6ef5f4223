use crate::constants::LAYERSWAP_API_URL;
use layerswap_sdk::{models::Settings, LayerswapApiClient};
use leptos::prelude::*;
use std::ops::Deref;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ApiEndpoint {
    pub url: RwSignal<String>,
}

impl ApiEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: RwSignal::new(url.into()),
        }
    }

    /// Builds a client for the current endpoint without subscribing to it.
    pub fn client(&self) -> LayerswapApiClient {
        LayerswapApiClient::new(self.url.get_untracked())
    }
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self::new(LAYERSWAP_API_URL)
    }
}

impl Deref for ApiEndpoint {
    type Target = RwSignal<String>;
    fn deref(&self) -> &Self::Target {
        &self.url
    }
}

impl AsRef<RwSignal<String>> for ApiEndpoint {
    fn as_ref(&self) -> &RwSignal<String> {
        &self.url
    }
}

/// Exchanges, networks, currencies and the resource storage URL, shared by every view.
///
/// It starts out empty and is filled in once the settings request completes, so lookups made
/// before then simply miss.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReferenceData {
    pub settings: RwSignal<Settings>,
}

impl ReferenceData {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwSignal::new(settings),
        }
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Deref for ReferenceData {
    type Target = RwSignal<Settings>;

    fn deref(&self) -> &Self::Target {
        &self.settings
    }
}

impl AsRef<RwSignal<Settings>> for ReferenceData {
    fn as_ref(&self) -> &RwSignal<Settings> {
        &self.settings
    }
}
