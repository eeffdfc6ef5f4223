//! Turns the codes stored on a swap into things worth showing: endpoint names, logos, the asset
//! symbol and the precision amounts should be rounded to.

use crate::{
    types::AssetAmount,
    utils::{format_amount, format_fee},
};
use layerswap_sdk::models::{Endpoint, EndpointCategory, Settings, Swap, SwapEndpoint};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEndpoint {
    pub category: EndpointCategory,
    pub internal_name: String,
    pub display_name: String,
    pub logo_url: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwapDisplay {
    pub source: Option<ResolvedEndpoint>,
    pub destination: Option<ResolvedEndpoint>,
    pub asset: Option<String>,
    pub precision: Option<u32>,
}

pub fn logo_url(resource_storage_url: &str, category: EndpointCategory, internal_name: &str) -> String {
    format!(
        "{}/layerswap/{}/{}.png",
        resource_storage_url.trim_end_matches('/'),
        category.as_str(),
        internal_name.to_lowercase()
    )
}

fn describe<E: Endpoint>(endpoint: &E, resource_storage_url: &str) -> ResolvedEndpoint {
    ResolvedEndpoint {
        category: E::CATEGORY,
        internal_name: endpoint.internal_name().to_string(),
        display_name: endpoint.display_name().to_string(),
        logo_url: logo_url(resource_storage_url, E::CATEGORY, endpoint.internal_name()),
    }
}

pub fn resolve_endpoint(side: SwapEndpoint<'_>, settings: &Settings) -> Option<ResolvedEndpoint> {
    let resource_storage_url = settings.discovery.resource_storage_url.as_str();

    match side {
        SwapEndpoint::Exchange(code) => settings
            .find_exchange(code)
            .map(|exchange| describe(exchange, resource_storage_url)),
        SwapEndpoint::Network(code) => settings
            .find_network(code)
            .map(|network| describe(network, resource_storage_url)),
    }
}

/// Finds the asset symbol the swap is denominated in.
///
/// The currency list searched is the source's when the source is an exchange, otherwise the
/// destination's. The currency is the one running on the swap's source network; an
/// exchange-sourced swap has none, so its destination network is used instead.
pub fn resolve_asset(swap: &Swap, settings: &Settings) -> Option<String> {
    let network = swap
        .source_network()
        .or_else(|| swap.destination_network())?;

    let counterpart = match swap.source() {
        Some(source @ SwapEndpoint::Exchange(_)) => source,
        _ => swap.destination()?,
    };

    let currency = match counterpart {
        SwapEndpoint::Exchange(code) => settings.find_exchange(code)?.currency_on_network(network),
        SwapEndpoint::Network(code) => settings.find_network(code)?.currency_on_network(network),
    }?;

    Some(currency.asset.clone())
}

pub fn resolve_precision(asset: &str, settings: &Settings) -> Option<u32> {
    settings
        .find_currency(asset)
        .map(|currency| currency.precision)
}

fn with_asset(amount: String, display: &SwapDisplay) -> AssetAmount {
    AssetAmount::new(amount, display.asset.clone())
}

/// What Layerswap received from the user.
pub fn received_amount(swap: &Swap, display: &SwapDisplay) -> Option<AssetAmount> {
    swap.input_amount()
        .map(|amount| with_asset(format_amount(amount), display))
}

pub fn fee_amount(swap: &Swap, display: &SwapDisplay) -> Option<AssetAmount> {
    swap.fee
        .map(|fee| with_asset(format_fee(fee, display.precision), display))
}

/// What the user got out of the swap. Only completed swaps have delivered anything.
pub fn delivered_amount(swap: &Swap, display: &SwapDisplay) -> Option<AssetAmount> {
    if !swap.status.is_completed() {
        return None;
    }

    swap.output_amount()
        .map(|amount| with_asset(format_amount(amount), display))
}

pub fn resolve_swap_display(swap: &Swap, settings: &Settings) -> SwapDisplay {
    let asset = resolve_asset(swap, settings);
    let precision = asset
        .as_deref()
        .and_then(|asset| resolve_precision(asset, settings));

    SwapDisplay {
        source: swap
            .source()
            .and_then(|side| resolve_endpoint(side, settings)),
        destination: swap
            .destination()
            .and_then(|side| resolve_endpoint(side, settings)),
        asset,
        precision,
    }
}
