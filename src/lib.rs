use layerswap_components::{Toaster, Toasts};
use layerswap_core::{
    state::{ApiEndpoint, ReferenceData},
    Error, LAYERSWAP_API_URL,
};
use layerswap_sdk::LayerswapApiClient;
use layerswap_swap::SwapRoutes;
use leptos::{prelude::*, task::spawn_local};
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router_macro::path;
use tracing::{debug, error, info};

mod routes;

use routes::{home::Home, nav::Nav};

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Global Contexts

    provide_context(ApiEndpoint::new(LAYERSWAP_API_URL));
    provide_context(ReferenceData::default());
    provide_context(Toasts::new());

    let endpoint = use_context::<ApiEndpoint>().expect("api endpoint context missing!");
    let reference = use_context::<ReferenceData>().expect("reference data context missing!");
    let toasts = use_context::<Toasts>().expect("toasts context missing!");

    Effect::new(move |_| info!("Endpoint set to {}", endpoint.get()));

    // Exchanges, networks and currencies are loaded once per endpoint. Until they arrive every
    // lookup against them misses, which views already have to tolerate.
    Effect::new(move |_| {
        let client = LayerswapApiClient::new(endpoint.get());

        spawn_local(async move {
            match client.get_settings().await {
                Ok(settings) => {
                    debug!(
                        "{} exchanges, {} networks, {} currencies",
                        settings.exchanges.len(),
                        settings.networks.len(),
                        settings.currencies.len()
                    );
                    reference.set(settings);
                }
                Err(error) => {
                    let error = Error::from(error);
                    error!("failed to load settings: {error}");
                    toasts.error(error.to_string());
                }
            }
        });
    });

    on_cleanup(move || {
        info!("cleaning up <App/>");
    });

    view! {
        <Title text="Layerswap Explorer" />
        <Router>
            <header class="bg-background z-40">
                <div class="p-4 flex justify-between items-center border-b">
                    <div class="m-0 font-bold text-2xl line-clamp-1 cursor-default">
                        "Layerswap Explorer"
                    </div>
                    <Nav />
                </div>
            </header>
            <main class="flex-1 px-2.5 lg:px-8 py-3 overflow-x-auto">
                <Routes transition=true fallback=|| "This page could not be found.">
                    <Route path=path!("layerswap-explorer") view=Home />
                    <SwapRoutes />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}
