use crate::SwapDetails;
use leptos::prelude::*;
use leptos_router::{components::Route, hooks::use_params_map, MatchNestedRoutes};
use leptos_router_macro::path;
use tracing::info;

// `path!` only takes literals; keep this prefix in step with `BASE_URL`.
#[component(transparent)]
pub fn SwapRoutes() -> impl MatchNestedRoutes + Clone {
    view! {
        <Route path=path!("/layerswap-explorer/swap/:id") view=SwapPage/>
    }
    .into_inner()
}

#[component]
fn SwapPage() -> impl IntoView {
    info!("rendering <SwapPage/>");

    on_cleanup(move || {
        info!("cleaning up <SwapPage/>");
    });

    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|params| params.get("id").unwrap_or_default()));

    view! {
        <div class="max-w-md mx-auto flex flex-col gap-4">
            <div class="text-3xl font-bold">"Swap"</div>
            <SwapDetails id=id />
        </div>
    }
}
