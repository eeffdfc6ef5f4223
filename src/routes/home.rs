use layerswap_swap::FindSwap;
use leptos::prelude::*;
use tracing::info;

#[component]
pub fn Home() -> impl IntoView {
    info!("rendering <Home/>");

    view! {
        <div class="max-w-md mx-auto flex flex-col gap-4">
            <div class="text-3xl font-bold">"Find a Swap"</div>
            <p class="text-sm text-muted-foreground">
                "Paste a swap id to see its status, endpoints, fee and amounts."
            </p>
            <FindSwap />
        </div>
    }
}
