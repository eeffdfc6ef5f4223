use layerswap_core::BASE_URL;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="leading-tight flex flex-row items-center">
            <A
                exact=true
                strict_trailing_slash=false
                href=BASE_URL
                attr:class="text-muted-foreground px-3 py-1.5 no-underline leading-none"
            >
                "Find a Swap"
            </A>
            <a
                href="https://docs.layerswap.io"
                target="_blank"
                rel="noopener"
                class="text-muted-foreground px-3 py-1.5 no-underline leading-none"
            >
                "Docs"
            </a>
        </nav>
    }
}
