use codee::string::FromToStringCodec;
use layerswap_core::BASE_URL;
use leptos::{ev, html, prelude::*};
use leptos_router::hooks::use_navigate;
use leptos_use::storage::use_local_storage;
use lucide_leptos::Search;
use tracing::{debug, info};

/// Form that opens the details page for a swap id. Remembers the last id looked up.
#[component]
pub fn FindSwap() -> impl IntoView {
    info!("rendering <FindSwap/>");

    on_cleanup(move || {
        info!("cleaning up <FindSwap/>");
    });

    let navigate = use_navigate();
    let (last_swap_id, set_last_swap_id, _) =
        use_local_storage::<String, FromToStringCodec>("last_swap_id");

    let input_ref = NodeRef::<html::Input>::new();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(input) = input_ref.get() else {
            return;
        };
        let id = input.value().trim().to_string();
        if id.is_empty() {
            return;
        }

        debug!("looking up swap {id}");
        set_last_swap_id.set(id.clone());
        navigate(&format!("{BASE_URL}/swap/{id}"), Default::default());
    };

    view! {
        <form class="flex flex-row gap-2 w-full" on:submit=on_submit>
            <input
                node_ref=input_ref
                type="text"
                placeholder="Swap id"
                value=move || last_swap_id.get()
                class="flex-1 px-3 py-2 text-sm rounded-md border border-solid border-border bg-transparent"
            />
            <button
                type="submit"
                class="inline-flex items-center gap-2 px-4 py-2 text-sm font-medium border-none rounded-md bg-primary text-primary-foreground"
            >
                <Search size=16 />
                "Find"
            </button>
        </form>
    }
}
