use layerswap_components::{CopyButton, StatusIcon, SwapDetailsSkeleton, Toasts};
use layerswap_core::{
    fetch::{fetch_swap, LookupOutcome, SwapLookup, SwapLookupStoreFields},
    prelude::*,
    resolve::{
        delivered_amount, fee_amount, received_amount, resolve_swap_display, ResolvedEndpoint,
        SwapDisplay,
    },
};
use leptos::{prelude::*, task::spawn_local};
use reactive_stores::Store;
use tracing::{debug, error, info};

#[component]
pub fn SwapDetails(#[prop(into)] id: Signal<String>) -> impl IntoView {
    info!("rendering <SwapDetails/>");

    on_cleanup(move || {
        info!("cleaning up <SwapDetails/>");
    });

    let endpoint = use_context::<ApiEndpoint>().expect("api endpoint context missing!");
    let reference = use_context::<ReferenceData>().expect("reference data context missing!");
    let toasts = use_context::<Toasts>().expect("toasts context missing!");

    let state = Store::new(SwapLookup::default());

    // Only `id` is tracked here. Responses that arrive after a newer request was issued are
    // dropped by `SwapLookup::complete`.
    Effect::new(move |_| {
        let id = id.get();
        if id.is_empty() {
            return;
        }

        let Some(ticket) = state.try_update(SwapLookup::begin) else {
            return;
        };
        let client = endpoint.client();

        spawn_local(async move {
            let result = fetch_swap(&client, &id).await;

            match state.try_update(|lookup| lookup.complete(ticket, result)) {
                Some(LookupOutcome::Loaded) => debug!("loaded swap {id}"),
                Some(LookupOutcome::Failed(error)) => {
                    error!("failed to load swap {id}: {error}");
                    toasts.error(error.to_string());
                }
                Some(LookupOutcome::Stale) => debug!("ignoring stale response for swap {id}"),
                None => debug!("<SwapDetails/> went away before swap {id} arrived"),
            }
        });
    });

    let display = Memo::new(move |_| {
        state.swap().with(|swap| {
            swap.as_ref()
                .map(|swap| reference.with(|settings| resolve_swap_display(swap, settings)))
                .unwrap_or_default()
        })
    });

    let swap_field = move |f: fn(&Swap) -> Option<String>| {
        Signal::derive(move || state.swap().with(|swap| swap.as_ref().and_then(f)))
    };

    let swap_id = swap_field(|swap| Some(swap.id.clone()));
    let destination_address = swap_field(|swap| swap.destination_address.clone());
    let created_date = swap_field(|swap| swap.created_at().map(format_date));
    let status = Signal::derive(move || state.swap().with(|swap| swap.as_ref().map(|s| s.status)));

    let amount = move |f: fn(&Swap, &SwapDisplay) -> Option<AssetAmount>| {
        move || {
            state.swap().with(|swap| {
                swap.as_ref()
                    .and_then(|swap| display.with(|display| f(swap, display)))
                    .map(|amount| amount.to_string())
            })
        }
    };

    let received = amount(received_amount);
    let fee = amount(fee_amount);
    let delivered = Memo::new(move |_| amount(delivered_amount)());

    view! {
        <Show when=move || !state.loading().get() fallback=|| view! { <SwapDetailsSkeleton /> }>
            <div class="w-full flex flex-col gap-1.5 text-base leading-6 text-muted-foreground">
                <Detail label="Id">
                    <CopyButton to_copy=Signal::derive(move || swap_id.get().unwrap_or_default())>
                        <span class="text-white">{move || swap_id.get().map(shorten_address)}</span>
                    </CopyButton>
                </Detail>
                <Detail label="Status">
                    {move || status.get().map(|status| view! { <StatusIcon status=status /> })}
                </Detail>
                <Detail label="Date">
                    <span class="text-white font-normal">{move || created_date.get()}</span>
                </Detail>
                <Detail label="From">
                    {move || {
                        display.with(|display| display.source.clone())
                            .map(|endpoint| view! { <EndpointBadge endpoint=endpoint /> })
                    }}
                </Detail>
                <Detail label="To">
                    {move || {
                        display.with(|display| display.destination.clone())
                            .map(|endpoint| view! { <EndpointBadge endpoint=endpoint /> })
                    }}
                </Detail>
                <Detail label="Address">
                    <CopyButton to_copy=Signal::derive(move || {
                        destination_address.get().unwrap_or_default()
                    })>
                        <span class="text-white">
                            {move || {
                                destination_address
                                    .get()
                                    .map(|address| shorten_destination_address(&address))
                            }}
                        </span>
                    </CopyButton>
                </Detail>
                <Detail label="Amount we received">
                    <span class="text-white font-normal">{received}</span>
                </Detail>
                <Detail label="Layerswap Fee">
                    <span class="text-white font-normal">{fee}</span>
                </Detail>
                <Show when=move || delivered.with(Option::is_some)>
                    <Detail label="Amount You Received">
                        <span class="text-white font-normal">{move || delivered.get()}</span>
                    </Detail>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn Detail(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex justify-between items-baseline">
            <span class="text-left">{label}</span>
            {children()}
        </div>
        <hr class="horizontal-gradient" />
    }
}

#[component]
fn EndpointBadge(endpoint: ResolvedEndpoint) -> impl IntoView {
    let alt = format!("{} logo", endpoint.display_name);

    view! {
        <div class="flex items-center">
            <img
                src=endpoint.logo_url
                alt=alt
                class="h-5 w-5 flex-shrink-0 rounded-md object-contain"
            />
            <div class="mx-1 text-white">{endpoint.display_name}</div>
        </div>
    }
}
