use layerswap_core::prelude::SwapStatus;
use leptos::{either::EitherOf4, prelude::*};
use lucide_leptos::{CircleAlert, CircleCheck, CircleX, Clock};

fn label(status: SwapStatus) -> &'static str {
    match status {
        SwapStatus::Created => "Created",
        SwapStatus::Pending => "Pending",
        SwapStatus::Initiated => "Initiated",
        SwapStatus::Completed => "Completed",
        SwapStatus::Failed => "Failed",
        SwapStatus::Expired => "Expired",
        SwapStatus::Cancelled => "Cancelled",
        SwapStatus::Unknown => "Unknown",
    }
}

#[component]
pub fn StatusIcon(#[prop(into)] status: Signal<SwapStatus>) -> impl IntoView {
    let icon = move || match status.get() {
        SwapStatus::Completed => EitherOf4::A(view! {
            <span class="text-green-500"><CircleCheck size=16 /></span>
        }),
        SwapStatus::Failed | SwapStatus::Expired | SwapStatus::Cancelled => EitherOf4::B(view! {
            <span class="text-red-500"><CircleX size=16 /></span>
        }),
        SwapStatus::Created | SwapStatus::Pending | SwapStatus::Initiated => EitherOf4::C(view! {
            <span class="text-yellow-400"><Clock size=16 /></span>
        }),
        SwapStatus::Unknown => EitherOf4::D(view! {
            <span class="text-muted-foreground"><CircleAlert size=16 /></span>
        }),
    };

    view! {
        <div class="inline-flex items-center gap-1.5">
            {icon}
            <span>{move || label(status.get())}</span>
        </div>
    }
}
