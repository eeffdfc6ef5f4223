use leptos::prelude::*;

// one bar per row of <SwapDetails/>
const ROWS: usize = 9;

#[component]
pub fn SwapDetailsSkeleton() -> impl IntoView {
    view! {
        <div class="w-full flex flex-col gap-3 animate-pulse" aria-busy="true">
            {(0..ROWS)
                .map(|_| {
                    view! {
                        <div class="flex justify-between items-center">
                            <div class="h-4 w-24 rounded bg-neutral-700"></div>
                            <div class="h-4 w-32 rounded bg-neutral-700"></div>
                        </div>
                        <hr class="horizontal-gradient" />
                    }
                })
                .collect_view()}
        </div>
    }
}
