use layerswap_core::constants::TOAST_TIMEOUT;
use leptos::prelude::*;
use lucide_leptos::{CircleX, X};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Transient error notifications. Provided once by the app; every view may push to it.
#[derive(Copy, Clone)]
pub struct Toasts {
    queue: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Shows `message` until it is dismissed or [`TOAST_TIMEOUT`] elapses.
    pub fn error(&self, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let toast = Toast {
            id,
            message: message.into(),
        };
        debug!("toast {id}: {}", toast.message);
        self.queue.update(|queue| queue.push(toast));

        let toasts = *self;
        set_timeout(move || toasts.dismiss(id), TOAST_TIMEOUT);

        id
    }

    pub fn dismiss(&self, id: u64) {
        // the queue is gone if the app unmounted before the timeout fired
        let _ = self
            .queue
            .try_update(|queue| queue.retain(|toast| toast.id != id));
    }

    pub fn current(&self) -> Vec<Toast> {
        self.queue.get()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    info!("rendering <Toaster/>");

    let toasts = use_context::<Toasts>().expect("toasts context missing!");

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2">
            <For each=move || toasts.current() key=|toast| toast.id let:toast>
                <div
                    role="alert"
                    class="flex items-center gap-3 min-w-64 px-4 py-2 rounded-md text-sm font-medium text-white shadow-lg bg-red-500/90"
                >
                    <CircleX size=16 />
                    <p class="m-0 flex-1">{toast.message.clone()}</p>
                    <button
                        class="p-0 border-none bg-transparent text-white cursor-pointer"
                        on:click=move |_| toasts.dismiss(toast.id)
                    >
                        <X size=14 />
                    </button>
                </div>
            </For>
        </div>
    }
}
