use leptos::prelude::*;
use leptos_use::{use_clipboard, UseClipboardReturn};
use lucide_leptos::{Check, Copy};

/// Renders `children` followed by an icon; clicking anywhere copies `to_copy`.
#[component]
pub fn CopyButton(#[prop(into)] to_copy: Signal<String>, children: Children) -> impl IntoView {
    let UseClipboardReturn {
        is_supported,
        copied,
        copy,
        ..
    } = use_clipboard();

    view! {
        <button
            type="button"
            title="Copy"
            disabled=move || !is_supported.get()
            on:click=move |_| copy(&to_copy.get())
            class="inline-flex items-center gap-1 p-0 border-none bg-transparent text-inherit cursor-pointer"
        >
            {children()}
            <span class="text-muted-foreground">
                <Show when=move || copied.get() fallback=|| view! { <Copy size=14 /> }>
                    <Check size=14 />
                </Show>
            </span>
        </button>
    }
}
