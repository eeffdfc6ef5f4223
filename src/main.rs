use layerswap_explorer::App;
use leptos::prelude::*;
use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber_wasm::MakeConsoleWriter;

fn main() {
    fmt()
        .with_writer(MakeConsoleWriter::default().map_trace_level_to(Level::DEBUG))
        .with_max_level(Level::DEBUG)
        // browsers have their own timestamps and no ANSI support
        .without_time()
        .with_ansi(false)
        .init();

    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <App /> })
}
