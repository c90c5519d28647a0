mod app;
mod core;
mod features;
mod pages;

use app::App;
use crate::core::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // Overrides come from data-* attributes on <body> in index.html
    let body = document().body();
    let config = BoardConfig::from_attributes(|name| body.as_ref().and_then(|b| b.get_attribute(name)));

    mount_to_body(move || view! { <App config=config /> });
}
