use postboard_common::{fetch_posts, render_posts};
use tracing::info;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, window, Document, Event};

mod dom;
mod logger;

use dom::DomPage;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    extern crate console_error_panic_hook;
    use std::panic;
    panic::set_hook(Box::new(console_error_panic_hook::hook));
    logger::init();

    let document = document()?;
    // The module may only start once the document is already parsed
    if document.ready_state() == "loading" {
        let on_load = Closure::wrap(Box::new(|_: Event| load_posts()) as Box<dyn FnMut(Event)>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_load.as_ref().unchecked_ref())?;
        on_load.forget();
    } else {
        load_posts();
    }
    Ok(())
}

/// Fetch the posts and show them as cards
fn load_posts() {
    spawn_local(async {
        let posts = fetch_posts().await;
        info!("Rendering {} posts", posts.len());
        document()
            .and_then(|document| render_posts(&DomPage(document), &posts))
            .map_err(|e| console::error_1(&e))
            .ok();
    });
}

fn document() -> Result<Document, JsValue> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document to render into"))
}
