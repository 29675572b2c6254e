#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod animate;
mod confetti;
mod constants;
mod contact;
mod cursor;
mod dom;
mod easter_egg;
mod filter;
mod frame;
mod loader;
mod menu;
mod nav;
mod particles;
mod render;
mod reveal;
mod scroll_reveal;
mod stats;
mod style;
mod typewriter;
mod visibility;

type Initializer = fn(&web::Document) -> anyhow::Result<()>;

const INITIALIZERS: &[(&str, Initializer)] = &[
    ("loader", loader::init),
    ("cursor", cursor::init),
    ("typewriter", typewriter::init),
    ("scroll-reveal", scroll_reveal::init),
    ("counters", stats::init_counters),
    ("skill-bars", stats::init_skill_bars),
    ("filter", filter::init),
    ("menu", menu::init),
    ("contact", contact::init),
    ("nav", nav::init),
    ("reveal", reveal::init),
];

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    greet();

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if let Err(e) = easter_egg::init(&document) {
        log::error!("[easter-egg] {:?}", e);
    }
    if document.ready_state() == "loading" {
        let mut once = Some(document.clone());
        dom::on::<web::Event, _>(&document, "DOMContentLoaded", move |_| {
            if let Some(doc) = once.take() {
                init_all(doc);
            }
        });
    } else {
        init_all(document);
    }
    Ok(())
}

fn init_all(document: web::Document) {
    for (name, init) in INITIALIZERS {
        if let Err(e) = init(&document) {
            log::error!("[{name}] init error: {:?}", e);
        }
    }
    spawn_local(async move {
        if let Err(e) = particles::init(document).await {
            log::error!("[particles] init error: {:?}", e);
        }
    });
}

fn greet() {
    log::info!("👋 Hello there!");
    log::info!("🚀 Looking for talent? Let's talk!");
    log::info!("💼 Check out my work and get in touch!");
    log::info!("\n     _____\n    /     \\\n   | () () |\n    \\  ^  /\n     |||||\n     |||||\n");
}
