use crate::dom;
use crate::frame;
use crate::style::{RAINBOW_ANIMATION, RAINBOW_KEYFRAMES, RAINBOW_KEYFRAMES_ID};
use portfolio_core::{KeySequence, EASTER_EGG_DURATION_MS};
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let mut seq = KeySequence::default();
    let doc = document.clone();
    dom::on::<web::KeyboardEvent, _>(document, "keydown", move |ev| {
        if seq.feed(&ev.key()) {
            if let Err(e) = activate(&doc) {
                log::error!("[easter-egg] {:?}", e);
            }
        }
    });
    Ok(())
}

fn activate(document: &web::Document) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    inject_keyframes(document)?;
    dom::set_style(&body, "animation", RAINBOW_ANIMATION);
    frame::set_timeout(EASTER_EGG_DURATION_MS, move || {
        dom::set_style(&body, "animation", "");
    })?;
    log::info!("🎉 You found the secret! You are a true developer! 🎉");
    Ok(())
}

fn inject_keyframes(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(RAINBOW_KEYFRAMES_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("no head"))?;
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    style.set_id(RAINBOW_KEYFRAMES_ID);
    style.set_text_content(Some(RAINBOW_KEYFRAMES));
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
