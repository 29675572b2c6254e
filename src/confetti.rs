use crate::constants::{CLASS_ACTIVE, CONFETTI_CANVAS_ID};
use crate::dom;
use crate::frame;
use portfolio_core::{CancelToken, ConfettiBurst, LoopControl, CONFETTI_COUNT};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    // The burst currently falling on the canvas, if any.
    static RUNNING: RefCell<Option<Rc<RefCell<ConfettiBurst>>>> = const { RefCell::new(None) };
}

/// Fire one burst over the page. A launch while pieces are still falling adds
/// them to the running burst; the loop ends once every piece has left the canvas.
pub fn launch() -> anyhow::Result<()> {
    let Some(canvas) = dom::window_document()
        .and_then(|d| d.get_element_by_id(CONFETTI_CANVAS_ID))
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        return Ok(());
    };
    let (w, h) = dom::viewport_size();
    let fresh = ConfettiBurst::spawn(&mut rand::thread_rng(), CONFETTI_COUNT, w as f32, h as f32);

    let joined = RUNNING.with(|running| match running.borrow().as_ref() {
        Some(burst) => {
            burst.borrow_mut().extend(fresh.pieces().iter().cloned());
            true
        }
        None => false,
    });
    if joined {
        log::debug!("[confetti] joined running burst");
        return Ok(());
    }

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    dom::set_class(&canvas, CLASS_ACTIVE, true);

    log::debug!("[confetti] {} pieces", fresh.len());
    let burst = Rc::new(RefCell::new(fresh));
    RUNNING.with(|running| *running.borrow_mut() = Some(burst.clone()));
    frame::start_loop(CancelToken::new(), move |_dt| {
        let mut burst = burst.borrow_mut();
        ctx.clear_rect(0.0, 0.0, w, h);
        for piece in burst.pieces() {
            ctx.save();
            _ = ctx.translate(piece.position.x as f64, piece.position.y as f64);
            _ = ctx.rotate((piece.rotation_deg as f64).to_radians());
            ctx.set_fill_style_str(piece.color);
            let s = piece.size as f64;
            ctx.fill_rect(-s / 2.0, -s / 2.0, s, s);
            ctx.restore();
        }
        let ctl = burst.step();
        if ctl == LoopControl::Stop {
            ctx.clear_rect(0.0, 0.0, w, h);
            dom::set_class(&canvas, CLASS_ACTIVE, false);
            RUNNING.with(|running| *running.borrow_mut() = None);
        }
        ctl
    });
    Ok(())
}
