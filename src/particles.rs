use crate::constants::PARTICLE_CANVAS_ID;
use crate::dom;
use crate::frame;
use crate::render::PointRenderer;
use glam::Vec2;
use portfolio_core::{
    pointer_ndc, Camera, CancelToken, LoopControl, ParticleField, PARTICLE_COUNT, PARTICLE_EXTENT,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Start the background point cloud. Pages without the canvas, or browsers
/// without WebGPU, simply go without it.
pub async fn init(document: web::Document) -> anyhow::Result<()> {
    let Some(canvas) = document
        .get_element_by_id(PARTICLE_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::debug!("[particles] #{PARTICLE_CANVAS_ID} missing; skipping");
        return Ok(());
    };
    dom::sync_canvas_backing_size(&canvas);

    let field = ParticleField::new(PARTICLE_COUNT, PARTICLE_EXTENT, &mut rand::thread_rng());
    let renderer = match PointRenderer::new(&canvas, field.positions()).await {
        Ok(r) => r,
        Err(e) => {
            log::warn!("[particles] WebGPU unavailable, background disabled: {:?}", e);
            return Ok(());
        }
    };
    let (w, h) = dom::viewport_size();
    let camera = Rc::new(RefCell::new(Camera::for_viewport(w as f32, h as f32)));
    let field = Rc::new(RefCell::new(field));

    {
        let field = field.clone();
        dom::on::<web::MouseEvent, _>(&document, "mousemove", move |ev| {
            let (w, h) = dom::viewport_size();
            let ndc = pointer_ndc(
                Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                Vec2::new(w as f32, h as f32),
            );
            field.borrow_mut().set_pointer(ndc);
        });
    }
    if let Some(window) = web::window() {
        let camera = camera.clone();
        let canvas = canvas.clone();
        dom::on::<web::Event, _>(&window, "resize", move |_| {
            let (w, h) = dom::viewport_size();
            camera.borrow_mut().resize(w as f32, h as f32);
            dom::sync_canvas_backing_size(&canvas);
        });
    }

    let mut renderer = renderer;
    frame::start_loop(CancelToken::new(), move |_dt| {
        renderer.resize_if_needed(canvas.width(), canvas.height());
        let model = {
            let mut f = field.borrow_mut();
            f.step();
            f.model_matrix()
        };
        let mvp = camera.borrow().view_projection() * model;
        match renderer.render(mvp) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.resize_if_needed(canvas.width(), canvas.height());
            }
            Err(e) => log::error!("[particles] render error: {:?}", e),
        }
        LoopControl::Continue
    });
    log::info!("[particles] {} points", PARTICLE_COUNT);
    Ok(())
}
