use crate::constants::{CLASS_ACTIVE, MENU_TOGGLE_ID, NAV_LINKS};
use crate::dom;
use portfolio_core::MenuState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let (Some(toggle), Some(drawer)) = (
        document.get_element_by_id(MENU_TOGGLE_ID),
        dom::query_one(document, NAV_LINKS),
    ) else {
        log::debug!("[menu] toggle or drawer missing; skipping");
        return Ok(());
    };
    let state = Rc::new(RefCell::new(MenuState::default()));
    let render = {
        let toggle = toggle.clone();
        let drawer = drawer.clone();
        move |open: bool| {
            dom::set_class(&toggle, CLASS_ACTIVE, open);
            dom::set_class(&drawer, CLASS_ACTIVE, open);
        }
    };

    {
        let state = state.clone();
        let render = render.clone();
        dom::add_click_listener(&toggle, move |_| {
            let open = state.borrow_mut().toggle();
            render(open);
        });
    }
    for link in dom::query_all_in(&drawer, "a") {
        let state = state.clone();
        let render = render.clone();
        dom::add_click_listener(&link, move |_| {
            if state.borrow_mut().close() {
                render(false);
            }
        });
    }
    log::info!("[menu] wired");
    Ok(())
}
