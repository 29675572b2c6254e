use crate::constants::NAV_SCROLL_THRESHOLD_PX;

/// Whether the nav bar shows its scrolled style at this scroll offset.
#[inline]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD_PX
}

/// Element id targeted by an in-page anchor `href`, if any.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
