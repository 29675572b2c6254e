// CSS value formatting. Pure so it can be exercised on the host.

use portfolio_core::TweenProps;

pub const RAINBOW_KEYFRAMES_ID: &str = "rainbow-keyframes";
pub const RAINBOW_KEYFRAMES: &str =
    "@keyframes rainbow { 0% { filter: hue-rotate(0deg); } 100% { filter: hue-rotate(360deg); } }";
pub const RAINBOW_ANIMATION: &str = "rainbow 2s linear infinite";

#[inline]
pub fn px(v: f32) -> String {
    format!("{v}px")
}

#[inline]
pub fn percent(v: f64) -> String {
    format!("{v}%")
}

pub fn transform(props: &TweenProps) -> String {
    format!(
        "translate({}px, {}px) scale({})",
        round3(props.x),
        round3(props.y),
        round3(props.scale)
    )
}

pub fn opacity(props: &TweenProps) -> String {
    format!("{}", round3(props.opacity.clamp(0.0, 1.0)))
}

pub fn percent_label(percent: u32) -> String {
    format!("{percent}%")
}

// Keep style strings short; sub-thousandth changes are invisible.
fn round3(v: f64) -> f64 {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
