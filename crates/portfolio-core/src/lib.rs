pub mod cancel;
pub mod confetti;
pub mod constants;
pub mod contact;
pub mod cursor;
pub mod easing;
pub mod easter_egg;
pub mod error;
pub mod filter;
pub mod loader;
pub mod menu;
pub mod nav;
pub mod particles;
pub mod scroll;
pub mod stats;
pub mod tween;
pub mod typewriter;
pub mod visibility;
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

pub use cancel::*;
pub use confetti::*;
pub use constants::*;
pub use contact::*;
pub use cursor::*;
pub use easing::*;
pub use easter_egg::*;
pub use error::*;
pub use filter::*;
pub use loader::*;
pub use menu::*;
pub use nav::*;
pub use particles::*;
pub use scroll::*;
pub use stats::*;
pub use tween::*;
pub use typewriter::*;
pub use visibility::*;
