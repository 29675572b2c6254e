// Shared interaction/animation tuning constants used by the web frontend.

// Cursor
pub const CURSOR_DOT_FACTOR: f32 = 0.5; // fraction of remaining distance covered per frame
pub const CURSOR_FOLLOWER_FACTOR: f32 = 0.2;

// Magnetic buttons
pub const MAGNETIC_RADIUS_PX: f32 = 100.0;
pub const MAGNETIC_STRENGTH: f32 = 0.3;
pub const MAGNETIC_PULL_MS: f64 = 300.0;
pub const MAGNETIC_RELEASE_MS: f64 = 500.0;

// Loading overlay
pub const LOADER_TICK_MS: i32 = 100;
pub const LOADER_MAX_INCREMENT: f32 = 10.0;
pub const LOADER_HIDE_DELAY_MS: i32 = 500;

// Particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const PARTICLE_EXTENT: f32 = 10.0; // edge length of the spawn cube
pub const PARTICLE_SPIN_PER_FRAME: f32 = 0.001; // radians
pub const PARTICLE_TILT: f32 = 0.1; // radians at the viewport edge
pub const PARTICLE_COLOR: [f32; 4] = [0.0, 0.851, 1.0, 0.8]; // #00D9FF @ 0.8
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

// Scroll reveal
pub const REVEAL_START_FRACTION: f64 = 0.8; // trigger top vs viewport height

// Typewriter (milliseconds)
pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;
pub const HOLD_DELAY_MS: u32 = 2000;
pub const NEXT_PHRASE_DELAY_MS: u32 = 500;

// Counters
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEPS: u32 = 50;

// Visibility watchers
pub const STATS_THRESHOLD: f64 = 0.5;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

// Project filter
pub const FILTER_ALL: &str = "all";
pub const FILTER_SHOW_MS: f64 = 500.0;
pub const FILTER_HIDE_MS: f64 = 300.0;
pub const FILTER_HIDDEN_SCALE: f64 = 0.8;

// Contact form
pub const SUBMIT_LATENCY_MS: i32 = 2000;
pub const SUBMIT_RESET_MS: i32 = 3000;

// Confetti
pub const CONFETTI_COUNT: usize = 150;
pub const CONFETTI_PALETTE: [&str; 5] = ["#00D9FF", "#6B5B95", "#FF6B9D", "#4ECDC4", "#F093FB"];

// Navigation
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 100.0;

// Easter egg
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];
pub const EASTER_EGG_DURATION_MS: i32 = 5000;
