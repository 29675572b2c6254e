// Hook elements and class vocabulary shared with the page markup and stylesheet.

// Element ids
pub const LOADING_SCREEN_ID: &str = "loadingScreen";
pub const PARTICLE_CANVAS_ID: &str = "particleCanvas";
pub const CONFETTI_CANVAS_ID: &str = "confettiCanvas";
pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const MAIN_NAV_ID: &str = "mainNav";

// Selectors
pub const LOADING_PERCENT: &str = ".loading-percentage";
pub const CURSOR_DOT: &str = ".cursor";
pub const CURSOR_FOLLOWER: &str = ".cursor-follower";
pub const HOVER_TARGETS: &str = "a, button, .magnetic-btn, .project-card, .skill-category";
pub const MAGNETIC_BUTTONS: &str = ".magnetic-btn";
pub const TYPEWRITER: &str = ".typewriter";
pub const STAT_NUMBERS: &str = ".stat-number";
pub const SKILL_BARS: &str = ".skill-progress";
pub const FILTER_BUTTONS: &str = ".filter-btn";
pub const PROJECT_CARDS: &str = ".project-card";
pub const NAV_LINKS: &str = ".nav-links";
pub const SUBMIT_BUTTON: &str = ".submit-btn";
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const REVEAL_TARGETS: &str =
    ".about-text, .about-image, .skill-category, .tech-tags, .project-card, .timeline-item";

// Data attributes
pub const ATTR_WORDS: &str = "data-words";
pub const ATTR_TARGET: &str = "data-target";
pub const ATTR_PROGRESS: &str = "data-progress";
pub const ATTR_FILTER: &str = "data-filter";
pub const ATTR_CATEGORY: &str = "data-category";

// Classes toggled by this crate
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_GROW: &str = "grow";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_ANIMATE: &str = "animate";
pub const CLASS_NO_SCROLL: &str = "no-scroll";
