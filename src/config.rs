//! Site-wide tuning constants, kept in one place so the page behavior can
//! be adjusted without hunting through components.

/// localStorage key holding the visitor's theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Viewport widths at or below this many CSS pixels get the hamburger menu.
pub const MOBILE_NAV_BREAKPOINT: f64 = 750.0;

/// Scroll depth past which the back-to-top control appears.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Hero background drift per scrolled pixel.
pub const PARALLAX_FACTOR: f64 = 0.3;

/// Distance from the viewport bottom, in pixels, at which scroll reveals
/// trigger.
pub const REVEAL_MARGIN_PX: i32 = 80;

/// Leasing brochure shipped with the static assets.
pub const BROCHURE_PATH: &str = "/assets/docs/foundry-leasing-brochure.pdf";

/// File name suggested to the browser when saving the brochure.
pub const BROCHURE_FILE_NAME: &str = "foundry-leasing-brochure.pdf";
