use log::Level;

/// Delay before a scroll-into-view runs, so the freshly rendered panel has laid out.
pub const SCROLL_SETTLE_MS: u32 = 100;

pub const SERVICES_ANCHOR: &str = "services";
pub const CONTACT_ANCHOR: &str = "contact";

// Nav switches to its solid background past this many pixels.
pub const NAV_SCROLL_THRESHOLD: f64 = 80.0;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
