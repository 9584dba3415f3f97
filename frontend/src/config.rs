use log::Level;

/// How long the simulated contact delivery takes before it resolves.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// Upper bound on a contact delivery. Past this the form reports a failure.
pub const SUBMIT_DEADLINE_MS: u32 = 15_000;

/// How long the thank-you panel stays up before the form comes back.
pub const SUCCESS_DISPLAY_MS: u32 = 5_000;

pub const AUTOPLAY_INTERVAL_MS: u32 = 5_000;

/// Horizontal drag distance, in CSS pixels, that counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Vertical scroll offset after which the header switches to its solid style.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Fraction of the viewport a section has to climb past before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.2;

pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
