use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn contact_email() -> &'static str {
    "info@beba-ai.com"
}

/// How long headline numbers take to count up once on screen.
pub fn count_up_duration_ms() -> f64 {
    2000.0
}

/// Minimum time the loading screen stays up, so it doesn't flash.
#[cfg(debug_assertions)]
pub fn loading_screen_ms() -> u32 {
    0
}

#[cfg(not(debug_assertions))]
pub fn loading_screen_ms() -> u32 {
    600
}
