use log::Level;

#[cfg(debug_assertions)]
pub fn get_platform_url() -> &'static str {
    "http://localhost:3001"  // Platform dev server when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_platform_url() -> &'static str {
    "/"  // Production URL
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
