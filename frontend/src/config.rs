use log::Level;

/// Delay between mount and the hero fade-in.
pub const REVEAL_DELAY_MS: u32 = 100;

pub const ASSET_BASE: &str = "/assets";
pub const BACKGROUND_IMAGE: &str = "output-onlinepngtools.png";
pub const ARROW_ICON: &str = "right-arrow.png";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose lifecycle logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_url(name: &str) -> String {
    format!("{}/{}", ASSET_BASE, name.trim_start_matches('/'))
}

pub fn background_image_url() -> String {
    asset_url(BACKGROUND_IMAGE)
}

pub fn arrow_icon_url() -> String {
    asset_url(ARROW_ICON)
}
