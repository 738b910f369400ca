use log::Level;

pub const DOWNLOAD_URL: &str =
    "https://github.com/Intrepid-penguin/Me-tabs-exe/archive/refs/heads/main.zip";

pub const DEMO_VIDEO_URL: &str =
    "https://res.cloudinary.com/dh9zsffcy/video/upload/v1728519617/screen-capture_kfkdcz.mkv";

pub const COPYRIGHT_YEAR: u16 = 2024;

/// Delay between first mount and the page being marked as revealed.
pub const REVEAL_DELAY_MS: u32 = 500;

pub const ENTRANCE_DURATION_MS: u32 = 500;
pub const STAGGER_STEP_MS: u32 = 100;
pub const ENTRANCE_OFFSET_PX: u32 = 20;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
