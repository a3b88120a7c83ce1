//! Colors and spacing for the Aspect window.

use gpui::{Rgba, rgb, rgba};

// Palette
const BACKGROUND: u32 = 0x0f0f12;
const TITLE_BAR: u32 = 0x15151b;
const BUTTON: u32 = 0x1e1e24;
const ACCENT: u32 = 0x6b5cff;
const TEXT: u32 = 0xe5e5e5;
const TEXT_MUTED: u32 = 0x888888;
const DANGER: u32 = 0xff6b6b;

// Spacing (px)
pub const SPACE_1: f32 = 4.0;
pub const SPACE_2: f32 = 8.0;
pub const SPACE_3: f32 = 12.0;
pub const SPACE_4: f32 = 16.0;

// Sizes (px)
pub const WINDOW_WIDTH: f32 = 360.0;
pub const WINDOW_HEIGHT: f32 = 500.0;
pub const TITLE_BAR_HEIGHT: f32 = 40.0;
pub const BUTTON_WIDTH: f32 = 240.0;
pub const FIELD_WIDTH: f32 = 80.0;

// Type scale (px)
pub const TEXT_XS: f32 = 11.0;
pub const TEXT_SM: f32 = 12.0;
pub const TEXT_MD: f32 = 13.0;
pub const TEXT_LG: f32 = 15.0;

pub fn background() -> Rgba {
    rgb(BACKGROUND)
}

pub fn title_bar() -> Rgba {
    rgb(TITLE_BAR)
}

pub fn button() -> Rgba {
    rgb(BUTTON)
}

pub fn accent() -> Rgba {
    rgb(ACCENT)
}

pub fn text() -> Rgba {
    rgb(TEXT)
}

pub fn text_muted() -> Rgba {
    rgb(TEXT_MUTED)
}

pub fn text_white() -> Rgba {
    rgb(0xffffff)
}

pub fn danger() -> Rgba {
    rgb(DANGER)
}

pub fn overlay() -> Rgba {
    rgba(0x000000aa)
}
