//! Terminal palette derived from the active theme, mapped down to what the terminal can show.

use crate::kernel::rich_text::{Mod, Rgb, Style as RichStyle};
use crate::kernel::ThemeName;
use ratatui::style::{Color, Modifier, Style};

pub const COLOR_SUPPORT_ENV: &str = "TERMFOLIO_COLOR_SUPPORT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

impl TerminalColorSupport {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => Some(Self::TrueColor),
            "256" | "ansi256" => Some(Self::Ansi256),
            "16" | "ansi16" | "basic" => Some(Self::Ansi16),
            _ => None,
        }
    }

    fn from_env(colorterm: &str, term: &str) -> Self {
        let colorterm = colorterm.to_ascii_lowercase();
        let term = term.to_ascii_lowercase();
        let direct = |s: &str| s.contains("truecolor") || s.contains("24bit") || s.contains("direct");
        if direct(&colorterm) || direct(&term) {
            Self::TrueColor
        } else if term.contains("256color") {
            Self::Ansi256
        } else {
            Self::Ansi16
        }
    }
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Some(support) = std::env::var(COLOR_SUPPORT_ENV)
        .ok()
        .and_then(|v| TerminalColorSupport::parse(&v))
    {
        return support;
    }
    TerminalColorSupport::from_env(
        &std::env::var("COLORTERM").unwrap_or_default(),
        &std::env::var("TERM").unwrap_or_default(),
    )
}

const GRAY_55: Rgb = Rgb::hex(0x555555);
const GRAY_88: Rgb = Rgb::hex(0x888888);
const WHITE: Rgb = Rgb::hex(0xffffff);
const ERROR_RED: Rgb = Rgb::hex(0xff5f5f);
const INFO_CYAN: Rgb = Rgb::hex(0x5fd7ff);
const SNAKE_BODY: Rgb = Rgb::hex(0x00ff00);
const SNAKE_HEAD: Rgb = Rgb::hex(0x00cc00);
const FOOD_RED: Rgb = Rgb::hex(0xff0000);
const SELECTED_BG: Rgb = Rgb::hex(0x3a3a3a);

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub name: ThemeName,
    support: TerminalColorSupport,
    pub accent: Color,
    pub rain: Rgb,
    pub inactive_border: Color,
    pub text_fg: Color,
    pub muted_fg: Color,
    pub error_fg: Color,
    pub info_fg: Color,
    pub snake_body: Color,
    pub snake_head: Color,
    pub food: Color,
    pub selected_bg: Color,
}

impl UiTheme {
    pub fn new(name: ThemeName, support: TerminalColorSupport) -> Self {
        let map = |rgb: Rgb| map_rgb(rgb, support);
        Self {
            name,
            support,
            accent: map(name.accent()),
            rain: name.rain(),
            inactive_border: map(GRAY_55),
            text_fg: map(WHITE),
            muted_fg: map(GRAY_88),
            error_fg: map(ERROR_RED),
            info_fg: map(INFO_CYAN),
            snake_body: map(SNAKE_BODY),
            snake_head: map(SNAKE_HEAD),
            food: map(FOOD_RED),
            selected_bg: map(SELECTED_BG),
        }
    }

    pub fn color(&self, rgb: Rgb) -> Color {
        map_rgb(rgb, self.support)
    }

    /// Rain colour faded by `brightness` (255 full, 0 black).
    pub fn rain_color(&self, brightness: u8) -> Color {
        self.color(self.rain.dim(brightness))
    }

    pub fn style(&self, style: RichStyle) -> Style {
        let mut out = Style::default();
        if let Some(fg) = style.fg {
            out = out.fg(self.color(fg));
        }
        if style.mods.contains(Mod::BOLD) {
            out = out.add_modifier(Modifier::BOLD);
        }
        if style.mods.contains(Mod::ITALIC) {
            out = out.add_modifier(Modifier::ITALIC);
        }
        if style.mods.contains(Mod::UNDERLINE) {
            out = out.add_modifier(Modifier::UNDERLINED);
        }
        out
    }
}

fn map_rgb(rgb: Rgb, support: TerminalColorSupport) -> Color {
    let Rgb(r, g, b) = rgb;
    match support {
        TerminalColorSupport::TrueColor => Color::Rgb(r, g, b),
        TerminalColorSupport::Ansi256 => Color::Indexed(ansi256_index(r, g, b)),
        TerminalColorSupport::Ansi16 => Color::Indexed(ansi16_index(r, g, b)),
    }
}

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

fn cube_step(c: u8) -> u8 {
    CUBE_LEVELS
        .iter()
        .enumerate()
        .min_by_key(|(_, level)| (**level as i16 - c as i16).unsigned_abs())
        .map(|(i, _)| i as u8)
        .unwrap_or(0)
}

fn distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| (x as i32 - y as i32).pow(2) as u32;
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}

/// Nearest of the 6x6x6 cube and the 24-step gray ramp.
fn ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    let (ri, gi, bi) = (cube_step(r), cube_step(g), cube_step(b));
    let cube = (
        CUBE_LEVELS[ri as usize],
        CUBE_LEVELS[gi as usize],
        CUBE_LEVELS[bi as usize],
    );
    let cube_index = 16 + 36 * ri + 6 * gi + bi;

    let avg = ((r as u16 + g as u16 + b as u16) / 3) as u8;
    let gray_step = (avg.saturating_sub(8) / 10).min(23);
    let gray_level = 8 + gray_step * 10;
    let gray_index = 232 + gray_step;

    if distance_sq((r, g, b), (gray_level, gray_level, gray_level)) < distance_sq((r, g, b), cube)
    {
        gray_index
    } else {
        cube_index
    }
}

const ANSI16: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (128, 0, 0),
    (0, 128, 0),
    (128, 128, 0),
    (0, 0, 128),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

fn ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    ANSI16
        .iter()
        .enumerate()
        .min_by_key(|(_, c)| distance_sq((r, g, b), **c))
        .map(|(i, _)| i as u8)
        .unwrap_or(7)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
