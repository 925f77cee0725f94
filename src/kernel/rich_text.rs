//! Styled text runs for session output.
//!
//! Command output is built from `(text, style)` runs instead of markup strings, so nothing a
//! user types is ever interpreted by the view layer.

use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#rrggbb` / `rrggbb`.
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self(r, g, b))
    }

    pub const fn hex(value: u32) -> Self {
        Self(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// Linear blend toward black; `level` 255 keeps the colour, 0 is black.
    pub fn dim(self, level: u8) -> Self {
        let scale = |c: u8| ((c as u16 * level as u16) / 255) as u8;
        Self(scale(self.0), scale(self.1), scale(self.2))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Mod(u8);

impl Mod {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const ITALIC: Self = Self(1 << 1);
    pub const UNDERLINE: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Mod {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mod {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub mods: Mod,
}

impl Style {
    pub fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn add_mod(mut self, m: Mod) -> Self {
        self.mods |= m;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }
}

pub type Line = Vec<Span>;

/// A block of styled lines. Never empty: a fresh value holds one empty line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RichText {
    lines: Vec<Line>,
}

impl Default for RichText {
    fn default() -> Self {
        Self::new()
    }
}

impl RichText {
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
        }
    }

    pub fn plain(text: &str) -> Self {
        let mut out = Self::new();
        out.push(text, Style::default());
        out
    }

    pub fn colored(text: &str, color: Rgb) -> Self {
        let mut out = Self::new();
        out.push(text, Style::default().fg(color));
        out
    }

    /// Appends `text`; embedded `\n` start new lines.
    pub fn push(&mut self, text: &str, style: Style) -> &mut Self {
        let mut parts = text.split('\n');
        if let Some(first) = parts.next() {
            self.push_run(first, style);
        }
        for part in parts {
            self.lines.push(Vec::new());
            self.push_run(part, style);
        }
        self
    }

    pub fn color(&mut self, text: &str, color: Rgb) -> &mut Self {
        self.push(text, Style::default().fg(color))
    }

    pub fn bold(&mut self, text: &str, color: Rgb) -> &mut Self {
        self.push(text, Style::default().fg(color).add_mod(Mod::BOLD))
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.push(text, Style::default())
    }

    pub fn newline(&mut self) -> &mut Self {
        self.lines.push(Vec::new());
        self
    }

    fn push_run(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        if self.lines.is_empty() {
            self.lines.push(Vec::new());
        }
        let Some(line) = self.lines.last_mut() else {
            return;
        };
        match line.last_mut() {
            Some(prev) if prev.style == style => prev.text.push_str(text),
            _ => line.push(Span::new(text, style)),
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text with styling dropped, lines joined by `\n`.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for span in line {
                out.push_str(&span.text);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/rich_text.rs"]
mod tests;
