use super::rich_text::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    #[default]
    Default,
    Dracula,
    Solarized,
    Nord,
}

impl ThemeName {
    pub const ALL: [ThemeName; 4] = [
        ThemeName::Default,
        ThemeName::Dracula,
        ThemeName::Solarized,
        ThemeName::Nord,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Dracula => "dracula",
            ThemeName::Solarized => "solarized",
            ThemeName::Nord => "nord",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeName::Default => "Default",
            ThemeName::Dracula => "Dracula",
            ThemeName::Solarized => "Solarized",
            ThemeName::Nord => "Nord",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Unknown or empty names resolve to the baseline theme.
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub fn accent(self) -> Rgb {
        match self {
            ThemeName::Default => Rgb::hex(0xff8c00),
            ThemeName::Dracula => Rgb::hex(0xff79c6),
            ThemeName::Solarized => Rgb::hex(0x268bd2),
            ThemeName::Nord => Rgb::hex(0x81a1c1),
        }
    }

    pub fn rain(self) -> Rgb {
        match self {
            ThemeName::Default => Rgb::hex(0x00ff00),
            ThemeName::Dracula => Rgb::hex(0x50fa7b),
            ThemeName::Solarized => Rgb::hex(0x859900),
            ThemeName::Nord => Rgb::hex(0xa3be8c),
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/theme.rs"]
mod tests;
