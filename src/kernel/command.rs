//! Command names typed into a pane and their resolution.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    About,
    Skills,
    SkillsVisual,
    Experience,
    Education,
    Contact,
    Social,
    Cv,
    Clear,
    Projects,
    Game,
    ExitGame,
    Matrix,
    StopMatrix,
    Weather,
    Calc,
    Theme,
    Split,
    VSplit,
    Close,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        let cmd = match name {
            "help" => Self::Help,
            "about" | "whoami" => Self::About,
            "skills" => Self::Skills,
            "skills-visual" => Self::SkillsVisual,
            "experience" => Self::Experience,
            "education" => Self::Education,
            "contact" => Self::Contact,
            "social" => Self::Social,
            "cv" | "resume" => Self::Cv,
            "clear" => Self::Clear,
            "projects" => Self::Projects,
            "game" => Self::Game,
            "exit-game" => Self::ExitGame,
            "matrix" => Self::Matrix,
            "stop-matrix" => Self::StopMatrix,
            "weather" => Self::Weather,
            "calc" | "calculate" => Self::Calc,
            "theme" => Self::Theme,
            "split" => Self::Split,
            "vsplit" => Self::VSplit,
            "close" => Self::Close,
            _ => return None,
        };
        Some(cmd)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::About => "about",
            Self::Skills => "skills",
            Self::SkillsVisual => "skills-visual",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Contact => "contact",
            Self::Social => "social",
            Self::Cv => "cv",
            Self::Clear => "clear",
            Self::Projects => "projects",
            Self::Game => "game",
            Self::ExitGame => "exit-game",
            Self::Matrix => "matrix",
            Self::StopMatrix => "stop-matrix",
            Self::Weather => "weather",
            Self::Calc => "calc",
            Self::Theme => "theme",
            Self::Split => "split",
            Self::VSplit => "vsplit",
            Self::Close => "close",
        }
    }
}

/// Names offered by tab completion, in display order.
pub const COMPLETIONS: &[&str] = &[
    "help",
    "about",
    "whoami",
    "skills",
    "experience",
    "education",
    "contact",
    "social",
    "cv",
    "clear",
    "projects",
    "skills-visual",
    "game",
    "exit-game",
    "matrix",
    "stop-matrix",
    "weather",
    "calc",
    "theme",
    "split",
    "vsplit",
    "close",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// Blank line.
    Empty,
    Known { command: Command, args: String },
    /// Lowercased, trimmed line that matched nothing.
    Unknown(String),
}

/// Lowercases the line and splits it into a command name and the remaining argument text.
pub fn parse(raw: &str) -> Parsed {
    let line = raw.trim().to_lowercase();
    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return Parsed::Empty;
    };
    match Command::from_name(name) {
        Some(command) => Parsed::Known {
            command,
            args: tokens.collect::<Vec<_>>().join(" "),
        },
        None => Parsed::Unknown(line),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    None,
    Unique(&'static str),
    Candidates(Vec<&'static str>),
}

pub fn complete(input: &str) -> Completion {
    let prefix = input.trim().to_lowercase();
    if prefix.is_empty() {
        return Completion::None;
    }
    let matches: Vec<&'static str> = COMPLETIONS
        .iter()
        .copied()
        .filter(|name| name.starts_with(&prefix))
        .collect();
    match matches.len() {
        0 => Completion::None,
        1 => Completion::Unique(matches[0]),
        _ => Completion::Candidates(matches),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/command.rs"]
mod tests;
