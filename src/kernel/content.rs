//! Canned résumé content rendered by the dispatcher.

use super::rich_text::{RichText, Rgb};
use super::services::ports::WeatherReport;
use super::theme::ThemeName;

const WHITE: Rgb = Rgb::hex(0xffffff);
const YELLOW: Rgb = Rgb::hex(0xffff00);
const CYAN: Rgb = Rgb::hex(0x00ffff);
const MINT: Rgb = Rgb::hex(0x98fb98);
const SALMON: Rgb = Rgb::hex(0xffa07a);
const SKY: Rgb = Rgb::hex(0x87cefa);
const SAGE: Rgb = Rgb::hex(0x87af87);
const GRAY_55: Rgb = Rgb::hex(0x555555);
const GRAY_66: Rgb = Rgb::hex(0x666666);
const GRAY_88: Rgb = Rgb::hex(0x888888);
const GRAY_44: Rgb = Rgb::hex(0x444444);
const GRAY_CC: Rgb = Rgb::hex(0xcccccc);

pub const PROMPT: &str = "➜";
pub const TITLE: &str = "marjo@ballabani: ~/resume";

const BANNER: &str = "\
███╗   ███╗ █████╗ ██████╗ ██╗ ██████╗
████╗ ████║██╔══██╗██╔══██╗██║██╔═══██╗
██╔████╔██║███████║██████╔╝██║██║   ██║
██║╚██╔╝██║██╔══██║██╔══██╗██║██║   ██║
██║ ╚═╝ ██║██║  ██║██║  ██║██║╚██████╔╝
╚═╝     ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝ ╚═════╝";

const DIVIDER: &str = "─────────────────────────────────────────────────";

pub fn welcome(theme: ThemeName) -> RichText {
    let mut out = RichText::new();
    out.color(BANNER, theme.accent())
        .newline()
        .color(DIVIDER, GRAY_55)
        .newline()
        .color("              Interactive Terminal Resume", GRAY_88)
        .newline()
        .color(
            "         Software Engineer • Cloud Architect • Tech Lead",
            GRAY_66,
        )
        .newline()
        .color(DIVIDER, GRAY_55)
        .newline()
        .newline()
        .color("Type ", GRAY_66)
        .color("'help'", SAGE)
        .color(" to see available commands", GRAY_66)
        .newline()
        .color("Press ", GRAY_66)
        .color("'tab'", SAGE)
        .color(" to auto-complete commands", GRAY_66);
    out
}

fn help_row(out: &mut RichText, name: &str, description: &str) {
    out.color(&format!("• {name:<14}"), MINT)
        .color(description, WHITE)
        .newline();
}

fn shortcut_row(out: &mut RichText, keys: &str, description: &str) {
    out.color(&format!("• {keys:<14}"), GRAY_66)
        .color(description, GRAY_44)
        .newline();
}

pub fn help() -> RichText {
    let mut out = RichText::new();
    out.bold("Available Commands", YELLOW).newline().newline();

    out.color("Main Commands:", CYAN).newline();
    help_row(&mut out, "help", "Show this help message");
    help_row(&mut out, "about", "Display my professional summary");
    help_row(&mut out, "skills", "View my technical expertise");
    help_row(&mut out, "experience", "Show my work history");
    help_row(&mut out, "education", "View my educational background");
    help_row(&mut out, "contact", "Get my contact information");
    help_row(&mut out, "social", "Find me on social networks");
    help_row(&mut out, "cv", "Download my resume");
    help_row(&mut out, "clear", "Clear the terminal screen");

    out.newline().color("Utility Commands:", CYAN).newline();
    help_row(&mut out, "projects", "View my project showcase");
    help_row(&mut out, "skills-visual", "Show skills visualization");
    help_row(&mut out, "game", "Play Snake mini-game");
    help_row(&mut out, "exit-game", "Exit the game");
    help_row(&mut out, "matrix", "Start Matrix digital rain effect");
    help_row(&mut out, "stop-matrix", "Stop Matrix effect");
    help_row(&mut out, "weather", "Check weather (usage: weather [city])");
    help_row(&mut out, "calc", "Calculator (usage: calc [expression])");
    help_row(&mut out, "theme", "List or select a theme (usage: theme [name])");
    help_row(&mut out, "split", "Split this pane side by side");
    help_row(&mut out, "vsplit", "Split this pane top and bottom");
    help_row(&mut out, "close", "Close this pane");

    out.newline().color("Shortcuts:", GRAY_66).newline();
    shortcut_row(&mut out, "↑/↓", "Navigate command history");
    shortcut_row(&mut out, "Tab", "Auto-complete commands");
    shortcut_row(&mut out, "Ctrl+L", "Clear the screen");
    shortcut_row(&mut out, "Ctrl+Shift+H", "Split horizontally (also Alt+H)");
    shortcut_row(&mut out, "Ctrl+Shift+V", "Split vertically (also Alt+V)");
    shortcut_row(&mut out, "Ctrl+Shift+W", "Close the active pane (also Alt+W)");
    shortcut_row(&mut out, "Ctrl+T", "Choose a theme");
    shortcut_row(&mut out, "Right-click", "Pane menu: split or close that pane");
    out.color(&format!("• {:<14}", "Ctrl+Q"), GRAY_66)
        .color("Quit", GRAY_44);
    out
}

fn boxed(out: &mut RichText, accent: Rgb, width: usize, rows: &[&str], rounded: bool) {
    let (tl, tr, bl, br) = if rounded {
        ('╭', '╮', '╰', '╯')
    } else {
        ('┌', '┐', '└', '┘')
    };
    let bar = "─".repeat(width + 2);
    out.color(&format!("{tl}{bar}{tr}"), accent).newline();
    for row in rows {
        out.color("│ ", accent)
            .color(&format!("{row:<width$}"), WHITE)
            .color(" │", accent)
            .newline();
    }
    out.color(&format!("{bl}{bar}{br}"), accent);
}

pub fn about(theme: ThemeName) -> RichText {
    let accent = theme.accent();
    let mut out = RichText::new();
    out.bold("About Me", accent).newline().newline();
    boxed(
        &mut out,
        accent,
        52,
        &[
            "Senior software engineer with more than 10 years of",
            "programming experience.",
        ],
        false,
    );
    out.newline().newline();

    out.color("⚡ Experience", accent).newline();
    out.color("   Building scalable and efficient software solutions using", WHITE)
        .newline();
    out.color("   React, JavaScript, and Google Cloud", accent)
        .newline()
        .newline();

    out.color("⚡ Passion", accent).newline();
    out.color(
        "   Transforming innovative ideas into high-quality applications",
        WHITE,
    )
    .newline();
    out.color("   with elegant and efficient implementations", WHITE)
        .newline()
        .newline();

    out.color("⚡ Strengths", accent).newline();
    out.color("   Strong team player with expertise in designing robust,", WHITE)
        .newline();
    out.color("   high-performance systems", WHITE).newline().newline();

    boxed(
        &mut out,
        accent,
        45,
        &["Ready to bring your innovative ideas to life!"],
        true,
    );
    out
}

const SKILLS: &[(&str, Rgb)] = &[
    ("Typescript", Rgb::hex(0xf7df1e)),
    ("Python", Rgb::hex(0x3776ab)),
    ("Javascript", Rgb::hex(0xf7df1e)),
    ("Node", Rgb::hex(0x339933)),
    ("React", Rgb::hex(0x61dafb)),
    ("Angular", Rgb::hex(0xdd0031)),
    ("Google Cloud", Rgb::hex(0x4285f4)),
    ("AWS", Rgb::hex(0xff9900)),
    ("Azure", Rgb::hex(0x00a4ef)),
    ("Docker", Rgb::hex(0x2496ed)),
    ("Terraform", Rgb::hex(0x7b42bc)),
    ("Kubernetes", Rgb::hex(0x326ce5)),
    ("Java", Rgb::hex(0xf89820)),
    ("Kotlin", Rgb::hex(0x7f52ff)),
    ("MongoDB", Rgb::hex(0x47a248)),
    ("RethinkDB", Rgb::hex(0x4db33d)),
    ("Jest", Rgb::hex(0xc21325)),
    ("ElasticSearch", Rgb::hex(0x00bfb3)),
    ("GraphQL", Rgb::hex(0xe10098)),
    ("Express", Rgb::hex(0x68a063)),
    ("Redis", Rgb::hex(0xdc382d)),
    ("SQL", Rgb::hex(0x00758f)),
    ("HTML", Rgb::hex(0xe34f26)),
    ("CSS", Rgb::hex(0x1572b6)),
];

pub fn skills() -> RichText {
    let mut out = RichText::new();
    out.bold("PROGRAMMING", YELLOW).newline();
    for (name, color) in SKILLS {
        out.newline().text("• ").color("■ ", *color).color(name, WHITE);
    }
    out
}

struct Job {
    heading: &'static str,
    meta: &'static str,
    tagline: Option<&'static str>,
    highlights: &'static [(&'static str, &'static str)],
    stack: &'static str,
}

const JOBS: &[Job] = &[
    Job {
        heading: "UNICEPTA | Senior Software Engineer",
        meta: "Jul 2020 - Present | Cologne, Germany | 450+ employees",
        tagline: Some("Visionary, AI-powered Media & Data Intelligence Solutions"),
        highlights: &[
            ("Part of Core team", "Architect and part of every decision."),
            (
                "Microservices engineer",
                "Designed and build services for distributed system",
            ),
            ("Pipeline engineer", "Google cloud engineer for data pipeline"),
            (
                "Fullstack engineer",
                "Wrote and reviewed code for front/back/cloud.",
            ),
        ],
        stack: "Typescript, React, NodeJs, Poetry, PyTest, ReactJS, Jest, Cypress, ES6, \
                ElasticSearch, Google Cloud, JIRA, Firebase, Kubernetes, Data Flow",
    },
    Job {
        heading: "RITECH SOLUTIONS | Senior Software Engineer",
        meta: "Jul 2018 – Jul 2020 | Tirana, Albania | 100-150 employees",
        tagline: None,
        highlights: &[
            ("Part of Core team", "Team that leads company tech decisions"),
            ("Tech interviewer", "Interview potential candidates."),
            (
                "Microsoft project",
                "IOT marketing project in every Microsoft store.",
            ),
            (
                "AppriseMobile Tech Lead",
                "CRM for Toyota and corporates in USA",
            ),
        ],
        stack: "JavaScript, Python, pandas, NodeJs, ReactJS, Chai, Sinon, Mocha, ES6, \
                ElasticSearch, Redis, Nginx, Gulp, JIRA, Docker, Azure, AWS, MongoDB",
    },
    Job {
        heading: "GUTENBERG TECHNOLOGY | Software Engineering",
        meta: "Feb 2017 – Aug 2018 | Paris, France | 50-100 employees",
        tagline: None,
        highlights: &[
            (
                "Fullstack developer",
                "Frontend and backend (real-time publisher platform) used by \
                 National Geographics, IUBH, Fujitsu",
            ),
            ("MEFIO developer", "Highly available publisher platform"),
            (
                "SaaS developer",
                "Integrated strategy to migrate from manual sales to SaaS",
            ),
        ],
        stack: "Python, ES6, ElasticSearch, Redis, Nginx, npm, Gulp, JIRA, Docker, AWS S3, \
                RethinkDB, ReactJS, NodeJS, AngularJS, JavaScript",
    },
    Job {
        heading: "GROUP OF COMPANIES | Software Engineer",
        meta: "Mar 2015 – Feb 2017 | Tirana, Albania | 5-30 employees",
        tagline: None,
        highlights: &[
            ("Software developer", "Developed web and native projects"),
            (
                "Bar management app",
                "Developed app for bar/restaurant management.",
            ),
            (
                "Bank system optimisation",
                "Optimised aggregation from 11h to 1h",
            ),
        ],
        stack: "Typescript, Python, Gulp, Docker, MongoDB, ReactJS, NodeJs, AngularJS, \
                JavaScript, Java",
    },
];

pub fn experience() -> RichText {
    let mut out = RichText::new();
    out.bold("Professional Experience", YELLOW);
    for job in JOBS {
        out.newline().newline().color(job.heading, CYAN).newline();
        out.color(job.meta, WHITE);
        if let Some(tagline) = job.tagline {
            out.newline().color(tagline, MINT);
        }
        out.newline();
        for (title, detail) in job.highlights {
            out.newline()
                .text("• ")
                .color(title, SALMON)
                .text(" - ")
                .color(detail, WHITE);
        }
        out.newline()
            .newline()
            .color("Technologies used: ", CYAN)
            .color(job.stack, SKY);
    }
    out
}

pub fn education(theme: ThemeName) -> RichText {
    let accent = theme.accent();
    let mut out = RichText::new();
    out.bold("Education", accent).newline().newline();
    boxed(&mut out, accent, 29, &["Bachelor of Computer Science"], false);
    out.newline().newline();
    out.color("Institution: ", accent)
        .color("University of Tirana", WHITE)
        .newline();
    out.color("Duration:    ", accent)
        .color("2013 - 2016", WHITE)
        .newline();
    out.color("Location:    ", accent)
        .color("Tirana, Albania", WHITE)
        .newline()
        .newline();
    boxed(
        &mut out,
        accent,
        45,
        &["Foundation of my software engineering journey"],
        true,
    );
    out
}

pub const EMAIL: &str = "marjoballabani@gmail.com";
pub const WEBSITE: &str = "https://marjoballabani.me";
pub const GITHUB: &str = "https://github.com/marjoballabani";
pub const LINKEDIN: &str = "https://linkedin.com/in/marjo-ballabani";
pub const CV_URL: &str = "https://marjoballabani.me/cv/Marjo_Ballabani_CV.pdf";

pub fn contact(theme: ThemeName) -> RichText {
    let accent = theme.accent();
    let mut out = RichText::new();
    out.bold("Contact Information", accent).newline().newline();
    boxed(
        &mut out,
        accent,
        42,
        &["Let's connect and create something great!"],
        false,
    );
    out.newline().newline();
    for (label, value) in [
        ("Email:   ", EMAIL),
        ("Website: ", "marjoballabani.me"),
        ("Github:  ", "github.com/marjoballabani"),
        ("LinkedIn:", "linkedin.com/in/marjo-ballabani"),
    ] {
        out.color(label, accent).text(" ").color(value, WHITE).newline();
    }
    out.newline();
    boxed(
        &mut out,
        accent,
        41,
        &["Feel free to reach out for opportunities!"],
        true,
    );
    out
}

pub fn social(theme: ThemeName) -> RichText {
    let accent = theme.accent();
    let mut out = RichText::new();
    out.bold("Social", accent);
    for (label, url) in [("GitHub  ", GITHUB), ("LinkedIn", LINKEDIN), ("Website ", WEBSITE)] {
        out.newline()
            .text("• ")
            .color(label, accent)
            .text("  ")
            .color(url, SKY);
    }
    out
}

pub fn cv(theme: ThemeName) -> RichText {
    let mut out = RichText::new();
    out.bold("Resume", theme.accent())
        .newline()
        .color("Download my CV: ", WHITE)
        .color(CV_URL, SKY);
    out
}

pub fn themes(current: ThemeName) -> RichText {
    let mut out = RichText::new();
    out.color("Available themes:", CYAN);
    for theme in ThemeName::ALL {
        let marker = if theme == current { "*" } else { " " };
        out.newline()
            .text(&format!("{marker} "))
            .color("■ ", theme.accent())
            .color(theme.as_str(), WHITE);
    }
    out.newline().color("Usage: theme [name]", GRAY_66);
    out
}

pub fn calculation(expression: &str, result: &str) -> RichText {
    let mut out = RichText::new();
    out.color(expression, SKY)
        .newline()
        .color(&format!("= {result}"), MINT);
    out
}

pub fn weather(report: &WeatherReport) -> RichText {
    let mut out = RichText::new();
    out.bold(
        &format!("🌤 Weather for {}, {}", report.location, report.country),
        YELLOW,
    )
    .newline()
    .bold(&format!("{}°C", report.temperature_c), WHITE)
    .text("  ")
    .color(&report.condition, GRAY_CC)
    .newline()
    .color("Feels like: ", SKY)
    .text(&format!("{}°C", report.feels_like_c))
    .newline()
    .color("Humidity: ", SKY)
    .text(&format!("{}%", report.humidity))
    .newline()
    .color("Wind: ", SKY)
    .text(&format!("{} km/h", report.wind_kmh));
    out
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub demo: &'static str,
    pub repo: &'static str,
}

pub const PROJECTS: &[Project] = &[Project {
    title: "Interactive Terminal Resume",
    description: "A unique terminal-based resume with interactive features",
    technologies: &["JavaScript", "HTML", "CSS"],
    demo: "https://marjoballabani.me/terminal.html",
    repo: "https://github.com/marjoballabani/mon_portfolio",
}];

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [(&'static str, u8)],
}

pub const SKILL_LEVELS: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming",
        skills: &[
            ("JavaScript", 95),
            ("Python", 90),
            ("React.js", 85),
            ("Node.js", 88),
        ],
    },
    SkillCategory {
        name: "Cloud",
        skills: &[("Google Cloud", 92), ("AWS", 85), ("Azure", 80)],
    },
    SkillCategory {
        name: "Databases",
        skills: &[("MongoDB", 90), ("PostgreSQL", 85), ("Redis", 82)],
    },
];

#[cfg(test)]
#[path = "../../tests/unit/kernel/content.rs"]
mod tests;
