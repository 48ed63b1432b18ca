//! Enumerated builtin command table.
//!
//! Every literal lookup key is one [`BuiltinCommand`] variant, so adding a command means adding
//! a variant and the compiler points at every `match` that must learn about it.

use system_shell_contract::ModeActivation;

use crate::{canned, stats::SystemStats};

/// Commands resolved by exact (case-insensitive) lookup of the whole input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinCommand {
    /// `help`
    Help,
    /// `matrix`
    Matrix,
    /// `hack`
    Hack,
    /// `skills`
    Skills,
    /// `skills --visual`
    SkillsVisual,
    /// `projects`
    Projects,
    /// `projects --tree`
    ProjectsTree,
    /// `system`
    System,
    /// `whoami`
    Whoami,
    /// `sudo pitch`
    SudoPitch,
    /// `contact`
    Contact,
    /// `achievements`
    Achievements,
    /// `social`
    Social,
    /// `ps aux`
    PsAux,
    /// `top`
    Top,
    /// `git status`
    GitStatus,
    /// `docker ps`
    DockerPs,
    /// `weather addis`
    WeatherAddis,
    /// `coffee`
    Coffee,
    /// `fortune`
    Fortune,
    /// `exit`
    Exit,
}

/// Session values a builtin may interpolate into its output.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Current display counters.
    pub stats: &'a SystemStats,
    /// Quote chosen for `fortune`.
    pub fortune: &'a str,
}

impl BuiltinCommand {
    /// Every builtin in help order.
    pub const ALL: [Self; 21] = [
        Self::Help,
        Self::Matrix,
        Self::Hack,
        Self::Skills,
        Self::SkillsVisual,
        Self::Projects,
        Self::ProjectsTree,
        Self::System,
        Self::Whoami,
        Self::SudoPitch,
        Self::Contact,
        Self::Achievements,
        Self::Social,
        Self::PsAux,
        Self::Top,
        Self::GitStatus,
        Self::DockerPs,
        Self::WeatherAddis,
        Self::Coffee,
        Self::Fortune,
        Self::Exit,
    ];

    /// Lowercase lookup key with single-space separators.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Matrix => "matrix",
            Self::Hack => "hack",
            Self::Skills => "skills",
            Self::SkillsVisual => "skills --visual",
            Self::Projects => "projects",
            Self::ProjectsTree => "projects --tree",
            Self::System => "system",
            Self::Whoami => "whoami",
            Self::SudoPitch => "sudo pitch",
            Self::Contact => "contact",
            Self::Achievements => "achievements",
            Self::Social => "social",
            Self::PsAux => "ps aux",
            Self::Top => "top",
            Self::GitStatus => "git status",
            Self::DockerPs => "docker ps",
            Self::WeatherAddis => "weather addis",
            Self::Coffee => "coffee",
            Self::Fortune => "fortune",
            Self::Exit => "exit",
        }
    }

    /// Resolves a normalized lookup key (see [`crate::ParsedLine::lookup_key`]).
    pub fn lookup(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.key() == key)
    }

    /// Visual mode the command asks the UI to enter.
    pub const fn mode(self) -> Option<ModeActivation> {
        match self {
            Self::Matrix => Some(ModeActivation::matrix()),
            _ => None,
        }
    }

    /// Produces the command's output block.
    pub fn render(self, context: RenderContext<'_>) -> Vec<String> {
        match self {
            Self::Help => canned::lines(canned::HELP),
            Self::Matrix => canned::lines(canned::MATRIX),
            Self::Hack => canned::lines(canned::HACK),
            Self::Skills | Self::SkillsVisual => canned::lines(canned::SKILLS),
            Self::Projects | Self::ProjectsTree => canned::lines(canned::PROJECTS),
            Self::System => canned::system(context.stats),
            Self::Whoami => canned::lines(canned::WHOAMI),
            Self::SudoPitch => canned::lines(canned::SUDO_PITCH),
            Self::Contact => canned::lines(canned::CONTACT),
            Self::Achievements => canned::lines(canned::ACHIEVEMENTS),
            Self::Social => canned::lines(canned::SOCIAL),
            Self::PsAux => canned::ps_aux(context.stats),
            Self::Top => canned::top(context.stats),
            Self::GitStatus => canned::lines(canned::GIT_STATUS),
            Self::DockerPs => canned::lines(canned::DOCKER_PS),
            Self::WeatherAddis => canned::lines(canned::WEATHER_ADDIS),
            Self::Coffee => canned::lines(canned::COFFEE),
            Self::Fortune => canned::fortune(context.fortune),
            Self::Exit => canned::lines(canned::EXIT),
        }
    }
}
