#![forbid(unsafe_code)]

//! Terminal capability detection.
//!
//! Decides, from environment variables alone, whether the attached terminal
//! understands ANSI escapes and how many colors it can show. Detection never
//! queries the terminal and never fails; unknown environments resolve to the
//! conservative answer.
//!
//! # Example
//!
//! ```
//! use ansikit_core::terminal_capabilities::TerminalCapabilities;
//!
//! let caps = TerminalCapabilities::detect();
//! if caps.ansi_color {
//!     // emit SGR sequences
//! }
//! ```
//!
//! Detection order for `ansi_color`:
//!
//! 1. `NO_COLOR` (any value) disables color.
//! 2. `FORCE_COLOR` set to anything but `0`/`false` enables it.
//! 3. `TERM=dumb` disables it.
//! 4. Windows console hosts advertising VT support (`WT_SESSION`,
//!    `ConEmuANSI=ON`, `ANSICON`, VS Code) or WSL enable it.
//! 5. `COLORTERM` set, or a `TERM` naming a known color-capable family,
//!    enables it.
//! 6. Known CI providers enable it; other CI runners without `TERM` do not.
//! 7. Otherwise: enabled on Unix when `TERM` is set, disabled elsewhere.

use std::env;

/// Raw environment facts consulted by detection.
///
/// Kept separate from [`TerminalCapabilities`] so detection can be tested
/// without touching the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectInputs {
    pub no_color: bool,
    pub force_color: Option<String>,
    pub term: String,
    pub term_program: String,
    pub colorterm: String,
    pub wt_session: bool,
    pub conemu_ansi: bool,
    pub ansicon: bool,
    pub vscode: bool,
    pub wsl: bool,
    pub ci: bool,
    pub ci_provider: bool,
    pub windows: bool,
}

impl DetectInputs {
    /// Snapshot the relevant variables from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let present = |key: &str| env::var_os(key).is_some();
        Self {
            no_color: present("NO_COLOR"),
            force_color: env::var("FORCE_COLOR").ok(),
            term: env::var("TERM").unwrap_or_default(),
            term_program: env::var("TERM_PROGRAM").unwrap_or_default(),
            colorterm: env::var("COLORTERM").unwrap_or_default(),
            wt_session: present("WT_SESSION"),
            conemu_ansi: env::var("ConEmuANSI").is_ok_and(|v| v.eq_ignore_ascii_case("on")),
            ansicon: present("ANSICON"),
            vscode: present("VSCODE_INJECTION"),
            wsl: present("WSL_DISTRO_NAME") || present("WSL_INTEROP"),
            ci: present("CI"),
            ci_provider: CI_PROVIDERS.iter().any(|key| present(key)),
            windows: cfg!(windows),
        }
    }
}

/// `TERM` substrings that identify color-capable terminal families.
const COLOR_TERM_FAMILIES: &[&str] = &[
    "color", "xterm", "ansi", "linux", "cygwin", "screen", "rxvt", "konsole", "gnome", "vt100",
    "vt220", "tmux", "alacritty", "kitty",
];

/// CI providers whose log viewers render SGR sequences.
const CI_PROVIDERS: &[&str] = &[
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "DRONE",
    "TRAVIS",
];

/// Terminal programs with 24-bit color and OSC 8 hyperlinks.
const MODERN_TERMINALS: &[&str] = &[
    "iTerm.app",
    "WezTerm",
    "Alacritty",
    "Ghostty",
    "kitty",
    "Hyper",
    "vscode",
];

/// What the current terminal is believed to support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// ANSI escape sequences (and basic 16 colors) are understood.
    pub ansi_color: bool,
    /// The 256-color palette is available.
    pub colors_256: bool,
    /// 24-bit RGB color is available.
    pub true_color: bool,
    /// OSC 8 hyperlinks are rendered.
    pub osc8_hyperlinks: bool,
    /// Output is going to a CI log.
    pub in_ci: bool,
}

impl TerminalCapabilities {
    /// Detect capabilities from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        let caps = Self::detect_from(&DetectInputs::from_env());
        crate::debug!(
            ansi_color = caps.ansi_color,
            colors_256 = caps.colors_256,
            true_color = caps.true_color,
            "terminal capabilities detected"
        );
        caps
    }

    /// Detect capabilities from explicit inputs.
    #[must_use]
    pub fn detect_from(env: &DetectInputs) -> Self {
        let ansi_color = ansi_supported_from(env);
        let term = env.term.as_str();
        let term_program = env.term_program.as_str();
        let colorterm = env.colorterm.to_ascii_lowercase();

        let is_modern = env.wt_session
            || env.vscode
            || MODERN_TERMINALS
                .iter()
                .any(|t| term_program.contains(t) || term.contains(&t.to_lowercase()));

        let true_color = ansi_color
            && (colorterm.contains("truecolor") || colorterm.contains("24bit") || is_modern);
        let colors_256 = ansi_color && (true_color || term.contains("256"));
        let osc8_hyperlinks = ansi_color && !env.ci && is_modern;

        Self {
            ansi_color,
            colors_256,
            true_color,
            osc8_hyperlinks,
            in_ci: env.ci,
        }
    }

    /// Capability set with everything disabled.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            ansi_color: false,
            colors_256: false,
            true_color: false,
            osc8_hyperlinks: false,
            in_ci: false,
        }
    }
}

impl Default for TerminalCapabilities {
    fn default() -> Self {
        Self::plain()
    }
}

/// Whether the current environment accepts ANSI escape sequences.
#[must_use]
pub fn ansi_supported() -> bool {
    ansi_supported_from(&DetectInputs::from_env())
}

/// Whether the given environment accepts ANSI escape sequences.
#[must_use]
pub fn ansi_supported_from(env: &DetectInputs) -> bool {
    if env.no_color {
        return false;
    }
    if let Some(force) = env.force_color.as_deref() {
        return !matches!(force.trim(), "0" | "false");
    }

    let term = env.term.to_ascii_lowercase();
    if term == "dumb" {
        return false;
    }
    if env.wt_session
        || env.conemu_ansi
        || env.ansicon
        || env.vscode
        || env.term_program == "vscode"
        || env.wsl
    {
        return true;
    }
    if !env.colorterm.is_empty() {
        return true;
    }
    if COLOR_TERM_FAMILIES.iter().any(|family| term.contains(family)) {
        return true;
    }
    if env.ci {
        return env.ci_provider;
    }
    !term.is_empty() && !env.windows
}
