//! # Output Configuration
//!
//! Controls whether pacx's own messages are coloured. Manager callbacks write
//! to the terminal directly and are not affected.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pacx::output::{error_label, OutputConfig};
//!
//! let config = OutputConfig::from_env_and_flag("auto");
//! eprintln!("{} something went wrong", error_label(&config));
//! ```

use std::env;

use console::style;

/// Output configuration for controlling colors.
///
/// The two streams are decided separately, so `pacx -n ... > file` keeps
/// escape codes out of the file while errors on the terminal stay coloured.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used on stderr.
    pub use_color: bool,
    /// Whether colors should be used on stdout.
    pub stdout_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - the stream is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        match color_flag.to_lowercase().as_str() {
            "always" => Self::with_color(),
            "never" => Self::without_color(),
            _ => Self {
                use_color: Self::detect_color_support(&console::Term::stderr()),
                stdout_color: Self::detect_color_support(&console::Term::stdout()),
            },
        }
    }

    /// Detect whether `term` should get colors based on environment.
    fn detect_color_support(term: &console::Term) -> bool {
        Self::env_color_support(|| term.features().colors_supported())
    }

    /// Apply the color environment variables, falling back to `is_tty`.
    fn env_color_support(is_tty: impl FnOnce() -> bool) -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        is_tty()
    }

    /// Create a configuration with colors always enabled.
    pub fn with_color() -> Self {
        Self {
            use_color: true,
            stdout_color: true,
        }
    }

    /// Create a configuration with colors always disabled.
    pub fn without_color() -> Self {
        Self {
            use_color: false,
            stdout_color: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// The `error:` label that prefixes a failed command's message.
pub fn error_label(config: &OutputConfig) -> String {
    if config.use_color {
        style("error:").red().bold().force_styling(true).to_string()
    } else {
        "error:".to_string()
    }
}

/// Render a dry-run preview for stdout, coloring its `--` header lines.
pub fn preview(config: &OutputConfig, text: &str) -> String {
    if !config.stdout_color {
        return text.to_string();
    }

    let mut rendered = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        if line.starts_with("-- ") {
            let (body, newline) = match line.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (line, ""),
            };
            rendered.push_str(&style(body).cyan().force_styling(true).to_string());
            rendered.push_str(newline);
        } else {
            rendered.push_str(line);
        }
    }
    rendered
}
