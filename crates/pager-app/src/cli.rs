//! Command line interface.

use clap::Parser;

/// Interactive tester for pager theme directories.
///
/// Loads a theme, renders its screens as a textual draw listing, and
/// walks the menu graph from keyboard input.
#[derive(Parser, Debug)]
#[command(name = "pager-theme-test", version, about)]
pub struct Cli {
    /// Path to the theme directory (must contain theme.json).
    #[arg(long)]
    pub theme: String,

    /// Screen key to start on. Defaults to the first screen in key
    /// order.
    #[arg(long)]
    pub screen: Option<String>,

    /// Log at info level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Log at debug level. Implies --verbose.
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Default log filter derived from the verbosity flags. `RUST_LOG`
    /// still overrides it.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_is_required() {
        assert!(Cli::try_parse_from(["pager-theme-test"]).is_err());
    }

    #[test]
    fn parses_theme_and_screen() {
        let cli = Cli::try_parse_from([
            "pager-theme-test",
            "--theme",
            "themes/red",
            "--screen",
            "dashboard_path",
        ])
        .unwrap();
        assert_eq!(cli.theme, "themes/red");
        assert_eq!(cli.screen.as_deref(), Some("dashboard_path"));
        assert!(!cli.verbose);
        assert!(!cli.debug);
    }

    #[test]
    fn verbosity_flags_pick_the_filter() {
        let quiet = Cli::try_parse_from(["x", "--theme", "t"]).unwrap();
        assert_eq!(quiet.log_filter(), "warn");
        let verbose = Cli::try_parse_from(["x", "--theme", "t", "-v"]).unwrap();
        assert_eq!(verbose.log_filter(), "info");
        let debug = Cli::try_parse_from(["x", "--theme", "t", "-d"]).unwrap();
        assert_eq!(debug.log_filter(), "debug");
    }
}
