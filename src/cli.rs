use camino::Utf8PathBuf;
use clap::Parser;

use crate::config::Overrides;

/// Every option is optional; a bare invocation generates the default template.
#[derive(Parser, Debug)]
#[command(
    name = "flask-scaffold",
    version,
    about = "Generate a modular Flask API project skeleton"
)]
pub struct Cli {
    /// TOML file providing `base_path`, `modules` and `architecture_mode`.
    #[arg(short = 'f', long = "file")]
    pub file: Option<Utf8PathBuf>,
    /// Directory the project is generated into.
    #[arg(short = 'o', long = "base-path")]
    pub base_path: Option<Utf8PathBuf>,
    /// Module to generate stubs for. Repeat or comma-separate to add more.
    #[arg(short = 'm', long = "module", value_delimiter = ',')]
    pub modules: Vec<String>,
    /// Generate no per-module files.
    #[arg(long = "no-modules", conflicts_with = "modules")]
    pub no_modules: bool,
    /// `services` or `bridge`.
    #[arg(short = 'a', long = "mode")]
    pub mode: Option<String>,
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        let modules = if self.no_modules {
            Some(Vec::new())
        } else if self.modules.is_empty() {
            None
        } else {
            Some(self.modules.clone())
        };

        Overrides {
            base_path: self.base_path.clone(),
            modules,
            mode: self.mode.clone(),
        }
    }
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("flask-scaffold").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn bare_invocation_overrides_nothing() {
        let overrides = parse_args(&[]).overrides();
        assert!(overrides.base_path.is_none());
        assert!(overrides.modules.is_none());
        assert!(overrides.mode.is_none());
    }

    #[test]
    fn modules_accept_repeats_and_commas() {
        let cli = parse_args(&["-m", "billing,orders", "--module", "users"]);
        assert_eq!(
            cli.overrides().modules,
            Some(vec!["billing".to_owned(), "orders".to_owned(), "users".to_owned()])
        );
    }

    #[test]
    fn no_modules_forces_empty_list() {
        let cli = parse_args(&["--no-modules", "-a", "bridge"]);
        assert_eq!(cli.overrides().modules, Some(Vec::new()));
        assert_eq!(cli.overrides().mode.as_deref(), Some("bridge"));
    }

    #[test]
    fn no_modules_conflicts_with_module() {
        let result = Cli::try_parse_from(["flask-scaffold", "--no-modules", "-m", "billing"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_counts() {
        assert_eq!(parse_args(&["-vv", "-n"]).verbose, 2);
    }
}
