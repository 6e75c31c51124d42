//! Binary Search Visualizer - Entry Point

use bsviz::config::KeyBindings;
use bsviz::model::{AppError, SearchSession};
use bsviz::parser::check_count;
use bsviz::state::AppState;
use bsviz::view::ColorConfig;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Binary Search Visualizer - step through a binary search in the terminal
#[derive(Parser, Debug)]
#[command(name = "bsviz")]
#[command(version)]
#[command(about = "Step through a binary search one iteration at a time")]
pub struct Args {
    /// Array to search; skips the input form (sorted before searching)
    #[arg(allow_negative_numbers = true, requires = "target")]
    pub values: Vec<f64>,

    /// Value to search for
    #[arg(short, long, allow_negative_numbers = true, requires = "values")]
    pub target: Option<f64>,

    /// Print every step as a JSON line instead of starting the TUI
    #[arg(long, requires = "target")]
    pub trace: bool,

    /// Largest element count the input form accepts
    #[arg(short, long)]
    pub max_elements: Option<usize>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = bsviz::config::load_config_with_precedence(args.config.clone())?;
        let merged = bsviz::config::merge_config(config_file);
        let with_env = bsviz::config::apply_env_overrides(merged);

        // Only override no_color if the flag was explicitly set
        let no_color_override = if args.no_color { Some(true) } else { None };

        bsviz::config::apply_cli_overrides(with_env, args.max_elements, no_color_override)
            .validate()?
    };
    let key_bindings = KeyBindings::from_config(&config.keybindings)?;

    bsviz::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let session = match args.target {
        Some(target) => Some(command_line_session(args.values, target, config.max_elements)?),
        None => None,
    };

    if args.trace {
        if let Some(session) = session {
            let stdout = std::io::stdout();
            bsviz::trace::run_trace(session, &mut stdout.lock())?;
        }
        return Ok(());
    }

    let app_state = match session {
        Some(session) => AppState::with_session(session, config.max_elements),
        None => AppState::new(config.max_elements),
    };

    bsviz::view::run_with_state(
        app_state,
        key_bindings,
        ColorConfig::from_env_and_args(config.no_color),
    )?;

    Ok(())
}

/// Build a session from values given on the command line, holding them to
/// the same element limit as the input form.
fn command_line_session(
    values: Vec<f64>,
    target: f64,
    max_elements: usize,
) -> Result<SearchSession, AppError> {
    check_count(values.len(), max_elements)?;
    Ok(SearchSession::new(values, target)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        // Help returns Err with DisplayHelp, which is success
        let result = Args::try_parse_from(["bsviz", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["bsviz", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["bsviz"]);
        assert!(args.values.is_empty());
        assert_eq!(args.target, None);
        assert!(!args.trace);
        assert_eq!(args.max_elements, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_values_and_target() {
        let args = Args::parse_from(["bsviz", "--target", "4", "5", "3", "1", "4", "2"]);
        assert_eq!(args.values, vec![5.0, 3.0, 1.0, 4.0, 2.0]);
        assert_eq!(args.target, Some(4.0));
    }

    #[test]
    fn test_negative_values_are_not_flags() {
        let args = Args::parse_from(["bsviz", "-t", "-2.5", "--", "-3", "-2.5", "0"]);
        assert_eq!(args.values, vec![-3.0, -2.5, 0.0]);
        assert_eq!(args.target, Some(-2.5));
    }

    #[test]
    fn test_values_require_target() {
        let result = Args::try_parse_from(["bsviz", "1", "2", "3"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_target_requires_values() {
        let result = Args::try_parse_from(["bsviz", "--target", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_trace_requires_target() {
        let result = Args::try_parse_from(["bsviz", "--trace"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_trace_flag() {
        let args = Args::parse_from(["bsviz", "--trace", "-t", "7", "10"]);
        assert!(args.trace);
        assert_eq!(args.values, vec![10.0]);
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let result = Args::try_parse_from(["bsviz", "-t", "1", "abc"]);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_max_elements_flag() {
        let args = Args::parse_from(["bsviz", "--max-elements", "50"]);
        assert_eq!(args.max_elements, Some(50));
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["bsviz", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_cli_max_elements_overrides_config_file() {
        use bsviz::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            max_elements: Some(30),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.max_elements, 30);

        let with_cli = apply_cli_overrides(merged, Some(10), None);
        assert_eq!(with_cli.max_elements, 10);
    }

    #[test]
    fn test_command_line_values_respect_max_elements() {
        use bsviz::model::InputError;

        let values: Vec<f64> = (0..10).map(f64::from).collect();
        let err = command_line_session(values, 1.0, 3).unwrap_err();

        assert!(matches!(
            err,
            AppError::Input(InputError::InvalidCount { max: 3 })
        ));
    }

    #[test]
    fn test_command_line_values_within_limit_build_session() {
        let session = command_line_session(vec![3.0, 1.0, 2.0], 2.0, 3).unwrap();
        assert_eq!(session.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_command_line_rejects_empty_values() {
        assert!(command_line_session(Vec::new(), 2.0, 3).is_err());
    }

    #[test]
    fn test_command_line_non_finite_value_reports_message() {
        let err = command_line_session(vec![1.0, f64::INFINITY], 1.0, 20).unwrap_err();
        assert!(err.to_string().contains("is not a finite number"));
    }

    #[test]
    fn test_out_of_range_max_elements_fails_validation() {
        use bsviz::config::{apply_cli_overrides, ResolvedConfig};

        let config = apply_cli_overrides(ResolvedConfig::default(), Some(0), None);
        assert!(config.validate().is_err());
    }
}
