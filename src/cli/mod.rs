//! Command-line parsing and start-up helpers for the `pr-comments` binary.
//!
//! Parsing uses clap, but clap's own error output is replaced so that every
//! failure is reported through [`CommentsError`] with the same `Error:`
//! prefix and exit code.

use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::{self, PathBuf};

use clap::Parser;
use clap::error::{ContextKind, ErrorKind};
use pr_comments::CommentsError;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_FILTER_VAR: &str = "PR_COMMENTS_LOG";

/// Octocrab logs every non-success response itself; the CLI reports those
/// failures once through `Error:`.
const DEFAULT_LOG_FILTER: &str = "warn,octocrab=off";

/// Prints the unresolved review comments of the pull request whose head
/// branch matches the current Git branch.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "pr-comments")]
pub struct Cli {
    /// Directory of the Git repository to inspect (defaults to the current
    /// directory).
    #[arg(short = 'd', long = "dir", value_name = "PATH")]
    pub dir: Option<PathBuf>,
}

/// Outcome of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `--help` was requested; carries the rendered usage text.
    Help(String),
    /// Normal run with the parsed options.
    Run(Cli),
}

/// Parses the command line without letting clap exit the process.
///
/// # Errors
///
/// Returns [`CommentsError::UnknownOption`] for unrecognised flags and
/// [`CommentsError::InvalidArgument`] for any other parse failure.
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, CommentsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Run(cli)),
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp => Ok(Invocation::Help(error.to_string())),
            ErrorKind::UnknownArgument => Err(CommentsError::UnknownOption {
                option: error
                    .get(ContextKind::InvalidArg)
                    .map_or_else(|| first_line(&error.to_string()), |arg| arg.to_string()),
            }),
            _ => Err(CommentsError::InvalidArgument {
                message: first_line(&error.to_string()),
            }),
        },
    }
}

fn first_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_owned()
}

/// Resolves `--dir` to an absolute path, defaulting to the current directory.
///
/// # Errors
///
/// Returns [`CommentsError::DirectoryNotFound`] when the path does not exist
/// and [`CommentsError::Io`] when the current directory cannot be read.
pub fn resolve_directory(dir: Option<PathBuf>) -> Result<PathBuf, CommentsError> {
    let requested = dir.unwrap_or_else(|| PathBuf::from("."));
    let absolute = path::absolute(&requested).map_err(|error| CommentsError::Io {
        message: format!("failed to resolve {}: {error}", requested.display()),
    })?;

    if absolute.exists() {
        Ok(absolute)
    } else {
        Err(CommentsError::DirectoryNotFound {
            path: absolute.display().to_string(),
        })
    }
}

/// Writes the rendered help text to stdout.
///
/// # Errors
///
/// Returns [`CommentsError::Io`] when stdout cannot be written.
pub fn write_help(text: &str) -> Result<(), CommentsError> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{text}").map_err(|error| CommentsError::Io {
        message: error.to_string(),
    })
}

/// Installs a stderr tracing subscriber filtered by `PR_COMMENTS_LOG`.
///
/// Installing twice is harmless; the second attempt is ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ignored = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}

/// Loads a `.env` file from the current directory or its parents, if any.
pub fn load_dotenv() {
    if let Err(error) = dotenv::dotenv() {
        tracing::debug!("no .env file loaded: {error}");
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::{Cli, Invocation, first_line, parse_invocation, resolve_directory};
    use pr_comments::CommentsError;

    #[rstest]
    #[case::no_args(&["pr-comments"], None)]
    #[case::short_dir(&["pr-comments", "-d", "repo"], Some("repo"))]
    #[case::long_dir(&["pr-comments", "--dir", "/tmp/repo"], Some("/tmp/repo"))]
    #[case::equals_dir(&["pr-comments", "--dir=nested/repo"], Some("nested/repo"))]
    fn parses_directory_option(#[case] args: &[&str], #[case] expected: Option<&str>) {
        let invocation = parse_invocation(args).expect("arguments should parse");

        assert_eq!(
            invocation,
            Invocation::Run(Cli {
                dir: expected.map(PathBuf::from),
            })
        );
    }

    #[rstest]
    #[case::long("--help")]
    #[case::short("-h")]
    fn help_is_returned_as_text(#[case] flag: &str) {
        let invocation = parse_invocation(["pr-comments", flag]).expect("help should not fail");

        let Invocation::Help(text) = invocation else {
            panic!("expected help, got {invocation:?}");
        };
        assert!(text.contains("Usage: pr-comments"), "unexpected help: {text}");
        assert!(text.contains("--dir <PATH>"), "help should list --dir: {text}");
    }

    #[rstest]
    fn unknown_flag_names_the_option() {
        let result = parse_invocation(["pr-comments", "--verbose"]);

        assert_eq!(
            result,
            Err(CommentsError::UnknownOption {
                option: "--verbose".to_owned(),
            })
        );
    }

    #[rstest]
    fn missing_dir_value_is_an_invalid_argument() {
        let result = parse_invocation(["pr-comments", "--dir"]);

        assert!(
            matches!(result, Err(CommentsError::InvalidArgument { .. })),
            "expected InvalidArgument, got {result:?}"
        );
    }

    #[rstest]
    fn first_line_strips_clap_prefix() {
        assert_eq!(
            first_line("error: a value is required\n\nUsage: pr-comments"),
            "a value is required"
        );
    }

    #[rstest]
    fn existing_directory_resolves_to_absolute_path() {
        let temp_dir = TempDir::new().expect("temp dir should be created");

        let resolved =
            resolve_directory(Some(temp_dir.path().to_path_buf())).expect("directory exists");

        assert!(resolved.is_absolute());
        assert_eq!(resolved, temp_dir.path());
    }

    #[rstest]
    fn missing_directory_is_reported_with_absolute_path() {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let missing = temp_dir.path().join("does-not-exist");

        let result = resolve_directory(Some(missing.clone()));

        assert_eq!(
            result,
            Err(CommentsError::DirectoryNotFound {
                path: missing.display().to_string(),
            })
        );
    }

    #[rstest]
    fn default_directory_is_current_directory() {
        let resolved = resolve_directory(None).expect("current directory exists");

        assert!(resolved.is_absolute());
    }
}
