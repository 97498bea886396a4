//! `pr-comments` entrypoint: prints unresolved review comments for the
//! pull request of the current branch.

use std::env;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use pr_comments::{
    CommentPresenter, CommentsError, Git2Metadata, PrCommentsConfig, fetch_comments,
};

mod cli;

use cli::Invocation;

#[tokio::main]
async fn main() -> ExitCode {
    cli::init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(?error, "pr-comments failed");
            drop(writeln!(io::stderr().lock(), "Error: {error}"));
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CommentsError> {
    let options = match cli::parse_invocation(env::args_os())? {
        Invocation::Help(text) => return cli::write_help(&text),
        Invocation::Run(options) => options,
    };
    let directory = cli::resolve_directory(options.dir)?;

    cli::load_dotenv();
    let settings = PrCommentsConfig::load_layers()?.fetch_settings();

    let comments = fetch_comments(&directory, &Git2Metadata, &settings).await?;

    presenter().write_stdout(&comments)
}

fn presenter() -> CommentPresenter {
    if io::stdout().is_terminal() {
        CommentPresenter::highlighted()
    } else {
        CommentPresenter::plain()
    }
}
