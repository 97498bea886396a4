//! Terminal rendering of review comments.
//!
//! Each comment is printed as a numbered block: author, local creation time,
//! file and line context, optional highlighted diff hunk, and the body
//! between two horizontal rules.

pub mod code_highlight;

use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};

use crate::github::{CommentsError, ReviewComment};

use self::code_highlight::CodeHighlighter;

/// Printed instead of a listing when no unresolved comments exist.
pub const NO_COMMENTS_NOTICE: &str = "No comments found for the current branch's PR.";

const LISTING_HEADER: &str = "PR Comments:";
const RULE_WIDTH: usize = 50;
const RULE_CHAR: char = '\u{2500}';
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a timestamp in the local time zone, as shown in the listing.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format(DATE_FORMAT)
        .to_string()
}

/// Writes review comments, optionally with syntax-highlighted context.
#[derive(Debug, Default)]
pub struct CommentPresenter {
    highlighter: Option<CodeHighlighter>,
}

impl CommentPresenter {
    /// Creates a presenter that prints diff hunks without colour.
    #[must_use]
    pub const fn plain() -> Self {
        Self { highlighter: None }
    }

    /// Creates a presenter that highlights diff hunks with ANSI colours.
    #[must_use]
    pub fn highlighted() -> Self {
        Self {
            highlighter: Some(CodeHighlighter::new()),
        }
    }

    /// Writes all comments to stdout.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsError::Io`] when stdout cannot be written.
    pub fn write_stdout(&self, comments: &[ReviewComment]) -> Result<(), CommentsError> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout, comments)
    }

    /// Writes all comments to `writer`, or the no-comments notice when the
    /// list is empty.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsError::Io`] when the writer fails.
    pub fn write_to<W: Write>(
        &self,
        writer: &mut W,
        comments: &[ReviewComment],
    ) -> Result<(), CommentsError> {
        if comments.is_empty() {
            return writeln!(writer, "{NO_COMMENTS_NOTICE}").map_err(|e| io_error(&e));
        }

        writeln!(writer, "\n{LISTING_HEADER}\n").map_err(|e| io_error(&e))?;
        for (index, comment) in comments.iter().enumerate() {
            self.write_comment(writer, index.saturating_add(1), comment)
                .map_err(|e| io_error(&e))?;
        }
        Ok(())
    }

    fn write_comment<W: Write>(
        &self,
        writer: &mut W,
        number: usize,
        comment: &ReviewComment,
    ) -> io::Result<()> {
        writeln!(writer, "Comment #{number}")?;
        writeln!(writer, "Author: {}", comment.author_login)?;
        writeln!(writer, "Date: {}", format_timestamp(&comment.created_at))?;

        if let Some(path) = comment.path.as_deref() {
            writeln!(writer, "File: {path}")?;
            if let Some(location) = line_label(comment) {
                writeln!(writer, "{location}")?;
            }
            if let Some(hunk) = comment.diff_hunk.as_deref() {
                writeln!(writer, "Context:")?;
                writeln!(writer, "{}", self.render_hunk(hunk, path))?;
            }
        }

        let rule = horizontal_rule();
        writeln!(writer, "{rule}")?;
        writeln!(writer, "{}", comment.body)?;
        writeln!(writer, "{rule}")?;
        writeln!(writer)
    }

    fn render_hunk(&self, hunk: &str, path: &str) -> String {
        self.highlighter.as_ref().map_or_else(
            || hunk.to_owned(),
            |highlighter| highlighter.highlight_or_plain(hunk, path),
        )
    }
}

/// `Lines: a-b` for multi-line comments, `Line: n` otherwise.
fn line_label(comment: &ReviewComment) -> Option<String> {
    match (comment.start_line, comment.end_line, comment.line) {
        (Some(start), Some(end), _) => Some(format!("Lines: {start}-{end}")),
        (_, _, Some(line)) => Some(format!("Line: {line}")),
        _ => None,
    }
}

fn horizontal_rule() -> String {
    std::iter::repeat_n(RULE_CHAR, RULE_WIDTH).collect()
}

/// Converts an I/O error to a [`CommentsError::Io`].
pub(crate) fn io_error(error: &io::Error) -> CommentsError {
    CommentsError::Io {
        message: error.to_string(),
    }
}
