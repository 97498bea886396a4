//! Library behind `pr-comments`, which lists the unresolved review comments
//! of the pull request for the current Git branch.
//!
//! The library reads local Git metadata with libgit2, posts one GraphQL query
//! through Octocrab, normalises the returned review threads, and renders them
//! for a terminal.

pub mod config;
pub mod github;
pub mod local;
pub mod render;

pub use config::PrCommentsConfig;
pub use github::{CommentsError, FetchSettings, ReviewComment, fetch_comments};
pub use local::Git2Metadata;
pub use render::CommentPresenter;
