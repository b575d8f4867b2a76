//! shiplog git - commit history access for changelog generation
//!
//! This crate wraps `git2` to walk history newest-first and to resolve
//! tag names or free-form dates into points in time.

mod commits;
mod dateref;
mod repository;
mod tags;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use commits::CommitWalk;
pub use dateref::parse_date;
pub use repository::{GitRepo, Result};
pub use types::CommitInfo;
