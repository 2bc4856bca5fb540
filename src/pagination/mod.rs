//! Natural pagination
//!
//! Posts are paginated from the newest end so that page numbers stay
//! attached to the same posts as new entries are published. Page 1 always
//! holds the newest posts, and the oldest page absorbs the remainder.

mod chunk;
mod page;

pub use chunk::chunk_with_early_overflow;
pub use page::{paginate_naturally, NaturalPage, PageProps, PageRoute, PaginateOptions};

use indexmap::IndexMap;
use thiserror::Error;

/// Default number of items per page
pub const PAGE_SIZE: usize = 7;

/// Route parameters, keyed by the bracketed token name
pub type Params = IndexMap<String, String>;

/// Errors raised while paginating
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginateError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
