//! Pagination module
//!
//! Turns a single list request into a lazy sequence of items.
//!
//! # Overview
//!
//! List operations return one page of results plus, when more exist, an
//! opaque continuation token. A [`TokenPaginator`] starts with no token,
//! sends the base request, and on every further pull re-sends the base body
//! with the last token merged in, until the server stops returning one.
//! Nothing is fetched until the first pull, and each paginator owns its own
//! continuation state, so creating a new one restarts from the first page.

mod paginator;
mod types;

pub use paginator::{ItemStream, PageStream, TokenPaginator};

#[cfg(test)]
mod tests;
