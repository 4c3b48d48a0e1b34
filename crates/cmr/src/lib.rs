//! Thin async client for NASA CMR collection search: given a tag produced
//! by `papertag-core`, fetch the zero-or-one best-matching dataset record.
//!
//! Deliberately minimal: no retry, backoff, or caching. The labeling
//! pipeline calls this once per distinct tag after tagging completes.

mod client;
mod error;
mod types;

pub use client::CmrClient;
pub use error::{CmrError, Result};
pub use types::DatasetRecord;
