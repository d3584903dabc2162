//! Helper functions shared across layers.
//!
//! - [`slug`] - Category name <-> URL slug conversion
//! - [`url_normalizer`] - Normalization of submitted page URLs

pub mod slug;
pub mod url_normalizer;
