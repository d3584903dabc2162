//! Core domain entities representing the catalog data model.
//!
//! Entities are plain data structures without persistence concerns.
//!
//! # Entity Types
//!
//! - [`Category`] - A named grouping ranked by likes
//! - [`Page`] - An external link ranked by views
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewCategory`, `NewPage` - For creating new records
//! - `PageDraft` - A validated page still waiting for its category

pub mod category;
pub mod page;

pub use category::{Category, NewCategory};
pub use page::{NewPage, Page, PageDraft};
