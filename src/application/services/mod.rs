//! Business logic services for the application layer.

pub mod catalog_service;

pub use catalog_service::{
    CatalogService, CategoryDetail, CategoryListing, CategoryLookup, HOME_LISTING_LIMIT,
    HomeListing, PageCreation,
};
