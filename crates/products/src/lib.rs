//! Products domain module.
//!
//! This crate contains business rules for the product catalog, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::{
    DESCRIPTION_MAX_LENGTH, MAX_PRICE, MAX_PRICE_CHANGE_PERCENT, MINIMUM_LISTING_PRICE,
    NAME_MAX_LENGTH, PRICE_SCALE, Product, ProductId,
};
