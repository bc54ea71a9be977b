//! Domain logic for the Eva configuration console.
//!
//! This crate holds everything the console engines compute or validate
//! without touching storage or presentation: closed enumerations for the
//! optimization sections and decision lifecycle, bid-delta arithmetic,
//! free-text filter matching, pagination math, and field validation for
//! rules and store-wide bidding settings. It has no internal dependencies
//! so the store and console crates can both build on it.

pub mod decision;
pub mod error;
pub mod filter;
pub mod onboarding;
pub mod paging;
pub mod rules;
pub mod section;
pub mod settings;
pub mod types;
