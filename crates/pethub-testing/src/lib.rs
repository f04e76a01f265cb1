//! Test utilities for Pethub
//!
//! This crate provides fixtures and mocks for testing Pethub components.
//!
//! # Fixtures
//!
//! - [`fixtures::fido`] / [`fixtures::whiskers`] - the canonical scenario pets
//! - [`fixtures::sample_pet`] - a pet with the given name and category
//!
//! # Mocks
//!
//! - [`FailingCatalogStore`] - a catalog repository whose every operation
//!   fails, for exercising error paths
//! - [`FailingCounterStore`] - the counter equivalent
//!
//! # Property testing
//!
//! - [`proptest_config`] - shared proptest configurations so all crates run
//!   with consistent case counts

pub mod fixtures;
pub mod proptest_config;

mod mocks;

pub use mocks::{FailingCatalogStore, FailingCounterStore};
