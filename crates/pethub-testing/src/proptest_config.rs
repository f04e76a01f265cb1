//! Shared proptest configuration for consistent test behavior across crates.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pethub_testing::proptest_config;
//!
//! proptest! {
//!     #![proptest_config(proptest_config::auto_config())]
//!
//!     #[test]
//!     fn my_property(x in 0..100i32) {
//!         // ...
//!     }
//! }
//! ```
//!
//! Set the `PROPTEST_CASES` environment variable to control thoroughness:
//! fast PR checks use the CI config, nightly runs the thorough one.

use proptest::prelude::*;

/// CI-optimized config: fast tests with a small case count.
pub fn ci_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        max_shrink_iters: 100,
        ..ProptestConfig::default()
    }
}

/// Nightly config: thorough testing with many cases.
pub fn nightly_config() -> ProptestConfig {
    ProptestConfig {
        cases: 2000,
        max_shrink_iters: 5000,
        ..ProptestConfig::default()
    }
}

/// Pick a config from the `PROPTEST_CASES` environment variable, falling
/// back to the CI config when unset or unparsable.
pub fn auto_config() -> ProptestConfig {
    match std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|cases| cases.parse::<u32>().ok())
    {
        Some(cases) => ProptestConfig {
            cases,
            ..ci_config()
        },
        None => ci_config(),
    }
}
