//! Common test utilities for surf-spots
//!
//! - In-memory SQLite database support
//! - Spot entry factories and CSV fixtures
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{TestDatabase, SpotFactory};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::new().await;
//!     let entries = SpotFactory::batch(3);
//!     // ...
//! }
//! ```

pub mod database;

pub use database::TestDatabase;
pub use fixtures::{SpotFactory, write_csv};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}
