//! Configuration validation
//!
//! Every configuration section implements [`Validate`]; `Config::validate`
//! runs them all and wraps the first failure in `SpotsError::Config`.
//! Validators live next to the section they check:
//!
//! - `storage_validators`: database URL scheme, pool size and timeout
//! - `import_validators`: batch size, timeout, delimiter and bind-parameter limits
//! - `geocoding_validators`: geocoding endpoint and logging level

mod geocoding_validators;
mod import_validators;
mod storage_validators;

/// A configuration section that can check its own values
pub trait Validate {
    /// Describe the first invalid value, if any
    fn validate(&self) -> Result<(), String>;
}
