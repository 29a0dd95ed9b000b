//! Error types for the gametag core library
//!
//! Errors are grouped by the collaborator that produced them. Only provider
//! errors are absorbed by an enrichment pass.

use thiserror::Error;

pub mod provider;
pub mod store;
pub mod validation;

pub use self::provider::ProviderError;
pub use self::store::StoreError;
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the gametag core library
///
/// - Provider errors: a single remote tag lookup failed
/// - Store errors: the metadata store is unavailable
/// - Validation errors: configuration or input rejected up front
#[derive(Error, Debug)]
pub enum Error {
    /// Remote tag provider errors
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Metadata store errors
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
