//! Rate provider abstraction

pub mod errors;
pub mod traits;

pub use errors::{ProviderError, ProviderResult};
pub use traits::RateProvider;
