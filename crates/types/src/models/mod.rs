//! Shared domain models

pub mod chain;
pub mod currency;
pub mod signature;
pub mod transaction;
pub mod vault;

pub use chain::ChainId;
pub use currency::{Currency, NativeCurrency, Token};
pub use signature::PermitSignature;
pub use transaction::TransactionRequest;
pub use vault::{Vault, VaultError};
