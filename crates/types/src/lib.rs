//! xlend Types
//!
//! Shared models and traits for the xlend cross-chain borrowing SDK.
//! This crate contains the domain models organized by business entity.

pub mod actions;
pub mod models;
pub mod providers;
pub mod test_utils;

// Re-export alloy for convenience
pub use alloy;

// Re-export commonly used types for convenience
pub use actions::{
	validate_nesting, BorrowParams, DepositParams, NestingError, PaybackParams, PermitParams,
	RouterAction, RouterActionParams, WithdrawParams, XTransferParams, XTransferWithCallParams,
};

pub use models::{
	ChainId, Currency, NativeCurrency, PermitSignature, Token, TransactionRequest, Vault,
	VaultError,
};

pub use providers::{ProviderError, ProviderResult, RateProvider};
