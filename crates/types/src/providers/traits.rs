//! Trait implemented by borrow rate sources

use alloy::primitives::U256;
use async_trait::async_trait;

use crate::models::Vault;
use super::errors::ProviderResult;

/// Source of live borrow rates for vaults.
///
/// Implementations are queried concurrently across many vaults, so they
/// must be `Send + Sync` and tolerate overlapping calls.
#[async_trait]
pub trait RateProvider: Send + Sync + std::fmt::Debug {
	/// Current borrow rate of `vault`, in the vault's native scale.
	///
	/// Rates are opaque to callers beyond ordering: a lower value means a
	/// cheaper loan.
	async fn borrow_rate(&self, vault: &Vault) -> ProviderResult<U256>;
}
