//! Mock rate providers for testing and examples
//!
//! Deterministic in-memory providers so tests and examples never touch
//! the network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use xlend_types::{ProviderError, ProviderResult, RateProvider, Vault};

/// Configurable mock rate provider.
///
/// Rates are fixed per vault address; vaults without one fall back to
/// the default rate, or fail the query if none is set.
#[derive(Debug, Clone, Default)]
pub struct MockRateProvider {
	rates: HashMap<Address, U256>,
	default_rate: Option<U256>,
	should_fail: bool,
	response_delay: Option<Duration>,
	calls: Arc<AtomicUsize>,
}

impl MockRateProvider {
	pub fn new() -> Self {
		Self::default()
	}

	/// Provider that fails every query.
	pub fn failing() -> Self {
		Self {
			should_fail: true,
			..Self::default()
		}
	}

	/// Fix the rate returned for `vault`.
	pub fn with_rate(mut self, vault: &Vault, rate: u64) -> Self {
		self.rates.insert(vault.address(), U256::from(rate));
		self
	}

	/// Rate returned for vaults without a fixed one.
	pub fn with_default_rate(mut self, rate: u64) -> Self {
		self.default_rate = Some(U256::from(rate));
		self
	}

	/// Delay every response, e.g. to exercise the ranking timeout.
	pub fn with_response_delay(mut self, delay: Duration) -> Self {
		self.response_delay = Some(delay);
		self
	}

	/// Number of rate queries served.
	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl RateProvider for MockRateProvider {
	async fn borrow_rate(&self, vault: &Vault) -> ProviderResult<U256> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		if let Some(delay) = self.response_delay {
			tokio::time::sleep(delay).await;
		}

		if self.should_fail {
			return Err(ProviderError::QueryFailed {
				vault: vault.address(),
				reason: "mock provider configured to fail".to_string(),
			});
		}

		self.rates
			.get(&vault.address())
			.copied()
			.or(self.default_rate)
			.ok_or_else(|| ProviderError::QueryFailed {
				vault: vault.address(),
				reason: "no rate configured".to_string(),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use xlend_types::test_utils;

	#[tokio::test]
	async fn test_fixed_rate_wins_over_default() {
		let vault = test_utils::weth_usdc_vault(0x10, xlend_types::ChainId(10));
		let provider = MockRateProvider::new()
			.with_default_rate(9)
			.with_rate(&vault, 3);

		let rate = provider.borrow_rate(&vault).await.unwrap();
		assert_eq!(rate, U256::from(3));
		assert_eq!(provider.call_count(), 1);
	}

	#[tokio::test]
	async fn test_unconfigured_vault_fails() {
		let vault = test_utils::weth_usdc_vault(0x10, xlend_types::ChainId(10));
		let provider = MockRateProvider::new();

		let err = provider.borrow_rate(&vault).await.unwrap_err();
		assert!(matches!(err, ProviderError::QueryFailed { .. }));
	}

	#[tokio::test]
	async fn test_failing_provider() {
		let vault = test_utils::weth_usdc_vault(0x10, xlend_types::ChainId(10));
		let provider = MockRateProvider::failing().with_default_rate(1);

		assert!(provider.borrow_rate(&vault).await.is_err());
	}
}
