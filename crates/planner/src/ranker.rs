//! Vault ranking by live borrow rate

use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::U256;
use futures::future::try_join_all;
use tokio::time::timeout;
use tracing::debug;
use xlend_types::{ChainId, RateProvider, Vault};

use crate::errors::RankError;

/// Default per-vault rate query timeout.
pub const DEFAULT_RATE_TIMEOUT_MS: u64 = 5_000;

/// A vault paired with the borrow rate it was ranked under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedVault {
	pub vault: Vault,
	pub rate: U256,
}

/// Orders candidate vaults by their live borrow rate.
#[derive(Debug, Clone)]
pub struct VaultRanker {
	provider: Arc<dyn RateProvider>,
	rate_timeout: Duration,
}

impl VaultRanker {
	pub fn new(provider: Arc<dyn RateProvider>) -> Self {
		Self {
			provider,
			rate_timeout: Duration::from_millis(DEFAULT_RATE_TIMEOUT_MS),
		}
	}

	pub fn with_timeout(mut self, rate_timeout: Duration) -> Self {
		self.rate_timeout = rate_timeout;
		self
	}

	/// Rank `vaults` ascending by borrow rate, cheapest first.
	///
	/// Rates are fetched concurrently and each query runs under the
	/// configured timeout; one failed or timed-out query fails the whole
	/// ranking. When collateral and debt live on the same chain, vaults on
	/// that chain are moved ahead of cross-chain candidates regardless of
	/// rate. Both sorts are stable, so equal-rate vaults keep their input
	/// order. An empty candidate list yields an empty ranking.
	pub async fn rank(
		&self,
		vaults: Vec<Vault>,
		collateral_chain: ChainId,
		debt_chain: ChainId,
	) -> Result<Vec<RankedVault>, RankError> {
		if vaults.is_empty() {
			return Ok(Vec::new());
		}

		debug!(count = vaults.len(), "querying borrow rates");
		let queries = vaults.iter().map(|vault| async move {
			match timeout(self.rate_timeout, self.provider.borrow_rate(vault)).await {
				Ok(Ok(rate)) => Ok(rate),
				Ok(Err(source)) => Err(RankError::RateQuery {
					vault: vault.address(),
					source,
				}),
				Err(_) => Err(RankError::RateQueryTimeout {
					vault: vault.address(),
				}),
			}
		});
		let rates = try_join_all(queries).await?;

		let mut ranked: Vec<RankedVault> = vaults
			.into_iter()
			.zip(rates)
			.map(|(vault, rate)| RankedVault { vault, rate })
			.collect();

		ranked.sort_by(|a, b| a.rate.cmp(&b.rate));
		if collateral_chain == debt_chain {
			// Same-chain positions avoid the bridge entirely, so prefer a
			// local vault even over a cheaper remote one.
			ranked.sort_by_key(|r| r.vault.chain_id() != collateral_chain);
		}

		Ok(ranked)
	}

	/// Cheapest vault under [`Self::rank`]'s ordering, if any.
	pub async fn best(
		&self,
		vaults: Vec<Vault>,
		collateral_chain: ChainId,
		debt_chain: ChainId,
	) -> Result<Option<RankedVault>, RankError> {
		Ok(self
			.rank(vaults, collateral_chain, debt_chain)
			.await?
			.into_iter()
			.next())
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use alloy::primitives::Address;
	use async_trait::async_trait;
	use xlend_types::test_utils::weth_usdc_vault;
	use xlend_types::{ProviderError, ProviderResult};

	use super::*;

	/// Returns a fixed rate per vault address.
	#[derive(Debug, Default)]
	struct FixedRateProvider {
		rates: HashMap<Address, u64>,
	}

	impl FixedRateProvider {
		fn with_rate(mut self, vault: &Vault, rate: u64) -> Self {
			self.rates.insert(vault.address(), rate);
			self
		}
	}

	#[async_trait]
	impl RateProvider for FixedRateProvider {
		async fn borrow_rate(&self, vault: &Vault) -> ProviderResult<U256> {
			match self.rates.get(&vault.address()) {
				Some(rate) => Ok(U256::from(*rate)),
				None => Err(ProviderError::QueryFailed {
					vault: vault.address(),
					reason: "no fixture rate".to_string(),
				}),
			}
		}
	}

	/// Never answers; used to exercise the timeout path.
	#[derive(Debug)]
	struct StalledProvider;

	#[async_trait]
	impl RateProvider for StalledProvider {
		async fn borrow_rate(&self, _vault: &Vault) -> ProviderResult<U256> {
			futures::future::pending().await
		}
	}

	#[tokio::test]
	async fn test_cheapest_vault_ranks_first() {
		let a = weth_usdc_vault(0x0A, ChainId::GOERLI);
		let b = weth_usdc_vault(0x0B, ChainId::GOERLI);
		let c = weth_usdc_vault(0x0C, ChainId::OPTIMISM_GOERLI);
		let provider = FixedRateProvider::default()
			.with_rate(&a, 3)
			.with_rate(&b, 2)
			.with_rate(&c, 1);
		let ranker = VaultRanker::new(Arc::new(provider));

		let ranked = ranker
			.rank(
				vec![a, b, c.clone()],
				ChainId::GOERLI,
				ChainId::OPTIMISM_GOERLI,
			)
			.await
			.unwrap();

		assert_eq!(ranked[0].vault, c);
		assert_eq!(ranked[0].rate, U256::from(1u64));
		assert_eq!(ranked.len(), 3);
	}

	#[tokio::test]
	async fn test_same_chain_pair_prefers_local_vault() {
		let local = weth_usdc_vault(0x0A, ChainId::OPTIMISM_GOERLI);
		let remote_cheap = weth_usdc_vault(0x0B, ChainId::GOERLI);
		let provider = FixedRateProvider::default()
			.with_rate(&local, 9)
			.with_rate(&remote_cheap, 1);
		let ranker = VaultRanker::new(Arc::new(provider));

		// Collateral and debt both sit on Optimism Goerli, so the local
		// vault wins despite the worse rate.
		let ranked = ranker
			.rank(
				vec![local.clone(), remote_cheap.clone()],
				ChainId::OPTIMISM_GOERLI,
				ChainId::OPTIMISM_GOERLI,
			)
			.await
			.unwrap();

		assert_eq!(ranked[0].vault, local);
		assert_eq!(ranked[1].vault, remote_cheap);
	}

	#[tokio::test]
	async fn test_empty_candidates_rank_empty() {
		let ranker = VaultRanker::new(Arc::new(FixedRateProvider::default()));
		let ranked = ranker
			.rank(Vec::new(), ChainId::GOERLI, ChainId::GOERLI)
			.await
			.unwrap();
		assert!(ranked.is_empty());
	}

	#[tokio::test]
	async fn test_one_failing_query_fails_the_ranking() {
		let a = weth_usdc_vault(0x0A, ChainId::GOERLI);
		let b = weth_usdc_vault(0x0B, ChainId::GOERLI);
		let provider = FixedRateProvider::default().with_rate(&a, 1);
		let ranker = VaultRanker::new(Arc::new(provider));

		let err = ranker
			.rank(vec![a, b.clone()], ChainId::GOERLI, ChainId::GOERLI)
			.await
			.unwrap_err();
		match err {
			RankError::RateQuery { vault, .. } => assert_eq!(vault, b.address()),
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[tokio::test]
	async fn test_stalled_provider_times_out() {
		let vault = weth_usdc_vault(0x0A, ChainId::GOERLI);
		let ranker = VaultRanker::new(Arc::new(StalledProvider))
			.with_timeout(Duration::from_millis(20));

		let err = ranker
			.rank(vec![vault.clone()], ChainId::GOERLI, ChainId::GOERLI)
			.await
			.unwrap_err();
		assert!(matches!(
			err,
			RankError::RateQueryTimeout { vault: v } if v == vault.address()
		));
	}

	#[tokio::test]
	async fn test_best_returns_none_without_candidates() {
		let ranker = VaultRanker::new(Arc::new(FixedRateProvider::default()));
		let best = ranker
			.best(Vec::new(), ChainId::GOERLI, ChainId::GOERLI)
			.await
			.unwrap();
		assert!(best.is_none());
	}
}
