//! JSON-RPC borrow rate provider

use std::sync::Arc;

use alloy::primitives::U256;
use alloy::providers::ProviderBuilder;
use alloy::sol;
use async_trait::async_trait;
use tracing::debug;
use xlend_registry::Registry;
use xlend_types::{ProviderError, ProviderResult, RateProvider, Vault};

sol! {
	#[allow(missing_docs)]
	#[sol(rpc)]
	contract IBorrowingVault {
		function borrowRate() external view returns (uint256);
	}
}

/// Reads borrow rates from vault contracts over each chain's JSON-RPC
/// endpoint, resolved through the registry.
///
/// Transports are built per query. The ranking layer already bounds call
/// volume per request, so there is nothing to pool.
#[derive(Debug, Clone)]
pub struct RpcRateProvider {
	registry: Arc<Registry>,
}

impl RpcRateProvider {
	pub fn new(registry: Arc<Registry>) -> Self {
		Self { registry }
	}

	fn endpoint(&self, vault: &Vault) -> ProviderResult<String> {
		let chain_id = vault.chain_id();
		let meta = self
			.registry
			.chain(chain_id)
			.map_err(|_| ProviderError::MissingEndpoint { chain_id })?;
		meta.rpc_url
			.clone()
			.ok_or(ProviderError::MissingEndpoint { chain_id })
	}
}

#[async_trait]
impl RateProvider for RpcRateProvider {
	async fn borrow_rate(&self, vault: &Vault) -> ProviderResult<U256> {
		let url = self.endpoint(vault)?;
		let transport_url = url
			.parse()
			.map_err(|err| ProviderError::Rpc(format!("invalid rpc url {url}: {err}")))?;

		let provider = ProviderBuilder::new().connect_http(transport_url);
		let contract = IBorrowingVault::new(vault.address(), &provider);
		let rate = contract
			.borrowRate()
			.call()
			.await
			.map_err(|err| ProviderError::QueryFailed {
				vault: vault.address(),
				reason: err.to_string(),
			})?;

		debug!(
			vault = %vault.address(),
			chain = %vault.chain_id(),
			%rate,
			"fetched borrow rate"
		);
		Ok(rate)
	}
}
