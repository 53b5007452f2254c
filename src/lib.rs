//! xlend SDK
//!
//! Cross-chain borrowing SDK: vault discovery and ranking, route
//! planning, and router calldata encoding. [`Sdk`] wires the layers
//! together; each member crate also stands on its own.

use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Address, Bytes, U256};
use tracing::info;

// Core domain types - the most commonly used types
pub use xlend_types::{
	// Action model
	BorrowParams,
	// Core types
	ChainId,
	Currency,
	DepositParams,
	NativeCurrency,
	NestingError,
	PaybackParams,
	PermitParams,
	PermitSignature,
	// Provider abstraction
	ProviderError,
	ProviderResult,
	RateProvider,
	RouterAction,
	RouterActionParams,
	Token,
	TransactionRequest,
	Vault,
	// Error types
	VaultError,
	WithdrawParams,
	XTransferParams,
	XTransferWithCallParams,
};

// Registry layer
pub use xlend_registry::{
	CatalogDoc, ChainEntry, ChainMeta, Registry, RegistryBuilder, RegistryError, TokenEntry,
	VaultEntry,
};

// Providers
pub use xlend_providers::RpcRateProvider;

// Planning layer
pub use xlend_planner::{
	find_permit, needs_signature, PlanError, RankError, RankedVault, RoutePlanner, VaultRanker,
	DEFAULT_RATE_TIMEOUT_MS,
};

// Encoding layer
pub use xlend_encoder::{encode_bundle, EncodeError, ROUTER_ENTRY_SELECTOR};

// Module aliases for qualified access
pub mod types {
	pub use xlend_types::*;
}

pub mod registry {
	pub use xlend_registry::*;
}

pub mod providers {
	pub use xlend_providers::*;
}

pub mod planner {
	pub use xlend_planner::*;
}

pub mod encoder {
	pub use xlend_encoder::*;
}

pub mod mocks;

// Re-export external dependencies for examples
pub use alloy;
pub use async_trait;

/// Errors surfaced by the [`Sdk`] facade.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
	#[error(transparent)]
	Rank(#[from] RankError),

	#[error(transparent)]
	Plan(#[from] PlanError),

	#[error(transparent)]
	Encode(#[from] EncodeError),
}

/// One entry point over the registry, ranker, planner and encoder.
///
/// Cheap to clone; clones share the registry and rate provider.
#[derive(Debug, Clone)]
pub struct Sdk {
	registry: Arc<Registry>,
	ranker: VaultRanker,
	planner: RoutePlanner,
}

impl Sdk {
	/// Sdk over the bundled catalog and the on-chain rate provider.
	pub fn new() -> Self {
		SdkBuilder::new().build()
	}

	pub fn builder() -> SdkBuilder {
		SdkBuilder::new()
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	/// Vaults serving the collateral/debt pair, best first.
	///
	/// Candidates come from the registry; ranking queries each one's live
	/// borrow rate. An empty result means no vault serves the pair.
	pub async fn borrowing_vaults_for(
		&self,
		collateral: &Currency,
		debt: &Currency,
	) -> Result<Vec<RankedVault>, SdkError> {
		let candidates = self.registry.vaults_for_pair(collateral, debt);
		let ranked = self
			.ranker
			.rank(candidates, collateral.chain_id(), debt.chain_id())
			.await?;
		Ok(ranked)
	}

	/// Plan "deposit collateral, borrow debt" against `vault`.
	pub fn preview_deposit_and_borrow(
		&self,
		vault: &Vault,
		collateral_amount: U256,
		collateral: &Currency,
		debt_amount: U256,
		debt: &Currency,
		owner: Address,
		deadline: U256,
	) -> Result<Vec<RouterActionParams>, SdkError> {
		Ok(self.planner.deposit_and_borrow(
			vault,
			collateral_amount,
			collateral,
			debt_amount,
			debt,
			owner,
			deadline,
		)?)
	}

	/// Plan "pay debt back, withdraw collateral" against `vault`.
	pub fn preview_payback_and_withdraw(
		&self,
		vault: &Vault,
		payback_amount: U256,
		payback: &Currency,
		withdraw_amount: U256,
		collateral_out: &Currency,
		owner: Address,
		deadline: U256,
	) -> Result<Vec<RouterActionParams>, SdkError> {
		Ok(self.planner.payback_and_withdraw(
			vault,
			payback_amount,
			payback,
			withdraw_amount,
			collateral_out,
			owner,
			deadline,
		)?)
	}

	/// Whether the bundle needs a permit signature before encoding.
	pub fn needs_signature(&self, actions: &[RouterActionParams]) -> Result<bool, SdkError> {
		Ok(xlend_planner::needs_signature(actions)?)
	}

	/// The permit a signature must cover, if the bundle has one.
	pub fn find_permit<'a>(&self, actions: &'a [RouterActionParams]) -> Option<&'a PermitParams> {
		xlend_planner::find_permit(actions)
	}

	/// Router calldata for the bundle.
	pub fn encode_calldata(
		&self,
		actions: &[RouterActionParams],
		signature: Option<&PermitSignature>,
	) -> Result<Bytes, SdkError> {
		Ok(encode_bundle(actions, signature)?)
	}

	/// Unsigned transaction submitting the bundle to the router deployed
	/// on `origin_chain`.
	pub fn transaction_request(
		&self,
		actions: &[RouterActionParams],
		origin_chain: ChainId,
		sender: Address,
		signature: Option<&PermitSignature>,
	) -> Result<TransactionRequest, SdkError> {
		let meta = self.registry.chain(origin_chain).map_err(|_| {
			PlanError::UnknownChain {
				chain_id: origin_chain,
			}
		})?;
		let router = meta.router.ok_or(PlanError::MissingRouter {
			chain_id: origin_chain,
		})?;
		let data = encode_bundle(actions, signature)?;
		Ok(TransactionRequest::new(origin_chain, sender, router, data))
	}
}

impl Default for Sdk {
	fn default() -> Self {
		Self::new()
	}
}

/// Builder pattern for configuring the SDK
#[derive(Debug, Default)]
pub struct SdkBuilder {
	registry: Option<Arc<Registry>>,
	provider: Option<Arc<dyn RateProvider>>,
	rate_timeout: Option<Duration>,
}

impl SdkBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the bundled catalog with a custom registry.
	pub fn with_registry(mut self, registry: Registry) -> Self {
		self.registry = Some(Arc::new(registry));
		self
	}

	/// Replace the on-chain rate provider, e.g. with a mock in tests.
	pub fn with_rate_provider(mut self, provider: Arc<dyn RateProvider>) -> Self {
		self.provider = Some(provider);
		self
	}

	/// Bound for each per-vault rate query.
	pub fn with_rate_timeout(mut self, timeout: Duration) -> Self {
		self.rate_timeout = Some(timeout);
		self
	}

	pub fn build(self) -> Sdk {
		let registry = self
			.registry
			.unwrap_or_else(|| Arc::new(Registry::bundled()));
		let provider = self
			.provider
			.unwrap_or_else(|| Arc::new(RpcRateProvider::new(Arc::clone(&registry))));

		let mut ranker = VaultRanker::new(provider);
		if let Some(timeout) = self.rate_timeout {
			ranker = ranker.with_timeout(timeout);
		}

		info!(
			chains = registry.chains().count(),
			vaults = registry.vaults().len(),
			"sdk initialized"
		);

		Sdk {
			planner: RoutePlanner::new(Arc::clone(&registry)),
			ranker,
			registry,
		}
	}
}
