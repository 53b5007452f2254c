//! Planner errors

use alloy::primitives::Address;
use thiserror::Error;
use xlend_types::{ChainId, NestingError, ProviderError};

/// Errors raised while ranking vaults by live rate.
#[derive(Debug, Error)]
pub enum RankError {
	#[error("rate query failed for vault {vault}")]
	RateQuery {
		vault: Address,
		#[source]
		source: ProviderError,
	},

	#[error("rate query timed out for vault {vault}")]
	RateQueryTimeout { vault: Address },
}

/// Errors raised while planning a route.
#[derive(Debug, Error)]
pub enum PlanError {
	#[error("unsupported route: {reason}")]
	UnsupportedRoute { reason: String },

	#[error("unknown chain {chain_id}")]
	UnknownChain { chain_id: ChainId },

	#[error("no router deployed on chain {chain_id}")]
	MissingRouter { chain_id: ChainId },

	#[error("chain {chain_id} has no bridge domain")]
	MissingBridgeDomain { chain_id: ChainId },

	#[error(transparent)]
	InvalidNesting(#[from] NestingError),
}
