//! Route planning
//!
//! Expands a borrowing or repayment intent into router actions. The case
//! analysis is purely over chain equality: funds either start on the
//! vault's chain, end on it, or the route is unsupported. At most one
//! bridge hop is ever emitted, so planned bundles satisfy the nesting
//! rule by construction.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use tracing::debug;
use xlend_registry::Registry;
use xlend_types::{
	BorrowParams, ChainId, Currency, DepositParams, PaybackParams, PermitParams,
	RouterActionParams, Vault, WithdrawParams, XTransferParams, XTransferWithCallParams,
};

use crate::errors::PlanError;

/// Plans action bundles against the chains and routers in a registry.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
	registry: Arc<Registry>,
}

impl RoutePlanner {
	pub fn new(registry: Arc<Registry>) -> Self {
		Self { registry }
	}

	/// Plan "deposit collateral, borrow debt, deliver debt where asked".
	///
	/// `collateral.chain_id()` is where the user holds collateral today;
	/// `debt.chain_id()` is where the borrowed funds must end up. Three
	/// shapes are supported: everything local to the vault's chain, debt
	/// bridged out after borrowing, or collateral bridged in with the
	/// deposit and borrow executed on arrival. A route that spans three
	/// distinct chains is rejected.
	pub fn deposit_and_borrow(
		&self,
		vault: &Vault,
		collateral_amount: U256,
		collateral: &Currency,
		debt_amount: U256,
		debt: &Currency,
		owner: Address,
		deadline: U256,
	) -> Result<Vec<RouterActionParams>, PlanError> {
		let src_chain = collateral.chain_id();
		let dest_chain = debt.chain_id();
		let vault_chain = vault.chain_id();
		let router = self.router_for(vault_chain)?;

		debug!(
			vault = %vault.address(),
			%src_chain,
			%dest_chain,
			%vault_chain,
			"planning deposit and borrow"
		);

		let deposit = RouterActionParams::Deposit(DepositParams {
			vault: vault.address(),
			amount: collateral_amount,
			receiver: owner,
			sender: owner,
		});
		let permit = RouterActionParams::PermitBorrow(PermitParams {
			vault: vault.address(),
			owner,
			spender: router,
			amount: debt_amount,
			deadline,
		});
		let borrow = RouterActionParams::Borrow(BorrowParams {
			vault: vault.address(),
			amount: debt_amount,
			receiver: owner,
			owner,
		});

		if src_chain == vault_chain && dest_chain == vault_chain {
			return Ok(vec![deposit, permit, borrow]);
		}

		if src_chain == vault_chain {
			// Borrow locally, then bridge the debt to where it was asked for.
			let transfer = RouterActionParams::XTransfer(XTransferParams {
				dest_domain: self.domain_for(dest_chain)?,
				asset: bridge_asset(vault.debt())?,
				amount: debt_amount,
				receiver: owner,
			});
			return Ok(vec![deposit, permit, borrow, transfer]);
		}

		if dest_chain == vault_chain {
			// Bridge the collateral in; the router on the vault's chain
			// forwards it into the deposit when the transfer settles.
			let inner_deposit = RouterActionParams::Deposit(DepositParams {
				vault: vault.address(),
				amount: collateral_amount,
				receiver: owner,
				sender: router,
			});
			return Ok(vec![RouterActionParams::XTransferWithCall(
				XTransferWithCallParams {
					dest_domain: self.domain_for(vault_chain)?,
					asset: bridge_asset(collateral)?,
					amount: collateral_amount,
					inner_actions: vec![inner_deposit, permit, borrow],
				},
			)]);
		}

		Err(unsupported_shape(src_chain, vault_chain, dest_chain))
	}

	/// Plan "pay debt back, withdraw collateral, deliver it where asked".
	///
	/// Mirror of [`Self::deposit_and_borrow`]: `payback.chain_id()` is
	/// where the repayment funds sit, `collateral_out.chain_id()` is where
	/// the freed collateral must end up.
	pub fn payback_and_withdraw(
		&self,
		vault: &Vault,
		payback_amount: U256,
		payback: &Currency,
		withdraw_amount: U256,
		collateral_out: &Currency,
		owner: Address,
		deadline: U256,
	) -> Result<Vec<RouterActionParams>, PlanError> {
		let src_chain = payback.chain_id();
		let dest_chain = collateral_out.chain_id();
		let vault_chain = vault.chain_id();
		let router = self.router_for(vault_chain)?;

		debug!(
			vault = %vault.address(),
			%src_chain,
			%dest_chain,
			%vault_chain,
			"planning payback and withdraw"
		);

		let payback_action = RouterActionParams::Payback(PaybackParams {
			vault: vault.address(),
			amount: payback_amount,
			receiver: owner,
			sender: owner,
		});
		let permit = RouterActionParams::PermitWithdraw(PermitParams {
			vault: vault.address(),
			owner,
			spender: router,
			amount: withdraw_amount,
			deadline,
		});
		let withdraw = RouterActionParams::Withdraw(WithdrawParams {
			vault: vault.address(),
			amount: withdraw_amount,
			receiver: owner,
			owner,
		});

		if src_chain == vault_chain && dest_chain == vault_chain {
			return Ok(vec![payback_action, permit, withdraw]);
		}

		if src_chain == vault_chain {
			// Withdraw locally, then bridge the collateral out.
			let transfer = RouterActionParams::XTransfer(XTransferParams {
				dest_domain: self.domain_for(dest_chain)?,
				asset: bridge_asset(vault.collateral())?,
				amount: withdraw_amount,
				receiver: owner,
			});
			return Ok(vec![payback_action, permit, withdraw, transfer]);
		}

		if dest_chain == vault_chain {
			// Bridge the repayment in and settle the position on arrival.
			let inner_payback = RouterActionParams::Payback(PaybackParams {
				vault: vault.address(),
				amount: payback_amount,
				receiver: owner,
				sender: router,
			});
			return Ok(vec![RouterActionParams::XTransferWithCall(
				XTransferWithCallParams {
					dest_domain: self.domain_for(vault_chain)?,
					asset: bridge_asset(payback)?,
					amount: payback_amount,
					inner_actions: vec![inner_payback, permit, withdraw],
				},
			)]);
		}

		Err(unsupported_shape(src_chain, vault_chain, dest_chain))
	}

	fn router_for(&self, chain_id: ChainId) -> Result<Address, PlanError> {
		let meta = self
			.registry
			.chain(chain_id)
			.map_err(|_| PlanError::UnknownChain { chain_id })?;
		meta.router.ok_or(PlanError::MissingRouter { chain_id })
	}

	fn domain_for(&self, chain_id: ChainId) -> Result<u64, PlanError> {
		let meta = self
			.registry
			.chain(chain_id)
			.map_err(|_| PlanError::UnknownChain { chain_id })?;
		meta.bridge_domain
			.ok_or(PlanError::MissingBridgeDomain { chain_id })
	}
}

fn bridge_asset(currency: &Currency) -> Result<Address, PlanError> {
	currency.address().ok_or_else(|| PlanError::UnsupportedRoute {
		reason: format!("native {} cannot be bridged", currency.symbol()),
	})
}

fn unsupported_shape(src: ChainId, vault: ChainId, dest: ChainId) -> PlanError {
	PlanError::UnsupportedRoute {
		reason: format!(
			"neither funds nor delivery on the vault chain: funds on {src}, vault on {vault}, delivery on {dest}"
		),
	}
}
