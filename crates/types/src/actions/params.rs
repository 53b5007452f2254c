//! Per-action parameter structs
//!
//! Each variant mirrors the tuple the router decodes for that action.
//! Field order here matches wire order so the encoder can stay mechanical.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::RouterAction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositParams {
	pub vault: Address,
	pub amount: U256,
	pub receiver: Address,
	pub sender: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawParams {
	pub vault: Address,
	pub amount: U256,
	pub receiver: Address,
	pub owner: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowParams {
	pub vault: Address,
	pub amount: U256,
	pub receiver: Address,
	pub owner: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaybackParams {
	pub vault: Address,
	pub amount: U256,
	pub receiver: Address,
	pub sender: Address,
}

/// Shared by `PermitWithdraw` and `PermitBorrow`. The signature itself is
/// injected at encode time, not carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitParams {
	pub vault: Address,
	pub owner: Address,
	pub spender: Address,
	pub amount: U256,
	pub deadline: U256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XTransferParams {
	pub dest_domain: u64,
	pub asset: Address,
	pub amount: U256,
	pub receiver: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XTransferWithCallParams {
	pub dest_domain: u64,
	pub asset: Address,
	pub amount: U256,
	pub inner_actions: Vec<RouterActionParams>,
}

/// An action paired with its parameters, ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RouterActionParams {
	Deposit(DepositParams),
	Withdraw(WithdrawParams),
	Borrow(BorrowParams),
	Payback(PaybackParams),
	PermitWithdraw(PermitParams),
	PermitBorrow(PermitParams),
	XTransfer(XTransferParams),
	XTransferWithCall(XTransferWithCallParams),
}

impl RouterActionParams {
	pub fn action(&self) -> RouterAction {
		match self {
			Self::Deposit(_) => RouterAction::Deposit,
			Self::Withdraw(_) => RouterAction::Withdraw,
			Self::Borrow(_) => RouterAction::Borrow,
			Self::Payback(_) => RouterAction::Payback,
			Self::PermitWithdraw(_) => RouterAction::PermitWithdraw,
			Self::PermitBorrow(_) => RouterAction::PermitBorrow,
			Self::XTransfer(_) => RouterAction::XTransfer,
			Self::XTransferWithCall(_) => RouterAction::XTransferWithCall,
		}
	}

	pub fn is_permit(&self) -> bool {
		matches!(self, Self::PermitWithdraw(_) | Self::PermitBorrow(_))
	}

	pub fn as_permit(&self) -> Option<&PermitParams> {
		match self {
			Self::PermitWithdraw(p) | Self::PermitBorrow(p) => Some(p),
			_ => None,
		}
	}
}
