//! Router action model
//!
//! Actions are the unit of work the on-chain router executes. A bundle is
//! an ordered list of actions; cross-chain bundles nest a destination
//! bundle inside a bridge transfer action.

pub mod params;

use thiserror::Error;

pub use params::{
	BorrowParams, DepositParams, PaybackParams, PermitParams, RouterActionParams, WithdrawParams,
	XTransferParams, XTransferWithCallParams,
};

/// Action kinds understood by the router, in wire order.
///
/// The discriminants are part of the on-chain ABI and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RouterAction {
	Deposit = 0,
	Withdraw = 1,
	Borrow = 2,
	Payback = 3,
	Flashloan = 4,
	Swap = 5,
	PermitWithdraw = 6,
	PermitBorrow = 7,
	XTransfer = 8,
	XTransferWithCall = 9,
}

impl RouterAction {
	/// Value encoded into the router's `uint8[]` actions array.
	pub fn wire_value(self) -> u8 {
		self as u8
	}
}

/// Bundles may nest at most one bridge hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bridge transfer nesting exceeds one level")]
pub struct NestingError;

/// Checks that no `XTransferWithCall` appears inside another one's inner
/// bundle. The router executes a single destination bundle per hop, so
/// deeper nesting can never be settled.
pub fn validate_nesting(actions: &[RouterActionParams]) -> Result<(), NestingError> {
	for action in actions {
		if let RouterActionParams::XTransferWithCall(inner) = action {
			for nested in &inner.inner_actions {
				if matches!(nested, RouterActionParams::XTransferWithCall(_)) {
					return Err(NestingError);
				}
			}
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use alloy::primitives::{Address, U256};

	use super::*;

	fn transfer_with_call(inner: Vec<RouterActionParams>) -> RouterActionParams {
		RouterActionParams::XTransferWithCall(XTransferWithCallParams {
			dest_domain: 1,
			asset: Address::repeat_byte(0x01),
			amount: U256::from(1u64),
			inner_actions: inner,
		})
	}

	#[test]
	fn test_wire_values_are_stable() {
		assert_eq!(RouterAction::Deposit.wire_value(), 0);
		assert_eq!(RouterAction::Withdraw.wire_value(), 1);
		assert_eq!(RouterAction::Borrow.wire_value(), 2);
		assert_eq!(RouterAction::Payback.wire_value(), 3);
		assert_eq!(RouterAction::Flashloan.wire_value(), 4);
		assert_eq!(RouterAction::Swap.wire_value(), 5);
		assert_eq!(RouterAction::PermitWithdraw.wire_value(), 6);
		assert_eq!(RouterAction::PermitBorrow.wire_value(), 7);
		assert_eq!(RouterAction::XTransfer.wire_value(), 8);
		assert_eq!(RouterAction::XTransferWithCall.wire_value(), 9);
	}

	#[test]
	fn test_single_hop_passes() {
		let actions = vec![transfer_with_call(vec![])];
		assert!(validate_nesting(&actions).is_ok());
	}

	#[test]
	fn test_double_hop_is_rejected() {
		let actions = vec![transfer_with_call(vec![transfer_with_call(vec![])])];
		assert_eq!(validate_nesting(&actions), Err(NestingError));
	}
}
