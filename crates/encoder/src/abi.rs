//! Router ABI and bundle encoding
//!
//! The router exposes a single entry point taking a parallel pair of
//! action tags and per-action argument blobs. Each blob is the plain
//! params-tuple encoding of that action's argument struct, the layout the
//! contract recovers with `abi.decode`. A bridge transfer with call
//! carries a nested bundle, encoded with this same scheme minus the
//! selector, as its payload.

use alloy::primitives::{Bytes, U256};
use alloy::sol;
use alloy::sol_types::{SolCall, SolValue};
use xlend_types::{validate_nesting, PermitSignature, RouterActionParams};

use crate::errors::EncodeError;

sol! {
	/// Entry point executed by the router contract.
	function xBundle(uint8[] actions, bytes[] args) external;

	/// Arguments decoded for a deposit action.
	struct DepositArgs {
		address vault;
		uint256 amount;
		address receiver;
		address sender;
	}

	/// Arguments decoded for a withdraw action.
	struct WithdrawArgs {
		address vault;
		uint256 amount;
		address receiver;
		address owner;
	}

	/// Arguments decoded for a borrow action.
	struct BorrowArgs {
		address vault;
		uint256 amount;
		address receiver;
		address owner;
	}

	/// Arguments decoded for a payback action.
	struct PaybackArgs {
		address vault;
		uint256 amount;
		address receiver;
		address sender;
	}

	/// Arguments decoded for both permit kinds.
	struct PermitArgs {
		address vault;
		address owner;
		address spender;
		uint256 amount;
		uint256 deadline;
		uint8 v;
		bytes32 r;
		bytes32 s;
	}

	/// Arguments decoded for a plain bridge transfer.
	struct XTransferArgs {
		uint256 destDomain;
		address asset;
		uint256 amount;
		address receiver;
	}

	/// Arguments decoded for a bridge transfer carrying destination calldata.
	struct XTransferWithCallArgs {
		uint256 destDomain;
		address asset;
		uint256 amount;
		bytes callData;
	}
}

/// Four-byte selector of the router entry point.
pub const ROUTER_ENTRY_SELECTOR: [u8; 4] = xBundleCall::SELECTOR;

/// Encode a bundle into router calldata, injecting `signature` into the
/// first permit action encountered.
///
/// Fails when a permit is present without a signature, when a signature
/// is supplied but no permit consumes it, or when the bundle violates the
/// one-level nesting rule. Pure over its inputs: identical bundles and
/// signatures always encode to identical bytes.
pub fn encode_bundle(
	actions: &[RouterActionParams],
	signature: Option<&PermitSignature>,
) -> Result<Bytes, EncodeError> {
	validate_nesting(actions)?;

	let mut pending = signature.copied();
	let call = bundle_call(actions, &mut pending)?;
	if pending.is_some() {
		return Err(EncodeError::UnexpectedSignature);
	}
	Ok(call.abi_encode().into())
}

fn bundle_call(
	actions: &[RouterActionParams],
	pending: &mut Option<PermitSignature>,
) -> Result<xBundleCall, EncodeError> {
	let mut tags = Vec::with_capacity(actions.len());
	let mut args = Vec::with_capacity(actions.len());
	for action in actions {
		tags.push(action.action().wire_value());
		args.push(encode_action_args(action, pending)?);
	}
	Ok(xBundleCall {
		actions: tags,
		args,
	})
}

fn encode_action_args(
	action: &RouterActionParams,
	pending: &mut Option<PermitSignature>,
) -> Result<Bytes, EncodeError> {
	let encoded = match action {
		RouterActionParams::Deposit(p) => DepositArgs {
			vault: p.vault,
			amount: p.amount,
			receiver: p.receiver,
			sender: p.sender,
		}
		.abi_encode_params(),
		RouterActionParams::Withdraw(p) => WithdrawArgs {
			vault: p.vault,
			amount: p.amount,
			receiver: p.receiver,
			owner: p.owner,
		}
		.abi_encode_params(),
		RouterActionParams::Borrow(p) => BorrowArgs {
			vault: p.vault,
			amount: p.amount,
			receiver: p.receiver,
			owner: p.owner,
		}
		.abi_encode_params(),
		RouterActionParams::Payback(p) => PaybackArgs {
			vault: p.vault,
			amount: p.amount,
			receiver: p.receiver,
			sender: p.sender,
		}
		.abi_encode_params(),
		RouterActionParams::PermitWithdraw(p) | RouterActionParams::PermitBorrow(p) => {
			let sig = pending.take().ok_or(EncodeError::MissingSignature)?;
			PermitArgs {
				vault: p.vault,
				owner: p.owner,
				spender: p.spender,
				amount: p.amount,
				deadline: p.deadline,
				v: sig.v,
				r: sig.r,
				s: sig.s,
			}
			.abi_encode_params()
		},
		RouterActionParams::XTransfer(p) => XTransferArgs {
			destDomain: U256::from(p.dest_domain),
			asset: p.asset,
			amount: p.amount,
			receiver: p.receiver,
		}
		.abi_encode_params(),
		RouterActionParams::XTransferWithCall(p) => {
			// The destination executor decodes this payload as another
			// (actions, args) pair, so encode the inner bundle without a
			// selector.
			let inner = bundle_call(&p.inner_actions, pending)?;
			let mut call_data = Vec::with_capacity(inner.abi_encoded_size());
			inner.abi_encode_raw(&mut call_data);
			XTransferWithCallArgs {
				destDomain: U256::from(p.dest_domain),
				asset: p.asset,
				amount: p.amount,
				callData: call_data.into(),
			}
			.abi_encode_params()
		},
	};
	Ok(encoded.into())
}
