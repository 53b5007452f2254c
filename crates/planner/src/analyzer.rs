//! Signature requirement analysis

use xlend_types::{validate_nesting, PermitParams, RouterActionParams};

use crate::errors::PlanError;

/// Whether the bundle carries a permit action, at the top level or inside
/// a bridge transfer's inner bundle.
///
/// The nesting rule is checked first: a malformed bundle is an error, not
/// a `false`.
pub fn needs_signature(actions: &[RouterActionParams]) -> Result<bool, PlanError> {
	validate_nesting(actions)?;
	Ok(find_permit(actions).is_some())
}

/// First permit in the bundle, scanning depth-first so a nested permit is
/// found at the position the destination executor will reach it.
pub fn find_permit(actions: &[RouterActionParams]) -> Option<&PermitParams> {
	for action in actions {
		if let Some(permit) = action.as_permit() {
			return Some(permit);
		}
		if let RouterActionParams::XTransferWithCall(transfer) = action {
			if let Some(permit) = transfer.inner_actions.iter().find_map(|a| a.as_permit()) {
				return Some(permit);
			}
		}
	}
	None
}
