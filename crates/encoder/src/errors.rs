//! Encoder errors

use thiserror::Error;
use xlend_types::NestingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
	#[error("bundle requires a permit signature but none was supplied")]
	MissingSignature,

	#[error("a permit signature was supplied but the bundle has no permit action")]
	UnexpectedSignature,

	#[error(transparent)]
	InvalidNesting(#[from] NestingError),
}
