//! xlend Planner
//!
//! Turns a borrowing intent into the ordered action bundle the router
//! executes. [`VaultRanker`] orders candidate vaults by live borrow rate;
//! [`RoutePlanner`] expands deposit/borrow and payback/withdraw intents
//! into router actions, bridging when the user's funds and the vault live
//! on different chains.

pub mod analyzer;
pub mod errors;
pub mod ranker;
pub mod routes;

pub use analyzer::{find_permit, needs_signature};
pub use errors::{PlanError, RankError};
pub use ranker::{RankedVault, VaultRanker, DEFAULT_RATE_TIMEOUT_MS};
pub use routes::RoutePlanner;
