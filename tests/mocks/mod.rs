//! Centralized fixtures for the end-to-end tests
//!
//! Shared testnet entities so the e2e files stay focused on behavior.

pub mod entities;
