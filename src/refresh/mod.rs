//! Refresh orchestration.
//!
//! Ties the dispatch and watch phases into one operator-visible cycle,
//! maintains the persisted auto-refresh toggle and its edit observer, and
//! renders every status transition through injected presentation ports. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
