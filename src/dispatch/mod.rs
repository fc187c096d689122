//! External workflow dispatch.
//!
//! Starts the external scraping job through a single outbound
//! `workflow_dispatch` call, with the "no credential configured" case kept
//! distinct from an actual dispatch. The module follows hexagonal
//! architecture:
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
