//! Read-only view of the external worksheet.
//!
//! The external scraping job owns every data row; this crate only takes
//! snapshots and summarizes them. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
