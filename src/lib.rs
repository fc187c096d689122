//! Sheetwatch: spreadsheet-driven control surface for an external scraping
//! workflow.
//!
//! This crate lets an operator trigger the external batch job that refreshes
//! an Instagram-metrics worksheet, watch the worksheet for evidence that the
//! job completed, and inspect its processing state. Host-facing surfaces
//! (status cells, dialogs, the edit-trigger mechanism) sit behind ports so
//! the core stays testable and headless.
//!
//! # Architecture
//!
//! Sheetwatch follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP APIs, files, logs)
//!
//! # Modules
//!
//! - [`config`]: JSON configuration loading
//! - [`dispatch`]: External workflow dispatch
//! - [`sheet`]: Read-only worksheet snapshots and summarization
//! - [`watch`]: Bounded status-polling loop
//! - [`refresh`]: Cycle orchestration and the auto-refresh toggle

pub mod config;
pub mod dispatch;
pub mod refresh;
pub mod sheet;
pub mod watch;
