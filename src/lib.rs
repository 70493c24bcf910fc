//! Foreman: an in-memory project task tracker.
//!
//! This crate provides the core functionality for tracking tasks through
//! their lifecycle: observable store mutations, undoable commands,
//! pluggable filters, report generation, and an approval policy.
//!
//! # Architecture
//!
//! Foreman follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (console, log facade)
//!
//! # Modules
//!
//! - [`task`]: Task entity, observable store, and undoable command layer
//! - [`filter`]: Predicate-based task subset selection
//! - [`report`]: Template-method report generation
//! - [`approval`]: Priority-threshold approval policy

pub mod approval;
pub mod filter;
pub mod report;
pub mod task;
