//! Task lifecycle management for Foreman.
//!
//! This module implements the observable task store and the undoable
//! command layer around it. Every mutating store operation applies its
//! change, then broadcasts exactly one event to the attached observers in
//! attachment order. User-initiated mutations are wrapped in reversible
//! commands recorded on a single-level undo history. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Store, bus, and command services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
