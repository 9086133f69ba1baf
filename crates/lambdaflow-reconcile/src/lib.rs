//! lambdaflow resource reconciliation engine
//!
//! Converges declared desired state for Lambda GPU cloud resources
//! (instances, SSH keys) against their actual remote state through
//! idempotent create/read/update/delete/import operations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │             orchestrating host                   │
//! │     (dependency graph, scheduling, persistence)  │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │            lambdaflow-reconcile                  │
//! │  ┌──────────────┐   ┌──────────────────────┐    │
//! │  │  Reconciler  │──▶│ ResourceController    │    │
//! │  │   (façade)   │   │ (instances, ssh keys) │    │
//! │  └──────────────┘   └──────┬───────┬───────┘    │
//! │            ┌───────────────┘       │            │
//! │     ┌──────▼──────┐        ┌───────▼───────┐    │
//! │     │  classifier │        │    matcher    │    │
//! │     └─────────────┘        └───────────────┘    │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │              lambdaflow-api                      │
//! │       (HTTP transport, wire types, auth)         │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! The engine performs no retries, holds no locks and keeps no state
//! between invocations; the host persists whatever record an operation
//! returns and serializes operations per handle.

pub mod classify;
pub mod controller;
pub mod error;
pub mod instance;
pub mod matcher;
pub mod reconciler;
pub mod ssh_key;
pub mod value;

// Re-exports
pub use classify::{classify, is_not_found};
pub use controller::{DeleteOutcome, ReadOutcome, ResourceController, ResourceHandle};
pub use error::{Error, Result};
pub use instance::{DesiredInstance, InstanceController, ObservedInstance};
pub use matcher::{RemoteIdentity, find_by_id};
pub use reconciler::Reconciler;
pub use ssh_key::{DesiredSshKey, ObservedSshKey, SshKeyController};
pub use value::Value;
