//! Domain-specific error types for pipeline-registry
//!
//! # Error Categories
//!
//! - **ReconcileError**: registry reconciliation passes (persistence failures)
//!
//! Schema migrations keep sea-orm's `DbErr` so they plug into the migrator
//! unchanged; `ReconcileError` converts into `DbErr` at that seam.

pub mod reconcile;

pub use reconcile::ReconcileError;

/// Result type alias for reconciliation passes
pub type ReconcileResult<T> = Result<T, ReconcileError>;
