//! Search request evaluation.
//!
//! # Responsibility
//! - Define the multi-criteria filter request shape.
//! - Keep predicate evaluation in one place, out of storage code.
//!
//! # Invariants
//! - Dimensions combine with AND; values within one dimension with OR.
//! - An absent or empty dimension imposes no constraint.

pub mod filter;
