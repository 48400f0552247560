//! # Router Module
//!
//! Builds the immutable route table from controller registrations and
//! matches request paths against it.
//!
//! Path templates are compiled once into literal/variable segment sequences.
//! Matching is a linear scan in registration order: a candidate must have
//! the same segment count, literal segments compare exactly
//! (case-sensitive) and variable segments capture whatever request segment
//! they face. The first entry that matches wins - ties are broken by
//! registration order, not by specificity.

mod core;
#[cfg(test)]
mod tests;

pub use core::{ParamVec, RouteEntry, RouteMatch, RouteTable, Segment, MAX_INLINE_PARAMS};
