//! `vk-spatial` — fixed-radius neighbor queries on a periodic domain.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`index`]   | `NeighborIndex` trait, `BruteForceIndex` (all-pairs)        |
//! | [`grid`]    | `GridIndex` (CSR bucket grid with wraparound)               |
//!
//! Both indices answer the same question: which points lie within wrapped
//! distance `< r` of `p`. They must agree exactly.  `GridIndex` is what the
//! engine uses; `BruteForceIndex` is the O(N) per-query reference.

pub mod grid;
pub mod index;

#[cfg(test)]
mod tests;

pub use grid::GridIndex;
pub use index::{BruteForceIndex, NeighborIndex};
