//! Pure lattice math: grid generation, link topology, serpentine traversal.
//!
//! Everything in here is a function of the lattice dimensions alone and is
//! computed once at setup; no physics state leaks in.

pub mod lattice;
pub mod topology;
pub mod traversal;
