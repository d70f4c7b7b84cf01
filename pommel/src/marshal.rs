//! Bidirectional bridge between document value graphs and property
//! sequences.
//!
//! Flattening walks a document in order and emits one property per element,
//! consulting the collection whitelist to mark repeatable positions.
//! Assembly is the inverse: it rebuilds nesting from URI segments, groups
//! collection members back into arrays, and restores attribute entries.

mod assemble;
mod flatten;

pub use assemble::assemble;
pub use flatten::flatten;

#[cfg(test)]
mod tests;
