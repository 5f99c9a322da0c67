//! Business logic services.
//!
//! The evaluator service holds the approval decision procedure. It is pure
//! and stateless; embedding applications can call it from any number of
//! concurrent call sites.

pub mod evaluator;

pub use evaluator::evaluate;
