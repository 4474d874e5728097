//! Repository implementations.
//!
//! - `local`: in-memory store filled once from the analytics document
pub mod local;

pub use local::LocalRepository;
