//! Core pipeline for hhfuzz: wordlist preparation, mode planning, probe
//! invocation and result consolidation.
//!
//! The cli crate sequences these stages; nothing here holds process-wide
//! state, every stage takes the run [`Config`](hhfuzz_common::config::Config)
//! by reference.

pub mod consolidate;
pub mod plan;
pub mod probe;
pub mod wordlist;
