//! Domain layer - Pure site ranking logic.
//!
//! Nothing in here performs I/O. The AHP engine, the scoring engine and the
//! submission record are plain data and functions; ports and adapters
//! connect them to files and stores.

pub mod ahp;
pub mod foundation;
pub mod scoring;
pub mod submission;
