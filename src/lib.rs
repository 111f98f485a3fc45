//! Site Ranker - Multi-criteria site selection
//!
//! This crate ranks candidate sites by how close they are to the things a
//! user cares about. Preferences come either as pairwise judgments, turned
//! into weights with the Analytic Hierarchy Process, or as direct weights.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
