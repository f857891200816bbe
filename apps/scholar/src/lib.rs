//! # Scholar - Grade Analyzer Library Surface
//!
//! Exposes the interactive menu loop so integration tests can drive it
//! with in-memory readers and writers.

pub mod menu;
