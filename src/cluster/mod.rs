//! Simulated Cluster Module
//!
//! Assigns documents to in-process "servers" before the map phase.
//!
//! ## Core Concepts
//! - **Round robin**: `split_documents` deals documents evenly, in order, and
//!   tags each one with its 1-based server number.
//!
//! A partition is only a sub-list. Nothing here spawns threads or talks to a network.

pub mod partitioner;
