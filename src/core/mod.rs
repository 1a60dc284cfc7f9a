//! Core chain-level types
//!
//! This module contains the fundamental building blocks:
//! - Network identity (main vs. test chain)

pub mod network;

pub use network::Network;
