//! Palisade engine library.
//!
//! Exposes the board representation, move generation, move application,
//! protocol serialization, agents, and the hotseat controller for use by
//! integration tests and the binary entry point.

pub mod agents;
pub mod board;
pub mod hotseat;
pub mod movegen;
pub mod protocol;
pub mod resolve;
