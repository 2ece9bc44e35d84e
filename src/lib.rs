//! Headless simulation core for the swarm-dodge arcade game.
//!
//! The binary adds terminal I/O on top; everything here is pure and
//! drivable from integration tests with a seeded RNG.

pub mod compute;
pub mod entities;
