//! Simulation core for a single-screen arcade shooter: a tank defends
//! against waves of space bats, draculas and the occasional megadracula.
//!
//! Rendering and input polling live in the binary; they read
//! the state exposed by [`session::Session`] and feed it intents.

pub mod combat;
pub mod compute;
pub mod config;
pub mod entities;
pub mod geometry;
pub mod motion;
pub mod pool;
pub mod session;
pub mod spawner;
pub mod starfield;
pub mod timers;
