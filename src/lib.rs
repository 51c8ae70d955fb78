//! Grid Snake - a single-player snake game on a fixed square board
//!
//! This library provides:
//! - Core game logic and the round state machine (game module)
//! - A retained scene and ratatui rendering (render module)
//! - Keyboard and mouse mapping (input module)
//! - The terminal runtime (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
