//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Drawing and timing are reached through the [`Canvas`] and [`TickTimer`] traits.

pub mod action;
pub mod board;
pub mod config;
pub mod controller;
pub mod food;
pub mod snake;

// Re-export commonly used types
pub use action::{Command, Direction, Velocity};
pub use board::{Board, Position};
pub use config::GameConfig;
pub use controller::{Canvas, GameController, Marker, Phase, TextSlot, TickTimer};
pub use food::Food;
pub use snake::{CollisionType, Snake, StepResult};
