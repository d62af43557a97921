// src/lib.rs
//! Console front-end for the turn-based combat engine.

pub mod config;
pub mod console;
pub mod game;
pub mod profile;

pub use config::GameConfig;
pub use console::TextConsole;
pub use game::Game;
pub use profile::Profile;
