//! Library entry for LTA Switcher exposing the runtime and core logic for integration tests.

pub mod app;
pub mod args;
pub mod backend;
pub mod events;
pub mod logic;
pub mod media;
pub mod state;
pub mod theme;
pub mod ui;
