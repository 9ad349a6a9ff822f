pub mod analyzers;
pub mod config;
pub mod error;
pub mod gradebook;
pub mod loader;
pub mod menu;
pub mod model;
pub mod output;
pub mod render;
