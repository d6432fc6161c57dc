pub mod config;
pub mod logging;

pub mod document;
pub mod error;
pub mod filename;
pub mod generate;
pub mod identifier;
pub mod render;
pub mod sprite;
