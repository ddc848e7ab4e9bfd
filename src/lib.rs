pub mod config;
pub mod data;
pub mod directory_state;
pub mod help_text;
pub mod ui;
pub mod utils;
