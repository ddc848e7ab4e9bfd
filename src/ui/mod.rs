//! User interface layer
//!
//! The interactive directory screen and its rendering helpers.

pub mod directory_tui;
pub mod table_render_context;
pub mod table_renderer;
pub mod viewport_manager;
