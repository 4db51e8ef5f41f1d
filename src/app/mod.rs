//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - core data structures (Language, ColorScheme, Session, Settings, Messages)
//! - `services/` - the HTML renderer built around syntect
//! - `infrastructure/` - error type, FLTK buffer access, platform probes
//! - `state.rs` - main application coordinator

pub mod domain;
pub mod file_filters;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::color_scheme::ColorScheme;
pub use domain::language::Language;
pub use domain::messages::Message;
pub use domain::session::{ConvertOutcome, Session};
pub use domain::settings::{AppSettings, ThemeMode};
pub use infrastructure::error::{AppError, Result};
pub use services::render::HtmlRenderer;
