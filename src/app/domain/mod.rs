//! Domain layer - core data structures and types.
//!
//! - Language and ColorScheme (the two enumerated selectors)
//! - Session (buffer + language -> HTML artifact)
//! - Application settings
//! - Message types for the event system

pub mod color_scheme;
pub mod language;
pub mod messages;
pub mod session;
pub mod settings;

pub use color_scheme::ColorScheme;
pub use language::Language;
pub use messages::Message;
pub use session::{ConvertOutcome, Session};
pub use settings::{AppSettings, ThemeMode};
