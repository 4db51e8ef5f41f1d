//! Infrastructure layer - external integrations.
//!
//! - Error type shared across the app
//! - Leak-free FLTK text buffer access
//! - Platform probes (system dark mode)

pub mod buffer;
pub mod error;
pub mod platform;

pub use buffer::read_buffer_text;
pub use error::{AppError, Result};
pub use platform::detect_system_dark_mode;
