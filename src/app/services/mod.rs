//! Services layer - business operations.

pub mod render;

pub use render::HtmlRenderer;
