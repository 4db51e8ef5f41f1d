//! CodeTint - paste source code, pick a language, get a self-contained
//! syntax-highlighted HTML document you can copy, save, or preview.

pub mod app;
pub mod ui;
