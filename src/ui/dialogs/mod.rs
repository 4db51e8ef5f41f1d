pub mod about;

pub use about::show_about_dialog;
