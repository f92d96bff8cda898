pub mod chapter;
pub mod settings;
