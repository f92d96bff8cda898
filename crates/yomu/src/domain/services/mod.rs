pub mod navigator;
pub mod session;
