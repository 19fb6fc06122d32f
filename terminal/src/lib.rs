pub mod app;
pub mod clock;
pub mod render;
pub mod session;
pub mod views;
