//! Animated particle network backdrop: a pseudo-3D node simulation with proximity links,
//! pointer repulsion, click reproduction and ripple feedback, hosted in an eframe window.

pub mod app;
pub mod config;
pub mod network;
pub mod render;
pub mod scheduler;

pub use app::NeuralBackdropApp;
pub use config::BackdropConfig;
