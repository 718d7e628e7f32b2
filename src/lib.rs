pub mod app;
pub mod attempt;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod navigation;
pub mod route;
pub mod scoring;
pub mod ui;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::QuizApp;
