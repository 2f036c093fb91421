#![warn(clippy::all, rust_2018_idioms)]

//! egui front end of the admin user table.

pub mod app;
pub mod state;
pub mod widgets;

pub use app::AdminApp;
