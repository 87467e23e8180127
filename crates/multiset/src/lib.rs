//! Terminal front end for the multiset analysis menu
//!
//! Renders the analysis menu with ratatui and drives the navigation core
//! from `multiset_core`. Runs natively in a terminal (`native` feature) or in
//! a browser through ratzilla (`web` feature).

pub mod app;
pub mod components;
pub mod data;
pub mod event;
pub mod keybindings;
pub mod logging;
pub mod screens;
pub mod state;
pub mod surface;
pub mod util;

#[cfg(feature = "web")]
pub mod web;

pub use app::App;
#[cfg(feature = "native")]
pub use logging::init_logging;
#[cfg(feature = "web")]
pub use logging::init_logging_web;
