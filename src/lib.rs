//! Dockable desktop application shell built on egui.
//!
//! The binary owns the window through eframe; everything else lives here so
//! it can be exercised headlessly.

pub mod cli;
pub mod core;
pub mod settings;
pub mod ui;
