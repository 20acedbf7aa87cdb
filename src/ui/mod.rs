//! egui user interface: application shell, dock layout, menus and the command palette.

pub mod action;
pub mod app;
pub mod command_palette;
pub mod dock_space;
pub mod menu_bar;
pub mod panels;
pub mod shortcuts;
pub mod theme;

pub use action::{AppAction, PanelKind};
pub use app::Application;
pub use command_palette::{Command, CommandPalette, PaletteKey};
pub use dock_space::{DockSlot, DockSpace, DockViewer};
pub use menu_bar::{MenuBar, MenuState};
