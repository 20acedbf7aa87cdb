//! Main menu bar.

use egui::{Button, Context, TopBottomPanel, Ui};

use crate::ui::action::{AppAction, PanelKind};
use crate::ui::shortcuts;

/// Visibility flags the View menu edits in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub show_demo: bool,
    pub show_settings: bool,
    pub show_performance: bool,
    pub show_simulation: bool,
}

/// File / View / Help menu bar pinned to the top of the window
#[derive(Debug, Default)]
pub struct MenuBar;

impl MenuBar {
    pub fn new() -> Self {
        Self
    }

    /// Draw the bar. Checkbox items toggle `state` directly; everything else
    /// is returned as actions.
    pub fn render(&mut self, ctx: &Context, state: &mut MenuState) -> Vec<AppAction> {
        let mut actions = Vec::new();

        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| Self::file_menu(ui, &mut actions));
                ui.menu_button("View", |ui| Self::view_menu(ui, state));
                ui.menu_button("Help", |ui| Self::help_menu(ui, &mut actions));
            });
        });

        actions
    }

    fn file_menu(ui: &mut Ui, actions: &mut Vec<AppAction>) {
        let items = [
            ("New", shortcuts::NEW, AppAction::NewDocument),
            ("Open", shortcuts::OPEN, AppAction::OpenDocument),
            ("Save", shortcuts::SAVE, AppAction::SaveDocument),
        ];
        for (label, shortcut, action) in items {
            if item(ui, label, &shortcuts::label(&shortcut)) {
                actions.push(action);
            }
        }
        ui.separator();
        if item(ui, "Exit", &shortcuts::label(&shortcuts::QUIT)) {
            actions.push(AppAction::Quit);
        }
    }

    fn view_menu(ui: &mut Ui, state: &mut MenuState) {
        ui.checkbox(&mut state.show_demo, "Demo Window");
        ui.checkbox(&mut state.show_settings, "Settings");
        ui.separator();
        ui.checkbox(&mut state.show_performance, PanelKind::Performance.title());
        ui.checkbox(&mut state.show_simulation, PanelKind::Simulation.title());
    }

    fn help_menu(ui: &mut Ui, actions: &mut Vec<AppAction>) {
        if item(
            ui,
            "Command Palette",
            &shortcuts::label(&shortcuts::COMMAND_PALETTE),
        ) {
            actions.push(AppAction::ToggleCommandPalette);
        }
        ui.separator();
        if ui.button("About").clicked() {
            actions.push(AppAction::ToggleAbout);
            ui.close_menu();
        }
    }
}

/// Menu entry with a shortcut hint; closes the menu when clicked
fn item(ui: &mut Ui, label: &str, shortcut: &str) -> bool {
    let clicked = ui.add(Button::new(label).shortcut_text(shortcut)).clicked();
    if clicked {
        ui.close_menu();
    }
    clicked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_input_emits_nothing() {
        let ctx = Context::default();
        let mut bar = MenuBar::new();
        let mut state = MenuState {
            show_demo: true,
            ..MenuState::default()
        };
        let mut actions = vec![AppAction::Quit];
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            actions = bar.render(ctx, &mut state);
        });
        assert!(actions.is_empty());
        assert!(state.show_demo);
        assert!(!state.show_settings);
    }
}
