//! Command palette: a searchable popup over the registered commands.
//!
//! The palette keeps all state needed for keyboard navigation (open flag,
//! query, selected row) independent of egui so it can be driven by tests.
//! Rows are addressed by *visible index*, i.e. the position within the
//! filtered view, never by registry index.

use egui::{Align, Align2, Context, Frame, Id, Key, Layout, Order, ScrollArea, TextEdit, Vec2};

const PALETTE_WIDTH: f32 = 500.0;
const LIST_MAX_HEIGHT: f32 = 300.0;

/// A registered command
#[derive(Debug, Clone, PartialEq)]
pub struct Command<A> {
    /// Display name, also what the query is matched against
    pub name: String,
    /// Shortcut hint shown next to the name (display only)
    pub shortcut: Option<String>,
    pub action: A,
}

impl<A> Command<A> {
    pub fn new(name: impl Into<String>, action: A) -> Self {
        Self {
            name: name.into(),
            shortcut: None,
            action,
        }
    }

    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }
}

/// Keys the palette reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKey {
    Up,
    Down,
    Enter,
    Escape,
}

/// Searchable command list with keyboard navigation
#[derive(Debug, Clone)]
pub struct CommandPalette<A> {
    commands: Vec<Command<A>>,
    open: bool,
    query: String,
    selected: usize,
    focus_pending: bool,
}

impl<A: Clone> CommandPalette<A> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            open: false,
            query: String::new(),
            selected: 0,
            focus_pending: false,
        }
    }

    pub fn register(&mut self, command: Command<A>) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[Command<A>] {
        &self.commands
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open with an empty query and the first row selected
    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.selected = 0;
        self.focus_pending = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.focus_pending = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.clamp_selection();
    }

    /// Case-insensitive substring match; an empty query matches everything
    pub fn matches(&self, name: &str) -> bool {
        matches_query(name, &self.query)
    }

    /// Registry indices of the commands matching the query, in registration order
    pub fn filtered(&self) -> Vec<usize> {
        self.commands
            .iter()
            .enumerate()
            .filter(|(_, cmd)| self.matches(&cmd.name))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.filtered().len()
    }

    /// Selected position within the filtered view
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Currently highlighted command, if anything matches
    pub fn selected_command(&self) -> Option<&Command<A>> {
        self.filtered()
            .get(self.selected)
            .map(|&index| &self.commands[index])
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.saturating_add(1);
        self.clamp_selection();
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let visible = self.visible_count();
        if self.selected >= visible {
            self.selected = visible.saturating_sub(1);
        }
    }

    /// Run the selected command: returns its action and closes.
    /// With nothing visible the palette stays open.
    pub fn confirm(&mut self) -> Option<A> {
        self.activate(self.selected)
    }

    /// Run the command at `visible_index` of the filtered view
    pub fn activate(&mut self, visible_index: usize) -> Option<A> {
        let index = *self.filtered().get(visible_index)?;
        let command = &self.commands[index];
        log::debug!("Command palette: running {:?}", command.name);
        let action = command.action.clone();
        self.close();
        Some(action)
    }

    /// Keyboard state machine. Does nothing while closed.
    pub fn handle_key(&mut self, key: PaletteKey) -> Option<A> {
        if !self.open {
            return None;
        }
        match key {
            PaletteKey::Up => self.select_previous(),
            PaletteKey::Down => self.select_next(),
            PaletteKey::Enter => return self.confirm(),
            PaletteKey::Escape => self.close(),
        }
        None
    }

    /// Draw the palette if open and return the action the user picked
    pub fn render(&mut self, ctx: &Context) -> Option<A> {
        if !self.open {
            return None;
        }

        let pressed: Vec<PaletteKey> = ctx.input(|i| {
            [
                (Key::Escape, PaletteKey::Escape),
                (Key::ArrowUp, PaletteKey::Up),
                (Key::ArrowDown, PaletteKey::Down),
                (Key::Enter, PaletteKey::Enter),
            ]
            .into_iter()
            .filter(|(key, _)| i.key_pressed(*key))
            .map(|(_, palette_key)| palette_key)
            .collect()
        });
        for key in pressed {
            if let Some(action) = self.handle_key(key) {
                return Some(action);
            }
        }
        if !self.open {
            return None;
        }

        let top = ctx.screen_rect().height() * 0.25;
        let mut clicked = None;

        egui::Area::new(Id::new("command_palette"))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_TOP, Vec2::new(0.0, top))
            .show(ctx, |ui| {
                Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_width(PALETTE_WIDTH);

                    let search = ui.add(
                        TextEdit::singleline(&mut self.query)
                            .desired_width(f32::INFINITY)
                            .hint_text("Type a command…"),
                    );
                    if self.focus_pending {
                        search.request_focus();
                        self.focus_pending = false;
                    }
                    if search.changed() {
                        self.clamp_selection();
                    }

                    ui.separator();

                    let filtered = self.filtered();
                    ScrollArea::vertical()
                        .max_height(LIST_MAX_HEIGHT)
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            if filtered.is_empty() {
                                ui.weak("No matching commands");
                            }
                            for (visible_index, &index) in filtered.iter().enumerate() {
                                let command = &self.commands[index];
                                let is_selected = visible_index == self.selected;
                                ui.horizontal(|ui| {
                                    let row = ui.selectable_label(is_selected, &command.name);
                                    if is_selected {
                                        row.scroll_to_me(None);
                                    }
                                    if row.clicked() {
                                        clicked = Some(visible_index);
                                    }
                                    if let Some(shortcut) = &command.shortcut {
                                        ui.with_layout(
                                            Layout::right_to_left(Align::Center),
                                            |ui| ui.weak(shortcut),
                                        );
                                    }
                                });
                            }
                        });
                });
            });

        clicked.and_then(|visible_index| self.activate(visible_index))
    }
}

impl<A: Clone> Default for CommandPalette<A> {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_query(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn palette() -> CommandPalette<u32> {
        let mut palette = CommandPalette::new();
        palette.register(Command::new("Toggle Demo Window", 1));
        palette.register(Command::new("Toggle Settings", 2));
        palette.register(Command::new("Exit Application", 3).with_shortcut("Ctrl+Q"));
        palette.register(Command::new("Theme: Light", 4));
        palette
    }

    #[test]
    fn test_open_resets_query_and_selection() {
        let mut p = palette();
        p.open();
        p.set_query("toggle");
        p.select_next();
        p.close();
        p.open();
        assert!(p.is_open());
        assert_eq!(p.query(), "");
        assert_eq!(p.selected_index(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut p = palette();
        p.toggle();
        assert!(p.is_open());
        p.toggle();
        assert!(!p.is_open());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let p = palette();
        assert_eq!(p.filtered(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let mut p = palette();
        p.set_query("TOGGLE");
        assert_eq!(p.filtered(), vec![0, 1]);
        p.set_query("app");
        assert_eq!(p.filtered(), vec![2]);
        p.set_query("window t");
        assert!(p.filtered().is_empty());
        assert!(!p.matches("Settings"));
    }

    #[test]
    fn test_navigation_is_bounded() {
        let mut p = palette();
        p.open();
        p.select_previous();
        assert_eq!(p.selected_index(), 0);
        for _ in 0..10 {
            p.select_next();
        }
        assert_eq!(p.selected_index(), 3);
    }

    #[test]
    fn test_narrowing_query_clamps_selection() {
        let mut p = palette();
        p.open();
        p.select_next();
        p.select_next();
        p.select_next();
        assert_eq!(p.selected_index(), 3);
        p.set_query("toggle");
        assert_eq!(p.selected_index(), 1);
        assert_eq!(p.selected_command().map(|c| c.action), Some(2));
    }

    #[test]
    fn test_enter_runs_selected_visible_command() {
        let mut p = palette();
        p.open();
        p.set_query("toggle");
        p.handle_key(PaletteKey::Down);
        assert_eq!(p.handle_key(PaletteKey::Enter), Some(2));
        assert!(!p.is_open());
    }

    #[test]
    fn test_enter_with_no_match_stays_open() {
        let mut p = palette();
        p.open();
        p.set_query("zzz");
        assert_eq!(p.selected_index(), 0);
        assert_eq!(p.confirm(), None);
        assert!(p.is_open());
    }

    #[test]
    fn test_escape_closes() {
        let mut p = palette();
        p.open();
        assert_eq!(p.handle_key(PaletteKey::Escape), None);
        assert!(!p.is_open());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut p = palette();
        assert_eq!(p.handle_key(PaletteKey::Enter), None);
        p.handle_key(PaletteKey::Down);
        assert_eq!(p.selected_index(), 0);
    }

    #[test]
    fn test_activate_uses_visible_index() {
        let mut p = palette();
        p.open();
        p.set_query("theme");
        assert_eq!(p.activate(0), Some(4));
        p.open();
        assert_eq!(p.activate(17), None);
    }

    #[test]
    fn test_render_closed_is_noop() {
        let mut p = palette();
        let ctx = Context::default();
        let mut picked = Some(0);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            picked = p.render(ctx);
        });
        assert_eq!(picked, None);
    }

    #[test]
    fn test_render_open_keeps_state() {
        let mut p = palette();
        p.open();
        p.set_query("toggle");
        let ctx = Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            assert_eq!(p.render(ctx), None);
        });
        assert!(p.is_open());
        assert_eq!(p.query(), "toggle");
    }

    proptest! {
        #[test]
        fn test_selection_stays_in_bounds(
            ops in prop::collection::vec(0u8..5, 0..64),
            query in "[a-zA-Z: ]{0,4}",
        ) {
            let mut p = palette();
            p.open();
            for op in ops {
                match op {
                    0 => p.select_next(),
                    1 => p.select_previous(),
                    2 => p.set_query(query.clone()),
                    3 => p.set_query(""),
                    _ => p.open(),
                }
                let visible = p.visible_count();
                if visible == 0 {
                    prop_assert_eq!(p.selected_index(), 0);
                } else {
                    prop_assert!(p.selected_index() < visible);
                }
            }
        }
    }
}
