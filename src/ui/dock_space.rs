//! Full-window dock layout.
//!
//! Tabs are docked into one of four slots. Side and bottom slots become
//! resizable panels when occupied; the centre fills what is left. An empty
//! centre is drawn without a frame so floating windows sit over the bare
//! background.

use egui::{CentralPanel, Context, Frame, SidePanel, TopBottomPanel, Ui};

/// Where a tab is docked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockSlot {
    Left,
    Right,
    Bottom,
    Center,
}

impl DockSlot {
    pub const ALL: [DockSlot; 4] = [
        DockSlot::Left,
        DockSlot::Right,
        DockSlot::Bottom,
        DockSlot::Center,
    ];

    fn index(self) -> usize {
        match self {
            DockSlot::Left => 0,
            DockSlot::Right => 1,
            DockSlot::Bottom => 2,
            DockSlot::Center => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DockSlot::Left => "Left",
            DockSlot::Right => "Right",
            DockSlot::Bottom => "Bottom",
            DockSlot::Center => "Center",
        }
    }
}

/// Supplies titles and contents for docked tabs
pub trait DockViewer<T> {
    fn title(&self, tab: &T) -> String;
    fn ui(&mut self, ui: &mut Ui, tab: &T);
}

#[derive(Debug, Clone)]
struct SlotTabs<T> {
    tabs: Vec<T>,
    active: usize,
}

impl<T> Default for SlotTabs<T> {
    fn default() -> Self {
        Self {
            tabs: Vec::new(),
            active: 0,
        }
    }
}

/// Layout edits requested from the tab strips during a frame
#[derive(Debug, Clone, Copy)]
enum DockOp<T> {
    Activate(T),
    Move(T, DockSlot),
    Close(T),
}

/// Dock layout host
#[derive(Debug, Clone)]
pub struct DockSpace<T> {
    slots: [SlotTabs<T>; 4],
}

impl<T: Copy + PartialEq> DockSpace<T> {
    pub fn new() -> Self {
        Self {
            slots: Default::default(),
        }
    }

    /// Builder form of [`dock`](Self::dock)
    pub fn with_tab(mut self, tab: T, slot: DockSlot) -> Self {
        self.dock(tab, slot);
        self
    }

    /// Dock `tab` into `slot` and make it active there, moving it if it is docked elsewhere
    pub fn dock(&mut self, tab: T, slot: DockSlot) {
        self.close(tab);
        let target = &mut self.slots[slot.index()];
        target.tabs.push(tab);
        target.active = target.tabs.len() - 1;
    }

    /// Remove `tab` from the layout. Returns false if it was not docked.
    pub fn close(&mut self, tab: T) -> bool {
        for slot in self.slots.iter_mut() {
            if let Some(pos) = slot.tabs.iter().position(|t| *t == tab) {
                slot.tabs.remove(pos);
                if slot.active > pos || slot.active >= slot.tabs.len() {
                    slot.active = slot.active.saturating_sub(1);
                }
                return true;
            }
        }
        false
    }

    /// Close if open, otherwise dock into `slot`
    pub fn toggle(&mut self, tab: T, slot: DockSlot) {
        if !self.close(tab) {
            self.dock(tab, slot);
        }
    }

    pub fn slot_of(&self, tab: T) -> Option<DockSlot> {
        DockSlot::ALL
            .into_iter()
            .find(|slot| self.slots[slot.index()].tabs.contains(&tab))
    }

    pub fn is_open(&self, tab: T) -> bool {
        self.slot_of(tab).is_some()
    }

    pub fn set_active(&mut self, tab: T) {
        for slot in self.slots.iter_mut() {
            if let Some(pos) = slot.tabs.iter().position(|t| *t == tab) {
                slot.active = pos;
            }
        }
    }

    pub fn active(&self, slot: DockSlot) -> Option<T> {
        let slot = &self.slots[slot.index()];
        slot.tabs.get(slot.active).copied()
    }

    pub fn tabs(&self, slot: DockSlot) -> &[T] {
        &self.slots[slot.index()].tabs
    }

    /// Lay out all slots for this frame
    pub fn render(&mut self, ctx: &Context, viewer: &mut impl DockViewer<T>) {
        let mut ops = Vec::new();

        if !self.tabs(DockSlot::Left).is_empty() {
            SidePanel::left("dock_left")
                .resizable(true)
                .default_width(240.0)
                .show(ctx, |ui| self.slot_ui(ui, DockSlot::Left, viewer, &mut ops));
        }
        if !self.tabs(DockSlot::Right).is_empty() {
            SidePanel::right("dock_right")
                .resizable(true)
                .default_width(280.0)
                .show(ctx, |ui| self.slot_ui(ui, DockSlot::Right, viewer, &mut ops));
        }
        if !self.tabs(DockSlot::Bottom).is_empty() {
            TopBottomPanel::bottom("dock_bottom")
                .resizable(true)
                .default_height(200.0)
                .show(ctx, |ui| self.slot_ui(ui, DockSlot::Bottom, viewer, &mut ops));
        }
        if self.tabs(DockSlot::Center).is_empty() {
            CentralPanel::default().frame(Frame::none()).show(ctx, |_ui| {});
        } else {
            CentralPanel::default()
                .show(ctx, |ui| self.slot_ui(ui, DockSlot::Center, viewer, &mut ops));
        }

        for op in ops {
            match op {
                DockOp::Activate(tab) => self.set_active(tab),
                DockOp::Move(tab, slot) => self.dock(tab, slot),
                DockOp::Close(tab) => {
                    self.close(tab);
                }
            }
        }
    }

    fn slot_ui(
        &self,
        ui: &mut Ui,
        slot: DockSlot,
        viewer: &mut impl DockViewer<T>,
        ops: &mut Vec<DockOp<T>>,
    ) {
        let active = self.active(slot);

        ui.horizontal(|ui| {
            for &tab in self.tabs(slot) {
                let response = ui.selectable_label(Some(tab) == active, viewer.title(&tab));
                if response.clicked() {
                    ops.push(DockOp::Activate(tab));
                }
                let _ = response.context_menu(|ui| {
                    for target in DockSlot::ALL.into_iter().filter(|s| *s != slot) {
                        if ui.button(format!("Move to {}", target.label())).clicked() {
                            ops.push(DockOp::Move(tab, target));
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Close").clicked() {
                        ops.push(DockOp::Close(tab));
                        ui.close_menu();
                    }
                });
            }
        });
        ui.separator();

        if let Some(tab) = active {
            viewer.ui(ui, &tab);
        }
    }
}

impl<T: Copy + PartialEq> Default for DockSpace<T> {
    fn default() -> Self {
        Self::new()
    }
}
