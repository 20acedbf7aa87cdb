//! Floating windows and docked panel contents.

use crossbeam::channel::Sender;
use egui::{Color32, ComboBox, Context, Grid, Pos2, Sense, Shape, Slider, Stroke, Ui, Vec2, Window};

use crate::core::time::{self, Seconds};
use crate::core::time_control::{MAX_TIME_SCALE, MIN_TIME_SCALE};
use crate::core::{FrameTimeHistory, TimeController};
use crate::settings::settings::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::settings::{Settings, Theme};
use crate::ui::action::{AppAction, PanelKind};
use crate::ui::dock_space::DockViewer;

const GRAPH_HEIGHT: f32 = 80.0;
/// Frame time of a 60 Hz display, drawn as a reference line
const TARGET_FRAME_MS: f32 = 1000.0 / 60.0;

/// Queue an action. A closed channel means the application is shutting down.
pub(crate) fn send(actions: &Sender<AppAction>, action: AppAction) {
    if actions.send(action).is_err() {
        log::debug!("Action channel closed");
    }
}

/// Settings editor. Returns true when a setting that affects the style changed.
pub fn settings_window(
    ctx: &Context,
    open: &mut bool,
    settings: &mut Settings,
    actions: &Sender<AppAction>,
) -> bool {
    let mut style_changed = false;

    Window::new("Settings")
        .open(open)
        .resizable(false)
        .show(ctx, |ui| {
            Grid::new("settings_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Font Size");
                    style_changed |= ui
                        .add(Slider::new(&mut settings.font_size, MIN_FONT_SIZE..=MAX_FONT_SIZE))
                        .changed();
                    ui.end_row();

                    ui.label("Theme");
                    ComboBox::from_id_source("settings_theme")
                        .selected_text(settings.theme.label())
                        .show_ui(ui, |ui| {
                            for theme in Theme::ALL {
                                style_changed |= ui
                                    .selectable_value(&mut settings.theme, theme, theme.label())
                                    .changed();
                            }
                        });
                    ui.end_row();
                });

            ui.checkbox(&mut settings.show_demo_window, "Show Demo Window on startup");
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save now").clicked() {
                    send(actions, AppAction::SaveSettings);
                }
                if ui.button("Restore defaults").clicked() {
                    send(actions, AppAction::RestoreDefaultSettings);
                }
            });
        });

    style_changed
}

/// Toolkit introspection: settings, style, inspection and memory views
pub fn demo_window(ctx: &Context, open: &mut bool) {
    Window::new("Demo")
        .open(open)
        .vscroll(true)
        .default_width(380.0)
        .show(ctx, |ui| {
            ui.collapsing("Settings", |ui| ctx.settings_ui(ui));
            ui.collapsing("Style", |ui| ctx.style_ui(ui));
            ui.collapsing("Inspection", |ui| ctx.inspection_ui(ui));
            ui.collapsing("Memory", |ui| ctx.memory_ui(ui));
        });
}

pub fn about_window(ctx: &Context, open: &mut bool) {
    Window::new("About")
        .open(open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.heading(env!("CARGO_PKG_NAME"));
            ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
            ui.label(env!("CARGO_PKG_DESCRIPTION"));
        });
}

/// Draws the docked panels from a snapshot of application state
pub struct PanelViewer<'a> {
    pub frame_history: &'a FrameTimeHistory,
    pub time_controller: &'a TimeController,
    pub sim_clock: Seconds,
    pub actions: &'a Sender<AppAction>,
}

impl DockViewer<PanelKind> for PanelViewer<'_> {
    fn title(&self, tab: &PanelKind) -> String {
        tab.title().to_owned()
    }

    fn ui(&mut self, ui: &mut Ui, tab: &PanelKind) {
        match tab {
            PanelKind::Performance => self.performance_ui(ui),
            PanelKind::Simulation => self.simulation_ui(ui),
        }
    }
}

impl PanelViewer<'_> {
    fn performance_ui(&self, ui: &mut Ui) {
        let history = self.frame_history;

        Grid::new("frame_stats").num_columns(2).show(ui, |ui| {
            ui.label("Frame");
            ui.monospace(format!("{:.2} ms", history.latest().unwrap_or(0.0)));
            ui.end_row();
            ui.label("Average");
            ui.monospace(format!(
                "{:.2} ms ({:.0} FPS)",
                history.average(),
                history.average_fps()
            ));
            ui.end_row();
            ui.label("Min / Max");
            ui.monospace(format!(
                "{:.2} / {:.2} ms",
                history.minimum(),
                history.maximum()
            ));
            ui.end_row();
        });

        frame_graph(ui, history);

        if ui.button("Clear").clicked() {
            send(self.actions, AppAction::ClearFrameHistory);
        }
    }

    fn simulation_ui(&self, ui: &mut Ui) {
        let tc = self.time_controller;
        let state = tc.state();

        ui.horizontal(|ui| {
            ui.label(state.label());
            ui.separator();
            ui.monospace(time::format_clock(self.sim_clock));
        });

        ui.horizontal(|ui| {
            let toggle_label = if state.is_paused() { "Resume" } else { "Pause" };
            if ui.button(toggle_label).clicked() {
                send(self.actions, AppAction::TogglePause);
            }
            if ui
                .add_enabled(state.is_paused(), egui::Button::new("Step"))
                .clicked()
            {
                send(self.actions, AppAction::StepSimulation);
            }
            if ui.button("Reset clock").clicked() {
                send(self.actions, AppAction::ResetSimulationClock);
            }
        });

        ui.horizontal(|ui| {
            let mut scale = tc.time_scale();
            let slider = Slider::new(&mut scale, MIN_TIME_SCALE..=MAX_TIME_SCALE)
                .logarithmic(true)
                .suffix("×")
                .text("Time scale");
            if ui.add(slider).changed() {
                send(self.actions, AppAction::SetTimeScale(scale));
            }
            if ui.button("1×").clicked() {
                send(self.actions, AppAction::ResetTimeScale);
            }
        });
    }
}

/// Scrolling frame-time graph, oldest sample on the left
fn frame_graph(ui: &mut Ui, history: &FrameTimeHistory) {
    let width = ui.available_width().max(FrameTimeHistory::CAPACITY as f32);
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, GRAPH_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    let visuals = ui.visuals();

    painter.rect_filled(rect, 2.0, visuals.extreme_bg_color);

    let ceiling = history.maximum().max(TARGET_FRAME_MS * 2.0);
    let y_for = |ms: f32| rect.bottom() - (ms / ceiling).clamp(0.0, 1.0) * rect.height();

    painter.hline(
        rect.x_range(),
        y_for(TARGET_FRAME_MS),
        Stroke::new(1.0, visuals.weak_text_color()),
    );

    if history.len() < 2 {
        return;
    }
    let step = rect.width() / (FrameTimeHistory::CAPACITY - 1) as f32;
    let points: Vec<Pos2> = history
        .iter_chronological()
        .enumerate()
        .map(|(i, ms)| Pos2::new(rect.left() + i as f32 * step, y_for(ms)))
        .collect();
    painter.add(Shape::line(points, Stroke::new(1.5, Color32::from_rgb(100, 200, 120))));
}
