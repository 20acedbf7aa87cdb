//! Application shell: composes the dock space, menu bar, command palette,
//! settings and the frame-loop utilities.
//!
//! This implementation uses eframe::App for window management and event handling.

use std::path::{Path, PathBuf};

use crossbeam::channel::{self, Receiver, Sender};
use eframe::egui::{Context, ViewportCommand};
use eframe::{App, CreationContext};

use crate::core::time::{self, Seconds};
use crate::core::{FrameTimeHistory, TimeController, Timer};
use crate::settings::{Settings, SettingsError, SettingsStore, Theme};
use crate::ui::action::{AppAction, PanelKind};
use crate::ui::command_palette::{Command, CommandPalette};
use crate::ui::dock_space::{DockSlot, DockSpace};
use crate::ui::menu_bar::{MenuBar, MenuState};
use crate::ui::panels::{self, PanelViewer};
use crate::ui::{shortcuts, theme};

/// Main application object
pub struct Application {
    dock_space: DockSpace<PanelKind>,
    menu_bar: MenuBar,
    command_palette: CommandPalette<AppAction>,
    settings: SettingsStore,
    settings_path: PathBuf,

    time_controller: TimeController,
    frame_history: FrameTimeHistory,
    frame_timer: Timer,
    sim_clock: Seconds,

    show_demo_window: bool,
    show_settings_window: bool,
    show_about_window: bool,
    style_dirty: bool,
    should_quit: bool,
    saved_on_exit: bool,

    action_tx: Sender<AppAction>,
    action_rx: Receiver<AppAction>,
}

/// Default dock position for each panel
fn home_slot(panel: PanelKind) -> DockSlot {
    match panel {
        PanelKind::Performance => DockSlot::Right,
        PanelKind::Simulation => DockSlot::Bottom,
    }
}

impl Application {
    /// Create the application with already loaded settings.
    /// `settings_path` is where settings are written on exit.
    pub fn new(settings: Settings, settings_path: impl Into<PathBuf>) -> Self {
        let (action_tx, action_rx) = channel::unbounded();
        let dock_space = PanelKind::ALL
            .into_iter()
            .fold(DockSpace::new(), |dock, panel| dock.with_tab(panel, home_slot(panel)));

        let mut app = Self {
            dock_space,
            menu_bar: MenuBar::new(),
            command_palette: CommandPalette::new(),
            show_demo_window: settings.show_demo_window,
            settings: SettingsStore::new(settings),
            settings_path: settings_path.into(),
            time_controller: TimeController::new(),
            frame_history: FrameTimeHistory::new(),
            frame_timer: Timer::new(),
            sim_clock: 0.0,
            show_settings_window: false,
            show_about_window: false,
            style_dirty: true,
            should_quit: false,
            saved_on_exit: false,
            action_tx,
            action_rx,
        };
        app.register_commands();
        app
    }

    /// Called by eframe during application initialization.
    pub fn from_creation_context(
        cc: &CreationContext<'_>,
        settings: Settings,
        settings_path: impl Into<PathBuf>,
    ) -> Self {
        let mut app = Self::new(settings, settings_path);
        app.apply_style(&cc.egui_ctx);
        // Window and GPU setup is not a frame.
        app.restart_frame_clock();
        app
    }

    fn register_commands(&mut self) {
        let palette = &mut self.command_palette;

        palette.register(Command::new("Toggle Demo Window", AppAction::ToggleDemoWindow));
        palette.register(Command::new("Toggle Settings", AppAction::ToggleSettingsWindow));
        palette.register(
            Command::new("Exit Application", AppAction::Quit)
                .with_shortcut(shortcuts::label(&shortcuts::QUIT)),
        );
        palette.register(Command::new("Toggle Pause", AppAction::TogglePause));
        palette.register(Command::new("Step Simulation", AppAction::StepSimulation));
        palette.register(Command::new("Reset Time Scale", AppAction::ResetTimeScale));
        palette.register(Command::new(
            "Reset Simulation Clock",
            AppAction::ResetSimulationClock,
        ));
        palette.register(Command::new("Clear Frame History", AppAction::ClearFrameHistory));
        for panel in PanelKind::ALL {
            palette.register(Command::new(
                format!("Toggle {} Panel", panel.title()),
                AppAction::TogglePanel(panel),
            ));
        }
        for theme in Theme::ALL {
            palette.register(Command::new(
                format!("Theme: {}", theme.label()),
                AppAction::SetTheme(theme),
            ));
        }
        palette.register(
            Command::new("Save Settings", AppAction::SaveSettings)
                .with_shortcut(shortcuts::label(&shortcuts::SAVE)),
        );
        palette.register(Command::new("About", AppAction::ToggleAbout));
    }

    /// Draw one frame: menu bar, dock space, floating windows, then the
    /// command palette on top. Queued actions are dispatched afterwards.
    pub fn render(&mut self, ctx: &Context) {
        if self.style_dirty {
            self.apply_style(ctx);
            self.style_dirty = false;
        }

        // Panels claim their space in call order: the menu bar must come first.
        let mut menu_state = MenuState {
            show_demo: self.show_demo_window,
            show_settings: self.show_settings_window,
            show_performance: self.dock_space.is_open(PanelKind::Performance),
            show_simulation: self.dock_space.is_open(PanelKind::Simulation),
        };
        for action in self.menu_bar.render(ctx, &mut menu_state) {
            self.queue(action);
        }
        self.apply_menu_state(menu_state);

        let mut viewer = PanelViewer {
            frame_history: &self.frame_history,
            time_controller: &self.time_controller,
            sim_clock: self.sim_clock,
            actions: &self.action_tx,
        };
        self.dock_space.render(ctx, &mut viewer);

        if self.show_demo_window {
            panels::demo_window(ctx, &mut self.show_demo_window);
        }
        if self.show_settings_window
            && panels::settings_window(
                ctx,
                &mut self.show_settings_window,
                self.settings.get_mut(),
                &self.action_tx,
            )
        {
            self.style_dirty = true;
        }
        if self.show_about_window {
            panels::about_window(ctx, &mut self.show_about_window);
        }

        if let Some(action) = self.command_palette.render(ctx) {
            self.queue(action);
        }

        self.dispatch_pending();
    }

    fn apply_menu_state(&mut self, state: MenuState) {
        self.show_demo_window = state.show_demo;
        self.show_settings_window = state.show_settings;
        for (panel, wanted) in [
            (PanelKind::Performance, state.show_performance),
            (PanelKind::Simulation, state.show_simulation),
        ] {
            if wanted != self.dock_space.is_open(panel) {
                self.dock_space.toggle(panel, home_slot(panel));
            }
        }
    }

    fn queue(&self, action: AppAction) {
        panels::send(&self.action_tx, action);
    }

    fn dispatch_pending(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
        }
    }

    /// Apply one action to the application state
    pub fn dispatch(&mut self, action: AppAction) {
        log::debug!("Dispatching {:?}", action);
        match action {
            AppAction::NewDocument => log::info!("New document requested"),
            AppAction::OpenDocument => log::info!("Open document requested"),
            AppAction::SaveDocument => log::info!("Save document requested"),
            AppAction::Quit => self.request_quit(),
            AppAction::ToggleDemoWindow => self.show_demo_window = !self.show_demo_window,
            AppAction::ToggleSettingsWindow => {
                self.show_settings_window = !self.show_settings_window
            }
            AppAction::ToggleAbout => self.show_about_window = !self.show_about_window,
            AppAction::ToggleCommandPalette => self.toggle_command_palette(),
            AppAction::TogglePanel(panel) => self.dock_space.toggle(panel, home_slot(panel)),
            AppAction::TogglePause => self.time_controller.toggle_pause(),
            AppAction::StepSimulation => self.time_controller.step(),
            AppAction::SetTimeScale(scale) => self.time_controller.set_time_scale(scale),
            AppAction::ResetTimeScale => self.time_controller.reset_time_scale(),
            AppAction::ResetSimulationClock => {
                self.time_controller.reset();
                self.sim_clock = 0.0;
            }
            AppAction::ClearFrameHistory => self.frame_history.clear(),
            AppAction::SetTheme(theme) => {
                log::info!("Switching theme to {}", theme);
                self.settings.get_mut().theme = theme;
                self.style_dirty = true;
            }
            AppAction::SaveSettings => {
                let path = self.settings_path.clone();
                if let Err(err) = self.save_settings(&path) {
                    log::error!("{}", err);
                }
            }
            AppAction::RestoreDefaultSettings => {
                self.settings.reset();
                self.style_dirty = true;
            }
        }
    }

    fn apply_style(&self, ctx: &Context) {
        let settings = self.settings.get();
        theme::apply_theme(ctx, settings.theme);
        theme::apply_font_size(ctx, settings.font_size);
    }

    /// Load settings from `path`. Failures are logged and the current values kept.
    pub fn load_settings(&mut self, path: &Path) {
        match self.settings.load(path) {
            Ok(true) => log::info!("Loaded settings from {}", path.display()),
            Ok(false) => log::info!("No settings at {}, using defaults", path.display()),
            Err(err) => log::warn!("{}", err),
        }
        self.show_demo_window = self.settings.get().show_demo_window;
        self.style_dirty = true;
    }

    /// Save settings to `path`, recording whether the demo window is currently visible
    pub fn save_settings(&mut self, path: &Path) -> Result<(), SettingsError> {
        self.settings.get_mut().show_demo_window = self.show_demo_window;
        self.settings.save(path)?;
        log::info!("Saved settings to {}", path.display());
        Ok(())
    }

    pub fn toggle_command_palette(&mut self) {
        self.command_palette.toggle();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        log::info!("Quit requested");
        self.should_quit = true;
    }

    pub fn settings(&self) -> &Settings {
        self.settings.get()
    }

    pub fn command_palette(&self) -> &CommandPalette<AppAction> {
        &self.command_palette
    }

    pub fn dock_space(&self) -> &DockSpace<PanelKind> {
        &self.dock_space
    }

    pub fn time_controller(&self) -> &TimeController {
        &self.time_controller
    }

    pub fn frame_history(&self) -> &FrameTimeHistory {
        &self.frame_history
    }

    pub fn sim_clock(&self) -> Seconds {
        self.sim_clock
    }

    pub fn is_demo_window_visible(&self) -> bool {
        self.show_demo_window
    }

    pub fn is_settings_window_visible(&self) -> bool {
        self.show_settings_window
    }

    /// Start timing the next frame from now
    pub fn restart_frame_clock(&mut self) {
        self.frame_timer.reset();
    }

    /// Record the frame time and advance the simulation clock
    fn tick(&mut self) {
        let dt = self.frame_timer.lap();
        self.frame_history.push(time::secs_to_millis(dt) as f32);
        if let Some(sim_dt) = self.time_controller.advance(dt) {
            self.sim_clock += sim_dt;
        }
    }

    fn handle_shortcuts(&mut self, ctx: &Context) {
        let (palette, quit) = ctx.input_mut(|i| {
            (
                shortcuts::consume_press(i, &shortcuts::COMMAND_PALETTE),
                shortcuts::consume_press(i, &shortcuts::QUIT),
            )
        });
        if palette {
            self.toggle_command_palette();
        }
        if quit {
            self.request_quit();
        }
    }

    /// Copy the current window geometry into the settings
    fn capture_window_geometry(&mut self, ctx: &Context) {
        let (inner_rect, maximized) =
            ctx.input(|i| (i.viewport().inner_rect, i.viewport().maximized));
        let settings = self.settings.get_mut();
        if let Some(maximized) = maximized {
            settings.maximized = maximized;
        }
        // A maximized window's size says nothing about the size to restore to.
        if let Some(rect) = inner_rect.filter(|_| !settings.maximized) {
            settings.window_width = rect.width().round() as u32;
            settings.window_height = rect.height().round() as u32;
        }
    }

    fn save_on_exit(&mut self, ctx: &Context) {
        if self.saved_on_exit {
            return;
        }
        self.saved_on_exit = true;
        self.capture_window_geometry(ctx);
        let path = self.settings_path.clone();
        if let Err(err) = self.save_settings(&path) {
            log::error!("{}", err);
        }
    }

    /// Save once when the window is closing, and close it after a quit request
    fn handle_exit(&mut self, ctx: &Context) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.save_on_exit(ctx);
        }
        if self.should_quit {
            self.save_on_exit(ctx);
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

impl App for Application {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.tick();
        self.handle_shortcuts(ctx);
        self.render(ctx);
        self.handle_exit(ctx);

        // Keep the frame graph and simulation clock moving without input events.
        ctx.request_repaint();
    }
}
