//! Messages emitted by UI components and dispatched by the application.

use crate::settings::Theme;

/// Dockable panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Performance,
    Simulation,
}

impl PanelKind {
    pub const ALL: [PanelKind; 2] = [PanelKind::Performance, PanelKind::Simulation];

    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Performance => "Performance",
            PanelKind::Simulation => "Simulation",
        }
    }
}

/// Everything the menu bar, command palette and panels can ask the application to do
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    NewDocument,
    OpenDocument,
    SaveDocument,
    Quit,
    ToggleDemoWindow,
    ToggleSettingsWindow,
    ToggleAbout,
    ToggleCommandPalette,
    TogglePanel(PanelKind),
    TogglePause,
    StepSimulation,
    SetTimeScale(f32),
    ResetTimeScale,
    ResetSimulationClock,
    ClearFrameHistory,
    SetTheme(Theme),
    SaveSettings,
    RestoreDefaultSettings,
}
