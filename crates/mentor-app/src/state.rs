//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::sample;
use crate::submission::SubmissionState;
use crate::viewer::{self, ResultPanel, ViewerState};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which pane receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Editor,
    Viewer,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,
    pub focus: Focus,
    pub submission: SubmissionState,
    pub viewer: ViewerState,
    pub settings: Settings,

    /// Spinner frame, advanced on ticks while loading
    pub loading_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Empty editor, default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), Some(String::new()))
    }

    /// Create state from settings.
    ///
    /// `initial_code` wins when given; otherwise the editor is pre-filled with
    /// the sample snippet if `ui.preload_sample` is set.
    pub fn with_settings(settings: Settings, initial_code: Option<String>) -> Self {
        let code = match initial_code {
            Some(code) => code,
            None if settings.ui.preload_sample => sample::HOUSE_ROBBER.to_string(),
            None => String::new(),
        };

        Self {
            phase: AppPhase::Running,
            focus: Focus::Editor,
            submission: SubmissionState::with_code(&code),
            viewer: ViewerState::new(),
            settings,
            loading_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn model_name(&self) -> &str {
        &self.settings.backend.model
    }

    /// What the result area shows right now.
    pub fn result_panel(&self) -> ResultPanel<'_> {
        viewer::panel(&self.submission)
    }

    /// Let the viewer notice a new result epoch.
    pub fn sync_viewer(&mut self) -> bool {
        self.viewer.observe(self.submission.result_epoch)
    }
}
