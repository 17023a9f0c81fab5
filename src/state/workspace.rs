//! Project workspace state: editor tab, preview size, and pending actions.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

const SHARE_BASE_URL: &str = "https://codecraft.academy/project";

/// Editor tab over the static code samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorTab {
    #[default]
    Html,
    Css,
    Js,
}

impl EditorTab {
    pub const ALL: [EditorTab; 3] = [EditorTab::Html, EditorTab::Css, EditorTab::Js];

    pub fn label(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Js => "JS",
        }
    }
}

/// Simulated device width for the live preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewMode {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl PreviewMode {
    pub const ALL: [PreviewMode; 3] = [PreviewMode::Desktop, PreviewMode::Tablet, PreviewMode::Mobile];

    pub fn label(self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Tablet => "Tablet",
            Self::Mobile => "Mobile",
        }
    }

    /// CSS modifier for the preview frame.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Desktop => "workspace__preview-frame--desktop",
            Self::Tablet => "workspace__preview-frame--tablet",
            Self::Mobile => "workspace__preview-frame--mobile",
        }
    }
}

/// One-click improvement offered in the suggestions panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suggestion {
    Animation,
    Colors,
    Responsiveness,
}

impl Suggestion {
    pub const ALL: [Suggestion; 3] = [Suggestion::Animation, Suggestion::Colors, Suggestion::Responsiveness];

    pub fn id(self) -> &'static str {
        match self {
            Self::Animation => "animation",
            Self::Colors => "colors",
            Self::Responsiveness => "responsiveness",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Animation => "Add Animation",
            Self::Colors => "Improve Colors",
            Self::Responsiveness => "Add Responsiveness",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Animation => "Make your button more interactive with hover effects",
            Self::Colors => "Use a more accessible color palette",
            Self::Responsiveness => "Make your design mobile-friendly",
        }
    }

    pub fn applying_message(self) -> String {
        format!("Applying {} suggestion...", self.id())
    }
}

#[derive(Clone, Debug, Default)]
pub struct WorkspaceState {
    pub active_tab: EditorTab,
    pub preview_mode: PreviewMode,
    /// Index into `catalog::workspace::PROJECTS`.
    pub selected_project: usize,
    pub running: bool,
    pub saving: bool,
}

impl WorkspaceState {
    /// Select project `index` if it exists.
    pub fn select_project(&mut self, index: usize, project_count: usize) {
        if index < project_count {
            self.selected_project = index;
        }
    }

    /// Mark a run as started. Returns `false` if one is already running.
    pub fn begin_run(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    pub fn finish_run(&mut self) {
        self.running = false;
    }

    /// Mark a save as started. Returns `false` if one is already saving.
    pub fn begin_save(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        true
    }

    pub fn finish_save(&mut self) {
        self.saving = false;
    }
}

/// Shareable link for a project snapshot taken at `timestamp_ms`.
pub fn share_url(timestamp_ms: u64) -> String {
    format!("{SHARE_BASE_URL}/{timestamp_ms}")
}
