use std::time::{Duration, Instant};

use crate::domain::ModuleRecord;
use crate::infrastructure::RuntimeEvent;

/// How many modules the overview grid shows before the rest spill into
/// the remainder grid.
pub const OVERVIEW_CARD_COUNT: usize = 4;

/// Fixed hint rendered under the error message.
pub const ERROR_HINT: &str = "Check that the backend is running and the backend URL is set.";

/// The three-way exclusive render state of the main content region.
/// `Loading` is the initial state; `Ready` and `Failed` are terminal
/// until the next fetch, and there is no post-startup fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    since: Instant,
}

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

#[derive(Debug)]
pub struct App {
    pub load: LoadState,
    /// Full module list, replaced wholesale on each successful fetch.
    pub modules: Vec<ModuleRecord>,
    /// Selected module id. Not guaranteed to match a loaded module; when
    /// it doesn't, no detail panel renders.
    pub active: String,
    /// Narrow-viewport sidebar visibility. Wide frames ignore this.
    pub sidebar_open: bool,
    pub backend_url: String,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
    spinner_phase: usize,
}

impl App {
    pub fn new(active: String, backend_url: String) -> Self {
        Self {
            load: LoadState::Loading,
            modules: Vec::new(),
            active,
            sidebar_open: false,
            backend_url,
            status: None,
            help_open: false,
            should_quit: false,
            spinner_phase: 0,
        }
    }

    // --- state transitions ---

    pub fn start_load(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Replace the module list and leave the loading state. If the
    /// current active id is absent from the new list, fall back to the
    /// first module so the detail panel doesn't silently disappear.
    pub fn load_succeeded(&mut self, modules: Vec<ModuleRecord>) {
        self.modules = modules;
        self.load = LoadState::Ready;

        let active_exists = self.modules.iter().any(|m| m.id == self.active);
        if !active_exists {
            if let Some(first) = self.modules.first() {
                self.active = first.id.clone();
            }
        }
    }

    /// Enter the error state. Modules from any prior load are kept as-is;
    /// on first load the list is simply still empty.
    pub fn load_failed(&mut self, message: String) {
        self.load = LoadState::Failed(message);
    }

    /// Select a module by id. Idempotent; the id is stored verbatim even
    /// when it matches nothing (the panel then doesn't render).
    pub fn select(&mut self, id: &str) {
        self.active = id.to_string();
    }

    /// Sidebar entries also close the narrow-viewport sidebar.
    pub fn select_from_sidebar(&mut self, id: &str) {
        self.select(id);
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    // --- runtime events ---

    pub fn apply_runtime_event(&mut self, event: RuntimeEvent) {
        match event {
            RuntimeEvent::ModulesLoaded { modules } => {
                let count = modules.len();
                self.load_succeeded(modules);
                if count == 0 {
                    self.set_status("Backend returned no modules", StatusLevel::Warn);
                } else {
                    self.set_status(format!("Loaded {count} modules"), StatusLevel::Info);
                }
            }
            RuntimeEvent::LoadFailed { message } => {
                self.set_status(message.clone(), StatusLevel::Error);
                self.load_failed(message);
            }
        }
    }

    // --- derived lookups ---

    /// The active module, resolved by id lookup. First match wins if the
    /// backend ever sends duplicate ids.
    pub fn active_module(&self) -> Option<&ModuleRecord> {
        self.modules.iter().find(|m| m.id == self.active)
    }

    pub fn overview_modules(&self) -> &[ModuleRecord] {
        let end = self.modules.len().min(OVERVIEW_CARD_COUNT);
        &self.modules[..end]
    }

    pub fn remaining_modules(&self) -> &[ModuleRecord] {
        if self.modules.len() > OVERVIEW_CARD_COUNT {
            &self.modules[OVERVIEW_CARD_COUNT..]
        } else {
            &[]
        }
    }

    fn active_index(&self) -> Option<usize> {
        self.modules.iter().position(|m| m.id == self.active)
    }

    // --- keyboard selection ---

    pub fn select_next(&mut self) {
        if self.modules.is_empty() {
            return;
        }
        let next = match self.active_index() {
            Some(index) => (index + 1).min(self.modules.len() - 1),
            None => 0,
        };
        self.active = self.modules[next].id.clone();
    }

    pub fn select_prev(&mut self) {
        if self.modules.is_empty() {
            return;
        }
        let prev = match self.active_index() {
            Some(index) => index.saturating_sub(1),
            None => 0,
        };
        self.active = self.modules[prev].id.clone();
    }

    /// Jump straight to the nth module (0-based).
    pub fn select_nth(&mut self, index: usize) {
        if let Some(module) = self.modules.get(index) {
            self.active = module.id.clone();
        }
    }

    // --- status line & ticks ---

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_phase % SPINNER_FRAMES.len()]
    }

    pub fn on_tick(&mut self) {
        if self.load == LoadState::Loading {
            self.spinner_phase = self.spinner_phase.wrapping_add(1);
        }
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(id: &str) -> ModuleRecord {
        ModuleRecord {
            id: id.to_string(),
            title: format!("{id} title"),
            description: String::new(),
            kpis: BTreeMap::new(),
            highlights: Vec::new(),
        }
    }

    fn app_with(active: &str) -> App {
        App::new(active.to_string(), "http://localhost:8000".to_string())
    }

    #[test]
    fn starts_in_loading() {
        let app = app_with("patient-management");
        assert_eq!(app.load, LoadState::Loading);
        assert!(app.modules.is_empty());
        assert!(app.active_module().is_none());
    }

    #[test]
    fn load_succeeded_replaces_modules_wholesale() {
        let mut app = app_with("patient-management");
        app.load_succeeded(vec![record("patient-management"), record("exam-scheduling")]);
        assert_eq!(app.load, LoadState::Ready);
        assert_eq!(app.modules.len(), 2);

        app.load_succeeded(vec![record("image-archiving")]);
        assert_eq!(app.modules.len(), 1);
    }

    #[test]
    fn load_failed_keeps_prior_modules() {
        let mut app = app_with("patient-management");
        app.load_succeeded(vec![record("patient-management")]);
        app.start_load();
        app.load_failed("Failed to load module data".to_string());

        assert_eq!(
            app.load,
            LoadState::Failed("Failed to load module data".to_string())
        );
        assert_eq!(app.modules.len(), 1);
    }

    #[test]
    fn absent_default_falls_back_to_first_module() {
        let mut app = app_with("patient-management");
        app.load_succeeded(vec![record("exam-scheduling"), record("image-archiving")]);
        assert_eq!(app.active, "exam-scheduling");
        assert!(app.active_module().is_some());
    }

    #[test]
    fn empty_list_leaves_active_unresolved() {
        let mut app = app_with("patient-management");
        app.load_succeeded(Vec::new());
        assert_eq!(app.load, LoadState::Ready);
        assert_eq!(app.active, "patient-management");
        assert!(app.active_module().is_none());
    }

    #[test]
    fn select_is_idempotent_and_stores_verbatim() {
        let mut app = app_with("patient-management");
        app.load_succeeded(vec![record("patient-management"), record("exam-scheduling")]);

        app.select("exam-scheduling");
        app.select("exam-scheduling");
        assert_eq!(app.active, "exam-scheduling");

        // Absent id: stored, but nothing resolves and no panel renders.
        app.select("billing");
        assert_eq!(app.active, "billing");
        assert!(app.active_module().is_none());
    }

    #[test]
    fn sidebar_selection_closes_the_sidebar() {
        let mut app = app_with("patient-management");
        app.load_succeeded(vec![record("patient-management"), record("exam-scheduling")]);
        app.toggle_sidebar();
        assert!(app.sidebar_open);

        app.select_from_sidebar("exam-scheduling");
        assert_eq!(app.active, "exam-scheduling");
        assert!(!app.sidebar_open);
    }

    #[test]
    fn overview_and_remainder_split_without_overlap() {
        let mut app = app_with("m0");
        app.load_succeeded((0..6).map(|i| record(&format!("m{i}"))).collect());

        let overview: Vec<&str> = app.overview_modules().iter().map(|m| m.id.as_str()).collect();
        let remaining: Vec<&str> = app
            .remaining_modules()
            .iter()
            .map(|m| m.id.as_str())
            .collect();

        assert_eq!(overview, vec!["m0", "m1", "m2", "m3"]);
        assert_eq!(remaining, vec!["m4", "m5"]);
    }

    #[test]
    fn short_lists_have_no_remainder() {
        let mut app = app_with("m0");
        app.load_succeeded((0..3).map(|i| record(&format!("m{i}"))).collect());
        assert_eq!(app.overview_modules().len(), 3);
        assert!(app.remaining_modules().is_empty());
    }

    #[test]
    fn keyboard_selection_clamps_at_the_ends() {
        let mut app = app_with("m0");
        app.load_succeeded((0..3).map(|i| record(&format!("m{i}"))).collect());

        app.select_prev();
        assert_eq!(app.active, "m0");

        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.active, "m2");
    }

    #[test]
    fn duplicate_ids_resolve_to_the_first_match() {
        let mut app = app_with("dup");
        let mut first = record("dup");
        first.title = "first".to_string();
        let mut second = record("dup");
        second.title = "second".to_string();
        app.load_succeeded(vec![first, second]);

        assert_eq!(app.active_module().map(|m| m.title.as_str()), Some("first"));
    }
}
