//! Test the render-state and selection logic

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadState {
    Loading,
    Failed(String),
    Ready,
}

#[test]
fn test_render_states_are_mutually_exclusive() {
    // The main content region renders exactly one of: spinner, error
    // block, card grids. Loading takes precedence, then error, then
    // loaded.
    fn rendered(state: &LoadState) -> &'static str {
        match state {
            LoadState::Loading => "spinner",
            LoadState::Failed(_) => "error",
            LoadState::Ready => "cards",
        }
    }

    assert_eq!(rendered(&LoadState::Loading), "spinner");
    assert_eq!(rendered(&LoadState::Failed("boom".into())), "error");
    assert_eq!(rendered(&LoadState::Ready), "cards");
}

#[test]
fn test_active_lookup_by_id() {
    // Simulate the active-module resolution: id lookup against the list,
    // no validation that the id exists.
    let modules: Vec<(&str, &str)> = vec![
        ("patient-management", "Patients"),
        ("exam-scheduling", "Scheduling"),
    ];

    fn resolve<'a>(modules: &'a [(&str, &str)], active: &str) -> Option<&'a str> {
        modules.iter().find(|(id, _)| *id == active).map(|(_, t)| *t)
    }

    assert_eq!(resolve(&modules, "exam-scheduling"), Some("Scheduling"));

    // Absent id: no detail panel, no crash.
    assert_eq!(resolve(&modules, "billing"), None);

    // Empty list: nothing resolves.
    let empty: Vec<(&str, &str)> = Vec::new();
    assert_eq!(resolve(&empty, "patient-management"), None);
}

#[test]
fn test_error_transition_leaves_modules_untouched() {
    // A failed fetch replaces the content with the error block but does
    // not clear previously loaded data.
    struct App {
        state: LoadState,
        modules: Vec<&'static str>,
    }

    fn load_failed(app: &mut App, message: &str) {
        app.state = LoadState::Failed(message.to_string());
    }

    let mut app = App {
        state: LoadState::Ready,
        modules: vec!["patient-management"],
    };
    load_failed(&mut app, "Failed to load module data");

    assert_eq!(
        app.state,
        LoadState::Failed("Failed to load module data".into())
    );
    assert_eq!(app.modules, vec!["patient-management"]);
}
