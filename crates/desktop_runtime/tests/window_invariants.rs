use desktop_app_contract::PanelId;
use desktop_runtime::{
    reduce_desktop, DesktopAction, DesktopState, InteractionState, WindowPosition,
};
use pretty_assertions::assert_eq;

const IDS: [&str; 3] = ["about", "skills", "terminal"];

#[derive(Debug, Clone, Copy)]
enum Step {
    Open(usize),
    Close(usize),
}

fn id(raw: &str) -> PanelId {
    PanelId::trusted(raw)
}

fn apply(state: &mut DesktopState, interaction: &mut InteractionState, action: DesktopAction) {
    reduce_desktop(state, interaction, action);
}

fn run(steps: &[Step]) -> DesktopState {
    let mut state = DesktopState::default();
    let mut interaction = InteractionState::default();
    for step in steps {
        let action = match *step {
            Step::Open(i) => DesktopAction::OpenWindow {
                panel_id: id(IDS[i]),
            },
            Step::Close(i) => DesktopAction::CloseWindow {
                panel_id: id(IDS[i]),
            },
        };
        apply(&mut state, &mut interaction, action);
    }
    state
}

fn all_sequences(len: usize) -> Vec<Vec<Step>> {
    let steps: Vec<Step> = (0..IDS.len())
        .flat_map(|i| [Step::Open(i), Step::Close(i)])
        .collect();
    let mut sequences = vec![Vec::new()];
    for _ in 0..len {
        sequences = sequences
            .into_iter()
            .flat_map(|prefix| {
                steps.iter().map(move |step| {
                    let mut next = prefix.clone();
                    next.push(*step);
                    next
                })
            })
            .collect();
    }
    sequences
}

#[test]
fn focus_always_names_an_open_window() {
    for len in 1..=4 {
        for steps in all_sequences(len) {
            let state = run(&steps);

            let mut ids: Vec<_> = state.windows.iter().map(|w| w.id.clone()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), state.windows.len(), "duplicate window after {steps:?}");

            match state.focused_window_id() {
                Some(focused) => assert!(state.is_open(focused), "dangling focus after {steps:?}"),
                None => assert!(state.windows.is_empty(), "lost focus after {steps:?}"),
            }

            if let Some(focused) = state.focused_window_id().and_then(|id| state.window(id)) {
                assert!(
                    state.windows.iter().all(|w| w.z_index <= focused.z_index),
                    "focused window not on top after {steps:?}"
                );
            }
        }
    }
}

#[test]
fn open_about_open_skills_close_about_focuses_skills() {
    let state = run(&[Step::Open(0), Step::Open(1), Step::Close(0)]);
    assert!(!state.is_open(&id("about")));
    assert!(state.is_open(&id("skills")));
    assert_eq!(state.focused_window_id(), Some(&id("skills")));
}

#[test]
fn closing_only_window_leaves_nothing_focused() {
    let state = run(&[Step::Open(2), Step::Close(2)]);
    assert!(state.windows.is_empty());
    assert_eq!(state.focused_window_id(), None);
}

#[test]
fn closing_unfocused_window_keeps_focus() {
    let state = run(&[Step::Open(0), Step::Open(1), Step::Open(2), Step::Close(1)]);
    assert_eq!(state.focused_window_id(), Some(&id("terminal")));
}

#[test]
fn reopening_a_closed_window_starts_fresh() {
    let mut state = DesktopState::default();
    let mut interaction = InteractionState::default();
    apply(
        &mut state,
        &mut interaction,
        DesktopAction::OpenWindow {
            panel_id: id("about"),
        },
    );
    apply(
        &mut state,
        &mut interaction,
        DesktopAction::MoveWindow {
            panel_id: id("about"),
            position: WindowPosition { x: 200, y: 120 },
        },
    );
    apply(
        &mut state,
        &mut interaction,
        DesktopAction::MinimizeWindow {
            panel_id: id("about"),
        },
    );
    apply(
        &mut state,
        &mut interaction,
        DesktopAction::CloseWindow {
            panel_id: id("about"),
        },
    );
    apply(
        &mut state,
        &mut interaction,
        DesktopAction::OpenWindow {
            panel_id: id("about"),
        },
    );

    let window = state.window(&id("about")).expect("about reopened");
    assert_eq!(window.position, WindowPosition::default());
    assert!(!window.minimized);
    assert!(!window.maximized);
}

#[test]
fn reopening_an_open_window_only_focuses_it() {
    let state = run(&[Step::Open(0), Step::Open(1), Step::Open(0)]);
    assert_eq!(state.windows.len(), 2);
    assert_eq!(state.focused_window_id(), Some(&id("about")));
}
