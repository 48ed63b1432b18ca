//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::PanelId;

use crate::{
    catalog,
    model::{
        DesktopState, DragSession, InteractionState, PointerPosition, Viewport, WindowPosition,
        WindowSize,
    },
    window_manager::{
        close_window_internal, focus_window_internal, normalize_window_stack,
        open_window_internal, reposition_window,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a panel (or refocus it when already open).
    OpenWindow {
        /// Panel to open.
        panel_id: PanelId,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        panel_id: PanelId,
    },
    /// Focus a window by id, restoring it when minimized.
    FocusWindow {
        /// Window to focus.
        panel_id: PanelId,
    },
    /// Move a window to a clamped position.
    MoveWindow {
        /// Window to move.
        panel_id: PanelId,
        /// Requested origin.
        position: WindowPosition,
    },
    /// Begin dragging a window by its titlebar.
    BeginDrag {
        /// Window being dragged.
        panel_id: PanelId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress drag.
    DragTo {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active drag.
    EndDrag,
    /// Flip the maximized flag.
    ToggleMaximize {
        /// Window to maximize or restore.
        panel_id: PanelId,
    },
    /// Minimize a window without moving focus.
    MinimizeWindow {
        /// Window to minimize.
        panel_id: PanelId,
    },
    /// Taskbar entry click (restore, minimize, or focus).
    ToggleTaskbarWindow {
        /// Window associated with the taskbar entry.
        panel_id: PanelId,
    },
    /// Close every window ("back to desktop").
    CloseAll,
    /// Record the current viewport.
    SetViewport {
        /// New viewport.
        viewport: Viewport,
    },
    /// Open the panels named by a deep link, in order.
    ApplyDeepLink {
        /// Panels to open; the last one ends focused.
        panels: Vec<PanelId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the window's primary input.
    FocusWindowInput(PanelId),
    /// Set `document.title`.
    SyncDocumentTitle(String),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Every action is total: unknown ids and actions that do not apply to the current state leave
/// it unchanged.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let previous_focus = state.focused.clone();
    let mut effects = Vec::new();

    match action {
        DesktopAction::OpenWindow { panel_id } => {
            open_panel(state, &panel_id);
            push_focus_input(state, &panel_id, &mut effects);
        }
        DesktopAction::CloseWindow { panel_id } => {
            if close_window_internal(state, &panel_id) {
                clear_drag_for(interaction, &panel_id);
            }
        }
        DesktopAction::FocusWindow { panel_id } => {
            if focus_window_internal(state, &panel_id) {
                push_focus_input(state, &panel_id, &mut effects);
            }
        }
        DesktopAction::MoveWindow { panel_id, position } => {
            reposition_window(state, &panel_id, position);
        }
        DesktopAction::BeginDrag { panel_id, pointer } => {
            let viewport = state.viewport;
            let Some(window) = state.window(&panel_id) else {
                return effects;
            };
            if window.is_full_screen(viewport) {
                return effects;
            }
            let position_start = window.position;
            focus_window_internal(state, &panel_id);
            interaction.dragging = Some(DragSession {
                panel_id,
                pointer_start: pointer,
                position_start,
            });
        }
        DesktopAction::DragTo { pointer } => {
            if let Some(drag) = interaction.dragging.as_ref() {
                let position = drag.position_start.offset(
                    pointer.x - drag.pointer_start.x,
                    pointer.y - drag.pointer_start.y,
                );
                reposition_window(state, &drag.panel_id, position);
            }
        }
        DesktopAction::EndDrag => {
            interaction.dragging = None;
        }
        DesktopAction::ToggleMaximize { panel_id } => {
            if state.small_screen() {
                return effects;
            }
            if let Some(window) = state.windows.iter_mut().find(|w| w.id == panel_id) {
                window.maximized = !window.maximized;
                clear_drag_for(interaction, &panel_id);
            }
        }
        DesktopAction::MinimizeWindow { panel_id } => {
            if let Some(window) = state.windows.iter_mut().find(|w| w.id == panel_id) {
                window.minimized = true;
                clear_drag_for(interaction, &panel_id);
            }
        }
        DesktopAction::ToggleTaskbarWindow { panel_id } => {
            let Some(window) = state.window(&panel_id) else {
                return effects;
            };
            if !window.minimized && state.is_focused(&panel_id) {
                if let Some(window) = state.windows.iter_mut().find(|w| w.id == panel_id) {
                    window.minimized = true;
                }
            } else if focus_window_internal(state, &panel_id) {
                push_focus_input(state, &panel_id, &mut effects);
            }
        }
        DesktopAction::CloseAll => {
            state.windows.clear();
            state.focused = None;
            interaction.dragging = None;
        }
        DesktopAction::SetViewport { viewport } => {
            state.viewport = viewport;
            let ids: Vec<_> = state.windows.iter().map(|w| w.id.clone()).collect();
            for panel_id in &ids {
                let Some(position) = state.window(panel_id).map(|w| w.position) else {
                    continue;
                };
                reposition_window(state, panel_id, position);
            }
        }
        DesktopAction::ApplyDeepLink { panels } => {
            for panel_id in &panels {
                open_panel(state, panel_id);
            }
            if let Some(last) = panels.last() {
                push_focus_input(state, last, &mut effects);
            }
        }
    }

    normalize_window_stack(state);
    if state.focused != previous_focus {
        effects.push(RuntimeEffect::SyncDocumentTitle(document_title(state)));
    }
    effects
}

/// Title for the browser tab: the focused window's title followed by the site title.
pub fn document_title(state: &DesktopState) -> String {
    let site = &catalog::site_metadata().title;
    match state.focused_window_id().and_then(|id| state.window(id)) {
        Some(window) => format!("{} | {site}", window.title),
        None => site.clone(),
    }
}

fn open_panel(state: &mut DesktopState, panel_id: &PanelId) {
    let (title, size) = match catalog::panel(panel_id) {
        Ok(panel) => (panel.title.clone(), panel.default_size()),
        Err(_) => (panel_id.to_string(), WindowSize::default()),
    };
    open_window_internal(state, panel_id, title, size);
    focus_window_internal(state, panel_id);
}

fn push_focus_input(state: &DesktopState, panel_id: &PanelId, effects: &mut Vec<RuntimeEffect>) {
    if state.is_focused(panel_id) {
        effects.push(RuntimeEffect::FocusWindowInput(panel_id.clone()));
    }
}

fn clear_drag_for(interaction: &mut InteractionState, panel_id: &PanelId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|drag| drag.panel_id == *panel_id)
    {
        interaction.dragging = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: &str) -> PanelId {
        PanelId::trusted(raw)
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, raw: &str) {
        reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenWindow { panel_id: id(raw) },
        );
    }

    #[test]
    fn open_window_uses_catalog_title_and_focuses() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                panel_id: id("skills"),
            },
        );

        let window = state.window(&id("skills")).expect("open");
        assert_eq!(window.title, "Technical Skills");
        assert_eq!(window.position, WindowPosition { x: 50, y: 50 });
        assert_eq!(state.focused_window_id(), Some(&id("skills")));
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::FocusWindowInput(id("skills")),
                RuntimeEffect::SyncDocumentTitle(
                    "Technical Skills | Exodus OS - Developer Portfolio".to_string()
                ),
            ]
        );
    }

    #[test]
    fn reopening_open_window_only_refocuses() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "about");
        open(&mut state, &mut interaction, "skills");
        open(&mut state, &mut interaction, "about");

        let ids: Vec<_> = state.windows.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["about", "skills"]);
        assert_eq!(state.focused_window_id(), Some(&id("about")));
        assert_eq!(state.window(&id("about")).map(|w| w.z_index), Some(3));
    }

    #[test]
    fn taskbar_toggle_minimizes_if_focused_and_restores_if_minimized() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "terminal");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                panel_id: id("terminal"),
            },
        );
        assert!(state.window(&id("terminal")).expect("open").minimized);

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                panel_id: id("terminal"),
            },
        );
        assert!(!state.window(&id("terminal")).expect("open").minimized);
        assert!(effects.contains(&RuntimeEffect::FocusWindowInput(id("terminal"))));
    }

    #[test]
    fn taskbar_toggle_focuses_background_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "about");
        open(&mut state, &mut interaction, "skills");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                panel_id: id("about"),
            },
        );
        assert_eq!(state.focused_window_id(), Some(&id("about")));
        assert!(!state.window(&id("about")).expect("open").minimized);
    }

    #[test]
    fn minimize_keeps_focus_and_membership() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "about");

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                panel_id: id("about"),
            },
        );
        assert!(effects.is_empty());
        assert!(state.is_open(&id("about")));
        assert_eq!(state.focused_window_id(), Some(&id("about")));
    }

    #[test]
    fn focus_restores_minimized_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "about");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                panel_id: id("about"),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                panel_id: id("about"),
            },
        );
        assert!(!state.window(&id("about")).expect("open").minimized);
    }

    #[test]
    fn drag_moves_by_pointer_delta_with_clamping() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "about");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                panel_id: id("about"),
                pointer: PointerPosition { x: 100, y: 60 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::DragTo {
                pointer: PointerPosition { x: 125, y: 100 },
            },
        );
        assert_eq!(
            state.window(&id("about")).map(|w| w.position),
            Some(WindowPosition { x: 75, y: 90 })
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::DragTo {
                pointer: PointerPosition { x: -900, y: 5_000 },
            },
        );
        assert_eq!(
            state.window(&id("about")).map(|w| w.position),
            Some(WindowPosition { x: 0, y: 768 - 300 })
        );

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndDrag);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn drag_is_ignored_while_maximized() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "about");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                panel_id: id("about"),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                panel_id: id("about"),
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn maximize_is_noop_on_small_screen() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetViewport {
                viewport: Viewport {
                    width: 390,
                    height: 844,
                },
            },
        );
        open(&mut state, &mut interaction, "about");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                panel_id: id("about"),
            },
        );
        let window = state.window(&id("about")).expect("open");
        assert!(!window.maximized);
        assert!(window.is_full_screen(state.viewport));
    }

    #[test]
    fn shrinking_viewport_pulls_windows_back_inside() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "about");
        open(&mut state, &mut interaction, "skills");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                panel_id: id("about"),
                position: WindowPosition { x: 600, y: 400 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                panel_id: id("skills"),
            },
        );
        let skills_before = state.window(&id("skills")).expect("open").position;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetViewport {
                viewport: Viewport {
                    width: 800,
                    height: 600,
                },
            },
        );

        let about = state.window(&id("about")).expect("open");
        assert_eq!(
            about.position,
            WindowPosition {
                x: 800 - about.size.w,
                y: 600 - about.size.h,
            }
        );
        assert_eq!(
            state.window(&id("skills")).expect("open").position,
            skills_before
        );
    }

    #[test]
    fn close_all_clears_focus_and_title() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "about");
        open(&mut state, &mut interaction, "blog");

        let effects = reduce_desktop(&mut state, &mut interaction, DesktopAction::CloseAll);
        assert!(state.windows.is_empty());
        assert_eq!(state.focused_window_id(), None);
        assert_eq!(
            effects,
            vec![RuntimeEffect::SyncDocumentTitle(
                "Exodus OS - Developer Portfolio".to_string()
            )]
        );
    }

    #[test]
    fn closing_dragged_window_ends_drag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "about");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                panel_id: id("about"),
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                panel_id: id("about"),
            },
        );
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn deep_link_opens_in_order_and_focuses_last() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ApplyDeepLink {
                panels: vec![id("terminal"), id("agrix")],
            },
        );
        let ids: Vec<_> = state.windows.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["terminal", "agrix"]);
        assert_eq!(state.focused_window_id(), Some(&id("agrix")));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "about");
        let before = state.clone();

        for action in [
            DesktopAction::CloseWindow { panel_id: id("x") },
            DesktopAction::FocusWindow { panel_id: id("x") },
            DesktopAction::MinimizeWindow { panel_id: id("x") },
            DesktopAction::ToggleMaximize { panel_id: id("x") },
            DesktopAction::ToggleTaskbarWindow { panel_id: id("x") },
            DesktopAction::MoveWindow {
                panel_id: id("x"),
                position: WindowPosition { x: 1, y: 1 },
            },
        ] {
            assert!(reduce_desktop(&mut state, &mut interaction, action).is_empty());
        }
        assert_eq!(state, before);
    }
}
