//! Shared window-manager transition helpers used by the desktop reducer.

use desktop_app_contract::PanelId;

use crate::model::{DesktopState, Viewport, WindowPosition, WindowRecord, WindowSize};

/// Appends a fresh record for `id` unless it is already open. Returns `true` when appended.
pub fn open_window_internal(
    state: &mut DesktopState,
    id: &PanelId,
    title: String,
    size: WindowSize,
) -> bool {
    if state.is_open(id) {
        return false;
    }
    state.windows.push(WindowRecord {
        id: id.clone(),
        title,
        position: WindowPosition::default(),
        size,
        z_index: 0,
        minimized: false,
        maximized: false,
    });
    true
}

/// Focuses `id` and clears its minimized flag.
///
/// Returns `true` when the window exists. Unknown ids leave the state untouched.
pub fn focus_window_internal(state: &mut DesktopState, id: &PanelId) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == *id) else {
        return false;
    };
    window.minimized = false;
    state.focused = Some(id.clone());
    normalize_window_stack(state);
    true
}

/// Removes `id` from the open set.
///
/// When the closed window held focus, focus moves to the first remaining window in open order,
/// or to nothing when none remain. Returns `true` when a window was removed.
pub fn close_window_internal(state: &mut DesktopState, id: &PanelId) -> bool {
    let before = state.windows.len();
    state.windows.retain(|w| w.id != *id);
    if state.windows.len() == before {
        return false;
    }
    if state.is_focused(id) {
        state.focused = state.windows.first().map(|w| w.id.clone());
    }
    normalize_window_stack(state);
    true
}

/// Recomputes z-order: open order for unfocused windows, focused window above all.
pub fn normalize_window_stack(state: &mut DesktopState) {
    if state
        .focused
        .as_ref()
        .is_some_and(|focused| !state.windows.iter().any(|w| w.id == *focused))
    {
        state.focused = None;
    }

    let top = (state.windows.len() + 1) as u32;
    let focused = state.focused.clone();
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.z_index = if focused.as_ref() == Some(&window.id) {
            top
        } else {
            (idx + 1) as u32
        };
    }
}

/// Clamps a window origin to `[0, viewport - size]` on both axes.
///
/// A window larger than the viewport is pinned to the origin on that axis.
pub fn clamp_position(position: WindowPosition, size: WindowSize, viewport: Viewport) -> WindowPosition {
    let max_x = (viewport.width - size.w).max(0);
    let max_y = (viewport.height - size.h).max(0);
    WindowPosition {
        x: position.x.clamp(0, max_x),
        y: position.y.clamp(0, max_y),
    }
}

/// Moves `id` to a clamped position. Returns `true` when the stored position changed.
///
/// Ignored while the window is full-screen (maximized or small-screen layout).
pub fn reposition_window(state: &mut DesktopState, id: &PanelId, position: WindowPosition) -> bool {
    let viewport = state.viewport;
    let Some(window) = state.windows.iter_mut().find(|w| w.id == *id) else {
        return false;
    };
    if window.is_full_screen(viewport) {
        return false;
    }
    let clamped = clamp_position(position, window.size, viewport);
    if clamped == window.position {
        return false;
    }
    window.position = clamped;
    true
}
