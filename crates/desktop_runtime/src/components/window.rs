use super::*;
use crate::apps;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(panel_id: PanelId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = {
        let panel_id = panel_id.clone();
        Signal::derive(move || state.get().window(&panel_id).cloned())
    };
    let focused = {
        let panel_id = panel_id.clone();
        Signal::derive(move || state.get().is_focused(&panel_id))
    };
    let small_screen = Signal::derive(move || state.get().small_screen());
    let full_screen = Signal::derive(move || {
        window
            .get()
            .map(|w| w.is_full_screen(state.get().viewport))
            .unwrap_or(false)
    });

    // Mounted once per open window so panel state survives focus, move, and minimize.
    let title = window.get_untracked().map(|w| w.title).unwrap_or_default();
    let body = apps::render_window_contents(&panel_id, title.clone(), focused, small_screen);

    let focus = {
        let panel_id = panel_id.clone();
        move |_| {
            let should_focus = window
                .get_untracked()
                .map(|w| w.minimized || !focused.get_untracked())
                .unwrap_or(false);
            if should_focus {
                runtime.dispatch_action(DesktopAction::FocusWindow {
                    panel_id: panel_id.clone(),
                });
            }
        }
    };
    let minimize = {
        let panel_id = panel_id.clone();
        move || {
            runtime.dispatch_action(DesktopAction::MinimizeWindow {
                panel_id: panel_id.clone(),
            })
        }
    };
    let toggle_maximize = {
        let panel_id = panel_id.clone();
        move || {
            runtime.dispatch_action(DesktopAction::ToggleMaximize {
                panel_id: panel_id.clone(),
            })
        }
    };
    let close = {
        let panel_id = panel_id.clone();
        move || {
            runtime.dispatch_action(DesktopAction::CloseWindow {
                panel_id: panel_id.clone(),
            })
        }
    };
    let begin_drag = {
        let panel_id = panel_id.clone();
        move |ev: web_sys::PointerEvent| {
            if ev.pointer_type() == "mouse" && ev.button() != 0 {
                return;
            }
            if ev.pointer_type() != "mouse" && !ev.is_primary() {
                return;
            }
            if full_screen.get_untracked() {
                return;
            }
            try_set_pointer_capture(&ev);
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::BeginDrag {
                panel_id: panel_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let titlebar_double_click = {
        let toggle_maximize = toggle_maximize.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            toggle_maximize();
        }
    };

    let class = move || {
        let Some(win) = window.get() else {
            return "desktop-window".to_string();
        };
        let focused_class = if focused.get() { " focused" } else { "" };
        let minimized_class = if win.minimized { " minimized" } else { "" };
        let full_screen_class = if full_screen.get() { " full-screen" } else { "" };
        let dragging_class = if runtime
            .interaction
            .get()
            .dragging
            .is_some_and(|drag| drag.panel_id == win.id)
        {
            " dragging"
        } else {
            ""
        };
        format!("desktop-window{focused_class}{minimized_class}{full_screen_class}{dragging_class}")
    };
    let style = move || {
        window
            .get()
            .map(|win| window_style(&win, full_screen.get()))
            .unwrap_or_default()
    };

    view! {
        <section
            class=class
            style=style
            on:pointerdown=focus
            role="dialog"
            aria-label=title.clone()
            aria-hidden=move || window.get().map(|w| w.minimized).unwrap_or(true).to_string()
        >
            <header
                class="titlebar"
                on:pointerdown=begin_drag
                on:dblclick=titlebar_double_click
            >
                <div class="titlebar-controls">
                    <button
                        class="titlebar-close"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            close();
                        }
                    />
                    <Show when=move || !small_screen.get() fallback=|| ()>
                        <button
                            class="titlebar-minimize"
                            aria-label="Minimize window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click={
                                let minimize = minimize.clone();
                                move |ev| {
                                    stop_mouse_event(&ev);
                                    minimize();
                                }
                            }
                        />
                        <button
                            class="titlebar-maximize"
                            aria-label=move || {
                                if window.get().map(|w| w.maximized).unwrap_or(false) {
                                    "Restore window"
                                } else {
                                    "Maximize window"
                                }
                            }
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click={
                                let toggle_maximize = toggle_maximize.clone();
                                move |ev| {
                                    stop_mouse_event(&ev);
                                    toggle_maximize();
                                }
                            }
                        />
                    </Show>
                </div>
                <h3 class="titlebar-title">{title.clone()}</h3>
                <button
                    class="titlebar-desktop"
                    title="Back to Desktop"
                    on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(DesktopAction::CloseAll);
                    }
                >
                    "Desktop"
                </button>
            </header>
            <div class="window-body">{body}</div>
        </section>
    }
}
