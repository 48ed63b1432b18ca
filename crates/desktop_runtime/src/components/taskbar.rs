use super::*;
use desktop_app_contract::Ticker;
use platform_host::ClockSnapshot;

fn taskbar_label(window: &WindowRecord) -> String {
    catalog::panel(&window.id)
        .map(|panel| panel.taskbar_label.clone())
        .unwrap_or_else(|_| window.title.clone())
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock_label = create_rw_signal(ClockSnapshot::now().label());
    Ticker::start(TASKBAR_CLOCK_REFRESH_INTERVAL, move || {
        clock_label.set(ClockSnapshot::now().label());
    });

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Taskbar">
            <button
                type="button"
                class="taskbar-home"
                title="Back to Desktop"
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::CloseAll);
                }
            >
                "Desktop"
            </button>
            <div class="taskbar-windows" role="list">
                <For
                    each=move || state.get().ordered_taskbar_windows()
                    key=|window| window.id.clone()
                    children=move |window| view! { <TaskbarWindowButton window=window /> }
                />
            </div>
            <div class="taskbar-clock" aria-live="polite">{move || clock_label.get()}</div>
        </footer>
    }
}

#[component]
fn TaskbarWindowButton(window: WindowRecord) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let label = taskbar_label(&window);
    let panel_id = window.id;

    let active = {
        let panel_id = panel_id.clone();
        move || {
            let desktop = state.get();
            desktop.is_focused(&panel_id)
                && desktop.window(&panel_id).is_some_and(|w| !w.minimized)
        }
    };
    let toggle = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow {
            panel_id: panel_id.clone(),
        });
    };

    view! {
        <button
            type="button"
            role="listitem"
            class=move || if active() { "taskbar-window active" } else { "taskbar-window" }
            title=label.clone()
            on:click=toggle
        >
            {label.clone()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{WindowPosition, WindowSize};

    fn record(id: &str, title: &str) -> WindowRecord {
        WindowRecord {
            id: PanelId::trusted(id),
            title: title.to_string(),
            position: WindowPosition::default(),
            size: WindowSize::default(),
            z_index: 1,
            minimized: false,
            maximized: false,
        }
    }

    #[test]
    fn taskbar_label_prefers_catalog_label() {
        let terminal = catalog::panel_by_str("terminal").expect("terminal panel");
        assert_eq!(
            taskbar_label(&record("terminal", "whatever")),
            terminal.taskbar_label
        );
    }

    #[test]
    fn taskbar_label_falls_back_to_window_title() {
        assert_eq!(
            taskbar_label(&record("not-in-catalog", "Scratch")),
            "Scratch"
        );
    }
}
