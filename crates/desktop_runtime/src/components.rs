//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use std::time::Duration;

use desktop_app_contract::PanelId;
use leptos::*;

use self::{taskbar::Taskbar, window::DesktopWindow};

use crate::{
    catalog::{self, PanelDescriptor},
    model::{PointerPosition, WindowRecord},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Taskbar clock refresh period.
const TASKBAR_CLOCK_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    if runtime.interaction.get_untracked().dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndDrag);
    }
}

/// Inline style for a window: pixel geometry, or the whole desktop when full-screen.
///
/// Minimized windows stay mounted but are not displayed.
fn window_style(window: &WindowRecord, full_screen: bool) -> String {
    if window.minimized {
        format!("display:none;z-index:{};", window.z_index)
    } else if full_screen {
        format!("left:0;top:0;width:100%;height:100%;z-index:{};", window.z_index)
    } else {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            window.position.x, window.position.y, window.size.w, window.size.h, window.z_index
        )
    }
}

#[component]
/// Root desktop shell: icon grid, window layer, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let small_screen = Signal::derive(move || state.get().small_screen());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::DragTo {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    view! {
        <div
            id="desktop-shell-root"
            class=move || {
                if small_screen.get() { "desktop-shell small-screen" } else { "desktop-shell" }
            }
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <DesktopIconGrid small_screen=small_screen />
            <div class="desktop-window-layer">
                <For
                    each=move || state.get().windows
                    key=|window| window.id.clone()
                    children=move |window| view! { <DesktopWindow panel_id=window.id /> }
                />
            </div>
            <Taskbar />
        </div>
    }
}

#[component]
fn DesktopIconGrid(small_screen: Signal<bool>) -> impl IntoView {
    view! {
        <nav class="desktop-icons" aria-label="Desktop">
            {move || {
                catalog::grouped_panels(small_screen.get())
                    .into_iter()
                    .map(|(group, panels)| {
                        view! {
                            <section class="desktop-icon-group" data-group=group.heading()>
                                <h2 class="desktop-icon-group-heading">{group.heading()}</h2>
                                {panels
                                    .into_iter()
                                    .map(|panel| view! { <DesktopIcon panel=panel /> })
                                    .collect_view()}
                            </section>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
fn DesktopIcon(panel: &'static PanelDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let panel_id: PanelId = panel.id.clone();
    let open = move |_| {
        runtime.dispatch_action(DesktopAction::OpenWindow {
            panel_id: panel_id.clone(),
        })
    };

    view! {
        <button
            type="button"
            class="desktop-icon"
            title=panel.tooltip.clone()
            on:click=open
        >
            <span class="desktop-icon-glyph" aria-hidden="true">{panel.icon.clone()}</span>
            <span class="desktop-icon-label">{panel.desktop_label.clone()}</span>
        </button>
    }
}
