//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and viewport
//! tracking. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    deep_link::parse_deep_link,
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host helpers for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn install_viewport_tracking(runtime: DesktopRuntimeContext) {
    let sync = move || {
        runtime.dispatch_action(DesktopAction::SetViewport {
            viewport: runtime.host.get_value().viewport(),
        });
    };
    sync();
    let resize_listener = window_event_listener(ev::resize, move |_| sync());
    on_cleanup(move || resize_listener.remove());
}

fn apply_deep_link(runtime: DesktopRuntimeContext, open_query: &str) {
    let link = parse_deep_link(open_query);
    for err in &link.rejected {
        logging::warn!("ignoring deep-link target: {err}");
    }
    if !link.panels.is_empty() {
        runtime.dispatch_action(DesktopAction::ApplyDeepLink {
            panels: link.panels,
        });
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Raw `open` query value naming panels to open on load.
    #[prop(optional_no_strip)]
    open_query: Option<String>,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext);
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let new_effects = reduce_desktop(&mut desktop, &mut ui, action);
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    effect_executor::install(runtime);
    install_viewport_tracking(runtime);
    if let Some(open_query) = open_query.as_deref() {
        apply_deep_link(runtime, open_query);
    }
    logging::log!("desktop runtime ready");

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
