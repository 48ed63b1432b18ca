use desktop_runtime::{site_metadata, DesktopProvider, DesktopShell, OPEN_QUERY_PARAM};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let site = site_metadata();

    view! {
        <Title text=site.title.clone() />
        <Meta name="description" content=site.description.clone() />
        <Meta name="author" content=site.owner.clone() />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/projects/:slug" view=CanonicalProjectRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let query = use_query_map();
    let open_query = query.with_untracked(|map| map.get(OPEN_QUERY_PARAM).cloned());

    view! {
        <DesktopProvider open_query=open_query>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
fn CanonicalProjectRoute() -> impl IntoView {
    let params = use_params_map();
    let slug = move || {
        params
            .with(|map| map.get("slug").cloned())
            .unwrap_or_else(|| "unknown".to_string())
    };

    view! {
        <section class="canonical-content canonical-project">
            <h1>"Project"</h1>
            <p>{move || format!("Slug: {}", slug())}</p>
            <A href=move || format!("/?{OPEN_QUERY_PARAM}=projects:{}", slug())>"Open in Desktop"</A>
        </section>
    }
}
