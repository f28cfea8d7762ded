use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use videogen_types::GeneratorTimings;

use crate::components::toaster::{Toaster, Toasts};
use crate::pages::landing::LandingPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Toaster::new());
    provide_context(GeneratorTimings::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/videogen-web.css"/>
        <Title text="VideoGen AI"/>
        <Meta
            name="description"
            content="Create realistic videos up to an hour long from a single line of text."
        />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
        <Toasts/>
    }
}
