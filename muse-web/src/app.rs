use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/muse-web.css"/>
        <Title text="Muse - AI topic suggester"/>
        <Meta name="description" content="Turn a few keywords into ready-to-use topic ideas"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Home/>
                </Routes>
            </main>
        </Router>
    }
}
