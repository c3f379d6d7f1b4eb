use crate::domain::orders::ui::details::RadiologyOrderDetails;
use crate::domain::orders::ui::list::RadiologyOrderList;
use crate::domain::worklist::ui::WorklistPage;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="page__status">"Page not found"</p> }>
                    <Route path=path!("/") view=RadiologyOrderList />
                    <Route path=path!("/orders/:uuid") view=RadiologyOrderDetails />
                    <Route path=path!("/worklist") view=WorklistPage />
                </Routes>
            </Shell>
        </Router>
    }
}
