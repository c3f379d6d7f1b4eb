use leptos::prelude::*;
use leptos_router::components::A;

/// Page chrome shared by every view: module header plus navigation between
/// the REST order table and the legacy worklist.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Radiology orders"</h1>
                </div>
                <nav class="header__nav">
                    <A href="/">"Orders"</A>
                    <A href="/worklist">"Worklist"</A>
                </nav>
            </div>
            <main class="page__content">{children()}</main>
        </div>
    }
}
