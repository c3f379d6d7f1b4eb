use crate::shared::api_utils::portlet_url;
use contracts::worklist::{is_error_fragment, WorklistQuery};
use gloo_net::http::Request;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// The older worklist variant: the server renders the result table as an
/// HTML fragment and this page only issues the search and places the
/// fragment. Superseded by the REST order table, kept for hosts still using
/// the portlet.
#[component]
pub fn WorklistPage() -> impl IntoView {
    let (patient_query, set_patient_query) = signal(String::new());
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (sort_type, set_sort_type) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error_fragment, set_error_fragment) = signal::<Option<String>>(None);
    let (results_html, set_results_html) = signal(String::new());

    let generation = StoredValue::new(0u64);

    let load = move || {
        let seq = generation.get_value() + 1;
        generation.set_value(seq);

        let sort = sort_type.get_untracked();
        let query = WorklistQuery {
            patient_query: patient_query.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
            sort_type: if sort.is_empty() { None } else { Some(sort) },
        };
        let url = format!("{}?{}", portlet_url("orderSearch.portlet"), query.query_string());

        spawn_local(async move {
            set_loading.set(true);
            set_error_fragment.set(None);
            let outcome = fetch_fragment(&url).await;
            if generation.get_value() != seq {
                log!("Discarding stale worklist fragment for request {}", seq);
                return;
            }
            match outcome {
                // The portlet reports e.g. crossed date ranges inside the
                // fragment itself; such fragments go to the error region.
                Ok(fragment) if is_error_fragment(&fragment) => {
                    set_error_fragment.set(Some(fragment));
                }
                Ok(fragment) => set_results_html.set(fragment),
                Err(message) => set_error_fragment.set(Some(message)),
            }
            set_loading.set(false);
        });
    };

    let clear = move || {
        set_patient_query.set(String::new());
        set_start_date.set(String::new());
        set_end_date.set(String::new());
        load();
    };

    load();

    view! {
        <div class="worklist">
            <div class="filter-panel">
                <div class="filter-panel-header">
                    <input
                        name="patientQuery"
                        class="input"
                        type="text"
                        placeholder="Patient name or id"
                        prop:value=move || patient_query.get()
                        on:input=move |ev| set_patient_query.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                load();
                            }
                        }
                    />
                    <input
                        name="startDate"
                        class="input"
                        type="date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| set_start_date.set(event_target_value(&ev))
                    />
                    <input
                        name="endDate"
                        class="input"
                        type="date"
                        prop:value=move || end_date.get()
                        on:input=move |ev| set_end_date.set(event_target_value(&ev))
                    />
                    <select
                        id="selectSortType"
                        class="page-size-select"
                        prop:value=move || sort_type.get()
                        on:change=move |ev| {
                            set_sort_type.set(event_target_value(&ev));
                            load();
                        }
                    >
                        <option value="">"Default order"</option>
                        <option value="byDate">"By date"</option>
                        <option value="byPatient">"By patient"</option>
                    </select>
                    <button
                        id="findButton"
                        class="button button--primary"
                        on:click=move |_| load()
                    >
                        "Find"
                    </button>
                    <a
                        id="clearResults"
                        href="#"
                        class="filter-panel__clear"
                        on:click=move |ev| {
                            ev.prevent_default();
                            clear();
                        }
                    >
                        "Clear"
                    </a>
                </div>
            </div>

            <div
                id="openmrs_msg"
                {leptos::tachys::html::attribute::name("loading")}
                class="loading"
                style:display=move || if loading.get() { "block" } else { "none" }
            >
                "Loading..."
            </div>

            <span
                id="errorSpan"
                class="alert alert--error"
                style:display=move || if error_fragment.get().is_some() { "block" } else { "none" }
                inner_html=move || error_fragment.get().unwrap_or_default()
            ></span>

            <div id="results" inner_html=move || results_html.get()></div>
        </div>
    }
}

async fn fetch_fragment(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if response.status() != 200 {
        return Err(format!("Server error: {}", response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| format!("Unreadable response: {e}"))
}
