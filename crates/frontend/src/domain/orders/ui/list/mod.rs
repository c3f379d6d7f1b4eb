mod rows;

use crate::shared::api_utils::rest_url;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use contracts::rest::{OrderPageRequest, OrderPageResponse};
use gloo_net::http::Request;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rows::{shape_rows, OrderRow, PanelState};

const PAGE_SIZE_DEFAULT: usize = 10;

/// Searchable, server-side paginated table of radiology orders.
///
/// Filtering and paging are delegated to the order-search endpoint; the
/// table itself never sorts or searches client-side.
#[component]
pub fn RadiologyOrderList() -> impl IntoView {
    let rows = RwSignal::new(Vec::<OrderRow>::new());
    let (patient_query, set_patient_query) = signal(String::new());
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(PAGE_SIZE_DEFAULT);
    let (total_count, set_total_count) = signal(0u64);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Searches may overlap; only the newest request is allowed to publish
    // its result.
    let generation = StoredValue::new(0u64);

    let load = move || {
        let seq = generation.get_value() + 1;
        generation.set_value(seq);

        let start_index = (page.get_untracked() * page_size.get_untracked()) as u32;
        let limit = page_size.get_untracked() as u32;
        let query = OrderPageRequest::page(start_index, limit)
            .with_patient(&patient_query.get_untracked())
            .query_string();
        let url = format!("{}?{}", rest_url("radiologyorder"), query);

        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            let outcome = fetch_order_page(&url).await;
            if generation.get_value() != seq {
                log!("Discarding stale order page for request {}", seq);
                return;
            }
            match outcome {
                Ok(response) => {
                    let total = response
                        .total_count
                        .unwrap_or(u64::from(start_index) + response.results.len() as u64);
                    set_total_count.set(total);
                    rows.set(shape_rows(&response.results));
                }
                Err(message) => set_error.set(Some(message)),
            }
            set_loading.set(false);
        });
    };

    let submit = move || {
        set_page.set(0);
        load();
    };

    let clear = move || {
        set_patient_query.set(String::new());
        set_page.set(0);
        load();
    };

    let go_to_page = move |new_page: usize| {
        set_page.set(new_page);
        load();
    };

    let change_page_size = move |new_size: usize| {
        set_page_size.set(new_size.max(1));
        set_page.set(0);
        load();
    };

    let total_pages = Signal::derive(move || {
        let size = page_size.get().max(1);
        (total_count.get() as usize).div_ceil(size)
    });

    load();

    view! {
        <div class="orders-list">
            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div class="filter-panel-header__left">
                        <input
                            id="patientUuid"
                            class="input"
                            type="text"
                            placeholder="Patient uuid"
                            prop:value=move || patient_query.get()
                            on:input=move |ev| set_patient_query.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    submit();
                                }
                            }
                        />
                        <button
                            id="findButton"
                            class="button button--primary"
                            on:click=move |_| submit()
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
                    <div class="filter-panel-header__center">
                        <PaginationControls
                            current_page=page
                            total_pages=total_pages
                            total_count=Signal::derive(move || total_count.get() as usize)
                            page_size=page_size
                            on_page_change=Callback::new(go_to_page)
                            on_page_size_change=Callback::new(change_page_size)
                        />
                    </div>
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

            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <div class="table">
                <table id="radiologyOrdersTable" class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Order number"</th>
                            <th class="table__header-cell">"Patient"</th>
                            <th class="table__header-cell">"Urgency"</th>
                            <th class="table__header-cell">"Imaging procedure"</th>
                            <th class="table__header-cell">"Referring physician"</th>
                            <th class="table__header-cell">"Scheduled date"</th>
                            <th class="table__header-cell">"Date activated"</th>
                        </tr>
                    </thead>
                    <tbody id="radiologyOrdersTableBody">
                        <For
                            each=move || rows.get()
                            key=|row| row.uuid.clone()
                            children=move |row| view! { <OrderRowView row=row /> }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// A single order row plus its lazily rendered, toggleable detail panel.
///
/// Clicking the row flips between collapsed and expanded; the panel is built
/// once on first expansion and kept mounted afterwards, so a second click
/// only hides it again.
#[component]
fn OrderRowView(row: OrderRow) -> impl IntoView {
    let panel = RwSignal::new(PanelState::default());

    let detail_href = format!("/orders/{}", urlencoding::encode(&row.uuid));

    let toggle = move |_| panel.update(|state| state.toggle());

    let uuid = row.uuid.clone();
    let physician = row.orderer.clone();
    let scheduled_status = row.scheduled_status.clone();
    let instructions = row.instructions.clone();
    let mwl_status = row.mwl_status.clone();

    view! {
        <tr class="table__row" class:shown=move || panel.get().expanded on:click=toggle>
            <td class="table__cell">
                <a
                    class="table__link"
                    href=detail_href
                    on:click=move |ev| ev.stop_propagation()
                >
                    {row.order_number.clone()}
                </a>
            </td>
            <td class="table__cell">{row.patient.clone()}</td>
            <td class="table__cell">{row.urgency.clone()}</td>
            <td class="table__cell">{row.concept.clone()}</td>
            <td class="table__cell">{row.orderer.clone()}</td>
            <td class="table__cell">{format_datetime(&row.scheduled_date)}</td>
            <td class="table__cell">{format_datetime(&row.date_activated)}</td>
        </tr>
        <Show when=move || panel.get().rendered>
            <tr
                class="table__detail-row"
                style:display=move || if panel.get().expanded { "table-row" } else { "none" }
            >
                <td class="table__cell" colspan="7">
                    <table class="order-detail">
                        <tr>
                            <td>"Order id"</td>
                            <td>{uuid.clone()}</td>
                        </tr>
                        <tr>
                            <td>"Referring physician"</td>
                            <td>{physician.clone()}</td>
                        </tr>
                        <tr>
                            <td>"Scheduled status"</td>
                            <td>{scheduled_status.clone()}</td>
                        </tr>
                        <tr>
                            <td>"Instructions"</td>
                            <td>{instructions.clone()}</td>
                        </tr>
                        <tr>
                            <td>"MWL status"</td>
                            <td>{mwl_status.clone()}</td>
                        </tr>
                    </table>
                </td>
            </tr>
        </Show>
    }
}

async fn fetch_order_page(url: &str) -> Result<OrderPageResponse, String> {
    let response = Request::get(url)
        .header("Accept", "application/json; charset=utf-8")
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if response.status() != 200 {
        return Err(format!("Server error: {}", response.status()));
    }
    response
        .json::<OrderPageResponse>()
        .await
        .map_err(|e| format!("Malformed order page: {e}"))
}
