use crate::shared::api_utils::rest_url;
use crate::shared::date_utils::format_datetime;
use contracts::orders::RadiologyOrder;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

/// Detail view of a single radiology order, addressed by uuid.
#[component]
pub fn RadiologyOrderDetails() -> impl IntoView {
    let params = use_params_map();
    let (order, set_order) = signal::<Option<RadiologyOrder>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let raw = params.with(|p| p.get("uuid").unwrap_or_default());
        let uuid = match Uuid::parse_str(&raw) {
            Ok(uuid) => uuid,
            Err(_) => {
                set_error.set(Some(format!("Invalid order identifier: {raw}")));
                set_loading.set(false);
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match fetch_order(uuid).await {
                Ok(data) => set_order.set(Some(data)),
                Err(message) => set_error.set(Some(message)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="order-details">
            <div class="page__header">
                <h2 class="page__title">
                    {move || {
                        order
                            .get()
                            .map(|o| o.order_number().to_string())
                            .filter(|number| !number.is_empty())
                            .unwrap_or_else(|| "Radiology order".to_string())
                    }}
                </h2>
                <A href="/">"Back to orders"</A>
            </div>

            <div
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

            {move || {
                order.get().map(|o| {
                    let scheduled = o
                        .scheduled_date
                        .as_deref()
                        .map(format_datetime)
                        .unwrap_or_default();
                    let activated = o
                        .date_activated
                        .as_deref()
                        .map(format_datetime)
                        .unwrap_or_default();
                    view! {
                        <table class="order-detail">
                            <tr>
                                <td>"Order number"</td>
                                <td>{o.order_number().to_string()}</td>
                            </tr>
                            <tr>
                                <td>"Patient"</td>
                                <td>{o.patient_display().to_string()}</td>
                            </tr>
                            <tr>
                                <td>"Urgency"</td>
                                <td>{o.urgency().to_string()}</td>
                            </tr>
                            <tr>
                                <td>"Imaging procedure"</td>
                                <td>{o.concept_display().to_string()}</td>
                            </tr>
                            <tr>
                                <td>"Referring physician"</td>
                                <td>{o.orderer_display().to_string()}</td>
                            </tr>
                            <tr>
                                <td>"Order reason"</td>
                                <td>{o.order_reason_display().to_string()}</td>
                            </tr>
                            <tr>
                                <td>"Scheduled date"</td>
                                <td>{scheduled}</td>
                            </tr>
                            <tr>
                                <td>"Date activated"</td>
                                <td>{activated}</td>
                            </tr>
                            <tr>
                                <td>"Instructions"</td>
                                <td>{o.instructions.clone().unwrap_or_default()}</td>
                            </tr>
                        </table>
                    }
                })
            }}
        </div>
    }
}

async fn fetch_order(uuid: Uuid) -> Result<RadiologyOrder, String> {
    let resource = format!("radiologyorder/{}", urlencoding::encode(&uuid.to_string()));
    let url = format!("{}?v=full", rest_url(&resource));
    let response = Request::get(&url)
        .header("Accept", "application/json; charset=utf-8")
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if response.status() != 200 {
        return Err(format!("Server error: {}", response.status()));
    }
    response
        .json::<RadiologyOrder>()
        .await
        .map_err(|e| format!("Malformed order resource: {e}"))
}
