use gloo::storage::{SessionStorage, Storage};
use shared::{BookingFilter, ParticipantFilter};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::WaiverTable;
use crate::hooks::use_waivers::{use_waivers, Notice};
use crate::services::api::ApiClient;

// Session-scoped: the tip comes back in a fresh browser session.
const KIOSK_TIP_DISMISSED_KEY: &str = "parkdesk.kiosk_tip_dismissed";

#[derive(Properties, PartialEq)]
pub struct WaiversPageProps {
    pub api_client: ApiClient,
}

#[function_component(WaiversPage)]
pub fn waivers_page(props: &WaiversPageProps) -> Html {
    let result = use_waivers(&props.api_client);
    let state = result.state;
    let actions = result.actions;

    let tip_dismissed =
        use_state(|| SessionStorage::get::<bool>(KIOSK_TIP_DISMISSED_KEY).unwrap_or(false));

    let dismiss_tip = {
        let tip_dismissed = tip_dismissed.clone();
        Callback::from(move |_: MouseEvent| {
            let _ = SessionStorage::set(KIOSK_TIP_DISMISSED_KEY, true);
            tip_dismissed.set(true);
        })
    };

    let on_search = {
        let set_search = actions.set_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_search.emit(input.value());
        })
    };

    let on_participant_filter = {
        let set_participant_filter = actions.set_participant_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = match select.value().as_str() {
                "ADULT" => ParticipantFilter::Adult,
                "MINOR" => ParticipantFilter::Minor,
                _ => ParticipantFilter::All,
            };
            set_participant_filter.emit(value);
        })
    };

    let on_booking_filter = {
        let set_booking_filter = actions.set_booking_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = match select.value().as_str() {
                "SESSION" => BookingFilter::Session,
                "PARTY" => BookingFilter::Party,
                _ => BookingFilter::All,
            };
            set_booking_filter.emit(value);
        })
    };

    let on_export = {
        let export_csv = actions.export_csv.clone();
        Callback::from(move |_: MouseEvent| {
            export_csv.emit(());
        })
    };

    html! {
        <div class="waivers-page">
            <div class="page-header">
                <div>
                    <h1>{"Waivers"}</h1>
                    <p class="page-subtitle">{"Track and manage digital liability waivers"}</p>
                </div>
                <button class="btn btn-secondary" onclick={on_export}>
                    {"Export All"}
                </button>
            </div>

            {match &state.notice {
                Some(Notice::Success(message)) => html! {
                    <div class="notice success">{message}</div>
                },
                Some(Notice::Error(message)) => html! {
                    <div class="notice error">{message}</div>
                },
                None => html! {},
            }}

            {if !*tip_dismissed {
                html! {
                    <div class="notice info">
                        <span>{"Tip: waivers can be signed on-site from a kiosk device."}</span>
                        <button class="notice-dismiss" onclick={dismiss_tip}>{"\u{00d7}"}</button>
                    </div>
                }
            } else { html! {} }}

            <div class="filters-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by signer name or email..."
                    value={state.query.search.clone()}
                    oninput={on_search}
                />
                <select onchange={on_participant_filter}>
                    <option value="ALL" selected={state.query.participant == ParticipantFilter::All}>
                        {"All Types"}
                    </option>
                    <option value="ADULT" selected={state.query.participant == ParticipantFilter::Adult}>
                        {"Adults Only"}
                    </option>
                    <option value="MINOR" selected={state.query.participant == ParticipantFilter::Minor}>
                        {"Minors Only"}
                    </option>
                </select>
                <select onchange={on_booking_filter}>
                    <option value="ALL" selected={state.query.booking == BookingFilter::All}>
                        {"All Bookings"}
                    </option>
                    <option value="SESSION" selected={state.query.booking == BookingFilter::Session}>
                        {"Session Bookings"}
                    </option>
                    <option value="PARTY" selected={state.query.booking == BookingFilter::Party}>
                        {"Party Bookings"}
                    </option>
                </select>
            </div>

            <WaiverTable
                rows={state.rows}
                total_waivers={state.total_waivers}
                loading={state.loading}
                on_toggle_verified={actions.toggle_verified.clone()}
            />
        </div>
    }
}
