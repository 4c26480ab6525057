use shared::{CalendarEvent, EventFilter};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{BookingDetailsModal, MonthGrid};
use crate::hooks::use_calendar::use_calendar;
use crate::services::api::ApiClient;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct CalendarPageProps {
    pub api_client: ApiClient,
}

#[function_component(CalendarPage)]
pub fn calendar_page(props: &CalendarPageProps) -> Html {
    let result = use_calendar(&props.api_client);
    let state = result.state;
    let actions = result.actions;

    let on_filter_change = {
        let set_filter = actions.set_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = match select.value().as_str() {
                "session" => EventFilter::Session,
                "party" => EventFilter::Party,
                _ => EventFilter::All,
            };
            set_filter.emit(value);
        })
    };

    let on_search = {
        let set_search = actions.set_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_search.emit(input.value());
        })
    };

    let on_select = {
        let select_event = actions.select_event.clone();
        Callback::from(move |event: CalendarEvent| {
            select_event.emit(Some(event));
        })
    };

    let on_close = {
        let select_event = actions.select_event.clone();
        Callback::from(move |_: ()| {
            select_event.emit(None);
        })
    };

    html! {
        <div class="calendar-page">
            <div class="page-header">
                <div>
                    <h1>{"Booking Calendar"}</h1>
                    <p class="page-subtitle">{"View and manage all session and party bookings"}</p>
                </div>
            </div>

            <div class="summary-cards">
                <div class="summary-card">
                    <p class="summary-label">{"Total Bookings"}</p>
                    <p class="summary-value">{state.summary.total_bookings}</p>
                </div>
                <div class="summary-card session">
                    <p class="summary-label">{"Session Bookings"}</p>
                    <p class="summary-value">{state.summary.session_bookings}</p>
                </div>
                <div class="summary-card party">
                    <p class="summary-label">{"Party Bookings"}</p>
                    <p class="summary-value">{state.summary.party_bookings}</p>
                </div>
                <div class="summary-card revenue">
                    <p class="summary-label">{"Total Revenue"}</p>
                    <p class="summary-value">{format!("\u{20b9}{:.0}", state.summary.total_revenue)}</p>
                </div>
                <div class="summary-card participants">
                    <p class="summary-label">{"Total Participants"}</p>
                    <p class="summary-value">{state.summary.total_participants}</p>
                </div>
            </div>

            <div class="calendar-toolbar">
                <div class="month-nav">
                    <button class="calendar-nav-btn" onclick={actions.prev_month.clone()}>
                        {"\u{2039}"}
                    </button>
                    <h2 class="calendar-title">
                        {format!("{} {}", date_utils::month_name(state.focus.month), state.focus.year)}
                    </h2>
                    <button class="calendar-nav-btn" onclick={actions.next_month.clone()}>
                        {"\u{203a}"}
                    </button>
                    <button class="btn btn-primary today-btn" onclick={actions.go_today.clone()}>
                        {"Today"}
                    </button>
                </div>

                <select onchange={on_filter_change}>
                    <option value="all" selected={state.filter == EventFilter::All}>
                        {"All Bookings"}
                    </option>
                    <option value="session" selected={state.filter == EventFilter::Session}>
                        {"Session Only"}
                    </option>
                    <option value="party" selected={state.filter == EventFilter::Party}>
                        {"Party Only"}
                    </option>
                </select>

                <input
                    type="text"
                    class="search-input"
                    placeholder="Search customer..."
                    value={state.search.clone()}
                    oninput={on_search}
                />
            </div>

            {if state.loading {
                html! { <div class="loading">{"Loading bookings..."}</div> }
            } else {
                html! {
                    <MonthGrid
                        focus={state.focus}
                        events={state.events}
                        on_select={on_select}
                    />
                }
            }}

            {if let Some(event) = &state.selected {
                html! {
                    <BookingDetailsModal
                        event={event.clone()}
                        on_close={on_close}
                    />
                }
            } else { html! {} }}
        </div>
    }
}
