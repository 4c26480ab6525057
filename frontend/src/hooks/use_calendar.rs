use shared::{
    filter_events, parse_events, BookingSummary, CalendarEvent, CalendarFocus, EventFilter,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils;

#[derive(Clone)]
pub struct CalendarState {
    pub focus: CalendarFocus,
    /// Events of the visible month after the current filter pass
    pub events: Vec<CalendarEvent>,
    pub summary: BookingSummary,
    pub loading: bool,
    pub filter: EventFilter,
    pub search: String,
    pub selected: Option<CalendarEvent>,
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub go_today: Callback<MouseEvent>,
    pub refresh: Callback<()>,
    pub set_filter: Callback<EventFilter>,
    pub set_search: Callback<String>,
    pub select_event: Callback<Option<CalendarEvent>>,
}

#[hook]
pub fn use_calendar(api_client: &ApiClient) -> UseCalendarResult {
    let focus = use_state(date_utils::current_focus);
    let events = use_state(Vec::<CalendarEvent>::new);
    let summary = use_state(BookingSummary::default);
    let loading = use_state(|| true);
    let filter = use_state(EventFilter::default);
    let search = use_state(String::new);
    let selected = use_state(|| Option::<CalendarEvent>::None);
    // Fetch generation: navigating months faster than the network responds
    // must not let a stale response overwrite the current month.
    let generation = use_mut_ref(|| 0u64);

    let refresh = {
        let api_client = api_client.clone();
        let events = events.clone();
        let summary = summary.clone();
        let loading = loading.clone();
        let generation = generation.clone();
        let focus_value = *focus;

        Callback::from(move |_| {
            let Some((start, end)) = focus_value.bounds() else {
                gloo::console::error!("Invalid calendar month:", focus_value.month);
                return;
            };
            let ticket = {
                let mut current = generation.borrow_mut();
                *current += 1;
                *current
            };

            let api_client = api_client.clone();
            let events = events.clone();
            let summary = summary.clone();
            let loading = loading.clone();
            let generation = generation.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client
                    .get_calendar_range(&start.to_string(), &end.to_string())
                    .await
                {
                    Ok(data) => {
                        // A newer month was requested meanwhile; drop this one.
                        if *generation.borrow() != ticket {
                            return;
                        }
                        match parse_events(data.events) {
                            Ok(parsed) => {
                                events.set(parsed);
                                summary.set(data.summary);
                            }
                            Err(e) => {
                                gloo::console::error!(
                                    "Failed to parse calendar events:",
                                    e.to_string()
                                );
                                events.set(Vec::new());
                                summary.set(BookingSummary::default());
                            }
                        }
                    }
                    Err(e) => {
                        if *generation.borrow() != ticket {
                            return;
                        }
                        gloo::console::error!("Failed to load calendar bookings:", e);
                        events.set(Vec::new());
                        summary.set(BookingSummary::default());
                    }
                }

                loading.set(false);
            });
        })
    };

    // Navigation callbacks
    let prev_month = {
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| {
            focus.set((*focus).prev());
        })
    };

    let next_month = {
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| {
            focus.set((*focus).next());
        })
    };

    let go_today = {
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| {
            focus.set(date_utils::current_focus());
        })
    };

    let set_filter = {
        let filter = filter.clone();
        Callback::from(move |value: EventFilter| {
            filter.set(value);
        })
    };

    let set_search = {
        let search = search.clone();
        Callback::from(move |value: String| {
            search.set(value);
        })
    };

    let select_event = {
        let selected = selected.clone();
        Callback::from(move |value: Option<CalendarEvent>| {
            selected.set(value);
        })
    };

    // Fetch the visible month whenever it changes; filter changes below
    // never hit the network.
    use_effect_with(*focus, {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let visible = use_memo(
        ((*events).clone(), *filter, (*search).clone()),
        |(events, filter, search)| filter_events(events, *filter, search),
    );

    let state = CalendarState {
        focus: *focus,
        events: (*visible).clone(),
        summary: (*summary).clone(),
        loading: *loading,
        filter: *filter,
        search: (*search).clone(),
        selected: (*selected).clone(),
    };

    let actions = UseCalendarActions {
        prev_month,
        next_month,
        go_today,
        refresh,
        set_filter,
        set_search,
        select_event,
    };

    UseCalendarResult { state, actions }
}
