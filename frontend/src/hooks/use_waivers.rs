use std::rc::Rc;

use shared::{
    flatten_waivers, BookingFilter, ParticipantFilter, VerificationToggle, WaiverQuery,
    WaiverRecord, WaiverRow,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::{date_utils, download};

/// Transient banner shown after a toggle or export attempt.
#[derive(Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// The waiver list itself lives in a reducer so that optimistic flips and
/// their rollbacks always land on the latest list, independent of other
/// in-flight toggles.
#[derive(Clone, PartialEq)]
pub struct WaiverList {
    pub waivers: Vec<WaiverRecord>,
}

pub enum WaiverListAction {
    Loaded(Vec<WaiverRecord>),
    Apply(VerificationToggle),
    Rollback(VerificationToggle),
}

impl Reducible for WaiverList {
    type Action = WaiverListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut waivers = self.waivers.clone();
        match action {
            WaiverListAction::Loaded(list) => waivers = list,
            WaiverListAction::Apply(toggle) => {
                toggle.apply(&mut waivers);
            }
            WaiverListAction::Rollback(toggle) => {
                toggle.revert(&mut waivers);
            }
        }
        Rc::new(WaiverList { waivers })
    }
}

#[derive(Clone)]
pub struct WaiversState {
    /// Flattened rows after the current query, rebuilt every render
    pub rows: Vec<WaiverRow>,
    /// Number of waiver records behind the rows
    pub total_waivers: usize,
    pub loading: bool,
    pub query: WaiverQuery,
    pub notice: Option<Notice>,
}

pub struct UseWaiversResult {
    pub state: WaiversState,
    pub actions: UseWaiversActions,
}

#[derive(Clone, PartialEq)]
pub struct UseWaiversActions {
    pub refresh: Callback<()>,
    pub toggle_verified: Callback<(i64, bool)>,
    pub export_csv: Callback<()>,
    pub set_search: Callback<String>,
    pub set_participant_filter: Callback<ParticipantFilter>,
    pub set_booking_filter: Callback<BookingFilter>,
}

#[hook]
pub fn use_waivers(api_client: &ApiClient) -> UseWaiversResult {
    let list = use_reducer(|| WaiverList { waivers: Vec::new() });
    let loading = use_state(|| true);
    let query = use_state(WaiverQuery::default);
    let notice = use_state(|| Option::<Notice>::None);

    let show_notice = {
        let notice = notice.clone();
        Callback::from(move |value: Notice| {
            notice.set(Some(value));
            // Clear after 3 seconds
            let notice = notice.clone();
            spawn_local(async move {
                gloo::timers::future::TimeoutFuture::new(3000).await;
                notice.set(None);
            });
        })
    };

    let refresh = {
        let api_client = api_client.clone();
        let list = list.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let list = list.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_waivers().await {
                    Ok(data) => {
                        list.dispatch(WaiverListAction::Loaded(data));
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to load waivers:", e);
                        list.dispatch(WaiverListAction::Loaded(Vec::new()));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Optimistic arrival toggle: flip locally, call the API, roll the flip
    // back and surface the error if the call fails.
    let toggle_verified = {
        let api_client = api_client.clone();
        let list = list.clone();
        let show_notice = show_notice.clone();

        Callback::from(move |(id, to): (i64, bool)| {
            let api_client = api_client.clone();
            let list = list.clone();
            let show_notice = show_notice.clone();

            let toggle = VerificationToggle::new(id, to);
            list.dispatch(WaiverListAction::Apply(toggle));

            spawn_local(async move {
                match api_client.set_waiver_verified(id, to).await {
                    Ok(()) => {
                        let message = if to { "Marked as Arrived" } else { "Marked as Not Arrived" };
                        show_notice.emit(Notice::Success(message.to_string()));
                    }
                    Err(e) => {
                        list.dispatch(WaiverListAction::Rollback(toggle));
                        gloo::console::error!("Failed to update arrival status:", e.clone());
                        show_notice.emit(Notice::Error(if e.is_empty() {
                            "Failed to update status".to_string()
                        } else {
                            e
                        }));
                    }
                }
            });
        })
    };

    let export_csv = {
        let api_client = api_client.clone();
        let show_notice = show_notice.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let show_notice = show_notice.clone();

            spawn_local(async move {
                match api_client.export_waivers_csv().await {
                    Ok(bytes) => {
                        let filename = format!("waivers_{}.csv", date_utils::current_date_string());
                        match download::trigger_download(&bytes, &filename, "text/csv") {
                            Ok(()) => {
                                show_notice
                                    .emit(Notice::Success("CSV exported successfully".to_string()));
                            }
                            Err(e) => {
                                gloo::console::error!("Failed to save CSV export:", e);
                                show_notice
                                    .emit(Notice::Error("Failed to export CSV".to_string()));
                            }
                        }
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to export CSV:", e);
                        show_notice.emit(Notice::Error("Failed to export CSV".to_string()));
                    }
                }
            });
        })
    };

    let set_search = {
        let query = query.clone();
        Callback::from(move |search: String| {
            query.set(WaiverQuery { search, ..(*query).clone() });
        })
    };

    let set_participant_filter = {
        let query = query.clone();
        Callback::from(move |participant: ParticipantFilter| {
            query.set(WaiverQuery { participant, ..(*query).clone() });
        })
    };

    let set_booking_filter = {
        let query = query.clone();
        Callback::from(move |booking: BookingFilter| {
            query.set(WaiverQuery { booking, ..(*query).clone() });
        })
    };

    // Load once on mount
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    // Derived view, rebuilt from the source list on every pass
    let rows = query.apply(&flatten_waivers(&list.waivers));

    let state = WaiversState {
        rows,
        total_waivers: list.waivers.len(),
        loading: *loading,
        query: (*query).clone(),
        notice: (*notice).clone(),
    };

    let actions = UseWaiversActions {
        refresh,
        toggle_verified,
        export_csv,
        set_search,
        set_participant_filter,
        set_booking_filter,
    };

    UseWaiversResult { state, actions }
}
