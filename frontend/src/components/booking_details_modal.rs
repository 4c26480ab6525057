use shared::{CalendarEvent, EventKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingDetailsModalProps {
    pub event: CalendarEvent,
    pub on_close: Callback<()>,
}

/// Read-only detail view of a selected calendar event. Edits happen on the
/// underlying booking's own page, not here.
#[function_component(BookingDetailsModal)]
pub fn booking_details_modal(props: &BookingDetailsModalProps) -> Html {
    let event = &props.event;

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let kind_label = match event.kind {
        EventKind::Session => "Session Booking",
        EventKind::Party => "Party Booking",
    };

    html! {
        <div class="modal-overlay">
            <div class="modal booking-details">
                <div class="modal-header">
                    <h2>{&event.title}</h2>
                    <button class="modal-close" onclick={on_close}>{"\u{00d7}"}</button>
                </div>

                <div class="modal-body">
                    <span class={match event.kind {
                        EventKind::Session => "badge session",
                        EventKind::Party => "badge party",
                    }}>
                        {kind_label}
                    </span>

                    <div class="detail-row">
                        <span class="detail-label">{"Customer"}</span>
                        <span>{&event.customer_name}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-label">{"Contact"}</span>
                        <span>
                            {if !event.customer_email.is_empty() {
                                event.customer_email.clone()
                            } else if !event.customer_phone.is_empty() {
                                event.customer_phone.clone()
                            } else {
                                "No contact info".to_string()
                            }}
                        </span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-label">{"When"}</span>
                        <span>
                            {format!(
                                "{} {} - {}",
                                event.start.format("%B %d, %Y"),
                                event.start.format("%H:%M"),
                                event.end.format("%H:%M"),
                            )}
                        </span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-label">{"Participants"}</span>
                        <span>
                            {format!(
                                "{} ({} kids, {} adults)",
                                event.participants, event.kids, event.adults
                            )}
                        </span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-label">{"Package"}</span>
                        <span>{&event.package_name}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-label">{"Status"}</span>
                        <span class="status">{&event.status}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-label">{"Amount"}</span>
                        <span>{format!("\u{20b9}{:.0}", event.amount)}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-label">{"Arrived"}</span>
                        <span>{if event.arrived { "Yes" } else { "No" }}</span>
                    </div>

                    {if let Some(name) = &event.birthday_child_name {
                        html! {
                            <div class="detail-row birthday">
                                <span class="detail-label">{"Birthday Child"}</span>
                                <span>
                                    {name.clone()}
                                    {match event.birthday_child_age {
                                        Some(age) => format!(" (turning {})", age),
                                        None => String::new(),
                                    }}
                                </span>
                            </div>
                        }
                    } else { html! {} }}
                </div>
            </div>
        </div>
    }
}
