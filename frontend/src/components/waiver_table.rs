use shared::{age_on, WaiverRow};
use yew::prelude::*;

use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct WaiverTableProps {
    /// Flattened and filtered rows, in listing order
    pub rows: Vec<WaiverRow>,
    /// Number of waiver records behind the rows, for the footer
    pub total_waivers: usize,
    pub loading: bool,
    /// Emits (waiver id, new arrival state) from the primary row's toggle
    pub on_toggle_verified: Callback<(i64, bool)>,
}

#[function_component(WaiverTable)]
pub fn waiver_table(props: &WaiverTableProps) -> Html {
    if props.loading {
        return html! { <div class="loading">{"Loading waivers..."}</div> };
    }

    let today = date_utils::today();

    let age_badge = |dob: &Option<String>| -> Html {
        match (dob.as_deref(), today) {
            (Some(dob), Some(today)) => match age_on(dob, today) {
                Some(age) => html! {
                    <span class="age-badge">{format!("Age {}", age)}</span>
                },
                None => html! {},
            },
            _ => html! {},
        }
    };

    html! {
        <div class="table-container">
            <table class="waivers-table">
                <thead>
                    <tr>
                        <th>{"Participant"}</th>
                        <th>{"Contact Info"}</th>
                        <th>{"Signed On"}</th>
                        <th>{"Group Details"}</th>
                        <th>{"Arrival Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if props.rows.is_empty() {
                        html! {
                            <tr>
                                <td colspan="5" class="empty-state">
                                    <p class="empty-title">{"No waivers found"}</p>
                                    <p class="empty-hint">{"Try adjusting your filters"}</p>
                                </td>
                            </tr>
                        }
                    } else {
                        html! {
                            {for props.rows.iter().map(|row| {
                                let toggle = {
                                    let on_toggle_verified = props.on_toggle_verified.clone();
                                    let id = row.waiver_id;
                                    let next = !row.is_verified;
                                    Callback::from(move |_: MouseEvent| {
                                        on_toggle_verified.emit((id, next));
                                    })
                                };

                                html! {
                                    <tr key={row.unique_id.clone()}>
                                        <td class="participant">
                                            <div class="participant-name">
                                                <span>{&row.name}</span>
                                                {if row.is_primary {
                                                    match row.booking.label() {
                                                        Some(label) => html! {
                                                            <span class={format!("badge {}", label.to_lowercase())}>
                                                                {label}
                                                            </span>
                                                        },
                                                        None => html! {},
                                                    }
                                                } else { html! {} }}
                                            </div>
                                            {if row.is_primary {
                                                if let Some(reference) = &row.booking_reference {
                                                    html! {
                                                        <p class="booking-reference">
                                                            {"Ref: "}{reference}
                                                        </p>
                                                    }
                                                } else { html! {} }
                                            } else {
                                                html! {
                                                    <p class="row-relation">
                                                        {"\u{21b3} Additional Adult in Group"}
                                                    </p>
                                                }
                                            }}
                                        </td>

                                        <td class="contact">
                                            {if let Some(email) = &row.email {
                                                html! { <span class="contact-email">{email}</span> }
                                            } else if let Some(phone) = &row.phone {
                                                html! { <span class="contact-phone">{phone}</span> }
                                            } else {
                                                html! { <span class="contact-none">{"No contact info"}</span> }
                                            }}
                                            {age_badge(&row.dob)}
                                        </td>

                                        <td class="signed-on">
                                            {if row.is_primary {
                                                html! {
                                                    <>
                                                        <span class="signed-date">
                                                            {date_utils::format_signed_date(&row.signed_at)}
                                                        </span>
                                                        <span class="signed-time">
                                                            {date_utils::format_signed_time(&row.signed_at)}
                                                        </span>
                                                    </>
                                                }
                                            } else {
                                                html! { <span class="cell-blank">{"\u{2014}"}</span> }
                                            }}
                                        </td>

                                        <td class="group-details">
                                            {if row.is_primary {
                                                let adult_count = 1 + row.adults.len();
                                                html! {
                                                    <div class="group-breakdown">
                                                        <span class="adult-count">
                                                            {format!("{} Adult{}", adult_count,
                                                                if adult_count > 1 { "s" } else { "" })}
                                                        </span>
                                                        {if !row.minors.is_empty() {
                                                            html! {
                                                                <div class="minors-list">
                                                                    <span class="minor-count">
                                                                        {format!("{} Minor{}:", row.minors.len(),
                                                                            if row.minors.len() > 1 { "s" } else { "" })}
                                                                    </span>
                                                                    {for row.minors.iter().map(|minor| html! {
                                                                        <div class="minor-entry">
                                                                            <span>{&minor.name}</span>
                                                                            {age_badge(&minor.dob)}
                                                                        </div>
                                                                    })}
                                                                </div>
                                                            }
                                                        } else { html! {} }}
                                                    </div>
                                                }
                                            } else {
                                                html! { <span class="cell-blank">{"\u{2014}"}</span> }
                                            }}
                                        </td>

                                        <td class="arrival">
                                            {if row.is_primary {
                                                html! {
                                                    <button
                                                        class={if row.is_verified {
                                                            "arrived-toggle arrived"
                                                        } else {
                                                            "arrived-toggle"
                                                        }}
                                                        onclick={toggle}
                                                    >
                                                        {if row.is_verified { "Arrived" } else { "Not Arrived" }}
                                                    </button>
                                                }
                                            } else {
                                                html! { <span class="cell-blank">{"\u{2014}"}</span> }
                                            }}
                                        </td>
                                    </tr>
                                }
                            })}
                        }
                    }}
                </tbody>
            </table>

            <div class="table-footer">
                <p>
                    {"Showing "}<strong>{props.rows.len()}</strong>
                    {" of "}<strong>{props.total_waivers}</strong>{" waivers"}
                </p>
                <div class="legend">
                    <span class="legend-dot session"></span>{"Session"}
                    <span class="legend-dot party"></span>{"Party"}
                </div>
            </div>
        </div>
    }
}
