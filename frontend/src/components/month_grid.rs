use chrono::{Datelike, NaiveDate};
use shared::{CalendarEvent, CalendarFocus, EventKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthGridProps {
    pub focus: CalendarFocus,
    /// Events of the visible month, already filtered
    pub events: Vec<CalendarEvent>,
    pub on_select: Callback<CalendarEvent>,
}

#[function_component(MonthGrid)]
pub fn month_grid(props: &MonthGridProps) -> Html {
    let Some((first, last)) = props.focus.bounds() else {
        return html! {};
    };

    let mut cells = Vec::new();

    // Empty padding cells before the first day of the month
    for _ in 0..first.weekday().num_days_from_sunday() {
        cells.push(html! { <div class="calendar-day empty"></div> });
    }

    for day in 1..=last.day() {
        let date = NaiveDate::from_ymd_opt(props.focus.year, props.focus.month, day);
        let day_events: Vec<&CalendarEvent> = props
            .events
            .iter()
            .filter(|event| Some(event.start.date()) == date)
            .collect();

        cells.push(html! {
            <div class="calendar-day">
                <div class="day-number">{day}</div>
                <div class="day-events">
                    {for day_events.into_iter().map(|event| {
                        let chip_class = match event.kind {
                            EventKind::Session => "event-chip session",
                            EventKind::Party => "event-chip party",
                        };
                        let tooltip = format!(
                            "{}\n{} \u{2022} {} participants\n{} - {}",
                            event.title,
                            event.customer_name,
                            event.participants,
                            event.start.format("%H:%M"),
                            event.end.format("%H:%M"),
                        );
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let event = event.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_select.emit(event.clone());
                            })
                        };

                        html! {
                            <div class={chip_class} title={tooltip} {onclick}>
                                {format!("{} {}", event.start.format("%H:%M"), event.customer_name)}
                            </div>
                        }
                    })}
                </div>
            </div>
        });
    }

    html! {
        <div class="calendar">
            <div class="calendar-weekdays">
                <div class="weekday">{"Sun"}</div>
                <div class="weekday">{"Mon"}</div>
                <div class="weekday">{"Tue"}</div>
                <div class="weekday">{"Wed"}</div>
                <div class="weekday">{"Thu"}</div>
                <div class="weekday">{"Fri"}</div>
                <div class="weekday">{"Sat"}</div>
            </div>
            <div class="calendar-grid">
                {for cells}
            </div>
        </div>
    }
}
