use chrono::NaiveDate;
use shared::CalendarFocus;

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid",
    }
}

/// Get current date in YYYY-MM-DD format
pub fn current_date_string() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Today as a calendar date, from the browser clock
pub fn today() -> Option<NaiveDate> {
    use js_sys::Date;
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

/// The month the browser clock currently falls in
pub fn current_focus() -> CalendarFocus {
    use js_sys::Date;
    let now = Date::new_0();
    CalendarFocus::new(now.get_full_year() as i32, now.get_month() + 1)
}

/// Format the date part of an RFC 3339 timestamp for display
/// (e.g. "March 1, 2025")
pub fn format_signed_date(rfc3339_date: &str) -> String {
    if let Some(date_part) = rfc3339_date.split('T').next() {
        if let Ok(parts) = date_part.split('-').collect::<Vec<_>>().try_into() {
            let [year, month, day]: [&str; 3] = parts;
            if let (Ok(y), Ok(m), Ok(d)) = (year.parse::<u32>(), month.parse::<u32>(), day.parse::<u32>()) {
                return format!("{} {}, {}", month_name(m), d, y);
            }
        }
    }
    rfc3339_date.to_string()
}

/// Format the clock part of an RFC 3339 timestamp for display (HH:MM)
pub fn format_signed_time(rfc3339_date: &str) -> String {
    rfc3339_date
        .split('T')
        .nth(1)
        .map(|time| time.chars().take(5).collect())
        .unwrap_or_default()
}
