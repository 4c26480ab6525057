use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Whether the person covered by a row is an adult or a minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParticipantType {
    Adult,
    Minor,
}

/// Another adult covered by the same waiver signature. Has no signing
/// identity of its own; it exists only inside its parent record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalAdult {
    pub name: String,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A minor covered by the primary signer. Minors are rendered nested under
/// the primary row and never become rows themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Minor {
    pub name: String,
    #[serde(default)]
    pub dob: Option<String>,
}

/// Which booking a waiver belongs to. The wire format carries two optional
/// ids (`booking` / `party_booking`); valid data sets at most one. `None`
/// covers the records where neither is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAttachment {
    Session(i64),
    Party(i64),
    None,
}

impl BookingAttachment {
    /// Session wins if a record somehow carries both ids.
    pub fn from_ids(booking: Option<i64>, party_booking: Option<i64>) -> Self {
        match (booking, party_booking) {
            (Some(id), _) => BookingAttachment::Session(id),
            (None, Some(id)) => BookingAttachment::Party(id),
            (None, None) => BookingAttachment::None,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            BookingAttachment::Session(_) => Some("Session"),
            BookingAttachment::Party(_) => Some("Party"),
            BookingAttachment::None => None,
        }
    }
}

/// One signed liability waiver as returned by `GET /bookings/waivers/`.
///
/// The unit of signing: `adults` and `minors` are owned by the record and
/// have no identity outside it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "WaiverRecordWire")]
pub struct WaiverRecord {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// ISO 8601 date (YYYY-MM-DD)
    pub dob: Option<String>,
    pub participant_type: ParticipantType,
    /// RFC 3339 timestamp of signature
    pub signed_at: String,
    /// Arrival/check-in confirmation flag, mutable after creation
    pub is_verified: bool,
    pub booking: BookingAttachment,
    pub booking_reference: Option<String>,
    pub adults: Vec<AdditionalAdult>,
    pub minors: Vec<Minor>,
}

/// Raw wire shape of a waiver record. The booking/party_booking pair is
/// collapsed into [`BookingAttachment`] on conversion.
#[derive(Deserialize)]
struct WaiverRecordWire {
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    dob: Option<String>,
    participant_type: ParticipantType,
    #[serde(default)]
    signed_at: String,
    #[serde(default)]
    is_verified: bool,
    #[serde(default)]
    booking: Option<i64>,
    #[serde(default)]
    party_booking: Option<i64>,
    #[serde(default)]
    booking_reference: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    adults: Vec<AdditionalAdult>,
    #[serde(default, deserialize_with = "lenient_vec")]
    minors: Vec<Minor>,
}

impl From<WaiverRecordWire> for WaiverRecord {
    fn from(wire: WaiverRecordWire) -> Self {
        WaiverRecord {
            id: wire.id,
            name: wire.name,
            email: wire.email,
            phone: wire.phone,
            dob: wire.dob,
            participant_type: wire.participant_type,
            signed_at: wire.signed_at,
            is_verified: wire.is_verified,
            booking: BookingAttachment::from_ids(wire.booking, wire.party_booking),
            booking_reference: wire.booking_reference,
            adults: wire.adults,
            minors: wire.minors,
        }
    }
}

/// Deserialize a list field that the backend sometimes sends as null or in
/// a malformed shape. Anything that is not a valid array becomes empty.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// One display row of the flattened waiver table: the primary signer, or one
/// of the additional adults in the group. Display-only; never persisted and
/// never written back to the API.
#[derive(Debug, Clone, PartialEq)]
pub struct WaiverRow {
    /// `"{id}"` for the primary row, `"{id}-adult-{index}"` for additional
    /// adults. Unique within one flattening pass.
    pub unique_id: String,
    pub is_primary: bool,
    pub is_additional_adult: bool,
    /// Id of the parent waiver record, shared by all rows of a group
    pub waiver_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub dob: Option<String>,
    pub participant_type: ParticipantType,
    pub signed_at: String,
    pub is_verified: bool,
    pub booking: BookingAttachment,
    pub booking_reference: Option<String>,
    /// Empty on additional-adult rows so re-flattening cannot recurse
    pub adults: Vec<AdditionalAdult>,
    /// Minors stay with the primary row; empty on additional-adult rows
    pub minors: Vec<Minor>,
}

/// Flatten waiver records into display rows: one primary row per record,
/// then one row per additional adult in array order. Minors never become
/// rows. Input order is preserved and rows of a record stay contiguous.
pub fn flatten_waivers(waivers: &[WaiverRecord]) -> Vec<WaiverRow> {
    let mut rows = Vec::new();
    for waiver in waivers {
        rows.push(WaiverRow {
            unique_id: waiver.id.to_string(),
            is_primary: true,
            is_additional_adult: false,
            waiver_id: waiver.id,
            name: waiver.name.clone(),
            email: waiver.email.clone(),
            phone: waiver.phone.clone(),
            dob: waiver.dob.clone(),
            participant_type: waiver.participant_type,
            signed_at: waiver.signed_at.clone(),
            is_verified: waiver.is_verified,
            booking: waiver.booking,
            booking_reference: waiver.booking_reference.clone(),
            adults: waiver.adults.clone(),
            minors: waiver.minors.clone(),
        });

        for (index, adult) in waiver.adults.iter().enumerate() {
            rows.push(WaiverRow {
                unique_id: format!("{}-adult-{}", waiver.id, index),
                is_primary: false,
                is_additional_adult: true,
                waiver_id: waiver.id,
                name: adult.name.clone(),
                email: adult.email.clone(),
                phone: adult.phone.clone(),
                dob: adult.dob.clone(),
                participant_type: ParticipantType::Adult,
                signed_at: waiver.signed_at.clone(),
                is_verified: waiver.is_verified,
                booking: waiver.booking,
                booking_reference: waiver.booking_reference.clone(),
                adults: Vec::new(),
                minors: Vec::new(),
            });
        }
    }
    rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticipantFilter {
    #[default]
    All,
    Adult,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingFilter {
    #[default]
    All,
    Session,
    Party,
}

/// The waiver table's filter state. `matches` is pure, so it can be
/// re-applied on every keystroke.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaiverQuery {
    /// Case-insensitive substring over a row's own name or email
    pub search: String,
    pub participant: ParticipantFilter,
    pub booking: BookingFilter,
}

impl WaiverQuery {
    pub fn matches(&self, row: &WaiverRow) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || row.name.to_lowercase().contains(&needle)
            || row
                .email
                .as_ref()
                .is_some_and(|email| email.to_lowercase().contains(&needle));

        let matches_participant = match self.participant {
            ParticipantFilter::All => true,
            ParticipantFilter::Adult => row.participant_type == ParticipantType::Adult,
            ParticipantFilter::Minor => row.participant_type == ParticipantType::Minor,
        };

        // Booking classification is inherited from the parent record, so all
        // rows of one group land in the same bucket.
        let matches_booking = match self.booking {
            BookingFilter::All => true,
            BookingFilter::Session => matches!(row.booking, BookingAttachment::Session(_)),
            BookingFilter::Party => matches!(row.booking, BookingAttachment::Party(_)),
        };

        matches_search && matches_participant && matches_booking
    }

    pub fn apply(&self, rows: &[WaiverRow]) -> Vec<WaiverRow> {
        rows.iter().filter(|row| self.matches(row)).cloned().collect()
    }
}

/// The arrived-toggle as a command: apply the local flip immediately, issue
/// the remote call, and revert with the inverse flip if the call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationToggle {
    pub id: i64,
    pub to: bool,
}

impl VerificationToggle {
    pub fn new(id: i64, to: bool) -> Self {
        VerificationToggle { id, to }
    }

    /// Returns false when no record matched the id.
    pub fn apply(&self, waivers: &mut [WaiverRecord]) -> bool {
        self.set(waivers, self.to)
    }

    pub fn revert(&self, waivers: &mut [WaiverRecord]) -> bool {
        self.set(waivers, !self.to)
    }

    fn set(&self, waivers: &mut [WaiverRecord], value: bool) -> bool {
        let mut found = false;
        for waiver in waivers.iter_mut() {
            if waiver.id == self.id {
                waiver.is_verified = value;
                found = true;
            }
        }
        found
    }
}

/// Age in whole years on `today` for a `YYYY-MM-DD` date of birth. None for
/// unparseable or future dates.
pub fn age_on(dob: &str, today: NaiveDate) -> Option<u32> {
    let birth = NaiveDate::parse_from_str(dob, "%Y-%m-%d").ok()?;
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}

/// Discriminator of a merged calendar event: which booking kind produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Session,
    Party,
}

/// A calendar event as the API sends it: camelCase keys, ISO 8601 string
/// timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventRaw {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub booking_id: i64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub participants: u32,
    #[serde(default)]
    pub kids: u32,
    #[serde(default)]
    pub adults: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub arrived: bool,
    #[serde(default)]
    pub package_name: String,
    #[serde(default)]
    pub birthday_child_name: Option<String>,
    #[serde(default)]
    pub birthday_child_age: Option<u32>,
}

/// A calendar event with parsed timestamps, ready for the month grid.
/// Replaced wholesale on every month navigation; never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub kind: EventKind,
    pub booking_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub participants: u32,
    pub kids: u32,
    pub adults: u32,
    pub status: String,
    pub amount: f64,
    pub arrived: bool,
    pub package_name: String,
    /// Set only on party events
    pub birthday_child_name: Option<String>,
    pub birthday_child_age: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
pub enum CalendarDataError {
    #[error("invalid event timestamp `{value}`: {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },
}

/// Parse an event timestamp. The backend emits naive ISO 8601; a trailing
/// `Z` is tolerated and stripped.
pub fn parse_event_timestamp(value: &str) -> Result<NaiveDateTime, CalendarDataError> {
    let naive = value.strip_suffix('Z').unwrap_or(value);
    naive
        .parse::<NaiveDateTime>()
        .map_err(|source| CalendarDataError::Timestamp {
            value: value.to_string(),
            source,
        })
}

impl TryFrom<CalendarEventRaw> for CalendarEvent {
    type Error = CalendarDataError;

    fn try_from(raw: CalendarEventRaw) -> Result<Self, Self::Error> {
        let start = parse_event_timestamp(&raw.start)?;
        let end = parse_event_timestamp(&raw.end)?;
        // Birthday fields are a party-only concept; drop them if a session
        // event carries them.
        let (birthday_child_name, birthday_child_age) = match raw.kind {
            EventKind::Party => (raw.birthday_child_name, raw.birthday_child_age),
            EventKind::Session => (None, None),
        };
        Ok(CalendarEvent {
            id: raw.id,
            title: raw.title,
            start,
            end,
            kind: raw.kind,
            booking_id: raw.booking_id,
            customer_name: raw.customer_name,
            customer_email: raw.customer_email,
            customer_phone: raw.customer_phone,
            participants: raw.participants,
            kids: raw.kids,
            adults: raw.adults,
            status: raw.status,
            amount: raw.amount,
            arrived: raw.arrived,
            package_name: raw.package_name,
            birthday_child_name,
            birthday_child_age,
        })
    }
}

/// Parse a fetched month of raw events. Fails on the first bad timestamp;
/// the caller falls back to an empty list.
pub fn parse_events(raw: Vec<CalendarEventRaw>) -> Result<Vec<CalendarEvent>, CalendarDataError> {
    raw.into_iter().map(CalendarEvent::try_from).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFilter {
    #[default]
    All,
    Session,
    Party,
}

impl EventFilter {
    pub fn matches(&self, kind: EventKind) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Session => kind == EventKind::Session,
            EventFilter::Party => kind == EventKind::Party,
        }
    }
}

/// Client-side pass over the fetched month: kind filter plus free-text over
/// customer name, email and title, combined with AND.
pub fn filter_events(
    events: &[CalendarEvent],
    filter: EventFilter,
    search: &str,
) -> Vec<CalendarEvent> {
    let needle = search.to_lowercase();
    events
        .iter()
        .filter(|event| {
            filter.matches(event.kind)
                && (needle.is_empty()
                    || event.customer_name.to_lowercase().contains(&needle)
                    || event.customer_email.to_lowercase().contains(&needle)
                    || event.title.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Month-range aggregates computed by the backend and passed through
/// verbatim; the client never re-derives these.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingSummary {
    pub total_bookings: u32,
    pub session_bookings: u32,
    pub party_bookings: u32,
    pub total_revenue: f64,
    pub total_participants: u32,
}

/// Response envelope of `GET /bookings/calendar/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalendarRange {
    pub events: Vec<CalendarEventRaw>,
    #[serde(default)]
    pub summary: BookingSummary,
}

/// Request body for the waiver verification toggle.
#[derive(Debug, Clone, Serialize)]
pub struct SetVerifiedRequest {
    pub is_verified: bool,
}

/// Response of the waiver verification toggle.
#[derive(Debug, Clone, Deserialize)]
pub struct SetVerifiedResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// The calendar's month cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFocus {
    pub month: u32,
    pub year: i32,
}

impl CalendarFocus {
    pub fn new(year: i32, month: u32) -> Self {
        CalendarFocus { month, year }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            CalendarFocus { month: 12, year: self.year - 1 }
        } else {
            CalendarFocus { month: self.month - 1, year: self.year }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            CalendarFocus { month: 1, year: self.year + 1 }
        } else {
            CalendarFocus { month: self.month + 1, year: self.year }
        }
    }

    /// First and last day of the month, inclusive. None for an out-of-range
    /// month value.
    pub fn bounds(self) -> Option<(NaiveDate, NaiveDate)> {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)?;
        let after = self.next();
        let last = NaiveDate::from_ymd_opt(after.year, after.month, 1)?.pred_opt()?;
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64) -> WaiverRecord {
        WaiverRecord {
            id,
            name: format!("Signer {}", id),
            email: Some(format!("signer{}@example.com", id)),
            phone: None,
            dob: Some("1990-01-01".to_string()),
            participant_type: ParticipantType::Adult,
            signed_at: "2025-03-01T10:00:00Z".to_string(),
            is_verified: false,
            booking: BookingAttachment::Session(id * 100),
            booking_reference: None,
            adults: Vec::new(),
            minors: Vec::new(),
        }
    }

    fn adult(name: &str) -> AdditionalAdult {
        AdditionalAdult {
            name: name.to_string(),
            dob: Some("1992-06-15".to_string()),
            email: None,
            phone: None,
        }
    }

    fn event(id: &str, kind: EventKind, customer: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: format!("Booking {}", id),
            start: "2025-03-10T10:00:00".parse().unwrap(),
            end: "2025-03-10T12:00:00".parse().unwrap(),
            kind,
            booking_id: 1,
            customer_name: customer.to_string(),
            customer_email: format!("{}@example.com", customer.to_lowercase()),
            customer_phone: String::new(),
            participants: 4,
            kids: 3,
            adults: 1,
            status: "confirmed".to_string(),
            amount: 1500.0,
            arrived: false,
            package_name: "Standard".to_string(),
            birthday_child_name: None,
            birthday_child_age: None,
        }
    }

    #[test]
    fn flatten_emits_one_row_per_signer_and_adult() {
        let mut second = record(2);
        second.adults = vec![adult("A"), adult("B")];
        let waivers = vec![record(1), second];

        let rows = flatten_waivers(&waivers);

        let expected: usize = waivers.iter().map(|w| 1 + w.adults.len()).sum();
        assert_eq!(rows.len(), expected);
        let ids: Vec<&str> = rows.iter().map(|r| r.unique_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "2-adult-0", "2-adult-1"]);
    }

    #[test]
    fn flatten_keeps_group_rows_contiguous_and_ordered() {
        let mut first = record(1);
        first.adults = vec![adult("First extra"), adult("Second extra")];
        let mut second = record(2);
        second.adults = vec![adult("Third extra")];

        let rows = flatten_waivers(&[first, second]);

        assert_eq!(
            rows.iter().map(|r| r.waiver_id).collect::<Vec<_>>(),
            vec![1, 1, 1, 2, 2]
        );
        assert!(rows[0].is_primary);
        assert_eq!(rows[1].name, "First extra");
        assert_eq!(rows[2].name, "Second extra");
        assert!(rows[3].is_primary);
        assert_eq!(rows[4].name, "Third extra");
    }

    #[test]
    fn flatten_keeps_minors_nested_under_primary() {
        let mut waiver = record(5);
        waiver.name = "Asha".to_string();
        waiver.adults = vec![AdditionalAdult {
            name: "Raj".to_string(),
            dob: Some("1990-01-01".to_string()),
            email: None,
            phone: None,
        }];
        waiver.minors = vec![Minor {
            name: "Mini".to_string(),
            dob: Some("2015-05-05".to_string()),
        }];

        let rows = flatten_waivers(&[waiver]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].unique_id, "5");
        assert!(rows[0].is_primary);
        assert_eq!(rows[0].minors.len(), 1);
        assert_eq!(rows[0].minors[0].name, "Mini");

        assert_eq!(rows[1].unique_id, "5-adult-0");
        assert!(rows[1].is_additional_adult);
        assert_eq!(rows[1].name, "Raj");
        assert!(rows[1].minors.is_empty());

        // No minor ever becomes a row of its own.
        assert!(rows
            .iter()
            .all(|r| r.is_primary || r.participant_type == ParticipantType::Adult));
    }

    #[test]
    fn flatten_overrides_identity_on_additional_adult_rows() {
        let mut waiver = record(7);
        waiver.participant_type = ParticipantType::Minor;
        waiver.booking_reference = Some("REF-7".to_string());
        waiver.adults = vec![AdditionalAdult {
            name: "Guest".to_string(),
            dob: None,
            email: Some("guest@example.com".to_string()),
            phone: Some("555-0100".to_string()),
        }];

        let rows = flatten_waivers(&[waiver]);
        let extra = &rows[1];

        assert_eq!(extra.name, "Guest");
        assert_eq!(extra.email.as_deref(), Some("guest@example.com"));
        assert_eq!(extra.phone.as_deref(), Some("555-0100"));
        assert_eq!(extra.dob, None);
        // Forced adult regardless of the parent record's type
        assert_eq!(extra.participant_type, ParticipantType::Adult);
        // Parent details are inherited
        assert_eq!(extra.booking_reference.as_deref(), Some("REF-7"));
        assert_eq!(extra.signed_at, rows[0].signed_at);
    }

    #[test]
    fn reflattening_a_derived_row_yields_only_itself() {
        let mut waiver = record(3);
        waiver.adults = vec![adult("Extra")];
        let rows = flatten_waivers(&[waiver]);
        let derived = &rows[1];

        // Treat the derived row as if it were a record again; its cleared
        // guest lists must keep the transform from recursing.
        let as_record = WaiverRecord {
            id: derived.waiver_id,
            name: derived.name.clone(),
            email: derived.email.clone(),
            phone: derived.phone.clone(),
            dob: derived.dob.clone(),
            participant_type: derived.participant_type,
            signed_at: derived.signed_at.clone(),
            is_verified: derived.is_verified,
            booking: derived.booking,
            booking_reference: derived.booking_reference.clone(),
            adults: derived.adults.clone(),
            minors: derived.minors.clone(),
        };
        let again = flatten_waivers(&[as_record]);

        assert_eq!(again.len(), 1);
        assert_eq!(again[0].name, "Extra");
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_email() {
        let mut waiver = record(5);
        waiver.name = "Asha".to_string();
        waiver.email = Some("asha@example.com".to_string());
        waiver.adults = vec![adult("Raj")];
        let rows = flatten_waivers(&[waiver]);

        let query = WaiverQuery {
            search: "asha".to_string(),
            ..WaiverQuery::default()
        };
        let hits = query.apply(&rows);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Asha");

        // Matching runs against the row's own overridden fields, so the
        // additional adult is found by its own name.
        let query = WaiverQuery {
            search: "RAJ".to_string(),
            ..WaiverQuery::default()
        };
        let hits = query.apply(&rows);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].unique_id, "5-adult-0");
    }

    #[test]
    fn empty_search_matches_everything() {
        let rows = flatten_waivers(&[record(1), record(2)]);
        assert_eq!(WaiverQuery::default().apply(&rows).len(), rows.len());
    }

    #[test]
    fn participant_filter_matches_exact_type() {
        let mut minor_record = record(2);
        minor_record.participant_type = ParticipantType::Minor;
        let rows = flatten_waivers(&[record(1), minor_record]);

        let query = WaiverQuery {
            participant: ParticipantFilter::Minor,
            ..WaiverQuery::default()
        };
        let hits = query.apply(&rows);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].waiver_id, 2);
    }

    #[test]
    fn booking_filter_classifies_whole_group() {
        let mut session = record(1);
        session.adults = vec![adult("Extra")];
        let mut party = record(2);
        party.booking = BookingAttachment::Party(20);
        let mut unattached = record(3);
        unattached.booking = BookingAttachment::None;
        let rows = flatten_waivers(&[session, party, unattached]);

        let sessions = WaiverQuery {
            booking: BookingFilter::Session,
            ..WaiverQuery::default()
        }
        .apply(&rows);
        // Both rows of the session group classify the same way.
        assert_eq!(sessions.len(), 2);
        assert!(sessions.iter().all(|r| r.waiver_id == 1));

        let parties = WaiverQuery {
            booking: BookingFilter::Party,
            ..WaiverQuery::default()
        }
        .apply(&rows);
        assert_eq!(parties.len(), 1);
        assert_eq!(parties[0].waiver_id, 2);

        // Records with no attachment only show under All.
        let all = WaiverQuery::default().apply(&rows);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn filters_combine_with_and() {
        let mut waiver = record(1);
        waiver.name = "Asha".to_string();
        waiver.booking = BookingAttachment::Party(10);
        let rows = flatten_waivers(&[waiver]);

        let matching = WaiverQuery {
            search: "ash".to_string(),
            participant: ParticipantFilter::Adult,
            booking: BookingFilter::Party,
        };
        assert_eq!(matching.apply(&rows).len(), 1);

        // Flipping any single predicate empties the result.
        for query in [
            WaiverQuery { search: "zzz".to_string(), ..matching.clone() },
            WaiverQuery { participant: ParticipantFilter::Minor, ..matching.clone() },
            WaiverQuery { booking: BookingFilter::Session, ..matching.clone() },
        ] {
            assert!(query.apply(&rows).is_empty());
        }
    }

    #[test]
    fn verification_toggle_applies_and_reverts() {
        let mut waivers = vec![record(5), record(6)];
        let toggle = VerificationToggle::new(5, true);

        assert!(toggle.apply(&mut waivers));
        assert!(waivers[0].is_verified);
        assert!(!waivers[1].is_verified);

        assert!(toggle.revert(&mut waivers));
        assert!(!waivers[0].is_verified);
    }

    #[test]
    fn verification_toggle_unknown_id_is_a_noop() {
        let mut waivers = vec![record(1)];
        let toggle = VerificationToggle::new(99, true);
        assert!(!toggle.apply(&mut waivers));
        assert!(!waivers[0].is_verified);
    }

    #[test]
    fn waiver_record_decodes_wire_shape() {
        let json = r#"{
            "id": 5,
            "name": "Asha",
            "email": "asha@example.com",
            "phone": null,
            "dob": "1988-04-02",
            "participant_type": "ADULT",
            "signed_at": "2025-03-01T10:00:00Z",
            "is_verified": false,
            "booking": 42,
            "party_booking": null,
            "booking_reference": "BK-42",
            "adults": [{"name": "Raj", "dob": "1990-01-01"}],
            "minors": [{"name": "Mini", "dob": "2015-05-05"}]
        }"#;
        let waiver: WaiverRecord = serde_json::from_str(json).unwrap();

        assert_eq!(waiver.booking, BookingAttachment::Session(42));
        assert_eq!(waiver.participant_type, ParticipantType::Adult);
        assert_eq!(waiver.adults.len(), 1);
        assert_eq!(waiver.minors[0].name, "Mini");
    }

    #[test]
    fn booking_attachment_resolves_the_optional_pair() {
        assert_eq!(
            BookingAttachment::from_ids(None, Some(7)),
            BookingAttachment::Party(7)
        );
        assert_eq!(BookingAttachment::from_ids(None, None), BookingAttachment::None);
        // Invalid both-set data resolves session-first instead of being
        // representable as two simultaneous attachments.
        assert_eq!(
            BookingAttachment::from_ids(Some(1), Some(2)),
            BookingAttachment::Session(1)
        );
    }

    #[test]
    fn malformed_guest_lists_become_empty() {
        let json = r#"{
            "id": 9,
            "name": "Solo",
            "participant_type": "ADULT",
            "signed_at": "2025-03-01T10:00:00Z",
            "adults": "oops",
            "minors": null
        }"#;
        let waiver: WaiverRecord = serde_json::from_str(json).unwrap();
        assert!(waiver.adults.is_empty());
        assert!(waiver.minors.is_empty());

        let json = r#"{"id": 10, "name": "Solo", "participant_type": "MINOR", "signed_at": ""}"#;
        let waiver: WaiverRecord = serde_json::from_str(json).unwrap();
        assert!(waiver.adults.is_empty());
        assert!(waiver.minors.is_empty());
        assert_eq!(waiver.booking, BookingAttachment::None);
    }

    #[test]
    fn calendar_event_decodes_camel_case_wire() {
        let json = r#"{
            "id": "party-12",
            "title": "Party #12",
            "start": "2025-03-15T14:00:00",
            "end": "2025-03-15T17:00:00",
            "type": "party",
            "bookingId": 12,
            "customerName": "Priya Shah",
            "customerEmail": "priya@example.com",
            "customerPhone": "555-0101",
            "participants": 12,
            "kids": 10,
            "adults": 2,
            "status": "confirmed",
            "amount": 4500.0,
            "arrived": false,
            "packageName": "Gold",
            "birthdayChildName": "Dev",
            "birthdayChildAge": 7
        }"#;
        let raw: CalendarEventRaw = serde_json::from_str(json).unwrap();
        assert_eq!(raw.kind, EventKind::Party);
        assert_eq!(raw.booking_id, 12);

        let event = CalendarEvent::try_from(raw).unwrap();
        assert_eq!(event.start.to_string(), "2025-03-15 14:00:00");
        assert_eq!(event.birthday_child_name.as_deref(), Some("Dev"));
        assert_eq!(event.birthday_child_age, Some(7));
    }

    #[test]
    fn birthday_fields_exist_only_on_party_events() {
        let mut raw = CalendarEventRaw {
            id: "session-1".to_string(),
            title: "Session #1".to_string(),
            start: "2025-03-10T10:00:00".to_string(),
            end: "2025-03-10T12:00:00".to_string(),
            kind: EventKind::Session,
            booking_id: 1,
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
            participants: 0,
            kids: 0,
            adults: 0,
            status: String::new(),
            amount: 0.0,
            arrived: false,
            package_name: String::new(),
            birthday_child_name: Some("Stray".to_string()),
            birthday_child_age: Some(6),
        };
        let session = CalendarEvent::try_from(raw.clone()).unwrap();
        assert_eq!(session.birthday_child_name, None);
        assert_eq!(session.birthday_child_age, None);

        raw.kind = EventKind::Party;
        let party = CalendarEvent::try_from(raw).unwrap();
        assert_eq!(party.birthday_child_name.as_deref(), Some("Stray"));
    }

    #[test]
    fn event_timestamps_round_trip() {
        for input in ["2025-03-15T14:00:00", "2025-03-15T14:00:00Z"] {
            let parsed = parse_event_timestamp(input).unwrap();
            assert_eq!(
                parsed.format("%Y-%m-%dT%H:%M:%S").to_string(),
                "2025-03-15T14:00:00"
            );
        }
    }

    #[test]
    fn bad_timestamp_fails_the_whole_parse() {
        let raw = CalendarEventRaw {
            id: "session-1".to_string(),
            title: "Session #1".to_string(),
            start: "not-a-date".to_string(),
            end: "2025-03-10T12:00:00".to_string(),
            kind: EventKind::Session,
            booking_id: 1,
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
            participants: 0,
            kids: 0,
            adults: 0,
            status: String::new(),
            amount: 0.0,
            arrived: false,
            package_name: String::new(),
            birthday_child_name: None,
            birthday_child_age: None,
        };
        assert!(parse_events(vec![raw]).is_err());
    }

    #[test]
    fn filter_events_by_kind_and_query() {
        let mut birthday = event("party-1", EventKind::Party, "Priya");
        birthday.birthday_child_name = Some("Dev".to_string());
        let events = vec![
            event("session-1", EventKind::Session, "Asha"),
            event("session-2", EventKind::Session, "Raj"),
            event("session-3", EventKind::Session, "Priya"),
            birthday,
            event("party-2", EventKind::Party, "Omar"),
        ];

        let parties = filter_events(&events, EventFilter::Party, "");
        assert_eq!(parties.len(), 2);
        assert!(parties.iter().all(|e| e.kind == EventKind::Party));
        assert_eq!(parties[0].birthday_child_name.as_deref(), Some("Dev"));

        let hits = filter_events(&events, EventFilter::All, "priya");
        assert_eq!(hits.len(), 2);

        let hits = filter_events(&events, EventFilter::Session, "priya");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "session-3");

        // Title matches too.
        let hits = filter_events(&events, EventFilter::All, "party-2");
        assert_eq!(hits.len(), 1);
        assert!(filter_events(&events, EventFilter::All, "nobody").is_empty());
    }

    #[test]
    fn summary_decodes_and_defaults() {
        let json = r#"{
            "totalBookings": 5,
            "sessionBookings": 3,
            "partyBookings": 2,
            "totalRevenue": 12500.0,
            "totalParticipants": 41
        }"#;
        let summary: BookingSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_bookings, 5);
        assert_eq!(summary.party_bookings, 2);

        let empty: BookingSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, BookingSummary::default());
    }

    #[test]
    fn calendar_focus_navigation_rolls_over_years() {
        let january = CalendarFocus::new(2025, 1);
        assert_eq!(january.prev(), CalendarFocus::new(2024, 12));
        let december = CalendarFocus::new(2025, 12);
        assert_eq!(december.next(), CalendarFocus::new(2026, 1));
        assert_eq!(CalendarFocus::new(2025, 6).next(), CalendarFocus::new(2025, 7));
    }

    #[test]
    fn calendar_focus_bounds_cover_the_month() {
        let (start, end) = CalendarFocus::new(2025, 3).bounds().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());

        // Leap February
        let (_, end) = CalendarFocus::new(2024, 2).bounds().unwrap();
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        assert!(CalendarFocus::new(2025, 13).bounds().is_none());
    }

    #[test]
    fn age_counts_unreached_birthdays() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(age_on("1990-01-01", today), Some(35));
        assert_eq!(age_on("1990-03-10", today), Some(35));
        assert_eq!(age_on("1990-03-11", today), Some(34));
        assert_eq!(age_on("2026-01-01", today), None);
        assert_eq!(age_on("not-a-date", today), None);
    }
}
