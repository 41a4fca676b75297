use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// A persisted booking. `id` is assigned by storage and never leaves the service.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub client: String,
    pub barber: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// A booking that passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub client: String,
    pub barber: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl NewBooking {
    pub fn date_str(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

/// Body of `POST /agendar`. Every field is optional here so that a missing
/// field is reported as incomplete data instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    #[serde(rename = "cliente", alias = "client")]
    pub client: Option<String>,
    #[serde(rename = "barbeiro", alias = "barber")]
    pub barber: Option<String>,
    #[serde(rename = "data", alias = "date")]
    pub date: Option<String>,
    #[serde(rename = "horario", alias = "time")]
    pub time: Option<String>,
}

/// Public view of a booking as listed by `GET /agenda`.
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub cliente: String,
    pub barbeiro: String,
    pub data: String,
    pub horario: String,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            cliente: b.client,
            barbeiro: b.barber,
            data: b.date.format(DATE_FORMAT).to_string(),
            horario: b.time.format(TIME_FORMAT).to_string(),
        }
    }
}

/// Only four-digit years are accepted so the stored text sorts chronologically.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .ok()
        .filter(|d| (0..=9999).contains(&d.year()))
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT).ok()
}
