use rusqlite::Connection;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::booking::{parse_date, parse_time};
use crate::models::{Booking, BookingRequest, NewBooking, ShopConfig};

/// Checks a booking request against the shop rules, stopping at the first
/// failure. Does not touch storage.
pub fn validate_request(req: &BookingRequest, shop: &ShopConfig) -> Result<NewBooking, AppError> {
    let client = required(&req.client)?;
    let barber = required(&req.barber)?;
    let date = required(&req.date)?;
    let time = required(&req.time)?;

    if !shop.is_valid_barber(barber) {
        return Err(AppError::InvalidBarber);
    }

    let date = parse_date(date).ok_or(AppError::MalformedInput)?;
    if !shop.is_open_on(&date) {
        return Err(AppError::ClosedDay(shop.closed_day_name()));
    }

    let time = parse_time(time).ok_or(AppError::MalformedInput)?;
    if !shop.is_within_hours(&time) {
        return Err(AppError::OutsideHours);
    }

    Ok(NewBooking {
        client: client.trim().to_string(),
        barber: barber.to_string(),
        date,
        time,
    })
}

/// Blank-only values count as missing; the value itself is returned untouched.
fn required(field: &Option<String>) -> Result<&str, AppError> {
    match field.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::IncompleteInput),
    }
}

/// Validates and stores a booking. A concurrent duplicate that slips past the
/// existence check is rejected by the unique slot index.
pub fn create_booking(
    conn: &Connection,
    shop: &ShopConfig,
    req: &BookingRequest,
) -> Result<Booking, AppError> {
    let booking = validate_request(req, shop)?;

    if queries::slot_taken(conn, &booking.barber, &booking.date, &booking.time)? {
        return Err(AppError::SlotConflict);
    }

    let id = queries::insert_booking(conn, &booking)?;

    Ok(Booking {
        id,
        client: booking.client,
        barber: booking.barber,
        date: booking.date,
        time: booking.time,
    })
}
