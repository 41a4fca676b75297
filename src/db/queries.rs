use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, params_from_iter, Connection};

use crate::errors::AppError;
use crate::models::booking::{DATE_FORMAT, TIME_FORMAT};
use crate::models::{Booking, NewBooking};

/// Inserts a booking and returns its storage id. The unique slot index turns a
/// second booking on the same barber/date/time into `AppError::SlotConflict`.
pub fn insert_booking(conn: &Connection, booking: &NewBooking) -> Result<i64, AppError> {
    let result = conn.execute(
        "INSERT INTO bookings (client, barber, date, time) VALUES (?1, ?2, ?3, ?4)",
        params![
            booking.client,
            booking.barber,
            booking.date_str(),
            booking.time_str(),
        ],
    );

    match result {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            Err(AppError::SlotConflict)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn slot_taken(
    conn: &Connection,
    barber: &str,
    date: &NaiveDate,
    time: &NaiveTime,
) -> Result<bool, AppError> {
    let taken: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM bookings WHERE barber = ?1 AND date = ?2 AND time = ?3",
        params![
            barber,
            date.format(DATE_FORMAT).to_string(),
            time.format(TIME_FORMAT).to_string(),
        ],
        |row| row.get(0),
    )?;
    Ok(taken)
}

/// All bookings, or only those on `date`, ordered by date then time.
pub fn list_bookings(conn: &Connection, date: Option<&str>) -> Result<Vec<Booking>, AppError> {
    let sql = match date {
        Some(_) => "SELECT id, client, barber, date, time FROM bookings WHERE date = ?1 ORDER BY date, time",
        None => "SELECT id, client, barber, date, time FROM bookings ORDER BY date, time",
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params_from_iter(date), |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

fn parse_booking_row(row: &rusqlite::Row) -> Result<Booking, AppError> {
    let id: i64 = row.get(0)?;
    let client: String = row.get(1)?;
    let barber: String = row.get(2)?;
    let date_str: String = row.get(3)?;
    let time_str: String = row.get(4)?;

    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
        .map_err(|e| corrupt_column(3, e))?;
    let time = NaiveTime::parse_from_str(&time_str, TIME_FORMAT)
        .map_err(|e| corrupt_column(4, e))?;

    Ok(Booking {
        id,
        client,
        barber,
        date,
        time,
    })
}

fn corrupt_column(idx: usize, e: chrono::ParseError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn setup_db() -> Connection {
        db::init_db(":memory:").unwrap()
    }

    fn new_booking(client: &str, barber: &str, date: &str, time: &str) -> NewBooking {
        NewBooking {
            client: client.to_string(),
            barber: barber.to_string(),
            date: NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(),
            time: NaiveTime::parse_from_str(time, TIME_FORMAT).unwrap(),
        }
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let conn = setup_db();
        let a = insert_booking(&conn, &new_booking("Ana", "Arthur", "2024-06-10", "10:00")).unwrap();
        let b = insert_booking(&conn, &new_booking("Bia", "Arthur", "2024-06-10", "11:00")).unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_duplicate_slot_is_conflict() {
        let conn = setup_db();
        insert_booking(&conn, &new_booking("Ana", "Arthur", "2024-06-10", "10:00")).unwrap();
        let err = insert_booking(&conn, &new_booking("Bia", "Arthur", "2024-06-10", "10:00"))
            .unwrap_err();
        assert!(matches!(err, AppError::SlotConflict));
        assert_eq!(list_bookings(&conn, None).unwrap().len(), 1);
    }

    #[test]
    fn test_same_time_other_barber_is_free() {
        let conn = setup_db();
        insert_booking(&conn, &new_booking("Ana", "Arthur", "2024-06-10", "10:00")).unwrap();
        insert_booking(&conn, &new_booking("Bia", "Alan", "2024-06-10", "10:00")).unwrap();
        assert_eq!(list_bookings(&conn, None).unwrap().len(), 2);
    }

    #[test]
    fn test_slot_taken() {
        let conn = setup_db();
        let booking = new_booking("Ana", "Arthur", "2024-06-10", "10:00");
        assert!(!slot_taken(&conn, "Arthur", &booking.date, &booking.time).unwrap());
        insert_booking(&conn, &booking).unwrap();
        assert!(slot_taken(&conn, "Arthur", &booking.date, &booking.time).unwrap());
        assert!(!slot_taken(&conn, "Alan", &booking.date, &booking.time).unwrap());
    }

    #[test]
    fn test_list_orders_by_date_then_time() {
        let conn = setup_db();
        insert_booking(&conn, &new_booking("C", "Alan", "2024-06-11", "09:00")).unwrap();
        insert_booking(&conn, &new_booking("B", "Arthur", "2024-06-10", "15:30")).unwrap();
        insert_booking(&conn, &new_booking("A", "Alan", "2024-06-10", "09:30")).unwrap();

        let clients: Vec<String> = list_bookings(&conn, None)
            .unwrap()
            .into_iter()
            .map(|b| b.client)
            .collect();
        assert_eq!(clients, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_list_filters_by_date() {
        let conn = setup_db();
        insert_booking(&conn, &new_booking("C", "Alan", "2024-06-11", "09:00")).unwrap();
        insert_booking(&conn, &new_booking("B", "Arthur", "2024-06-10", "15:30")).unwrap();
        insert_booking(&conn, &new_booking("A", "Alan", "2024-06-10", "09:30")).unwrap();

        let bookings = list_bookings(&conn, Some("2024-06-10")).unwrap();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].client, "A");
        assert_eq!(bookings[1].client, "B");

        assert!(list_bookings(&conn, Some("2024-06-12")).unwrap().is_empty());
    }
}
