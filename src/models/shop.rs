use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

/// Fixed business rules of the shop: who cuts hair, when the doors are open,
/// and the one weekday it stays closed.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    pub barbers: Vec<String>,
    pub opening: NaiveTime,
    pub closing: NaiveTime,
    pub closed_day: Weekday,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            barbers: vec!["Arthur".to_string(), "Alan".to_string()],
            opening: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            closing: NaiveTime::from_hms_opt(20, 0, 0).unwrap_or_default(),
            closed_day: Weekday::Sun,
        }
    }
}

impl ShopConfig {
    pub fn is_valid_barber(&self, barber: &str) -> bool {
        self.barbers.iter().any(|b| b == barber)
    }

    pub fn is_open_on(&self, date: &NaiveDate) -> bool {
        date.weekday() != self.closed_day
    }

    /// Opening time is inclusive, closing time exclusive.
    pub fn is_within_hours(&self, time: &NaiveTime) -> bool {
        *time >= self.opening && *time < self.closing
    }

    pub fn closed_day_name(&self) -> &'static str {
        match self.closed_day {
            Weekday::Mon => "às segundas",
            Weekday::Tue => "às terças",
            Weekday::Wed => "às quartas",
            Weekday::Thu => "às quintas",
            Weekday::Fri => "às sextas",
            Weekday::Sat => "aos sábados",
            Weekday::Sun => "aos domingos",
        }
    }
}
