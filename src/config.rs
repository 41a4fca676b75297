use std::env;
use std::str::FromStr;

use chrono::{NaiveTime, Weekday};

use crate::models::ShopConfig;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub shop: ShopConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "agenda.db".to_string()),
            shop: shop_from_env(),
        }
    }
}

fn shop_from_env() -> ShopConfig {
    let defaults = ShopConfig::default();

    let barbers = env::var("SHOP_BARBERS")
        .ok()
        .map(|v| parse_barbers(&v))
        .filter(|b| !b.is_empty())
        .unwrap_or(defaults.barbers);

    ShopConfig {
        barbers,
        opening: env_override("SHOP_OPENING", defaults.opening, parse_hhmm),
        closing: env_override("SHOP_CLOSING", defaults.closing, parse_hhmm),
        closed_day: env_override("SHOP_CLOSED_DAY", defaults.closed_day, |v| {
            Weekday::from_str(v.trim()).ok()
        }),
    }
}

fn env_override<T>(key: &str, default: T, parse: impl Fn(&str) -> Option<T>) -> T {
    match env::var(key) {
        Ok(raw) => parse(&raw).unwrap_or_else(|| {
            tracing::warn!(key, value = %raw, "ignoring unparseable setting, using default");
            default
        }),
        Err(_) => default,
    }
}

fn parse_barbers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_hhmm(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_barbers_trims_and_skips_empty() {
        assert_eq!(parse_barbers(" Arthur, Alan ,,"), vec!["Arthur", "Alan"]);
        assert!(parse_barbers(" , ").is_empty());
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("08:30"), NaiveTime::from_hms_opt(8, 30, 0));
        assert_eq!(parse_hhmm("8h30"), None);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Weekday::from_str("sunday").ok(), Some(Weekday::Sun));
        assert_eq!(Weekday::from_str("Mon").ok(), Some(Weekday::Mon));
    }
}
