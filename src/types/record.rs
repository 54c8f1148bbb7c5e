//! Raw input records
//!
//! One struct per record kind, exactly as the document parsers produce them.
//! Every field is optional so that a missing value reaches the validator as
//! "absent" instead of failing the whole document. Decimal amounts are kept
//! as text and parsed during validation.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Input pattern of projection date-times (`yyyy-MM-dd HH:mm:ss`)
pub const DATE_TIME_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Output pattern of projection dates in import reports (`MM/dd/yyyy`)
pub const DATE_OUTPUT_FORMAT: &str = "%m/%d/%Y";

/// Pattern of movie durations (`HH:MM:SS`)
pub const DURATION_FORMAT: &str = "%H:%M:%S";

/// Movie entry of the movies JSON document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieRecord {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub duration: Option<String>,
    pub rating: Option<f64>,
    pub director: Option<String>,
}

/// Hall entry of the halls-seats JSON document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HallRecord {
    pub name: Option<String>,
    #[serde(rename = "Is4Dx", default)]
    pub is_4dx: bool,
    #[serde(rename = "Is3D", default)]
    pub is_3d: bool,
    pub seats: Option<i32>,
}

/// `<Projection>` element of the projections XML document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectionRecord {
    pub movie_id: Option<u32>,
    pub hall_id: Option<u32>,
    pub date_time: Option<String>,
}

/// `<Customer>` element of the customers-tickets XML document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub balance: Option<String>,
    #[serde(default)]
    pub tickets: TicketList,
}

/// `<Tickets>` wrapper nested in a customer
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TicketList {
    #[serde(rename = "Ticket", default)]
    pub items: Vec<TicketRecord>,
}

/// `<Ticket>` element nested in a customer
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TicketRecord {
    pub projection_id: Option<u32>,
    pub price: Option<String>,
}

/// Parse a decimal amount, ignoring surrounding whitespace
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim()).ok()
}

/// Parse an `HH:MM:SS` duration
pub fn parse_duration(text: &str) -> Option<TimeDelta> {
    let time = NaiveTime::parse_from_str(text.trim(), DURATION_FORMAT).ok()?;
    Some(TimeDelta::seconds(i64::from(
        time.num_seconds_from_midnight(),
    )))
}

/// Parse a projection date-time in the fixed, locale-independent input pattern
pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), DATE_TIME_INPUT_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("01:30:00", 5400)]
    #[case("00:45:00", 2700)]
    #[case(" 02:16:05 ", 8165)]
    fn test_parse_duration(#[case] input: &str, #[case] seconds: i64) {
        assert_eq!(parse_duration(input), Some(TimeDelta::seconds(seconds)));
    }

    #[rstest]
    #[case::minutes_only("90")]
    #[case::bad_minutes("01:75:00")]
    #[case::empty("")]
    fn test_parse_duration_rejects(#[case] input: &str) {
        assert_eq!(parse_duration(input), None);
    }

    #[test]
    fn test_parse_date_time_round_trips_to_report_format() {
        let parsed = parse_date_time("2019-04-27 13:33:20").unwrap();
        assert_eq!(parsed.format(DATE_OUTPUT_FORMAT).to_string(), "04/27/2019");
        assert_eq!(
            parsed.format(DATE_TIME_INPUT_FORMAT).to_string(),
            "2019-04-27 13:33:20"
        );
    }

    #[rstest]
    #[case::us_order("04/27/2019 13:33:20")]
    #[case::no_time("2019-04-27")]
    #[case::bad_month("2019-13-01 10:00:00")]
    fn test_parse_date_time_rejects(#[case] input: &str) {
        assert_eq!(parse_date_time(input), None);
    }

    #[rstest]
    #[case("59.44", Some(Decimal::new(5944, 2)))]
    #[case(" 7 ", Some(Decimal::new(7, 0)))]
    #[case("seven", None)]
    fn test_parse_decimal(#[case] input: &str, #[case] expected: Option<Decimal>) {
        assert_eq!(parse_decimal(input), expected);
    }
}
