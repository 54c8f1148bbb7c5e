//! Declarative field validation
//!
//! Each record kind lists its fields together with the constraints that apply
//! to them (`Validate::field_checks`). `is_valid` evaluates that table and
//! returns a single verdict: a record is either entirely valid or rejected.
//!
//! Validation only looks at the record's own fields. Anything that needs
//! persisted state or the rest of the batch (references, duplicate titles,
//! enumeration lookups) is a separate gate in the import pipeline.

use crate::types::record::parse_decimal;
use crate::types::{CustomerRecord, HallRecord, MovieRecord, ProjectionRecord, TicketRecord};
use rust_decimal::Decimal;
use tracing::debug;

/// Inclusive length bounds shared by every name-like field
const NAME_LENGTH: (usize, usize) = (3, 20);

/// Smallest accepted balance or price (0.01)
fn min_amount() -> Decimal {
    Decimal::new(1, 2)
}

/// Largest accepted balance or price (9999999999999999.99)
fn max_amount() -> Decimal {
    Decimal::new(999_999_999_999_999_999, 2)
}

/// A field value as seen by the validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// The field was not present in the input
    Missing,
    /// The field was present but could not be read as its type
    Malformed,
    Text(&'a str),
    Integer(i64),
    Real(f64),
    Decimal(Decimal),
}

impl<'a> FieldValue<'a> {
    pub fn text(value: Option<&'a String>) -> Self {
        value.map_or(FieldValue::Missing, |s| FieldValue::Text(s))
    }

    pub fn integer<T: Into<i64>>(value: Option<T>) -> Self {
        value.map_or(FieldValue::Missing, |n| FieldValue::Integer(n.into()))
    }

    pub fn real(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Real)
    }

    /// Read a decimal kept as text; unparseable text is `Malformed`
    pub fn decimal_text(value: Option<&'a String>) -> Self {
        match value {
            None => FieldValue::Missing,
            Some(text) => parse_decimal(text).map_or(FieldValue::Malformed, FieldValue::Decimal),
        }
    }
}

/// One declarative constraint on a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Present; for text also not empty or whitespace-only
    Required,
    /// Character count within `min..=max`
    Length { min: usize, max: usize },
    /// Integer within `min..=max`
    IntRange { min: i64, max: i64 },
    /// Real number within `min..=max`
    RealRange { min: f64, max: f64 },
    /// Decimal within `min..=max`
    DecimalRange { min: Decimal, max: Decimal },
}

impl Constraint {
    fn name_length() -> Self {
        Constraint::Length {
            min: NAME_LENGTH.0,
            max: NAME_LENGTH.1,
        }
    }

    fn amount_range() -> Self {
        Constraint::DecimalRange {
            min: min_amount(),
            max: max_amount(),
        }
    }

    /// Check a value against this constraint
    ///
    /// Only `Required` rejects a missing value; range and length checks
    /// apply to values that are present. A malformed value fails everything.
    pub fn accepts(&self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (_, FieldValue::Malformed) => false,
            (Constraint::Required, FieldValue::Missing) => false,
            (Constraint::Required, FieldValue::Text(text)) => !text.trim().is_empty(),
            (Constraint::Required, _) => true,
            (_, FieldValue::Missing) => true,
            (Constraint::Length { min, max }, FieldValue::Text(text)) => {
                (*min..=*max).contains(&text.chars().count())
            }
            (Constraint::IntRange { min, max }, FieldValue::Integer(n)) => (*min..=*max).contains(n),
            (Constraint::RealRange { min, max }, FieldValue::Real(x)) => (*min..=*max).contains(x),
            (Constraint::DecimalRange { min, max }, FieldValue::Decimal(d)) => {
                (*min..=*max).contains(d)
            }
            // A constraint applied to a value of another type never holds
            _ => false,
        }
    }
}

/// A field, its value and the constraints declared for it
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCheck<'a> {
    pub field: &'static str,
    pub value: FieldValue<'a>,
    pub constraints: Vec<Constraint>,
}

impl<'a> FieldCheck<'a> {
    pub fn new(field: &'static str, value: FieldValue<'a>, constraints: Vec<Constraint>) -> Self {
        Self {
            field,
            value,
            constraints,
        }
    }

    /// The first declared constraint the value violates, if any
    pub fn violation(&self) -> Option<Constraint> {
        self.constraints
            .iter()
            .copied()
            .find(|constraint| !constraint.accepts(&self.value))
    }
}

/// Trait for records that declare their own constraint table
pub trait Validate {
    /// Record kind, used in log events
    const KIND: &'static str;

    /// The fields of this record with their declared constraints
    fn field_checks(&self) -> Vec<FieldCheck<'_>>;
}

/// Evaluate a record against its constraint table
///
/// Every field is checked so that each violation gets its own debug event;
/// the verdict is false if any field fails.
pub fn is_valid<R: Validate>(record: &R) -> bool {
    let mut valid = true;

    for check in record.field_checks() {
        if let Some(constraint) = check.violation() {
            debug!(
                kind = R::KIND,
                field = check.field,
                value = ?check.value,
                constraint = ?constraint,
                "field constraint violated"
            );
            valid = false;
        }
    }

    valid
}

// Constraint tables

impl Validate for MovieRecord {
    const KIND: &'static str = "Movie";

    fn field_checks(&self) -> Vec<FieldCheck<'_>> {
        use Constraint::*;

        vec![
            FieldCheck::new(
                "Title",
                FieldValue::text(self.title.as_ref()),
                vec![Required, Constraint::name_length()],
            ),
            FieldCheck::new("Genre", FieldValue::text(self.genre.as_ref()), vec![Required]),
            FieldCheck::new(
                "Duration",
                FieldValue::text(self.duration.as_ref()),
                vec![Required],
            ),
            FieldCheck::new(
                "Rating",
                FieldValue::real(self.rating),
                vec![Required, RealRange { min: 1.0, max: 10.0 }],
            ),
            FieldCheck::new(
                "Director",
                FieldValue::text(self.director.as_ref()),
                vec![Required, Constraint::name_length()],
            ),
        ]
    }
}

impl Validate for HallRecord {
    const KIND: &'static str = "Hall";

    fn field_checks(&self) -> Vec<FieldCheck<'_>> {
        vec![
            FieldCheck::new(
                "Name",
                FieldValue::text(self.name.as_ref()),
                vec![Constraint::Required, Constraint::name_length()],
            ),
            FieldCheck::new(
                "Seats",
                FieldValue::integer(self.seats),
                vec![Constraint::Required],
            ),
        ]
    }
}

impl Validate for ProjectionRecord {
    const KIND: &'static str = "Projection";

    fn field_checks(&self) -> Vec<FieldCheck<'_>> {
        vec![
            FieldCheck::new(
                "MovieId",
                FieldValue::integer(self.movie_id),
                vec![Constraint::Required],
            ),
            FieldCheck::new(
                "HallId",
                FieldValue::integer(self.hall_id),
                vec![Constraint::Required],
            ),
            FieldCheck::new(
                "DateTime",
                FieldValue::text(self.date_time.as_ref()),
                vec![Constraint::Required],
            ),
        ]
    }
}

impl Validate for CustomerRecord {
    const KIND: &'static str = "Customer";

    fn field_checks(&self) -> Vec<FieldCheck<'_>> {
        use Constraint::*;

        vec![
            FieldCheck::new(
                "FirstName",
                FieldValue::text(self.first_name.as_ref()),
                vec![Required, Constraint::name_length()],
            ),
            FieldCheck::new(
                "LastName",
                FieldValue::text(self.last_name.as_ref()),
                vec![Required, Constraint::name_length()],
            ),
            FieldCheck::new(
                "Age",
                FieldValue::integer(self.age),
                vec![Required, IntRange { min: 12, max: 110 }],
            ),
            FieldCheck::new(
                "Balance",
                FieldValue::decimal_text(self.balance.as_ref()),
                vec![Required, Constraint::amount_range()],
            ),
        ]
    }
}

impl Validate for TicketRecord {
    const KIND: &'static str = "Ticket";

    fn field_checks(&self) -> Vec<FieldCheck<'_>> {
        vec![
            FieldCheck::new(
                "ProjectionId",
                FieldValue::integer(self.projection_id),
                vec![Constraint::Required],
            ),
            FieldCheck::new(
                "Price",
                FieldValue::decimal_text(self.price.as_ref()),
                vec![Constraint::Required, Constraint::amount_range()],
            ),
        ]
    }
}
