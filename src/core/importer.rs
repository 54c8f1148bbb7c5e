//! Record import pipeline
//!
//! This module provides the import pipeline that turns an input document into
//! staged entities and a text report. The shape is the same for every record
//! kind:
//!
//! 1. Parse the document into raw records (a malformed document fails the call)
//! 2. For each record, in input order:
//!    - validate it against its constraint table
//!    - apply the kind-specific gates (duplicate titles, genre lookup, seat
//!      count, reference resolution, nested tickets)
//!    - build the staged entity and its success line, or append the error line
//! 3. Stage everything accepted and commit it in one call
//! 4. Return the report
//!
//! Kinds differ only in their gates and in how they build the entity, which
//! is what `ImportKind` captures.

use crate::core::report::ReportAccumulator;
use crate::core::resolver::RecordResolver;
use crate::core::traits::CinemaStore;
use crate::core::validator::{is_valid, Validate};
use crate::io::{json_format, xml_format};
use crate::types::record::{parse_date_time, parse_decimal, parse_duration, DATE_OUTPUT_FORMAT};
use crate::types::{
    CinemaError, CustomerRecord, Genre, HallRecord, MovieRecord, NewCustomer, NewHall, NewMovie,
    NewProjection, NewTicket, ProjectionRecord, Seat, StagedEntity, TicketRecord,
};
use std::collections::HashSet;
use tracing::{debug, info};

/// A record that passed every gate
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted {
    /// Entity to stage for the commit
    pub entity: StagedEntity,
    /// Success line for the report
    pub line: String,
}

/// One record kind of the import pipeline
///
/// `accept` is only called for records that already passed validation. It may
/// append lines of its own to the report (rejected nested records) before the
/// pipeline appends the record's own line.
pub trait ImportKind {
    type Record: Validate;

    /// Parse the input document into raw records
    fn parse(&self, document: &str) -> Result<Vec<Self::Record>, CinemaError>;

    /// Apply the kind-specific gates and build the staged entity
    ///
    /// Returns `None` if the record must be rejected.
    fn accept<S: CinemaStore>(
        &mut self,
        record: Self::Record,
        store: &S,
        report: &mut ReportAccumulator,
    ) -> Option<Accepted>;
}

/// Run one import call
///
/// # Errors
///
/// Returns an error if the document cannot be parsed or the staged batch cannot
/// be committed. Rejected records are not errors; they are reported.
pub fn run_import<S, K>(store: &mut S, mut kind: K, document: &str) -> Result<String, CinemaError>
where
    S: CinemaStore,
    K: ImportKind,
{
    let kind_name = <K::Record as Validate>::KIND;
    let records = kind.parse(document)?;
    let total = records.len();

    let mut report = ReportAccumulator::new();
    let mut staged = Vec::with_capacity(total);

    for (index, record) in records.into_iter().enumerate() {
        if !is_valid(&record) {
            debug!(kind = kind_name, index, "record failed validation");
            report.push_error();
            continue;
        }

        match kind.accept(record, &*store, &mut report) {
            Some(accepted) => {
                report.push(accepted.line);
                staged.push(accepted.entity);
            }
            None => {
                debug!(kind = kind_name, index, "record rejected by import gate");
                report.push_error();
            }
        }
    }

    if report.is_empty() {
        debug!(kind = kind_name, "document holds no records");
    }

    let accepted = staged.len();
    store.add_range(staged);
    let written = store.commit()?;

    info!(
        kind = kind_name,
        records = total,
        accepted,
        report_lines = report.len(),
        error_lines = report.rejected(),
        written,
        "import finished"
    );

    Ok(report.finish())
}

/// Movies: unique titles within the call, genre must be known
#[derive(Debug, Default)]
pub struct MovieImport {
    accepted_titles: HashSet<String>,
}

impl ImportKind for MovieImport {
    type Record = MovieRecord;

    fn parse(&self, document: &str) -> Result<Vec<MovieRecord>, CinemaError> {
        json_format::parse_movies(document)
    }

    fn accept<S: CinemaStore>(
        &mut self,
        record: MovieRecord,
        _store: &S,
        _report: &mut ReportAccumulator,
    ) -> Option<Accepted> {
        let title = record.title?;
        if self.accepted_titles.contains(&title) {
            debug!(%title, "title already imported in this batch");
            return None;
        }

        let genre = match record.genre?.parse::<Genre>() {
            Ok(genre) => genre,
            Err(e) => {
                debug!(error = %e, "genre lookup failed");
                return None;
            }
        };
        let duration = parse_duration(&record.duration?)?;
        let rating = record.rating?;
        let director = record.director?;

        let line = format!(
            "Successfully imported {} with genre {} and rating {}!",
            title, genre, rating
        );
        self.accepted_titles.insert(title.clone());

        Some(Accepted {
            entity: NewMovie {
                title,
                genre,
                duration,
                rating,
                director,
            }
            .into(),
            line,
        })
    }
}

/// Halls: seat count must be positive; seats are materialised one by one
#[derive(Debug, Default)]
pub struct HallImport;

impl ImportKind for HallImport {
    type Record = HallRecord;

    fn parse(&self, document: &str) -> Result<Vec<HallRecord>, CinemaError> {
        json_format::parse_halls(document)
    }

    fn accept<S: CinemaStore>(
        &mut self,
        record: HallRecord,
        _store: &S,
        _report: &mut ReportAccumulator,
    ) -> Option<Accepted> {
        let seats = record.seats?;
        if seats <= 0 {
            debug!(seats, "seat count must be positive");
            return None;
        }
        let seat_count = usize::try_from(seats).ok()?;

        let hall = NewHall {
            name: record.name?,
            is_4dx: record.is_4dx,
            is_3d: record.is_3d,
            seats: vec![Seat; seat_count],
        };
        let line = format!(
            "Successfully imported {}({}) with {} seats!",
            hall.name,
            hall.status(),
            hall.seats.len()
        );

        Some(Accepted {
            entity: hall.into(),
            line,
        })
    }
}

/// Projections: movie and hall must already be persisted
#[derive(Debug, Default)]
pub struct ProjectionImport;

impl ImportKind for ProjectionImport {
    type Record = ProjectionRecord;

    fn parse(&self, document: &str) -> Result<Vec<ProjectionRecord>, CinemaError> {
        xml_format::parse_projections(document)
    }

    fn accept<S: CinemaStore>(
        &mut self,
        record: ProjectionRecord,
        store: &S,
        _report: &mut ReportAccumulator,
    ) -> Option<Accepted> {
        let resolver = RecordResolver::new(store);
        let (movie, hall) = match resolver.movie_and_hall(record.movie_id?, record.hall_id?) {
            Ok(resolved) => resolved,
            Err(unresolved) => {
                debug!(%unresolved, "projection reference did not resolve");
                return None;
            }
        };

        let raw_date_time = record.date_time?;
        let Some(date_time) = parse_date_time(&raw_date_time) else {
            debug!(date_time = %raw_date_time, "projection date-time not in yyyy-MM-dd HH:mm:ss");
            return None;
        };

        let line = format!(
            "Successfully imported projection {} on {}!",
            movie.title,
            date_time.format(DATE_OUTPUT_FORMAT)
        );

        Some(Accepted {
            entity: NewProjection {
                movie_id: movie.id,
                hall_id: hall.id,
                date_time,
            }
            .into(),
            line,
        })
    }
}

/// Customers with their tickets: invalid tickets are dropped one by one
#[derive(Debug, Default)]
pub struct CustomerImport;

impl CustomerImport {
    fn ticket(record: TicketRecord) -> Option<NewTicket> {
        Some(NewTicket {
            projection_id: record.projection_id?,
            price: parse_decimal(&record.price?)?,
        })
    }
}

impl ImportKind for CustomerImport {
    type Record = CustomerRecord;

    fn parse(&self, document: &str) -> Result<Vec<CustomerRecord>, CinemaError> {
        xml_format::parse_customers(document)
    }

    fn accept<S: CinemaStore>(
        &mut self,
        record: CustomerRecord,
        _store: &S,
        report: &mut ReportAccumulator,
    ) -> Option<Accepted> {
        let first_name = record.first_name?;
        let last_name = record.last_name?;
        let age = u32::try_from(record.age?).ok()?;
        let balance = parse_decimal(&record.balance?)?;

        let mut tickets = Vec::with_capacity(record.tickets.items.len());
        for ticket in record.tickets.items {
            let accepted = if is_valid(&ticket) {
                Self::ticket(ticket)
            } else {
                None
            };

            match accepted {
                Some(ticket) => tickets.push(ticket),
                None => {
                    debug!(%first_name, %last_name, "skipping invalid ticket");
                    report.push_error();
                }
            }
        }

        let line = format!(
            "Successfully imported customer {} {} with bought tickets: {}!",
            first_name,
            last_name,
            tickets.len()
        );

        Some(Accepted {
            entity: NewCustomer {
                first_name,
                last_name,
                age,
                balance,
                tickets,
            }
            .into(),
            line,
        })
    }
}

/// Import a movies JSON document
pub fn import_movies<S: CinemaStore>(store: &mut S, document: &str) -> Result<String, CinemaError> {
    run_import(store, MovieImport::default(), document)
}

/// Import a halls-seats JSON document
pub fn import_hall_seats<S: CinemaStore>(
    store: &mut S,
    document: &str,
) -> Result<String, CinemaError> {
    run_import(store, HallImport, document)
}

/// Import a projections XML document
pub fn import_projections<S: CinemaStore>(
    store: &mut S,
    document: &str,
) -> Result<String, CinemaError> {
    run_import(store, ProjectionImport, document)
}

/// Import a customers-tickets XML document
pub fn import_customer_tickets<S: CinemaStore>(
    store: &mut S,
    document: &str,
) -> Result<String, CinemaError> {
    run_import(store, CustomerImport, document)
}
