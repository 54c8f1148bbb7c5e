//! Export queries
//!
//! This module projects persisted entities into the two report documents:
//! - **Top movies**: well rated movies that sold tickets, with their revenue
//!   and the customers that bought those tickets
//! - **Top customers**: customers over an age threshold ranked by spend, with
//!   their total viewing time
//!
//! Both queries keep at most `TOP_LIMIT` rows. Sorting is stable, so rows that
//! compare equal stay in identifier order.

use crate::core::traits::CinemaStore;
use crate::io::{json_format, xml_format};
use crate::types::{CinemaError, Customer, Movie, Ticket};
use chrono::TimeDelta;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::info;

/// Maximum number of rows in an export
pub const TOP_LIMIT: usize = 10;

/// One movie row of the top movies export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopMovie {
    pub movie_name: String,
    pub rating: String,
    pub total_incomes: String,
    pub customers: Vec<TopMovieCustomer>,
}

/// A ticket holder listed under a top movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopMovieCustomer {
    pub first_name: String,
    pub last_name: String,
    pub balance: String,
}

/// One customer row of the top customers export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopCustomer {
    pub first_name: String,
    pub last_name: String,
    pub spent_money: String,
    pub spent_time: String,
}

/// Format an amount with exactly two decimals, midpoints rounded away from zero
fn money(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Format a rating with exactly two decimals, rounded like `money`
fn rating_text(rating: f64) -> String {
    match Decimal::from_f64_retain(rating) {
        Some(exact) => money(exact),
        None => format!("{:.2}", rating),
    }
}

/// Render a duration as `hh:mm:ss`
///
/// Whole days are dropped, so `25:10:00` renders as `01:10:00`. Negative
/// durations render as `00:00:00`.
pub fn format_time_of_day(duration: TimeDelta) -> String {
    let total = duration.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        (total / 3600) % 24,
        (total / 60) % 60,
        total % 60
    )
}

/// Order ticket holders by formatted balance (descending), then names
///
/// The balance is compared as text, so `"59.44"` sorts above `"120.00"`.
fn compare_ticket_holders(a: &TopMovieCustomer, b: &TopMovieCustomer) -> Ordering {
    b.balance
        .cmp(&a.balance)
        .then_with(|| a.first_name.cmp(&b.first_name))
        .then_with(|| a.last_name.cmp(&b.last_name))
}

/// Query the top movies
///
/// Keeps movies rated at least `min_rating` that sold at least one ticket,
/// ordered by rating then revenue, both descending.
pub fn top_movies<S: CinemaStore>(store: &S, min_rating: f64) -> Vec<TopMovie> {
    struct Candidate<'a> {
        movie: &'a Movie,
        revenue: Decimal,
        tickets: Vec<&'a Ticket>,
    }

    let mut candidates: Vec<Candidate<'_>> = store
        .movies()
        .iter()
        .filter(|movie| movie.rating >= min_rating)
        .map(|movie| {
            let tickets: Vec<&Ticket> = store
                .projections_of_movie(movie.id)
                .flat_map(move |projection| store.tickets_of_projection(projection.id))
                .collect();
            let revenue = tickets.iter().map(|ticket| ticket.price).sum();
            Candidate {
                movie,
                revenue,
                tickets,
            }
        })
        .filter(|candidate| !candidate.tickets.is_empty())
        .collect();

    candidates.sort_by(|a, b| {
        b.movie
            .rating
            .total_cmp(&a.movie.rating)
            .then_with(|| b.revenue.cmp(&a.revenue))
    });
    candidates.truncate(TOP_LIMIT);

    candidates
        .into_iter()
        .map(|candidate| {
            let mut customers: Vec<TopMovieCustomer> = candidate
                .tickets
                .iter()
                .filter_map(|ticket| store.find_customer(ticket.customer_id))
                .map(|customer| TopMovieCustomer {
                    first_name: customer.first_name.clone(),
                    last_name: customer.last_name.clone(),
                    balance: money(customer.balance),
                })
                .collect();
            customers.sort_by(compare_ticket_holders);

            TopMovie {
                movie_name: candidate.movie.title.clone(),
                rating: rating_text(candidate.movie.rating),
                total_incomes: money(candidate.revenue),
                customers,
            }
        })
        .collect()
}

/// Query the top customers
///
/// Keeps customers aged at least `min_age`, ordered by total spend descending.
pub fn top_customers<S: CinemaStore>(store: &S, min_age: u32) -> Vec<TopCustomer> {
    let mut ranked: Vec<(&Customer, Decimal, TimeDelta)> = store
        .customers()
        .iter()
        .filter(|customer| customer.age >= min_age)
        .map(|customer| {
            let tickets: Vec<&Ticket> = store.tickets_of_customer(customer.id).collect();
            let spent: Decimal = tickets.iter().map(|ticket| ticket.price).sum();
            let watched = tickets
                .iter()
                .filter_map(|ticket| store.find_projection(ticket.projection_id))
                .filter_map(|projection| store.find_movie(projection.movie_id))
                .fold(TimeDelta::zero(), |total, movie| total + movie.duration);
            (customer, spent, watched)
        })
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_LIMIT);

    ranked
        .into_iter()
        .map(|(customer, spent, watched)| TopCustomer {
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            spent_money: money(spent),
            spent_time: format_time_of_day(watched),
        })
        .collect()
}

/// Export the top movies as an indented JSON document
pub fn export_top_movies<S: CinemaStore>(store: &S, min_rating: f64) -> Result<String, CinemaError> {
    let movies = top_movies(store, min_rating);
    info!(min_rating, rows = movies.len(), "exporting top movies");
    json_format::write_top_movies(&movies)
}

/// Export the top customers as an XML document
pub fn export_top_customers<S: CinemaStore>(store: &S, min_age: u32) -> Result<String, CinemaError> {
    let customers = top_customers(store, min_age);
    info!(min_age, rows = customers.len(), "exporting top customers");
    xml_format::write_top_customers(&customers)
}
