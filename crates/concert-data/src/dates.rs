//! Event date parsing and date based ordering.

use std::cmp::Ordering;

use chrono::NaiveDate;
use tracing::trace;

use crate::{DataError, EventDetails, Result};

/// Storage format for [`Event::date`](crate::Event::date).
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Direction for date ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

pub fn parse_event_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, EVENT_DATE_FORMAT).map_err(|source| DataError::InvalidDate {
        date: date.to_string(),
        source,
    })
}

/// Whether `date` is a well formed event date.
#[must_use]
pub fn valid_date(date: &str) -> bool {
    parse_event_date(date).is_ok()
}

/// Compare two listings by event date.
///
/// Listings whose date does not parse always sort after dated ones, in either
/// direction, and compare equal among themselves.
#[must_use]
pub fn cmp_event_details_by_date(a: &EventDetails, b: &EventDetails, order: SortOrder) -> Ordering {
    let parse = |details: &EventDetails| match parse_event_date(&details.event.date) {
        Ok(date) => Some(date),
        Err(e) => {
            trace!(error = %e, listing = %details.name, "Listing has no usable date");
            None
        }
    };

    match (parse(a), parse(b)) {
        (Some(a), Some(b)) => match order {
            SortOrder::Ascending => a.cmp(&b),
            SortOrder::Descending => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort of listings by event date.
pub fn sort_event_details_by_date(listings: &mut [EventDetails], order: SortOrder) {
    listings.sort_by(|a, b| cmp_event_details_by_date(a, b, order));
}
