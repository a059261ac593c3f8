//! Entity data model shared by the concert-search library and its collaborators.
//!
//! The types here are plain values: the search engine only reads them, and
//! persistence or presentation layers own their lifecycle. Validation helpers
//! mirror what an editor needs before it accepts user input.

mod dates;
mod entities;

pub use dates::{
    EVENT_DATE_FORMAT, SortOrder, cmp_event_details_by_date, parse_event_date,
    sort_event_details_by_date, valid_date,
};
pub use entities::{Artist, Event, EventDetails, EventType, Venue};
pub use error::{DataError, Result};

mod error {
    use thiserror::Error;

    pub type Result<T> = std::result::Result<T, DataError>;

    #[derive(Error, Debug)]
    pub enum DataError {
        #[error("Invalid event date '{date}': {source}")]
        InvalidDate {
            date: String,
            #[source]
            source: chrono::ParseError,
        },
    }
}
