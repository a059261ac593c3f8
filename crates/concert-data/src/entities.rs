use chrono::NaiveDate;

use crate::{Result, dates::parse_event_date, valid_date};

/// A place where events are held.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Venue {
    /// Display name, used for name matching
    pub name: String,
    pub city: String,
    /// Two letter state code
    pub state: String,
}

impl Venue {
    pub fn new(name: impl Into<String>, city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            state: state.into(),
        }
    }

    /// All fields are filled in.
    #[must_use]
    pub fn populated(&self) -> bool {
        all_not_empty(&[&self.name, &self.city, &self.state])
    }
}

/// A performing act.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Artist {
    /// Display name, used for name matching
    pub name: String,
    pub genre: String,
}

impl Artist {
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
        }
    }

    /// Both name and genre are filled in.
    #[must_use]
    pub fn populated(&self) -> bool {
        all_not_empty(&[&self.name, &self.genre])
    }

    /// Exactly one of name and genre is filled in.
    ///
    /// A fully empty artist is not invalid: it stands for an unused opener slot.
    #[must_use]
    pub fn invalid(&self) -> bool {
        self.name.is_empty() != self.genre.is_empty()
    }
}

/// A concert: one headliner, any number of openers, at one venue on one date.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Event {
    pub main_act: Artist,
    pub openers: Vec<Artist>,
    pub venue: Venue,
    /// Event date formatted as [`EVENT_DATE_FORMAT`](crate::EVENT_DATE_FORMAT)
    pub date: String,
    pub purchased: bool,
}

impl Event {
    /// Iterate over the headliner followed by every opener.
    pub fn acts(&self) -> impl Iterator<Item = &Artist> {
        std::iter::once(&self.main_act).chain(self.openers.iter())
    }

    /// The event is complete enough to be saved.
    ///
    /// At least one act must be populated, no act may be half filled in,
    /// the venue must be populated and the date must parse.
    #[must_use]
    pub fn populated(&self) -> bool {
        let any_act_populated = self.acts().any(Artist::populated);
        let any_act_invalid = self.acts().any(Artist::invalid);
        any_act_populated && !any_act_invalid && self.venue.populated() && valid_date(&self.date)
    }

    /// Identity check used when deduplicating events.
    ///
    /// Openers and the purchase flag do not participate.
    #[must_use]
    pub fn same_event(&self, other: &Self) -> bool {
        self.main_act == other.main_act && self.venue == other.venue && self.date == other.date
    }

    /// Classify the event relative to `today`. Events happening today are upcoming.
    pub fn event_type_on(&self, today: NaiveDate) -> Result<EventType> {
        let date = parse_event_date(&self.date)?;
        Ok(if date < today {
            EventType::Past
        } else {
            EventType::Future
        })
    }
}

/// An event as listed by a discovery source, with ticketing details attached.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EventDetails {
    /// Listing title, which is not necessarily an act name
    pub name: String,
    pub event_genre: String,
    pub price: String,
    pub event: Event,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Past,
    Future,
}

fn all_not_empty(fields: &[&str]) -> bool {
    fields.iter().all(|f| !f.is_empty())
}
