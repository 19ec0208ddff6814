//! Flight booker form.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date format of the text fields (`DD.MM.YYYY`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Booking errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookerError {
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),
    #[error("Date {0} is in the past")]
    InPast(NaiveDate),
    #[error("Return {1} is not after departure {0}")]
    ReturnNotAfterDeparture(NaiveDate, NaiveDate),
}

/// Result type for booking operations.
pub type BookerResult<T> = Result<T, BookerError>;

/// One-way or return flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightKind {
    #[default]
    OneWay,
    Return,
}

/// A confirmed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub kind: FlightKind,
    pub departure: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

/// Flight booker form state.
#[derive(Debug, Clone)]
pub struct FlightBooker {
    kind: FlightKind,
    departure: String,
    return_date: String,
    today: NaiveDate,
}

/// Parse a `DD.MM.YYYY` date.
pub fn parse_date(text: &str) -> BookerResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| BookerError::InvalidDate(text.to_string()))
}

impl FlightBooker {
    /// Create a form whose departure field is pre-filled with `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            kind: FlightKind::OneWay,
            departure: today.format(DATE_FORMAT).to_string(),
            return_date: String::new(),
            today,
        }
    }

    /// Create a form for the local current date.
    pub fn for_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn kind(&self) -> FlightKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: FlightKind) {
        self.kind = kind;
    }

    pub fn departure(&self) -> &str {
        &self.departure
    }

    pub fn set_departure(&mut self, text: impl Into<String>) {
        self.departure = text.into();
    }

    pub fn return_date(&self) -> &str {
        &self.return_date
    }

    pub fn set_return_date(&mut self, text: impl Into<String>) {
        self.return_date = text.into();
    }

    /// The return field is only editable for return flights.
    pub fn return_enabled(&self) -> bool {
        self.kind == FlightKind::Return
    }

    fn checked_departure(&self) -> BookerResult<NaiveDate> {
        let date = parse_date(&self.departure)?;
        if date < self.today {
            return Err(BookerError::InPast(date));
        }
        Ok(date)
    }

    fn checked_return(&self, departure: NaiveDate) -> BookerResult<NaiveDate> {
        let date = parse_date(&self.return_date)?;
        if date < self.today {
            return Err(BookerError::InPast(date));
        }
        if departure >= date {
            return Err(BookerError::ReturnNotAfterDeparture(departure, date));
        }
        Ok(date)
    }

    pub fn departure_valid(&self) -> bool {
        self.checked_departure().is_ok()
    }

    /// Always true for one-way flights.
    pub fn return_valid(&self) -> bool {
        if self.kind == FlightKind::OneWay {
            return true;
        }
        // A return date cannot follow an unparsable departure.
        parse_date(&self.departure)
            .and_then(|departure| self.checked_return(departure))
            .is_ok()
    }

    pub fn can_book(&self) -> bool {
        self.validate().is_ok()
    }

    fn validate(&self) -> BookerResult<Booking> {
        let departure = self.checked_departure()?;
        let return_date = match self.kind {
            FlightKind::OneWay => None,
            FlightKind::Return => Some(self.checked_return(departure)?),
        };
        Ok(Booking {
            kind: self.kind,
            departure,
            return_date,
        })
    }

    /// Validate the form and produce the booking.
    pub fn book(&self) -> BookerResult<Booking> {
        let booking = self.validate()?;
        log::debug!("booked {:?} flight departing {}", booking.kind, booking.departure);
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn test_default_one_way_today_is_bookable() {
        let booker = FlightBooker::new(today());
        assert_eq!(booker.departure(), "10.03.2024");
        assert!(!booker.return_enabled());
        assert!(booker.departure_valid());
        assert!(booker.return_valid());
        assert_eq!(
            booker.book(),
            Ok(Booking {
                kind: FlightKind::OneWay,
                departure: today(),
                return_date: None,
            })
        );
    }

    #[test]
    fn test_invalid_and_past_departure() {
        let mut booker = FlightBooker::new(today());
        booker.set_departure("31.02.2024");
        assert!(!booker.departure_valid());
        assert_eq!(booker.book(), Err(BookerError::InvalidDate("31.02.2024".into())));

        booker.set_departure("09.03.2024");
        assert!(!booker.can_book());
        assert!(matches!(booker.book(), Err(BookerError::InPast(_))));
    }

    #[test]
    fn test_return_must_follow_departure() {
        let mut booker = FlightBooker::new(today());
        booker.set_kind(FlightKind::Return);
        assert!(booker.return_enabled());
        assert!(!booker.return_valid());

        booker.set_return_date("10.03.2024");
        assert!(!booker.return_valid());
        assert!(matches!(
            booker.book(),
            Err(BookerError::ReturnNotAfterDeparture(_, _))
        ));

        booker.set_return_date("12.03.2024");
        assert!(booker.return_valid());
        let booking = booker.book().unwrap();
        assert_eq!(booking.return_date, NaiveDate::from_ymd_opt(2024, 3, 12));
    }

    #[test]
    fn test_return_invalid_when_departure_unparsable() {
        let mut booker = FlightBooker::new(today());
        booker.set_kind(FlightKind::Return);
        booker.set_departure("garbage");
        booker.set_return_date("12.03.2024");
        assert!(!booker.return_valid());
        assert!(!booker.can_book());
    }

    #[test]
    fn test_can_book_matches_book() {
        let mut booker = FlightBooker::new(today());
        assert_eq!(booker.can_book(), booker.book().is_ok());
        booker.set_departure("01.01.2000");
        assert_eq!(booker.can_book(), booker.book().is_ok());
    }

    #[test]
    fn test_return_ignored_for_one_way() {
        let mut booker = FlightBooker::new(today());
        booker.set_return_date("garbage");
        assert!(booker.can_book());
    }
}
