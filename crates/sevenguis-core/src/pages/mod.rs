//! Headless view-models of the smaller demo pages.
//!
//! Each page keeps the state its form needs and derives everything else;
//! widgets bind to these types and re-read them after every call.

pub mod booker;
pub mod counter;
pub mod crud;
pub mod temperature;
pub mod timer;

pub use booker::{Booking, BookerError, FlightBooker, FlightKind};
pub use counter::Counter;
pub use crud::{Crud, CrudItem, Record};
pub use temperature::TemperatureConverter;
pub use timer::Timer;
