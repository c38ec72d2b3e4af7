//! Calendar date and time handling
//!
//! The face works on decomposed calendar fields, an ordered packed encoding
//! of those fields, and Unix timestamps used to move between UTC offsets.

pub mod encoded;
pub mod fields;
pub mod unix;

pub use encoded::EncodedDateTime;
pub use fields::{DateTime, DateTimeError, MAX_YEAR, REFERENCE_YEAR};
pub use unix::{from_unix_time, to_unix_time, weekday_abbreviation};
