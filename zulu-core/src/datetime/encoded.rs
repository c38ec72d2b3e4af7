//! Packed, ordered timestamp encoding
//!
//! Layout matches the watch RTC clock register, most significant first:
//!
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────┬──────────┬──────────┐
//! │ YEAR-2020│ MONTH    │ DAY      │ HOUR     │ MINUTE   │ SECOND   │
//! │ 31..26   │ 25..22   │ 21..17   │ 16..12   │ 11..6    │ 5..0     │
//! └──────────┴──────────┴──────────┴──────────┴──────────┴──────────┘
//! ```
//!
//! More significant fields sit in higher bits, so two encoded values share
//! a prefix exactly when the corresponding leading fields are equal.

use super::fields::{DateTime, REFERENCE_YEAR};

const SECOND_SHIFT: u32 = 0;
const MINUTE_SHIFT: u32 = 6;
const HOUR_SHIFT: u32 = 12;
const DAY_SHIFT: u32 = 17;
const MONTH_SHIFT: u32 = 22;
const YEAR_SHIFT: u32 = 26;

const SECOND_MASK: u32 = 0x3F;
const MINUTE_MASK: u32 = 0x3F;
const HOUR_MASK: u32 = 0x1F;
const DAY_MASK: u32 = 0x1F;
const MONTH_MASK: u32 = 0x0F;
const YEAR_MASK: u32 = 0x3F;

/// Calendar fields packed into one ordered integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncodedDateTime(u32);

impl EncodedDateTime {
    /// All ones. Month 15 is never valid, so no real timestamp shares any
    /// prefix with it.
    pub const SENTINEL: Self = Self(u32::MAX);

    /// Wrap raw register bits
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw register bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Pack calendar fields
    ///
    /// Fields outside the register width are truncated; years before 2020
    /// encode as 2020.
    pub fn encode(dt: &DateTime) -> Self {
        let year = dt.year.saturating_sub(REFERENCE_YEAR) as u32;
        Self(
            (year & YEAR_MASK) << YEAR_SHIFT
                | (dt.month as u32 & MONTH_MASK) << MONTH_SHIFT
                | (dt.day as u32 & DAY_MASK) << DAY_SHIFT
                | (dt.hour as u32 & HOUR_MASK) << HOUR_SHIFT
                | (dt.minute as u32 & MINUTE_MASK) << MINUTE_SHIFT
                | (dt.second as u32 & SECOND_MASK) << SECOND_SHIFT,
        )
    }

    pub fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }

    /// Year, month, day, hour and minute all match
    pub const fn same_minute(self, other: Self) -> bool {
        self.0 >> MINUTE_SHIFT == other.0 >> MINUTE_SHIFT
    }

    /// Year, month, day and hour all match
    pub const fn same_hour(self, other: Self) -> bool {
        self.0 >> HOUR_SHIFT == other.0 >> HOUR_SHIFT
    }
}

impl From<DateTime> for EncodedDateTime {
    fn from(dt: DateTime) -> Self {
        Self::encode(&dt)
    }
}

impl From<&DateTime> for EncodedDateTime {
    fn from(dt: &DateTime) -> Self {
        Self::encode(dt)
    }
}
