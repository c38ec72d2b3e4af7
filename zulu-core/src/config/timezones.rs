//! UTC offsets selectable in the watch settings
//!
//! Offsets are in minutes. Index 0 is UTC; positive offsets come first,
//! followed by the negative ones.

/// Number of selectable timezones
pub const TIMEZONE_COUNT: usize = 41;

/// Offset in minutes for each selectable timezone
pub const TIMEZONE_OFFSETS: [i16; TIMEZONE_COUNT] = [
    0,    //  0 :   0:00 UTC
    60,   //  1 :   1:00 Central European Time
    120,  //  2 :   2:00 South African Standard Time
    180,  //  3 :   3:00 Arabia Standard Time
    210,  //  4 :   3:30 Iran Standard Time
    240,  //  5 :   4:00 Georgia Standard Time
    270,  //  6 :   4:30 Afghanistan Time
    300,  //  7 :   5:00 Pakistan Standard Time
    330,  //  8 :   5:30 Indian Standard Time
    345,  //  9 :   5:45 Nepal Time
    360,  // 10 :   6:00 Kyrgyzstan Time
    390,  // 11 :   6:30 Myanmar Time
    420,  // 12 :   7:00 Thailand Standard Time
    480,  // 13 :   8:00 China Standard Time
    525,  // 14 :   8:45 Australian Central Western Standard Time
    540,  // 15 :   9:00 Japan Standard Time
    570,  // 16 :   9:30 Australian Central Standard Time
    600,  // 17 :  10:00 Australian Eastern Standard Time
    630,  // 18 :  10:30 Lord Howe Standard Time
    660,  // 19 :  11:00 Solomon Islands Time
    720,  // 20 :  12:00 New Zealand Standard Time
    765,  // 21 :  12:45 Chatham Standard Time
    780,  // 22 :  13:00 Tonga Time
    825,  // 23 :  13:45 Chatham Daylight Time
    840,  // 24 :  14:00 Line Islands Time
    -720, // 25 : -12:00 Baker Island Time
    -660, // 26 : -11:00 Niue Time
    -600, // 27 : -10:00 Hawaii-Aleutian Standard Time
    -570, // 28 :  -9:30 Marquesas Islands Time
    -540, // 29 :  -9:00 Alaska Standard Time
    -480, // 30 :  -8:00 Pacific Standard Time
    -420, // 31 :  -7:00 Mountain Standard Time
    -360, // 32 :  -6:00 Central Standard Time
    -300, // 33 :  -5:00 Eastern Standard Time
    -270, // 34 :  -4:30 Venezuelan Standard Time
    -240, // 35 :  -4:00 Atlantic Standard Time
    -210, // 36 :  -3:30 Newfoundland Standard Time
    -180, // 37 :  -3:00 Brasilia Time
    -150, // 38 :  -2:30 Newfoundland Daylight Time
    -120, // 39 :  -2:00 Fernando de Noronha Time
    -60,  // 40 :  -1:00 Azores Standard Time
];

/// Offset for a timezone index, or `None` if the index is out of range
pub fn timezone_offset_minutes(index: u8) -> Option<i16> {
    TIMEZONE_OFFSETS.get(index as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_is_first() {
        assert_eq!(timezone_offset_minutes(0), Some(0));
    }

    #[test]
    fn test_fractional_zones() {
        assert_eq!(timezone_offset_minutes(8), Some(330));
        assert_eq!(timezone_offset_minutes(9), Some(345));
        assert_eq!(timezone_offset_minutes(36), Some(-210));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(timezone_offset_minutes(TIMEZONE_COUNT as u8), None);
        assert_eq!(timezone_offset_minutes(u8::MAX), None);
    }

    #[test]
    fn test_offsets_within_real_world_bounds() {
        for offset in TIMEZONE_OFFSETS {
            assert!((-720..=840).contains(&offset));
        }
    }
}
