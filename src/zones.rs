//! Timezone table and time formatting.
//!
//! This module contains the fixed table of selectable world clocks and the
//! helpers that format wall-clock time for the frame composer, including:
//! - The `TIMEZONES` table, ordered by ascending GMT offset
//! - Per-zone and local time formatting in 12h or 24h style
//! - The local `GMT±HH` offset label for the status bar

use chrono::{DateTime, Local, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;

/// A selectable world clock entry.
///
pub struct ZoneEntry {
    pub name: &'static str,
    pub tz: Tz,
    pub gmt: &'static str,
}

/// Timezones arranged by GMT offset for smooth progression. The digit keys
/// "1" through "9" map to indices 0 through 8.
///
pub const TIMEZONES: [ZoneEntry; 9] = [
    ZoneEntry {
        name: "LA",
        tz: chrono_tz::America::Los_Angeles,
        gmt: "GMT-8",
    },
    ZoneEntry {
        name: "NY",
        tz: chrono_tz::America::New_York,
        gmt: "GMT-5",
    },
    ZoneEntry {
        name: "SAO PAULO",
        tz: chrono_tz::America::Sao_Paulo,
        gmt: "GMT-3",
    },
    ZoneEntry {
        name: "LONDON",
        tz: chrono_tz::Europe::London,
        gmt: "GMT+0",
    },
    ZoneEntry {
        name: "PARIS",
        tz: chrono_tz::Europe::Paris,
        gmt: "GMT+1",
    },
    ZoneEntry {
        name: "CAIRO",
        tz: chrono_tz::Africa::Cairo,
        gmt: "GMT+2",
    },
    ZoneEntry {
        name: "DUBAI",
        tz: chrono_tz::Asia::Dubai,
        gmt: "GMT+4",
    },
    ZoneEntry {
        name: "TOKYO",
        tz: chrono_tz::Asia::Tokyo,
        gmt: "GMT+9",
    },
    ZoneEntry {
        name: "SYDNEY",
        tz: chrono_tz::Australia::Sydney,
        gmt: "GMT+11",
    },
];

/// Format a point in time as "HH:MM:SS" or "II:MM:SS AM/PM".
///
fn format_time<T: TimeZone>(dt: DateTime<T>, use_24h: bool) -> String
where
    T::Offset: fmt::Display,
{
    if use_24h {
        dt.format("%H:%M:%S").to_string()
    } else {
        dt.format("%I:%M:%S %p").to_string()
    }
}

/// Current wall-clock time in the given zone.
///
pub fn zone_time(entry: &ZoneEntry, use_24h: bool) -> String {
    format_time(Utc::now().with_timezone(&entry.tz), use_24h)
}

/// Current local wall-clock time.
///
pub fn local_time(use_24h: bool) -> String {
    format_time(Local::now(), use_24h)
}

/// Local UTC offset formatted like "GMT+01" or "GMT-08".
///
pub fn local_gmt_label() -> String {
    let offset_secs = Local::now().offset().fix().local_minus_utc();
    format!("GMT{:+03}", offset_secs / 3600)
}
