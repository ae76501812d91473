//! Time-of-day colors for reservation rows.
//!
//! A fixed palette holds one color per whole hour. The color for an instant
//! is a linear RGB blend between the color of its hour and the color of the
//! following hour, so rows that start close together get close colors and
//! there is no seam at the top of an hour or at midnight.
//!
//! The hour is read in the dashboard's configured civil time zone, never in
//! the zone of the machine running the client.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_u32(value: u32) -> Self {
        Self::new(((value >> 16) & 0xff) as u8, ((value >> 8) & 0xff) as u8, (value & 0xff) as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color '{0}'")]
pub struct ParseColorError(String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parses `#rgb` or `#rrggbb`, with or without the leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(ParseColorError(s.to_string())),
        };
        if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        let value = u32::from_str_radix(&expanded, 16).map_err(|_| ParseColorError(s.to_string()))?;
        Ok(Self::from_u32(value))
    }
}

/// One color per hour of the day, index 0 is midnight.
pub const HOUR_PALETTE: [Rgb; 24] = [
    Rgb::from_u32(0x6aa9ff),
    Rgb::from_u32(0x5fb6ff),
    Rgb::from_u32(0x53c3ff),
    Rgb::from_u32(0x45d0ff),
    Rgb::from_u32(0x38dcff),
    Rgb::from_u32(0x2ee6f0),
    Rgb::from_u32(0x32efdb),
    Rgb::from_u32(0x43f6c1),
    Rgb::from_u32(0x5efaa4),
    Rgb::from_u32(0x7efc86),
    Rgb::from_u32(0xa1fb6a),
    Rgb::from_u32(0xc6f651),
    Rgb::from_u32(0xe7ec46),
    Rgb::from_u32(0xffd24b),
    Rgb::from_u32(0xffb45a),
    Rgb::from_u32(0xff966b),
    Rgb::from_u32(0xff7c7c),
    Rgb::from_u32(0xff6b9a),
    Rgb::from_u32(0xff63b8),
    Rgb::from_u32(0xe06bff),
    Rgb::from_u32(0xb07bff),
    Rgb::from_u32(0x8d8cff),
    Rgb::from_u32(0x779bff),
    Rgb::from_u32(0x6aa9ff),
];

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    let value = a as f64 + (b as f64 - a as f64) * t;
    value.round().clamp(0.0, 255.0) as u8
}

/// Blends `a` towards `b`; `t = 0` gives `a`, `t = 1` gives `b`.
pub fn lerp_color(a: Rgb, b: Rgb, t: f64) -> Rgb {
    Rgb::new(lerp(a.r, b.r, t), lerp(a.g, b.g, t), lerp(a.b, b.b, t))
}

/// Color for a fractional hour of day, e.g. `13.5` for half past one.
pub fn color_for_hour(hour: f64) -> Rgb {
    let base = hour.floor();
    let t = hour - base;
    let i = (base as i64).rem_euclid(24) as usize;
    lerp_color(HOUR_PALETTE[i], HOUR_PALETTE[(i + 1) % 24], t)
}

/// Color for an instant, read as hour and minute in `tz`.
pub fn color_for_instant(instant: DateTime<Utc>, tz: Tz) -> Rgb {
    let local = instant.with_timezone(&tz);
    color_for_hour(local.hour() as f64 + local.minute() as f64 / 60.0)
}
