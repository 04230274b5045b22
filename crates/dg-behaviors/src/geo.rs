// ABOUTME: Geodetic angle parsing and formatting.
// ABOUTME: Converts fixed-width DMS text to radians and degrees to DMS strings.

use std::f64::consts::PI;
use std::fmt;

/// Text returned by [`dms_to_radians`] for input it cannot read
pub const WRONG_FORMAT: &str = "wrong format";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AngleParseError {
    #[error("DMS text is too short: {0:?}")]
    TooShort(String),

    #[error("Invalid {component} field: {value:?}")]
    InvalidField {
        component: &'static str,
        value: String,
    },
}

/// Parse fixed-width `HDDD MM SS.S` text into signed decimal degrees.
///
/// `H` is the hemisphere: N and E are positive, anything else negative.
/// Degrees occupy characters 1..4, minutes 5..7, seconds 8..12. The
/// seconds field accepts `.` or `,` as decimal separator.
pub fn parse_dms(text: &str) -> Result<f64, AngleParseError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < 12 {
        return Err(AngleParseError::TooShort(text.to_string()));
    }
    let field = |range: std::ops::Range<usize>, component: &'static str| {
        let value: String = chars[range].iter().collect();
        value
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| AngleParseError::InvalidField { component, value })
    };

    let degrees = field(1..4, "degrees")?;
    let minutes = field(5..7, "minutes")?;
    let seconds = field(8..12, "seconds")?;
    let sign = if matches!(chars[0], 'N' | 'E') { 1.0 } else { -1.0 };

    Ok((degrees + minutes / 60.0 + seconds / 3600.0) * sign)
}

/// Converter form of [`parse_dms`]: radians as text, an empty string for
/// blank input, or [`WRONG_FORMAT`].
pub fn dms_to_radians(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    match parse_dms(text) {
        Ok(degrees) => (degrees * PI / 180.0).to_string(),
        Err(e) => {
            tracing::debug!("Rejected DMS input: {}", e);
            WRONG_FORMAT.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    /// N/S prefix
    Latitude,
    /// E/W prefix
    Longitude,
}

/// An angle split into degrees, minutes, seconds, and tenths of a second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeoAngle {
    pub negative: bool,
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub tenths: u32,
}

impl GeoAngle {
    /// Split an angle in degrees, first folding it into [-180, 180].
    /// Returns `None` for NaN or infinite input.
    pub fn from_degrees(angle: f64) -> Option<Self> {
        if !angle.is_finite() {
            return None;
        }

        let mut angle = angle;
        if angle > 180.0 {
            angle -= 360.0 * ((angle - 180.0) / 360.0).ceil();
        } else if angle < -180.0 {
            angle += 360.0 * ((-180.0 - angle) / 360.0).ceil();
        }

        let negative = angle < 0.0;
        let angle = angle.abs();
        let degrees = angle.floor();
        let delta = angle - degrees;
        let total_seconds = (3600.0 * delta).floor();
        let remainder = delta * 3600.0 - total_seconds;
        let total_seconds = total_seconds as u32;

        Some(Self {
            negative,
            degrees: degrees as u32,
            minutes: total_seconds / 60,
            seconds: total_seconds % 60,
            tenths: (10.0 * remainder) as u32,
        })
    }

    /// Fixed-width form with a hemisphere letter, e.g. `N012°34'56.7"`
    pub fn format_hemisphere(&self, hemisphere: Hemisphere) -> String {
        let prefix = match (hemisphere, self.negative) {
            (Hemisphere::Latitude, false) => 'N',
            (Hemisphere::Latitude, true) => 'S',
            (Hemisphere::Longitude, false) => 'E',
            (Hemisphere::Longitude, true) => 'W',
        };
        format!(
            "{}{:03}°{:02}'{:02}.{}\"",
            prefix, self.degrees, self.minutes, self.seconds, self.tenths
        )
    }
}

impl fmt::Display for GeoAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = if self.negative {
            -i64::from(self.degrees)
        } else {
            i64::from(self.degrees)
        };
        write!(f, "{}° {:02}' {:02}\"", degrees, self.minutes, self.seconds)
    }
}
