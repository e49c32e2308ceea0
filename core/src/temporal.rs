// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! `Edm.Date`, `Edm.DateTimeOffset`, `Edm.TimeOfDay` and `Edm.Duration`
//! values on the proleptic Gregorian calendar.
//!
//! Dates carry no zone; date-times carry a mandatory offset and render
//! a zero offset as `Z`. Sub-second precision is kept to the nanosecond
//! and rendered at microsecond width when present. Durations use the
//! `xs:dayTimeDuration` shape: days, hours, minutes and fractional
//! seconds, never years or months.
//!
//! References:
//! - OData ABNF Construction Rules, `dateValue`/`dateTimeOffsetValue`/
//!   `timeOfDayValue`/`durationValue`
//! - W3C XML Schema Part 2, `dayTimeDuration`

use crate::error::ValueError;
use crate::native::Native;
use crate::parser::PrimitiveParser;
use crate::value::Value;
use std::fmt::Write as _;
use std::str::FromStr;
use time::Date;
use time::Duration;
use time::OffsetDateTime;
use time::Time;

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const SECONDS_PER_MINUTE: i128 = 60;
const SECONDS_PER_HOUR: i128 = 3_600;
const SECONDS_PER_DAY: i128 = 86_400;

/// `[-]yyyy-mm-dd` with the year at minimum width four, wider as
/// needed.
pub(crate) fn render_date(d: Date) -> String {
    let year = d.year();
    let sign = if year < 0 { "-" } else { "" };
    format!(
        "{sign}{:04}-{:02}-{:02}",
        year.unsigned_abs(),
        u8::from(d.month()),
        d.day()
    )
}

/// `hh:mm:ss` plus a six digit fraction when the time has sub-second
/// precision.
pub(crate) fn render_time(t: Time) -> String {
    let mut out = format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second());
    if t.nanosecond() != 0 {
        let _ = write!(out, ".{:06}", t.nanosecond() / 1_000);
    }
    out
}

fn render_zone(dt: OffsetDateTime) -> String {
    let offset = dt.offset();
    if offset.whole_seconds() == 0 {
        "Z".to_owned()
    } else {
        let sign = if offset.is_negative() { '-' } else { '+' };
        format!(
            "{sign}{:02}:{:02}",
            offset.whole_hours().unsigned_abs(),
            (offset.whole_minutes() % 60).unsigned_abs()
        )
    }
}

/// An `Edm.Date` value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateValue {
    value: Option<Date>,
}

impl DateValue {
    /// The null value.
    #[must_use]
    pub const fn null() -> Self {
        Self { value: None }
    }

    /// Current payload, `None` when null.
    #[must_use]
    pub const fn value(&self) -> Option<Date> {
        self.value
    }

    /// Sets from a date, or from the date part of a date-time.
    ///
    /// # Errors
    ///
    /// [`ValueError::Type`] for other inputs.
    pub fn set(&mut self, value: impl Into<Native>) -> Result<(), ValueError> {
        match value.into() {
            Native::Null => {
                self.value = None;
                Ok(())
            }
            Native::Date(d) => {
                self.value = Some(d);
                Ok(())
            }
            Native::DateTimeOffset(dt) => {
                self.value = Some(dt.date());
                Ok(())
            }
            other => Err(ValueError::Type {
                target: "Date",
                given: other.kind(),
            }),
        }
    }

    /// Sets to null.
    pub fn set_null(&mut self) {
        self.value = None;
    }
}

impl Value for DateValue {
    fn type_name(&self) -> &'static str {
        "Date"
    }

    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn to_text(&self) -> Result<String, ValueError> {
        self.value.map(render_date).ok_or(ValueError::Null)
    }
}

impl From<Date> for DateValue {
    fn from(v: Date) -> Self {
        Self { value: Some(v) }
    }
}

impl FromStr for DateValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut p = PrimitiveParser::new(s);
        let v = p.require_date_value()?;
        p.require_end()?;
        Ok(v)
    }
}

/// An `Edm.TimeOfDay` value, a zoneless wall-clock time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeOfDayValue {
    value: Option<Time>,
}

impl TimeOfDayValue {
    /// The null value.
    #[must_use]
    pub const fn null() -> Self {
        Self { value: None }
    }

    /// Current payload, `None` when null.
    #[must_use]
    pub const fn value(&self) -> Option<Time> {
        self.value
    }

    /// Sets from a time.
    ///
    /// # Errors
    ///
    /// [`ValueError::Type`] for other inputs.
    pub fn set(&mut self, value: impl Into<Native>) -> Result<(), ValueError> {
        match value.into() {
            Native::Null => {
                self.value = None;
                Ok(())
            }
            Native::TimeOfDay(t) => {
                self.value = Some(t);
                Ok(())
            }
            other => Err(ValueError::Type {
                target: "TimeOfDay",
                given: other.kind(),
            }),
        }
    }

    /// Sets to null.
    pub fn set_null(&mut self) {
        self.value = None;
    }
}

impl Value for TimeOfDayValue {
    fn type_name(&self) -> &'static str {
        "TimeOfDay"
    }

    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn to_text(&self) -> Result<String, ValueError> {
        self.value.map(render_time).ok_or(ValueError::Null)
    }
}

impl From<Time> for TimeOfDayValue {
    fn from(v: Time) -> Self {
        Self { value: Some(v) }
    }
}

impl FromStr for TimeOfDayValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut p = PrimitiveParser::new(s);
        let v = p.require_time_of_day_value()?;
        p.require_end()?;
        Ok(v)
    }
}

/// An `Edm.DateTimeOffset` value, an instant with an explicit zone
/// offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateTimeOffsetValue {
    value: Option<OffsetDateTime>,
}

impl DateTimeOffsetValue {
    /// The null value.
    #[must_use]
    pub const fn null() -> Self {
        Self { value: None }
    }

    /// Current payload, `None` when null.
    #[must_use]
    pub const fn value(&self) -> Option<OffsetDateTime> {
        self.value
    }

    /// Sets from a date-time, from a date at UTC midnight, or from a
    /// non-negative unix timestamp in seconds.
    ///
    /// # Errors
    ///
    /// [`ValueError::Type`] for unsupported kinds,
    /// [`ValueError::Range`] for a negative or unrepresentable
    /// timestamp.
    pub fn set(&mut self, value: impl Into<Native>) -> Result<(), ValueError> {
        match value.into() {
            Native::Null => {
                self.value = None;
                Ok(())
            }
            Native::DateTimeOffset(dt) => {
                self.value = Some(dt);
                Ok(())
            }
            Native::Date(d) => {
                self.value = Some(d.with_time(Time::MIDNIGHT).assume_utc());
                Ok(())
            }
            Native::Integer(n) => {
                if n < 0 {
                    return Err(ValueError::Range {
                        target: "DateTimeOffset",
                        given: n.to_string(),
                    });
                }
                match OffsetDateTime::from_unix_timestamp_nanos(n.saturating_mul(NANOS_PER_SECOND))
                {
                    Ok(dt) => {
                        self.value = Some(dt);
                        Ok(())
                    }
                    Err(_) => Err(ValueError::Range {
                        target: "DateTimeOffset",
                        given: n.to_string(),
                    }),
                }
            }
            Native::Float(f) => {
                if f.is_nan() || f < 0.0 {
                    return Err(ValueError::Range {
                        target: "DateTimeOffset",
                        given: f.to_string(),
                    });
                }
                let nanos = (f * NANOS_PER_SECOND as f64) as i128;
                match OffsetDateTime::from_unix_timestamp_nanos(nanos) {
                    Ok(dt) => {
                        self.value = Some(dt);
                        Ok(())
                    }
                    Err(_) => Err(ValueError::Range {
                        target: "DateTimeOffset",
                        given: f.to_string(),
                    }),
                }
            }
            other => Err(ValueError::Type {
                target: "DateTimeOffset",
                given: other.kind(),
            }),
        }
    }

    /// Sets to null.
    pub fn set_null(&mut self) {
        self.value = None;
    }
}

impl Value for DateTimeOffsetValue {
    fn type_name(&self) -> &'static str {
        "DateTimeOffset"
    }

    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn to_text(&self) -> Result<String, ValueError> {
        match self.value {
            Some(dt) => Ok(format!(
                "{}T{}{}",
                render_date(dt.date()),
                render_time(dt.time()),
                render_zone(dt)
            )),
            None => Err(ValueError::Null),
        }
    }
}

impl From<OffsetDateTime> for DateTimeOffsetValue {
    fn from(v: OffsetDateTime) -> Self {
        Self { value: Some(v) }
    }
}

impl FromStr for DateTimeOffsetValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut p = PrimitiveParser::new(s);
        let v = p.require_date_time_offset_value()?;
        p.require_end()?;
        Ok(v)
    }
}

/// An `Edm.Duration` value, a signed day-time span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DurationValue {
    value: Option<Duration>,
}

impl DurationValue {
    /// The null value.
    #[must_use]
    pub const fn null() -> Self {
        Self { value: None }
    }

    /// Current payload, `None` when null.
    #[must_use]
    pub const fn value(&self) -> Option<Duration> {
        self.value
    }

    /// Sets from a duration.
    ///
    /// # Errors
    ///
    /// [`ValueError::Type`] for other inputs.
    pub fn set(&mut self, value: impl Into<Native>) -> Result<(), ValueError> {
        match value.into() {
            Native::Null => {
                self.value = None;
                Ok(())
            }
            Native::Duration(d) => {
                self.value = Some(d);
                Ok(())
            }
            other => Err(ValueError::Type {
                target: "Duration",
                given: other.kind(),
            }),
        }
    }

    /// Sets to null.
    pub fn set_null(&mut self) {
        self.value = None;
    }
}

impl Value for DurationValue {
    fn type_name(&self) -> &'static str {
        "Duration"
    }

    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    /// Minimal `[-]PnDTnHnMn.nS` form; zero components are omitted and
    /// a zero duration is `PT0S`.
    fn to_text(&self) -> Result<String, ValueError> {
        let d = self.value.ok_or(ValueError::Null)?;
        let total = d.whole_nanoseconds();
        if total == 0 {
            return Ok("PT0S".to_owned());
        }
        let mut out = String::new();
        if total < 0 {
            out.push('-');
        }
        out.push('P');
        let nanos = total.unsigned_abs();
        let seconds = nanos / NANOS_PER_SECOND.unsigned_abs();
        let subsecond = (nanos % NANOS_PER_SECOND.unsigned_abs()) as u32;
        let days = seconds / SECONDS_PER_DAY.unsigned_abs();
        let hours = seconds % SECONDS_PER_DAY.unsigned_abs() / SECONDS_PER_HOUR.unsigned_abs();
        let minutes =
            seconds % SECONDS_PER_HOUR.unsigned_abs() / SECONDS_PER_MINUTE.unsigned_abs();
        let whole = seconds % SECONDS_PER_MINUTE.unsigned_abs();
        if days != 0 {
            let _ = write!(out, "{days}D");
        }
        if hours != 0 || minutes != 0 || whole != 0 || subsecond != 0 {
            out.push('T');
            if hours != 0 {
                let _ = write!(out, "{hours}H");
            }
            if minutes != 0 {
                let _ = write!(out, "{minutes}M");
            }
            if whole != 0 || subsecond != 0 {
                if subsecond == 0 {
                    let _ = write!(out, "{whole}S");
                } else {
                    let frac = format!("{subsecond:09}");
                    let _ = write!(out, "{whole}.{}S", frac.trim_end_matches('0'));
                }
            }
        }
        Ok(out)
    }
}

impl From<Duration> for DurationValue {
    fn from(v: Duration) -> Self {
        Self { value: Some(v) }
    }
}

impl FromStr for DurationValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut p = PrimitiveParser::new(s);
        let v = p.require_duration_value()?;
        p.require_end()?;
        Ok(v)
    }
}
