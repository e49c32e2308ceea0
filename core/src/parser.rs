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

//! Recursive-descent parser for primitive literal forms.
//!
//! One `require_*` method per grammar production. A `require` method
//! either consumes the production and returns its value or fails with a
//! [`SyntaxError`] naming the production and the byte position where it
//! was expected; on failure the cursor is restored to the start of the
//! failed production. Productions do not demand end of input, so they
//! compose; callers validating a complete literal finish with
//! [`PrimitiveParser::require_end`].
//!
//! Out-of-range numbers are parse failures here. `-300` is three valid
//! characters but no `sbyteValue`, and the error says so rather than
//! wrapping or saturating.
//!
//! References:
//! - OData ABNF Construction Rules, primitive value productions

use base64::Engine;
use crate::numeric::ByteValue;
use crate::numeric::DecimalValue;
use crate::numeric::DoubleValue;
use crate::numeric::Int16Value;
use crate::numeric::Int32Value;
use crate::numeric::Int64Value;
use crate::numeric::SByteValue;
use crate::numeric::SingleValue;
use crate::scalar::BinaryValue;
use crate::scalar::BooleanValue;
use crate::scalar::GuidValue;
use crate::temporal::DateTimeOffsetValue;
use crate::temporal::DateValue;
use crate::temporal::DurationValue;
use crate::temporal::TimeOfDayValue;
use rust_decimal::Decimal;
use std::convert::TryFrom;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use time::Date;
use time::Duration;
use time::Month;
use time::PrimitiveDateTime;
use time::Time;
use time::UtcOffset;
use uuid::Uuid;

const NANO_DIGITS: usize = 9;

/// A literal that failed to parse.
///
/// Carries the production that was expected and the byte offset at
/// which it was expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxError {
    expected: String,
    pos: usize,
}

impl SyntaxError {
    /// The production or token that was expected.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Byte offset into the source at which it was expected.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "expected {} at position {}", self.expected, self.pos)
    }
}

macro_rules! integer_production {
    ($(#[$doc:meta])* $fn_name:ident, $value:ident, $signed:expr, $max_digits:expr,
     $production:literal, $range:literal) => {
        $(#[$doc])*
        pub fn $fn_name(&mut self) -> Result<$value, SyntaxError> {
            let start = self.pos;
            let sign = if $signed { self.parse_one_of("+-") } else { None };
            let digits = match self.parse_digits(1, $max_digits) {
                Some(digits) => digits,
                None => {
                    self.pos = start;
                    return Err(self.expect($production));
                }
            };
            let mut n: i128 = match digits.parse() {
                Ok(n) => n,
                Err(_) => {
                    self.pos = start;
                    return Err(self.expect($production));
                }
            };
            if sign == Some('-') {
                n = -n;
            }
            let mut value = $value::null();
            match value.set(n) {
                Ok(()) => Ok(value),
                Err(_) => {
                    self.pos = start;
                    Err(self.expect($range))
                }
            }
        }
    };
}

/// Cursor over a literal.
///
/// # Examples
///
/// ```
/// use nv_odata_core::PrimitiveParser;
///
/// let mut p = PrimitiveParser::new("20:00:00");
/// let time = p.require_time_of_day_value().unwrap();
/// p.require_end().unwrap();
/// assert_eq!(time.value().map(|t| t.hour()), Some(20));
/// ```
pub struct PrimitiveParser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> PrimitiveParser<'a> {
    #[must_use]
    pub const fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Current byte offset.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn expect(&self, production: impl Into<String>) -> SyntaxError {
        SyntaxError {
            expected: production.into(),
            pos: self.pos,
        }
    }

    /// Consumes `literal` exactly, reporting whether it matched.
    fn parse_literal(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Consumes an ASCII `literal` ignoring case.
    fn parse_insensitive(&mut self, literal: &str) -> bool {
        let matched = self
            .rest()
            .as_bytes()
            .get(..literal.len())
            .map_or(false, |head| head.eq_ignore_ascii_case(literal.as_bytes()));
        if matched {
            self.pos += literal.len();
        }
        matched
    }

    /// Consumes one character out of the ASCII `set`.
    fn parse_one_of(&mut self, set: &str) -> Option<char> {
        match self.peek() {
            Some(b) if set.as_bytes().contains(&b) => {
                self.pos += 1;
                Some(b as char)
            }
            _ => None,
        }
    }

    /// Consumes between `min` and `max` decimal digits; consumes
    /// nothing when fewer than `min` are present.
    fn parse_digits(&mut self, min: usize, max: usize) -> Option<&'a str> {
        let start = self.pos;
        while self.pos - start < max {
            match self.peek() {
                Some(b'0'..=b'9') => self.pos += 1,
                _ => break,
            }
        }
        if self.pos - start >= min {
            Some(&self.src[start..self.pos])
        } else {
            self.pos = start;
            None
        }
    }

    fn parse_hex_digits(&mut self, count: usize) -> Option<&'a str> {
        let start = self.pos;
        for _ in 0..count {
            match self.peek() {
                Some(b) if b.is_ascii_hexdigit() => self.pos += 1,
                _ => {
                    self.pos = start;
                    return None;
                }
            }
        }
        Some(&self.src[start..self.pos])
    }

    fn require_literal(&mut self, literal: &str) -> Result<(), SyntaxError> {
        if self.parse_literal(literal) {
            Ok(())
        } else {
            Err(self.expect(format!("'{literal}'")))
        }
    }

    /// Fails unless the whole source has been consumed.
    ///
    /// # Errors
    ///
    /// [`SyntaxError`] at the first unconsumed byte.
    pub fn require_end(&mut self) -> Result<(), SyntaxError> {
        if self.pos == self.src.len() {
            Ok(())
        } else {
            Err(self.expect("end of input"))
        }
    }

    /// `booleanValue`, case-insensitive `true` or `false`.
    ///
    /// # Errors
    ///
    /// [`SyntaxError`] when neither keyword is present.
    pub fn require_boolean_value(&mut self) -> Result<BooleanValue, SyntaxError> {
        if self.parse_insensitive("true") {
            Ok(BooleanValue::from(true))
        } else if self.parse_insensitive("false") {
            Ok(BooleanValue::from(false))
        } else {
            Err(self.expect("booleanValue"))
        }
    }

    integer_production! {
        /// `sbyteValue`, an optionally signed integer in `[-128, 127]`.
        ///
        /// # Errors
        ///
        /// [`SyntaxError`] for missing digits or an out-of-range value.
        require_sbyte_value, SByteValue, true, 3,
        "sbyteValue", "sbyte in range [-128, 127]"
    }

    integer_production! {
        /// `byteValue`, an unsigned integer in `[0, 255]`.
        ///
        /// # Errors
        ///
        /// [`SyntaxError`] for missing digits or an out-of-range value.
        require_byte_value, ByteValue, false, 3,
        "byteValue", "byte in range [0, 255]"
    }

    integer_production! {
        /// `int16Value`.
        ///
        /// # Errors
        ///
        /// [`SyntaxError`] for missing digits or an out-of-range value.
        require_int16_value, Int16Value, true, 5,
        "int16Value", "int16 in range [-32768, 32767]"
    }

    integer_production! {
        /// `int32Value`.
        ///
        /// # Errors
        ///
        /// [`SyntaxError`] for missing digits or an out-of-range value.
        require_int32_value, Int32Value, true, 10,
        "int32Value", "int32 in range [-2147483648, 2147483647]"
    }

    integer_production! {
        /// `int64Value`.
        ///
        /// # Errors
        ///
        /// [`SyntaxError`] for missing digits or an out-of-range value.
        require_int64_value, Int64Value, true, 19,
        "int64Value",
        "int64 in range [-9223372036854775808, 9223372036854775807]"
    }

    /// `decimalValue`, unlimited digits with an optional fraction.
    ///
    /// # Errors
    ///
    /// [`SyntaxError`] for missing digits, a dot with no fraction, or a
    /// coefficient past 96 bits.
    pub fn require_decimal_value(&mut self) -> Result<DecimalValue, SyntaxError> {
        let start = self.pos;
        let sign = self.parse_one_of("+-");
        let digits = match self.parse_digits(1, usize::MAX) {
            Some(digits) => digits,
            None => {
                self.pos = start;
                return Err(self.expect("decimal digits"));
            }
        };
        let mut literal = String::new();
        if sign == Some('-') {
            literal.push('-');
        }
        literal.push_str(digits);
        if self.parse_literal(".") {
            match self.parse_digits(1, usize::MAX) {
                Some(fraction) => {
                    literal.push('.');
                    literal.push_str(fraction);
                }
                None => return Err(self.expect("decimal fraction")),
            }
        }
        match literal.parse::<Decimal>() {
            Ok(d) => Ok(DecimalValue::from(d)),
            Err(_) => {
                self.pos = start;
                Err(self.expect(
                    "decimal in range [-79228162514264337593543950335, \
                     79228162514264337593543950335]",
                ))
            }
        }
    }

    /// `doubleValue`, a decimal form with an optional exponent, or one
    /// of the case-sensitive specials `NaN`, `INF` and `-INF`.
    ///
    /// # Errors
    ///
    /// [`SyntaxError`] when no form matches; `+INF` and `-NaN` do not.
    pub fn require_double_value(&mut self) -> Result<DoubleValue, SyntaxError> {
        let f = self.require_float_literal("doubleValue")?;
        Ok(DoubleValue::from(f))
    }

    /// `singleValue`, the same grammar as `doubleValue` narrowed to
    /// `f32`; out-of-range magnitudes saturate to infinity.
    ///
    /// # Errors
    ///
    /// [`SyntaxError`] when no form matches.
    pub fn require_single_value(&mut self) -> Result<SingleValue, SyntaxError> {
        let f = self.require_float_literal("singleValue")?;
        Ok(SingleValue::from(f as f32))
    }

    fn require_float_literal(&mut self, production: &str) -> Result<f64, SyntaxError> {
        let start = self.pos;
        let sign = self.parse_one_of("+-");
        if sign.is_none() && self.parse_literal("NaN") {
            return Ok(f64::NAN);
        }
        if self.parse_literal("INF") {
            return match sign {
                None => Ok(f64::INFINITY),
                Some('-') => Ok(f64::NEG_INFINITY),
                Some(_) => {
                    self.pos = start;
                    Err(self.expect(production))
                }
            };
        }
        let digits = match self.parse_digits(1, usize::MAX) {
            Some(digits) => digits,
            None => {
                self.pos = start;
                return Err(self.expect(production));
            }
        };
        let mut literal = String::new();
        if sign == Some('-') {
            literal.push('-');
        }
        literal.push_str(digits);
        if self.parse_literal(".") {
            match self.parse_digits(1, usize::MAX) {
                Some(fraction) => {
                    literal.push('.');
                    literal.push_str(fraction);
                }
                None => return Err(self.expect("decimal fraction")),
            }
        }
        if self.parse_one_of("eE").is_some() {
            literal.push('e');
            if let Some(exp_sign) = self.parse_one_of("+-") {
                literal.push(exp_sign);
            }
            match self.parse_digits(1, usize::MAX) {
                Some(exponent) => literal.push_str(exponent),
                None => return Err(self.expect("exponent")),
            }
        }
        // the host parser saturates out-of-range exponents to infinity
        literal.parse().map_err(|_| {
            self.pos = start;
            self.expect(production)
        })
    }

    /// `guidValue` in the `8-4-4-4-12` hex digit shape.
    ///
    /// # Errors
    ///
    /// [`SyntaxError`] for any other shape.
    pub fn require_guid_value(&mut self) -> Result<GuidValue, SyntaxError> {
        let start = self.pos;
        for (i, width) in [8usize, 4, 4, 4, 12].iter().enumerate() {
            if i > 0 && !self.parse_literal("-") {
                self.pos = start;
                return Err(self.expect("guidValue"));
            }
            if self.parse_hex_digits(*width).is_none() {
                self.pos = start;
                return Err(self.expect("guidValue"));
            }
        }
        match Uuid::try_parse(&self.src[start..self.pos]) {
            Ok(u) => Ok(GuidValue::from(u)),
            Err(_) => {
                self.pos = start;
                Err(self.expect("guidValue"))
            }
        }
    }

    fn require_year(&mut self) -> Result<i32, SyntaxError> {
        let start = self.pos;
        self.parse_literal("-");
        let matched = match self.peek() {
            // a leading zero pins the year to four digits
            Some(b'0') => {
                self.pos += 1;
                self.parse_digits(3, 3).is_some()
            }
            Some(b'1'..=b'9') => self.parse_digits(4, usize::MAX).is_some(),
            _ => false,
        };
        if !matched {
            self.pos = start;
            return Err(self.expect("year"));
        }
        match self.src[start..self.pos].parse() {
            Ok(year) => Ok(year),
            Err(_) => {
                self.pos = start;
                Err(self.expect("year"))
            }
        }
    }

    fn require_month(&mut self) -> Result<u8, SyntaxError> {
        self.require_two_digits(1, 12, "month")
    }

    fn require_day(&mut self) -> Result<u8, SyntaxError> {
        self.require_two_digits(1, 31, "day")
    }

    fn require_two_digits(
        &mut self,
        min: u8,
        max: u8,
        production: &str,
    ) -> Result<u8, SyntaxError> {
        let start = self.pos;
        let digits = match self.parse_digits(2, 2) {
            Some(digits) => digits,
            None => {
                self.pos = start;
                return Err(self.expect(production));
            }
        };
        match digits.parse::<u8>() {
            Ok(n) if n >= min && n <= max => Ok(n),
            _ => {
                self.pos = start;
                Err(self.expect(format!("{production} in range [{min:02}..{max}]")))
            }
        }
    }

    fn require_hour(&mut self) -> Result<u8, SyntaxError> {
        let start = self.pos;
        let digits = match self.parse_digits(2, 2) {
            Some(digits) => digits,
            None => {
                self.pos = start;
                return Err(self.expect("hour"));
            }
        };
        match digits.parse::<u8>() {
            Ok(n) if n <= 23 => Ok(n),
            _ => {
                self.pos = start;
                Err(self.expect("hour in range [0..23]"))
            }
        }
    }

    fn require_zero_to_fifty_nine(&mut self, production: &str) -> Result<u8, SyntaxError> {
        let start = self.pos;
        let digits = match self.parse_digits(2, 2) {
            Some(digits) => digits,
            None => {
                self.pos = start;
                return Err(self.expect(production));
            }
        };
        match digits.parse::<u8>() {
            Ok(n) if n <= 59 => Ok(n),
            _ => {
                self.pos = start;
                Err(self.expect(format!("{production} in range [0..59]")))
            }
        }
    }

    /// Fraction digits scaled to nanoseconds; digits past the ninth
    /// are read and discarded.
    fn require_fraction_nanos(&mut self, max_digits: usize) -> Result<u32, SyntaxError> {
        let digits = match self.parse_digits(1, max_digits) {
            Some(digits) => digits,
            None => return Err(self.expect("fractional seconds")),
        };
        let kept = &digits[..digits.len().min(NANO_DIGITS)];
        match kept.parse::<u32>() {
            Ok(n) => Ok(n * 10u32.pow((NANO_DIGITS - kept.len()) as u32)),
            Err(_) => Err(self.expect("fractional seconds")),
        }
    }

    /// `dateValue`, `year "-" month "-" day` on the proleptic Gregorian
    /// calendar.
    ///
    /// # Errors
    ///
    /// [`SyntaxError`] for a malformed component or a day that does not
    /// exist in the given month.
    pub fn require_date_value(&mut self) -> Result<DateValue, SyntaxError> {
        let start = self.pos;
        let year = self.require_year()?;
        self.require_literal("-")?;
        let month = self.require_month()?;
        self.require_literal("-")?;
        let day = self.require_day()?;
        let date = Month::try_from(month)
            .ok()
            .and_then(|m| Date::from_calendar_date(year, m, day).ok());
        match date {
            Some(d) => Ok(DateValue::from(d)),
            None => {
                self.pos = start;
                Err(self.expect("valid dateValue"))
            }
        }
    }

    fn require_time_components(&mut self) -> Result<(u8, u8, u8, u32), SyntaxError> {
        let hour = self.require_hour()?;
        self.require_literal(":")?;
        let minute = self.require_zero_to_fifty_nine("minute")?;
        let mut second = 0;
        let mut nanos = 0;
        if self.parse_literal(":") {
            second = self.require_zero_to_fifty_nine("second")?;
            if self.parse_literal(".") {
                // timeOfDay fractions carry at most twelve digits
                nanos = self.require_fraction_nanos(12)?;
            }
        }
        Ok((hour, minute, second, nanos))
    }

    /// `timeOfDayValue`, `hh:mm` with optional seconds and fraction.
    ///
    /// # Errors
    ///
    /// [`SyntaxError`] for a malformed or out-of-range component.
    pub fn require_time_of_day_value(&mut self) -> Result<TimeOfDayValue, SyntaxError> {
        let start = self.pos;
        let (hour, minute, second, nanos) = self.require_time_components()?;
        match Time::from_hms_nano(hour, minute, second, nanos) {
            Ok(t) => Ok(TimeOfDayValue::from(t)),
            Err(_) => {
                self.pos = start;
                Err(self.expect("valid timeOfDayValue"))
            }
        }
    }

    /// `dateTimeOffsetValue`, a date, `T`, a time and a mandatory zone,
    /// either `Z` or a signed `hh:mm` offset.
    ///
    /// # Errors
    ///
    /// [`SyntaxError`] for any malformed part, including a missing
    /// zone.
    pub fn require_date_time_offset_value(
        &mut self,
    ) -> Result<DateTimeOffsetValue, SyntaxError> {
        let start = self.pos;
        let date = self.require_date_value()?;
        if !self.parse_insensitive("T") {
            return Err(self.expect("'T'"));
        }
        let (hour, minute, second, nanos) = self.require_time_components()?;
        let offset = if self.parse_insensitive("Z") {
            UtcOffset::UTC
        } else {
            let sign = match self.parse_one_of("+-") {
                Some(sign) => sign,
                None => return Err(self.expect("zone")),
            };
            let zone_hour = self.require_hour()?;
            self.require_literal(":")?;
            let zone_minute = self.require_zero_to_fifty_nine("minute")?;
            let factor: i8 = if sign == '-' { -1 } else { 1 };
            match UtcOffset::from_hms(
                factor * zone_hour as i8,
                factor * zone_minute as i8,
                0,
            ) {
                Ok(offset) => offset,
                Err(_) => return Err(self.expect("zone")),
            }
        };
        let assembled = match date.value() {
            Some(d) => Time::from_hms_nano(hour, minute, second, nanos)
                .ok()
                .map(|t| PrimitiveDateTime::new(d, t).assume_offset(offset)),
            None => None,
        };
        match assembled {
            Some(dt) => Ok(DateTimeOffsetValue::from(dt)),
            None => {
                self.pos = start;
                Err(self.expect("valid dateTimeOffsetValue"))
            }
        }
    }

    /// `durationValue` in the day-time shape,
    /// `[sign] P [nD] [T [nH] [nM] [n[.n]S]]`, at least one component.
    ///
    /// # Errors
    ///
    /// [`SyntaxError`] for a malformed literal, a bare `P` or `PT`, or
    /// a span too large to represent.
    pub fn require_duration_value(&mut self) -> Result<DurationValue, SyntaxError> {
        let start = self.pos;
        let sign = self.parse_one_of("+-");
        if !self.parse_insensitive("P") {
            self.pos = start;
            return Err(self.expect("durationValue"));
        }
        let mut any = false;
        let mut days = 0u64;
        let mut hours = 0u64;
        let mut minutes = 0u64;
        let mut whole_seconds = 0u64;
        let mut nanos = 0u32;
        if let Some(digits) = self.parse_digits(1, usize::MAX) {
            if !self.parse_insensitive("D") {
                return Err(self.expect("'D'"));
            }
            days = self.duration_component(start, digits)?;
            any = true;
        }
        if self.parse_insensitive("T") {
            let mut in_time = false;
            let mut pending = self.parse_digits(1, usize::MAX);
            if pending.is_some() && self.parse_insensitive("H") {
                if let Some(digits) = pending.take() {
                    hours = self.duration_component(start, digits)?;
                    in_time = true;
                }
                pending = self.parse_digits(1, usize::MAX);
            }
            if pending.is_some() && self.parse_insensitive("M") {
                if let Some(digits) = pending.take() {
                    minutes = self.duration_component(start, digits)?;
                    in_time = true;
                }
                pending = self.parse_digits(1, usize::MAX);
            }
            if let Some(digits) = pending {
                if self.parse_literal(".") {
                    nanos = self.require_fraction_nanos(usize::MAX)?;
                }
                if !self.parse_insensitive("S") {
                    return Err(self.expect("'S'"));
                }
                whole_seconds = self.duration_component(start, digits)?;
                in_time = true;
            }
            if !in_time {
                self.pos = start;
                return Err(self.expect("valid durationValue"));
            }
            any = true;
        }
        if !any {
            self.pos = start;
            return Err(self.expect("valid durationValue"));
        }
        let seconds = days
            .checked_mul(86_400)
            .and_then(|total| hours.checked_mul(3_600).and_then(|h| total.checked_add(h)))
            .and_then(|total| minutes.checked_mul(60).and_then(|m| total.checked_add(m)))
            .and_then(|total| total.checked_add(whole_seconds))
            .and_then(|total| i64::try_from(total).ok());
        match seconds {
            Some(seconds) => {
                let duration = if sign == Some('-') {
                    Duration::new(-seconds, -(nanos as i32))
                } else {
                    Duration::new(seconds, nanos as i32)
                };
                Ok(DurationValue::from(duration))
            }
            None => {
                self.pos = start;
                Err(self.expect("valid durationValue"))
            }
        }
    }

    fn duration_component(&mut self, start: usize, digits: &str) -> Result<u64, SyntaxError> {
        match digits.parse() {
            Ok(n) => Ok(n),
            Err(_) => {
                self.pos = start;
                Err(self.expect("valid durationValue"))
            }
        }
    }

    /// `binaryValue`, URL-safe base64 with padding accepted but not
    /// required. The empty literal is a zero length value.
    ///
    /// # Errors
    ///
    /// [`SyntaxError`] for a run that is no valid base64 quantum
    /// sequence.
    pub fn require_binary_value(&mut self) -> Result<BinaryValue, SyntaxError> {
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(b) if b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
        ) {
            self.pos += 1;
        }
        let _ = self.parse_literal("==") || self.parse_literal("=");
        match crate::scalar::BASE64.decode(&self.src[start..self.pos]) {
            Ok(bytes) => Ok(BinaryValue::from(bytes)),
            Err(_) => {
                self.pos = start;
                Err(self.expect("binaryValue"))
            }
        }
    }
}
