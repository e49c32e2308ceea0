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
//! Integration tests of literal parsing and rendering.

use nv_odata_core::Native;
use nv_odata_core::PrimitiveKind;
use nv_odata_core::Value;
use nv_odata_core::ValueError;
use nv_odata_tests::parse;
use nv_odata_tests::render;
use rust_decimal::Decimal;
use time::macros::date;
use time::macros::datetime;
use time::macros::time;
use uuid::Uuid;

// Check that every kind accepts its canonical literal and renders it
// back unchanged.
#[test]
fn canonical_literals_round_trip() {
    let cases: Vec<(PrimitiveKind, &str)> = vec![
        (PrimitiveKind::Binary, "T0RhdGEh"),
        (PrimitiveKind::Boolean, "true"),
        (PrimitiveKind::Byte, "255"),
        (PrimitiveKind::Date, "2017-12-31"),
        (PrimitiveKind::DateTimeOffset, "2017-12-31T23:59:59Z"),
        (PrimitiveKind::Decimal, "3.140"),
        (PrimitiveKind::Double, "-31.415"),
        (PrimitiveKind::Duration, "P12DT23H59M59.999999999S"),
        (PrimitiveKind::Guid, "01234567-89ab-cdef-0123-456789abcdef"),
        (PrimitiveKind::Int16, "-32768"),
        (PrimitiveKind::Int32, "2147483647"),
        (PrimitiveKind::Int64, "-9223372036854775808"),
        (PrimitiveKind::SByte, "-128"),
        (PrimitiveKind::Single, "0.25"),
        (PrimitiveKind::String, "anything at all"),
        (PrimitiveKind::TimeOfDay, "07:59:59.900000"),
    ];
    for (kind, literal) in cases {
        let value = parse(kind, literal);
        assert_eq!(value.kind(), Some(kind), "{} kind", kind.name());
        assert!(!value.is_null(), "{} non-null", kind.name());
        assert_eq!(render(&value), literal, "{} round trip", kind.name());
    }
}

// Check that parsed payloads are the host values they read as, not
// just text that renders back.
#[test]
fn parsed_payloads_match_their_host_values() {
    let cases: Vec<(PrimitiveKind, &str, Native)> = vec![
        (PrimitiveKind::Date, "2017-12-31", Native::Date(date!(2017 - 12 - 31))),
        (
            PrimitiveKind::DateTimeOffset,
            "2002-10-10T12:00:01.25+05:30",
            Native::DateTimeOffset(datetime!(2002-10-10 12:00:01.25 +5:30)),
        ),
        (PrimitiveKind::TimeOfDay, "07:59:59.9", Native::TimeOfDay(time!(7:59:59.9))),
        (PrimitiveKind::Decimal, "3.140", Native::Decimal(Decimal::new(3140, 3))),
        (
            PrimitiveKind::Guid,
            "01234567-89ab-cdef-0123-456789abcdef",
            Native::Guid(Uuid::try_parse("01234567-89ab-cdef-0123-456789abcdef").unwrap()),
        ),
        (PrimitiveKind::Int64, "-42", Native::Integer(-42)),
        (PrimitiveKind::Double, "0.5", Native::Float(0.5)),
        (PrimitiveKind::Binary, "T0RhdGE=", Native::Binary(b"OData".to_vec())),
        (
            PrimitiveKind::Duration,
            "P1DT2H",
            Native::Duration(time::Duration::hours(26)),
        ),
    ];
    for (kind, literal, expected) in cases {
        assert_eq!(parse(kind, literal).to_native(), expected, "{literal}");
    }
}

// Check keyword case rules: boolean keywords and temporal designators
// accept any case while the float specials accept exactly one.
#[test]
fn keyword_case_handling() {
    assert_eq!(render(&parse(PrimitiveKind::Boolean, "TRUE")), "true");
    assert_eq!(render(&parse(PrimitiveKind::Boolean, "False")), "false");
    assert_eq!(render(&parse(PrimitiveKind::Duration, "p1dt2h")), "P1DT2H");
    assert_eq!(
        render(&parse(PrimitiveKind::DateTimeOffset, "2002-10-10t12:00:00z")),
        "2002-10-10T12:00:00Z"
    );
    assert_eq!(render(&parse(PrimitiveKind::Double, "NaN")), "NaN");
    assert_eq!(render(&parse(PrimitiveKind::Double, "-INF")), "-INF");
    assert_eq!(render(&parse(PrimitiveKind::Single, "INF")), "INF");
    for rejected in ["nan", "inf", "+INF", "-NaN", "Infinity"] {
        assert!(
            PrimitiveKind::Double.parse(rejected).is_err(),
            "{rejected} must not parse"
        );
    }
}

// Check that a literal must span the whole input and the error carries
// the offset of the leftover.
#[test]
fn trailing_input_is_rejected() {
    let cases: Vec<(PrimitiveKind, &str, usize)> = vec![
        (PrimitiveKind::Int32, "12 ", 2),
        (PrimitiveKind::Boolean, "falsely", 5),
        (PrimitiveKind::Date, "2017-12-31T00:00:00Z", 10),
        (PrimitiveKind::Guid, "01234567-89ab-cdef-0123-456789abcdef0", 36),
    ];
    for (kind, src, pos) in cases {
        match kind.parse(src) {
            Err(ValueError::Syntax(err)) => {
                assert_eq!(err.expected(), "end of input", "{src:?}");
                assert_eq!(err.position(), pos, "{src:?}");
            }
            other => panic!("{src:?} gave {other:?}"),
        }
    }
}

// Check that date and time literals are validated against the
// calendar, not just the digit grammar.
#[test]
fn calendar_validity_is_checked() {
    assert!(PrimitiveKind::Date.parse("2020-02-29").is_ok());
    let cases: Vec<(PrimitiveKind, &str)> = vec![
        (PrimitiveKind::Date, "2019-02-29"),
        (PrimitiveKind::Date, "2019-13-01"),
        (PrimitiveKind::Date, "2019-04-31"),
        (PrimitiveKind::TimeOfDay, "24:00:00"),
        (PrimitiveKind::TimeOfDay, "11:60:00"),
        (PrimitiveKind::DateTimeOffset, "2019-02-29T00:00:00Z"),
        (PrimitiveKind::DateTimeOffset, "2019-01-01T00:00:00+24:00"),
    ];
    for (kind, src) in cases {
        assert!(kind.parse(src).is_err(), "{src} must not parse");
    }
}

// Check that a decimal keeps exactly the scale it was written with.
#[test]
fn decimal_literals_keep_their_scale() {
    let cases: Vec<(&str, &str)> = vec![
        ("3.140", "3.140"),
        ("0.010", "0.010"),
        ("-0.5", "-0.5"),
        ("42", "42"),
        ("+7.00", "7.00"),
    ];
    for (literal, expected) in cases {
        assert_eq!(render(&parse(PrimitiveKind::Decimal, literal)), expected);
    }
}

// Check the signed and unsigned integer ranges at both edges.
#[test]
fn integer_bounds_are_enforced() {
    let cases: Vec<(PrimitiveKind, &str, bool)> = vec![
        (PrimitiveKind::SByte, "-128", true),
        (PrimitiveKind::SByte, "127", true),
        (PrimitiveKind::SByte, "128", false),
        (PrimitiveKind::SByte, "-129", false),
        (PrimitiveKind::Byte, "0", true),
        (PrimitiveKind::Byte, "255", true),
        (PrimitiveKind::Byte, "256", false),
        (PrimitiveKind::Byte, "-1", false),
        (PrimitiveKind::Int16, "-32768", true),
        (PrimitiveKind::Int16, "32768", false),
        (PrimitiveKind::Int32, "2147483647", true),
        (PrimitiveKind::Int32, "2147483648", false),
        (PrimitiveKind::Int64, "9223372036854775807", true),
        (PrimitiveKind::Int64, "9223372036854775808", false),
    ];
    for (kind, literal, ok) in cases {
        assert_eq!(
            kind.parse(literal).is_ok(),
            ok,
            "{} {literal}",
            kind.name()
        );
    }
}

// Check that base64url padding is accepted but not required, and that
// rendering settles on the padded form.
#[test]
fn binary_padding_is_optional() {
    let padded = parse(PrimitiveKind::Binary, "T0RhdGE=");
    let bare = parse(PrimitiveKind::Binary, "T0RhdGE");
    assert_eq!(padded, bare);
    assert_eq!(render(&padded), "T0RhdGE=");
    assert_eq!(render(&parse(PrimitiveKind::Binary, "")), "");
    // the standard alphabet's + and / are not part of the url-safe one
    assert!(PrimitiveKind::Binary.parse("a+b/").is_err());
}

// Check that guid literals accept any hex case and render lowercase.
#[test]
fn guid_literals_render_lowercase() {
    let value = parse(PrimitiveKind::Guid, "01234567-89AB-CDEF-0123-456789ABCDEF");
    assert_eq!(render(&value), "01234567-89ab-cdef-0123-456789abcdef");
    assert!(PrimitiveKind::Guid.parse("01234567-89ab-cdef-0123").is_err());
    assert!(PrimitiveKind::Guid
        .parse("0123456789abcdef0123456789abcdef")
        .is_err());
}

// Check the year grammar outside [0001, 9999]: a leading minus, year
// zero, and years wider than four digits.
#[test]
fn wide_and_negative_years_round_trip() {
    let cases: Vec<&str> = vec!["0000-01-01", "-0752-03-15", "12345-06-07"];
    for literal in cases {
        assert_eq!(render(&parse(PrimitiveKind::Date, literal)), literal);
    }
    assert!(PrimitiveKind::Date.parse("752-03-15").is_err());
    assert_eq!(
        render(&parse(PrimitiveKind::DateTimeOffset, "2002-10-10T12:00:01.25+05:30")),
        "2002-10-10T12:00:01.250000+05:30"
    );
}

// Check that string literals are taken whole, with nothing escaped and
// nothing left over.
#[test]
fn string_literals_are_taken_whole() {
    let cases: Vec<&str> = vec!["", "plain", "with trailing space ", "per\ncent %25"];
    for literal in cases {
        let value = parse(PrimitiveKind::String, literal);
        assert_eq!(render(&value), literal);
    }
}

// Check that second fractions keep at most nine digits and render at
// microsecond width.
#[test]
fn fractions_past_nanoseconds_are_discarded() {
    assert_eq!(
        render(&parse(PrimitiveKind::TimeOfDay, "23:59:59.1234567899")),
        "23:59:59.123456"
    );
    assert_eq!(
        render(&parse(PrimitiveKind::Duration, "PT0.1234567899S")),
        "PT0.123456789S"
    );
}

// Check the duration grammar's degenerate forms: a designator with no
// components is not a duration.
#[test]
fn empty_duration_forms_are_rejected() {
    for rejected in ["P", "PT", "-P", "P1DT", "PT1S2M", "P1H"] {
        assert!(
            PrimitiveKind::Duration.parse(rejected).is_err(),
            "{rejected} must not parse"
        );
    }
    assert_eq!(render(&parse(PrimitiveKind::Duration, "PT0S")), "PT0S");
    assert_eq!(render(&parse(PrimitiveKind::Duration, "-P1D")), "-P1D");
}
