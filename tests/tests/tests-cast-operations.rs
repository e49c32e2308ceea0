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
//! Integration tests of the cast operation.

use nv_odata_core::Native;
use nv_odata_core::PrimitiveKind;
use nv_odata_core::PrimitiveValue;
use nv_odata_core::Value;
use nv_odata_tests::parse;
use nv_odata_tests::render;

// Check that casting to String takes the source's literal form for
// every kind that has one.
#[test]
fn cast_to_string_renders_the_literal() {
    let cases: Vec<(PrimitiveKind, &str)> = vec![
        (PrimitiveKind::Boolean, "true"),
        (PrimitiveKind::Decimal, "3.140"),
        (PrimitiveKind::Date, "2017-12-31"),
        (PrimitiveKind::Duration, "PT5S"),
        (PrimitiveKind::Guid, "01234567-89ab-cdef-0123-456789abcdef"),
        (PrimitiveKind::Binary, "T0RhdGE="),
        (PrimitiveKind::Int64, "-42"),
    ];
    for (kind, literal) in cases {
        let text = parse(kind, literal).cast(PrimitiveKind::String);
        assert_eq!(text.kind(), Some(PrimitiveKind::String));
        assert_eq!(render(&text), literal, "{} literal form", kind.name());
    }
}

// Check that a null source casts to the null of the target kind,
// including from and to the typeless null.
#[test]
fn null_casts_stay_null_and_gain_the_target_kind() {
    let null_int = PrimitiveKind::Int32.new_value();
    let as_string = null_int.cast(PrimitiveKind::String);
    assert_eq!(as_string.kind(), Some(PrimitiveKind::String));
    assert!(as_string.is_null());

    let typeless = PrimitiveValue::Null;
    let as_double = typeless.cast(PrimitiveKind::Double);
    assert_eq!(as_double.kind(), Some(PrimitiveKind::Double));
    assert!(as_double.is_null());
}

// Check numeric narrowing: in-range values convert with truncation
// toward zero and out-of-range ones become null, never a wrap.
#[test]
fn numeric_narrowing_truncates_or_nulls() {
    let cases: Vec<(PrimitiveKind, &str, PrimitiveKind, Option<&str>)> = vec![
        (PrimitiveKind::Int64, "255", PrimitiveKind::Byte, Some("255")),
        (PrimitiveKind::Int64, "256", PrimitiveKind::Byte, None),
        (PrimitiveKind::Int64, "-1", PrimitiveKind::Byte, None),
        (PrimitiveKind::Double, "3.9", PrimitiveKind::Int32, Some("3")),
        (PrimitiveKind::Double, "-3.9", PrimitiveKind::Int32, Some("-3")),
        (PrimitiveKind::Double, "NaN", PrimitiveKind::Int32, None),
        (PrimitiveKind::Decimal, "127.99", PrimitiveKind::SByte, Some("127")),
        (PrimitiveKind::Decimal, "128.0", PrimitiveKind::SByte, None),
        (PrimitiveKind::Int32, "-32768", PrimitiveKind::Int16, Some("-32768")),
        (PrimitiveKind::Int32, "-32769", PrimitiveKind::Int16, None),
    ];
    for (kind, literal, target, expected) in cases {
        let result = parse(kind, literal).cast(target);
        assert_eq!(result.kind(), Some(target));
        match expected {
            Some(text) => assert_eq!(render(&result), text, "{literal} as {}", target.name()),
            None => assert!(result.is_null(), "{literal} as {} must be null", target.name()),
        }
    }
}

// Check the infinity rule: narrowing a finite double past the single
// range gives null, while an infinite source stays infinite.
#[test]
fn cast_never_invents_an_infinity() {
    let finite = parse(PrimitiveKind::Double, "1e39");
    assert!(finite.cast(PrimitiveKind::Single).is_null());

    let infinite = parse(PrimitiveKind::Double, "INF");
    assert_eq!(render(&infinite.cast(PrimitiveKind::Single)), "INF");
    let negative = parse(PrimitiveKind::Double, "-INF");
    assert_eq!(render(&negative.cast(PrimitiveKind::Single)), "-INF");

    let widened = parse(PrimitiveKind::Single, "INF").cast(PrimitiveKind::Double);
    assert_eq!(render(&widened), "INF");
}

// Check that NaN survives a float-to-float cast; it is not an
// infinity.
#[test]
fn nan_survives_float_casts() {
    let result = parse(PrimitiveKind::Double, "NaN").cast(PrimitiveKind::Single);
    assert_eq!(result.kind(), Some(PrimitiveKind::Single));
    assert!(matches!(result.to_native(), Native::Float(f) if f.is_nan()));
}

// Check that cast converts payloads, never re-parses text: numeric
// text does not become a number, but 32 hex characters do become a
// guid.
#[test]
fn cast_from_string_converts_no_literals() {
    let numeric_text = parse(PrimitiveKind::String, "123");
    assert!(numeric_text.cast(PrimitiveKind::Int32).is_null());
    assert!(numeric_text.cast(PrimitiveKind::Double).is_null());

    let hex = parse(PrimitiveKind::String, "0123456789abcdef0123456789abcdef");
    assert_eq!(
        render(&hex.cast(PrimitiveKind::Guid)),
        "01234567-89ab-cdef-0123-456789abcdef"
    );
    let hyphenated = parse(PrimitiveKind::String, "01234567-89ab-cdef-0123-456789abcdef");
    assert!(hyphenated.cast(PrimitiveKind::Guid).is_null());
}

// Check that booleans take part in no numeric conversions in either
// direction.
#[test]
fn booleans_do_not_mix_with_numbers() {
    assert!(parse(PrimitiveKind::Boolean, "true").cast(PrimitiveKind::Byte).is_null());
    assert!(parse(PrimitiveKind::Byte, "1").cast(PrimitiveKind::Boolean).is_null());
    assert!(parse(PrimitiveKind::Int32, "0").cast(PrimitiveKind::Boolean).is_null());
}

// Check the temporal conversions: an instant carries a date, a date
// expands to UTC midnight, an integer counts unix seconds, and a time
// of day comes from nothing else.
#[test]
fn temporal_casts_follow_the_payload() {
    let instant = parse(PrimitiveKind::DateTimeOffset, "2002-10-10T23:59:59-05:00");
    assert_eq!(render(&instant.cast(PrimitiveKind::Date)), "2002-10-10");
    assert!(instant.cast(PrimitiveKind::TimeOfDay).is_null());
    assert!(instant.cast(PrimitiveKind::Int64).is_null());

    let date = parse(PrimitiveKind::Date, "2002-10-10");
    assert_eq!(
        render(&date.cast(PrimitiveKind::DateTimeOffset)),
        "2002-10-10T00:00:00Z"
    );

    let seconds = parse(PrimitiveKind::Int64, "1034208000");
    assert_eq!(
        render(&seconds.cast(PrimitiveKind::DateTimeOffset)),
        "2002-10-10T00:00:00Z"
    );

    let duration = parse(PrimitiveKind::Duration, "PT5S");
    assert!(duration.cast(PrimitiveKind::Decimal).is_null());
}

// Check that binary and string casts run through the payload bytes in
// one direction and the literal form in the other.
#[test]
fn binary_and_string_casts_are_asymmetric() {
    let binary = parse(PrimitiveKind::Binary, "T0RhdGE=");
    assert_eq!(render(&binary.cast(PrimitiveKind::String)), "T0RhdGE=");

    let text = parse(PrimitiveKind::String, "abc");
    assert_eq!(render(&text.cast(PrimitiveKind::Binary)), "YWJj");
}

// Check widening casts across the numeric tower.
#[test]
fn numeric_widening_is_exact() {
    let cases: Vec<(PrimitiveKind, &str, PrimitiveKind, &str)> = vec![
        (PrimitiveKind::SByte, "-128", PrimitiveKind::Int64, "-128"),
        (PrimitiveKind::Int64, "42", PrimitiveKind::Decimal, "42"),
        (PrimitiveKind::Decimal, "0.5", PrimitiveKind::Double, "0.5"),
        (PrimitiveKind::Int32, "7", PrimitiveKind::Double, "7"),
    ];
    for (kind, literal, target, expected) in cases {
        assert_eq!(
            render(&parse(kind, literal).cast(target)),
            expected,
            "{literal} as {}",
            target.name()
        );
    }
}
