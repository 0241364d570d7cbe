// SPDX-FileCopyrightText: 2026 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end inspection tests
//!
//! These pin the report wire format exactly: header line, section order,
//! label alignment, and the formatting rules for each denomination and
//! USD.

use weilens::{
    Denomination, Encoding, Endianness, Inspector, InspectorConfig, RateCell,
};

fn inspector_with(config: InspectorConfig, rate: f64) -> Inspector {
    let cell = RateCell::new();
    cell.set(rate);
    Inspector::new(config, cell)
}

#[test]
fn hex_ff_renders_the_full_report() {
    let config = InspectorConfig::builder().encodings([Encoding::Hex]).build();
    let report = inspector_with(config, 0.0).inspect("0xff").unwrap();

    assert_eq!(
        report,
        "Weilens: 0xff\n\
         Wei\n\
         Gwei:  0.000000255\n\
         Ether: 0.000000000000000255\n\
         Usd:   $0.00\n\
         Gwei\n\
         Wei:   255000000000\n\
         Ether: 0.000000255\n\
         Usd:   $0.00\n\
         Ether\n\
         Wei:   255000000000000000000\n\
         Gwei:  255000000000\n\
         Usd:   $0.00"
    );
}

#[test]
fn one_ether_in_wei_converts_to_exactly_one() {
    let config = InspectorConfig::builder()
        .encodings([Encoding::Decimal])
        .units([Denomination::Wei])
        .build();
    let report = inspector_with(config, 0.0)
        .inspect("1000000000000000000")
        .unwrap();

    assert_eq!(
        report,
        "Weilens: 1000000000000000000\n\
         Wei\n\
         Gwei:  1000000000\n\
         Ether: 1\n\
         Usd:   $0.00"
    );
}

#[test]
fn usd_lines_track_the_cached_rate() {
    let config = InspectorConfig::builder()
        .encodings([Encoding::Decimal])
        .units([Denomination::Wei])
        .build();
    let report = inspector_with(config, 2000.0)
        .inspect("1000000000000000000")
        .unwrap();

    assert!(report.ends_with("Usd:   $2000.00"), "got:\n{report}");
}

#[test]
fn comma_grouped_decimal_tokens_parse() {
    let config = InspectorConfig::builder()
        .encodings([Encoding::Decimal])
        .units([Denomination::Wei])
        .build();
    let report = inspector_with(config, 0.0).inspect("1,000,000,000").unwrap();

    assert!(report.contains("Gwei:  1\n"), "got:\n{report}");
}

#[test]
fn little_endianness_reorders_the_bytes() {
    let config = InspectorConfig::builder()
        .encodings([Encoding::Hex])
        .units([Denomination::Wei])
        .endianness(Endianness::Little)
        .build();
    // 0x0100 little-endian reads as 0x0001.
    let report = inspector_with(config, 0.0).inspect("0x0100").unwrap();

    assert!(report.contains("Gwei:  0.000000001"), "got:\n{report}");
}

#[test]
fn dispatcher_keeps_the_last_matching_encoding() {
    // "777" satisfies octal, decimal, and hex; hex is configured last and
    // must win: 0x777 = 1911.
    let config = InspectorConfig::builder()
        .encodings([Encoding::Octal, Encoding::Decimal, Encoding::Hex])
        .units([Denomination::Wei])
        .build();
    let report = inspector_with(config, 0.0).inspect("777").unwrap();
    assert!(report.contains("Gwei:  0.000001911"), "got:\n{report}");

    // Same token, decimal last: plain 777.
    let config = InspectorConfig::builder()
        .encodings([Encoding::Octal, Encoding::Hex, Encoding::Decimal])
        .units([Denomination::Wei])
        .build();
    let report = inspector_with(config, 0.0).inspect("777").unwrap();
    assert!(report.contains("Gwei:  0.000000777"), "got:\n{report}");
}

#[test]
fn base64_tokens_inspect_their_decoded_bytes() {
    let config = InspectorConfig::builder()
        .encodings([Encoding::Base64])
        .units([Denomination::Wei])
        .build();
    // "AQA=" decodes to [0x01, 0x00] = 256.
    let report = inspector_with(config, 0.0).inspect("AQA=").unwrap();

    assert!(report.contains("Gwei:  0.000000256"), "got:\n{report}");
}

#[test]
fn binary_and_octal_prefixes_parse() {
    let config = InspectorConfig::builder()
        .encodings([Encoding::Binary])
        .units([Denomination::Wei])
        .build();
    let report = inspector_with(config, 0.0).inspect("0b11111111").unwrap();
    assert!(report.contains("Gwei:  0.000000255"), "got:\n{report}");

    let config = InspectorConfig::builder()
        .encodings([Encoding::Octal])
        .units([Denomination::Wei])
        .build();
    let report = inspector_with(config, 0.0).inspect("0o377").unwrap();
    assert!(report.contains("Gwei:  0.000000255"), "got:\n{report}");
}

#[test]
fn unmatched_tokens_produce_no_report() {
    let inspector = inspector_with(InspectorConfig::default(), 0.0);
    assert!(inspector.inspect("hello world").is_none());
    assert!(inspector.inspect("0xzz").is_none());
    assert!(inspector.inspect("").is_none());
}

#[test]
fn empty_configuration_produces_no_report() {
    let no_encodings = InspectorConfig::builder().encodings([]).build();
    assert!(inspector_with(no_encodings, 0.0).inspect("0xff").is_none());

    let no_units = InspectorConfig::builder().units([]).build();
    assert!(inspector_with(no_units, 0.0).inspect("0xff").is_none());
}

#[test]
fn config_round_trips_through_serde() {
    let config = InspectorConfig::builder()
        .encodings([Encoding::Hex, Encoding::Base64])
        .units([Denomination::Wei, Denomination::Ether])
        .endianness(Endianness::Little)
        .build();

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"hex\""));
    assert!(json.contains("\"little\""));

    let back: InspectorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.encodings, config.encodings);
    assert_eq!(back.units, config.units);
    assert_eq!(back.endianness, config.endianness);
}

#[test]
fn fractional_decimal_tokens_keep_their_fraction() {
    let config = InspectorConfig::builder()
        .encodings([Encoding::Decimal])
        .units([Denomination::Gwei])
        .build();
    let report = inspector_with(config, 0.0).inspect("1.5").unwrap();

    assert_eq!(
        report,
        "Weilens: 1.5\n\
         Gwei\n\
         Wei:   1500000000\n\
         Ether: 0.0000000015\n\
         Usd:   $0.00"
    );
}
