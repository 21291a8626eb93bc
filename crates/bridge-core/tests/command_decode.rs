//! Wire-contract tests for the command decode table.
//!
//! Exercises the public codec surface the relay binary consumes: every
//! command tag, the decode-error classification, and the response shapes.

use bridge_core::{decode_command, encode_outcome, Command, MouseButton, Outcome, RelayError};

// ── Command table ─────────────────────────────────────────────────────────────

#[test]
fn test_every_command_tag_decodes_to_its_variant() {
    let cases: Vec<(&str, Command)> = vec![
        (
            r#"{"type":"mouseMove","x":100,"y":200}"#,
            Command::MouseMove { x: 100, y: 200 },
        ),
        (
            r#"{"type":"click","button":"right"}"#,
            Command::Click {
                button: MouseButton::Right,
            },
        ),
        (
            r#"{"type":"press","key":"enter"}"#,
            Command::Press {
                key: "enter".into(),
            },
        ),
        (
            r#"{"type":"keyDown","key":"shift"}"#,
            Command::KeyDown {
                key: "shift".into(),
            },
        ),
        (
            r#"{"type":"keyUp","key":"shift"}"#,
            Command::KeyUp {
                key: "shift".into(),
            },
        ),
        (
            r#"{"type":"type","text":"hello"}"#,
            Command::Type {
                text: "hello".into(),
            },
        ),
    ];

    for (line, expected) in cases {
        let decoded = decode_command(line).expect(line);
        assert_eq!(decoded, expected, "wrong decode for {line}");
    }
}

#[test]
fn test_extra_fields_are_tolerated() {
    // The supervisor may attach fields this relay does not know about.
    let decoded = decode_command(r#"{"type":"click","button":"left","ts":12345}"#);
    assert!(decoded.is_ok());
}

// ── Error classification ──────────────────────────────────────────────────────

#[test]
fn test_unknown_type_wins_over_payload_inspection() {
    // The tag is checked before any payload field, so an unknown command with
    // arbitrary fields is still UnknownType rather than MissingField.
    let err = decode_command(r#"{"type":"drag","x":1}"#).unwrap_err();
    assert!(matches!(err, RelayError::UnknownType(t) if t == "drag"));
}

#[test]
fn test_non_string_type_tag_is_a_missing_field() {
    let err = decode_command(r#"{"type":7}"#).unwrap_err();
    assert!(matches!(err, RelayError::MissingField(_)));
}

#[test]
fn test_error_messages_name_the_fault() {
    let err = decode_command(r#"{"type":"press"}"#).unwrap_err();
    assert!(
        err.to_string().contains("key"),
        "message should name the missing field: {err}"
    );

    let err = decode_command(r#"{"type":"wiggle"}"#).unwrap_err();
    assert!(
        err.to_string().contains("wiggle"),
        "message should name the unknown tag: {err}"
    );
}

// ── Response shapes ───────────────────────────────────────────────────────────

#[test]
fn test_outcome_lines_match_the_wire_contract() {
    assert_eq!(encode_outcome(&Outcome::Success), r#"{"status":"success"}"#);

    let line = encode_outcome(&Outcome::error("unknown key name: \"bogus\""));
    let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(parsed["status"], "error");
    assert_eq!(parsed["message"], "unknown key name: \"bogus\"");
}
