// Host-side tests for lead-capture validation and payload shape.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lead {
    include!("../src/core/lead.rs");
}

use lead::*;

#[test]
fn accepts_plausible_addresses() {
    for email in [
        "a@b.co",
        "user.name@example.com",
        "who+tag@mail.example.org",
        "x@sub.domain.io",
    ] {
        assert!(is_valid_email(email), "rejected {email}");
    }
}

#[test]
fn rejects_obvious_typos() {
    for email in [
        "",
        "plain",
        "a@b",
        "a@b.",
        "a@.com",
        "@b.com",
        "a @b.com",
        "a@b com",
        "a@@b.com",
        "a@b@c.com",
    ] {
        assert!(!is_valid_email(email), "accepted {email}");
    }
}

#[test]
fn payload_serializes_with_the_wire_field_names() {
    let payload = LeadPayload {
        email: "a@b.co".into(),
        ts: 1_700_000_000_000.0,
        ua: "test-agent".into(),
    };
    let value = serde_json::to_value(&payload).expect("serializable payload");
    assert_eq!(value["email"], "a@b.co");
    assert_eq!(value["ts"], 1_700_000_000_000.0);
    assert_eq!(value["ua"], "test-agent");
}
