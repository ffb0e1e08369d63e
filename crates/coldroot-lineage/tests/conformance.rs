//! Conformance against the frozen v1 vector file
//!
//! Any two implementations that pass this suite agree byte for byte on
//! every derived field for the frozen seed and labels.

use coldroot_lineage::{deterministic_created_at, vectors, verify_lineage, VectorFile};

const VECTORS_V1: &str = include_str!("vectors/cold_root_identity.v1.json");

fn load_vectors() -> VectorFile {
    serde_json::from_str(VECTORS_V1).unwrap()
}

#[test]
fn test_v1_vectors_reproduce_exactly() {
    let file = load_vectors();
    assert_eq!(file.spec_version, "1.0");
    vectors::check(&file).unwrap();
}

#[test]
fn test_v1_vectors_cover_five_epochs() {
    let file = load_vectors();
    let labels: Vec<&str> = file.epochs.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(
        labels,
        ["2025-Q1", "2025-Q2", "2025-Q3", "2025-Q4", "2026-Q1"]
    );
}

#[test]
fn test_frozen_timestamps_match_the_resolver() {
    let file = load_vectors();
    for epoch in &file.epochs {
        assert_eq!(
            deterministic_created_at(&epoch.label).unwrap(),
            epoch.lineage_event.created_at,
            "created_at for {}",
            epoch.label
        );
    }
}

#[test]
fn test_frozen_events_verify_under_the_root_tag() {
    let file = load_vectors();
    for epoch in &file.epochs {
        assert!(
            verify_lineage(&file.root.pk_hex, &epoch.lineage_event),
            "lineage for {}",
            epoch.label
        );
    }
}

#[test]
fn test_frozen_tag_order_is_root_sig_epoch() {
    let file = load_vectors();
    for epoch in &file.epochs {
        let names: Vec<&str> = epoch
            .lineage_event
            .tags
            .iter()
            .filter_map(|tag| tag.first())
            .map(String::as_str)
            .collect();
        assert_eq!(names, ["root", "sig", "epoch"]);
        assert_eq!(epoch.lineage_event.content, "");
    }
}

#[test]
fn test_regeneration_is_a_fixed_point() {
    let mut file = load_vectors();
    let frozen = serde_json::to_value(&file).unwrap();
    vectors::regenerate(&mut file).unwrap();
    assert_eq!(serde_json::to_value(&file).unwrap(), frozen);
}
