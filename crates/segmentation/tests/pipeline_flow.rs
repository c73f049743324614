//! End-to-end pipeline run over a realistic client batch with a fixed
//! reference date, checking segments, normalized phones, and launch
//! selection order.

use chrono::NaiveDate;
use reactivation_core::config::SegmentationConfig;
use reactivation_core::types::{ClientRecord, Segment};
use reactivation_segmentation::{select_launch_candidates, SegmentationPipeline};

fn client(
    id: &str,
    first: &str,
    phone: Option<&str>,
    last_activity: Option<&str>,
) -> ClientRecord {
    ClientRecord {
        client_id: id.to_string(),
        first_name: Some(first.to_string()),
        last_name: None,
        email: None,
        phone: phone.map(String::from),
        last_activity: last_activity.map(String::from),
    }
}

fn sample_batch() -> Vec<ClientRecord> {
    vec![
        client("7", "Steven", Some("+13032463175"), Some("2021-03-09")),
        client("2020", "Deonte", Some("+1 (678) 770-4123"), Some("2024-03-21")),
        client("1605", "Zenon", Some("+12813801882"), Some("2025-10-09")),
        client("10", "LaKenya", Some("+17135823052"), Some("2021-03-09")),
        client("11", "Jerome", Some("+12817095700"), Some("2021-03-12")),
        client("3001", "Marta", Some("+15550000000"), None),
        client("3002", "Unreachable", Some("123"), Some("2020-06-01")),
    ]
}

#[test]
fn full_batch_classification() {
    let pipeline = SegmentationPipeline::new(SegmentationConfig::new(
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ));
    let classified = pipeline.run(&sample_batch()).unwrap();

    assert_eq!(classified.len(), 7);

    let steven = &classified[0];
    assert_eq!(steven.days_inactive, Some(1773));
    assert_eq!(steven.segment, Segment::Graveyard);
    assert_eq!(steven.normalized_phone, "+13032463175");

    let deonte = &classified[1];
    assert_eq!(deonte.days_inactive, Some(665));
    assert_eq!(deonte.segment, Segment::Graveyard);
    assert_eq!(deonte.normalized_phone, "+16787704123");

    let zenon = &classified[2];
    assert_eq!(zenon.days_inactive, Some(98));
    assert_eq!(zenon.segment, Segment::Core);

    let marta = &classified[5];
    assert_eq!(marta.days_inactive, None);
    assert_eq!(marta.segment, Segment::NoActivity);
    // A valid phone does not rescue a never-engaged client.
    assert_eq!(marta.normalized_phone, "+15550000000");

    let unreachable = &classified[6];
    assert_eq!(unreachable.segment, Segment::Graveyard);
    assert_eq!(unreachable.normalized_phone, "INVALID");
}

#[test]
fn launch_selection_is_an_ordered_subsequence() {
    let pipeline = SegmentationPipeline::new(SegmentationConfig::new(
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ));
    let classified = pipeline.run(&sample_batch()).unwrap();
    let candidates = select_launch_candidates(&classified);

    let ids: Vec<&str> = candidates.iter().map(|r| r.client_id.as_str()).collect();
    assert_eq!(ids, ["7", "2020", "10", "11"]);

    for c in &candidates {
        assert_eq!(c.segment, Segment::Graveyard);
        assert!(c.is_dialable());
    }
}
