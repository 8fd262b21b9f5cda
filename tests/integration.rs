use flate2::write::GzEncoder;
use flate2::Compression;
use ndjson_filter::{filter_records, gunzip, FilterError, PredicateSet};
use std::io::Write;

const SAMPLE: &str = concat!(
    r#"{"id":1,"time":"2020-01-01T00:00:00Z","words":["alpha","beta"]}"#,
    "\n",
    r#"{"id":2,"time":"2021-06-01T00:00:00Z","words":["gamma"]}"#,
    "\n",
    r#"{"id":0,"time":"2022-03-15T12:00:00Z","words":["beta","beta"]}"#,
    "\n",
);

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Run the full pipeline minus the network: gunzip then filter.
fn run_pipeline(compressed: &[u8], predicates: &PredicateSet) -> String {
    let ndjson = gunzip(compressed).unwrap();
    let mut output = Vec::new();
    filter_records(&ndjson, predicates, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_no_predicates_reproduces_every_record() {
    let output = run_pipeline(&gzip(SAMPLE.as_bytes()), &PredicateSet::default());

    assert_eq!(output.lines().count(), 3);
    assert_eq!(output, SAMPLE);
}

#[test]
fn test_time_window_selects_middle_record() {
    let predicates = PredicateSet {
        from_time: Some("2021-01-01T00:00:00Z".parse().unwrap()),
        to_time: Some("2021-12-31T00:00:00Z".parse().unwrap()),
        ..PredicateSet::default()
    };

    let output = run_pipeline(&gzip(SAMPLE.as_bytes()), &predicates);

    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("\"id\":2"));
}

#[test]
fn test_word_membership_selects_two_records_in_order() {
    let predicates = PredicateSet {
        word: Some("beta".to_string()),
        ..PredicateSet::default()
    };

    let output = run_pipeline(&gzip(SAMPLE.as_bytes()), &predicates);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"id\":1"));
    assert!(lines[1].contains("\"id\":0"));
}

#[test]
fn test_id_zero_filter_selects_the_id_zero_record() {
    let predicates = PredicateSet {
        id: Some(0),
        ..PredicateSet::default()
    };

    let output = run_pipeline(&gzip(SAMPLE.as_bytes()), &predicates);

    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("\"id\":0"));
}

#[test]
fn test_combined_conditions_are_anded() {
    let predicates = PredicateSet {
        word: Some("beta".to_string()),
        from_time: Some("2021-01-01T00:00:00Z".parse().unwrap()),
        ..PredicateSet::default()
    };

    let output = run_pipeline(&gzip(SAMPLE.as_bytes()), &predicates);

    // Only the id:0 record has "beta" and a time past 2021.
    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("\"id\":0"));
}

#[test]
fn test_empty_object_filters_to_nothing() {
    let output = run_pipeline(&gzip(b""), &PredicateSet::default());

    assert!(output.is_empty());
}

#[test]
fn test_records_packed_without_newlines() {
    let packed = SAMPLE.replace('\n', "");

    let output = run_pipeline(&gzip(packed.as_bytes()), &PredicateSet::default());

    // Output is canonical one-line-per-record regardless of input layout.
    assert_eq!(output, SAMPLE);
}

#[test]
fn test_corrupt_record_aborts_the_run() {
    let corrupt = format!("{SAMPLE}{{\"id\":9,");
    let ndjson = gunzip(&gzip(corrupt.as_bytes())).unwrap();
    let mut output = Vec::new();

    let err = filter_records(&ndjson, &PredicateSet::default(), &mut output).unwrap_err();

    assert!(matches!(err, FilterError::Decode(_)));
    // Everything before the corruption was already emitted.
    assert_eq!(String::from_utf8(output).unwrap(), SAMPLE);
}

#[test]
fn test_same_run_twice_is_byte_identical() {
    let compressed = gzip(SAMPLE.as_bytes());
    let predicates = PredicateSet {
        word: Some("beta".to_string()),
        ..PredicateSet::default()
    };

    assert_eq!(
        run_pipeline(&compressed, &predicates),
        run_pipeline(&compressed, &predicates)
    );
}
