//! End-to-end tests for `colortool random`.

mod fixtures;
use fixtures::*;

#[test]
fn test_random_single_human_readable() {
    let output = run(&["random"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Hex:      #"));
    assert!(out.contains("Level:    "));
}

#[test]
fn test_random_count_json() {
    let output = run(&["random", "--count", "5", "--mode", "text", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    let colors = json.as_array().expect("array output");
    assert_eq!(colors.len(), 5);

    for color in colors {
        let hex = color["hex"].as_str().unwrap();
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert_eq!(color["contrast"]["mode"], "text");

        let ratio = color["contrast"]["ratio"].as_f64().unwrap();
        assert!((1.0..=21.0).contains(&ratio));
    }
}

#[test]
fn test_random_zero_count_rejected() {
    let output = run(&["random", "--count", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--count"));
}
