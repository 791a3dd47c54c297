//! End-to-end tests for `colortool convert`.

mod fixtures;
use fixtures::*;

#[test]
fn test_convert_hex_human_readable() {
    let output = run(&["convert", "#FF0000"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Input:    #FF0000 (hex)"));
    assert!(out.contains("Hex:      #FF0000"));
    assert!(out.contains("RGB:      255,0,0"));
    assert!(out.contains("HSL:      0,100%,50%"));
    assert!(out.contains("Contrast: 3.37:1 vs #E8ECF1 (background)"));
    assert!(out.contains("Level:    AA-large"));
}

#[test]
fn test_convert_shorthand_hex_json() {
    let output = run(&["convert", "abc", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["input"], "abc");
    assert_eq!(json["source"], "hex");
    assert_eq!(json["hex"], "#AABBCC");
    assert_eq!(json["rgb"]["r"], 170);
    assert_eq!(json["rgb"]["g"], 187);
    assert_eq!(json["rgb"]["b"], 204);
    assert_eq!(json["rgb_text"], "170,187,204");
    assert_eq!(json["hsl_text"], "210,25%,73%");
    assert_eq!(json["contrast"]["ratio_text"], "1.66:1");
    assert_eq!(json["contrast"]["level"], "Fail");
}

#[test]
fn test_convert_rgb_out_of_range_is_clamped_on_output() {
    let output = run(&["convert", "300,0,0", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["source"], "rgb");
    assert_eq!(json["hex"], "#FF0000");
    assert_eq!(json["rgb_text"], "300,0,0");
}

#[test]
fn test_convert_hsl_input() {
    let output = run(&["convert", "120,100%,25%", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["source"], "hsl");
    assert_eq!(json["hex"], "#008000");
    assert_eq!(json["rgb_text"], "0,128,0");
}

#[test]
fn test_convert_text_mode() {
    let output = run(&["convert", "#FFFFFF", "--mode", "text", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["contrast"]["mode"], "text");
    assert_eq!(json["contrast"]["reference"], "#121318");
    assert_eq!(json["contrast"]["ratio_text"], "18.55:1");
    assert_eq!(json["contrast"]["level"], "AAA");
}

#[test]
fn test_convert_forced_format_mismatch_fails() {
    let output = run(&["convert", "#FF0000", "--from", "rgb"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid rgb color"));
}

#[test]
fn test_convert_unrecognized_input() {
    let output = run(&["convert", "xyz"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unrecognized color 'xyz'"));
}

#[test]
fn test_convert_invalid_mode() {
    let output = run(&["convert", "#000", "--mode", "diagonal"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid contrast mode"));
}
