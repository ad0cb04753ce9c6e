//! End-to-end tests for the `drawerkit drawer` command.

use std::fs;
use std::process::Command;

/// Path to the drawerkit binary
fn drawerkit_bin() -> &'static str {
    env!("CARGO_BIN_EXE_drawerkit")
}

#[test]
fn test_drawer_single_piece() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("output");

    let output = Command::new(drawerkit_bin())
        .args(["drawer", "330", "340", "-o", out_dir.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Drawer dimensions: 330.0 x 340.0 mm"));
    assert!(stdout.contains("Printer: Bambu Lab X1C (256mm × 256mm)"));
    assert!(stdout.contains("Baseplate dimensions: 7x8 units (294x336 mm)"));
    assert!(stdout.contains("Baseplate fits on the printer in one piece"));
    assert!(stdout.contains("drawer_330x340_spacer_half_set.stl"));
    assert!(stdout.contains("drawer_330x340_full_assembly.step"));
    assert!(stdout.contains("drawer_330x340_baseplate_7x8.stl"));

    // Two spacer artifacts plus one plate
    let manifest = fs::read_to_string(out_dir.join("manifest.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 3);
}

#[test]
fn test_drawer_split_layout() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("output");

    let output = Command::new(drawerkit_bin())
        .args(["drawer", "550", "470", "-o", out_dir.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Baseplate will be split into 6 pieces"));

    let manifest = fs::read_to_string(out_dir.join("manifest.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 8);
}

#[test]
fn test_drawer_inch_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("output");

    let output = Command::new(drawerkit_bin())
        .args([
            "drawer",
            "11.5in",
            "20.5in",
            "-p",
            "prusa-mini",
            "-o",
            out_dir.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Drawer dimensions: 292.1 x 520.7 mm"));
    assert!(stdout.contains("Baseplate dimensions: 6x12 units"));
}

#[test]
fn test_drawer_custom_tolerance_in_filenames() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("output");

    let output = Command::new(drawerkit_bin())
        .args([
            "drawer",
            "330",
            "340",
            "-t",
            "0.5",
            "-o",
            out_dir.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("drawer_330x340_tol0.5_spacer_half_set.stl"));
    assert!(stdout.contains("drawer_330x340_tol0.5_full_assembly.step"));
    // Plate names never carry the tolerance
    assert!(stdout.contains("drawer_330x340_baseplate_7x8.stl"));
}

#[test]
fn test_drawer_rejects_small_dimensions() {
    let output = Command::new(drawerkit_bin())
        .args(["drawer", "30", "340"])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be at least 42mm"));
}

#[test]
fn test_drawer_rejects_garbage_dimension() {
    let output = Command::new(drawerkit_bin())
        .args(["drawer", "wide", "340"])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid dimension format"));
}

#[test]
fn test_drawer_unknown_printer_lists_presets() {
    let output = Command::new(drawerkit_bin())
        .args(["drawer", "330", "340", "-p", "voron"])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown printer preset 'voron'"));
    assert!(stderr.contains("bambu-x1c"));
    assert!(stderr.contains("prusa-mk4"));
}

#[test]
fn test_drawer_rejects_out_of_range_tolerance() {
    let output = Command::new(drawerkit_bin())
        .args(["drawer", "330", "340", "-t", "6.0"])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tolerance must be no more than 5mm"));
}
