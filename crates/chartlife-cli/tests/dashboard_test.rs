mod common;
use common::TestFixture;

#[test]
fn test_dashboard_plain_renders_blocks_in_order() {
    let fixture = TestFixture::with_sample_dataset();

    let output = fixture
        .command()
        .arg("dashboard")
        .output()
        .expect("Failed to run dashboard");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let blocks = [
        "Filters: explicit=all album=all",
        "KEY METRICS",
        "LIFECYCLE TYPE DISTRIBUTION",
        "SONG DETAIL: s001",
        "PERFORMANCE COMPARISONS",
        "TOP PERFORMERS",
    ];
    let mut cursor = 0;
    for block in blocks {
        let found = stdout[cursor..]
            .find(block)
            .unwrap_or_else(|| panic!("block {:?} missing or out of order:\n{}", block, stdout));
        cursor += found + block.len();
    }
}

#[test]
fn test_dashboard_json_aggregates() {
    let fixture = TestFixture::with_sample_dataset();

    let output = fixture
        .command()
        .arg("dashboard")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run dashboard");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Parse failed");

    assert_eq!(result["summary"]["song_count"], 8);
    assert_eq!(result["summary"]["mean_total_days"], 39.88);
    assert_eq!(result["summary"]["mean_days_to_peak"], 11.0);

    // Detail panel defaults to the first sorted id of the view.
    assert_eq!(result["song_detail"]["song_id"], "s001");

    assert_eq!(result["distribution"][0]["lifecycle_type"], "fader");
    assert_eq!(result["distribution"][0]["count"], 3);

    assert_eq!(result["rankings"]["survivors"][0]["song_id"], "s002");
    assert_eq!(result["rankings"]["survivors"][0]["total_days"], 80.0);
    assert_eq!(result["rankings"]["risers"][0]["song_id"], "s003");
    assert_eq!(result["rankings"]["risers"][0]["days_to_peak"], 2.0);
}

#[test]
fn test_dashboard_song_flag_selects_the_detail_panel() {
    let fixture = TestFixture::with_sample_dataset();

    let output = fixture
        .command()
        .arg("dashboard")
        .arg("--song")
        .arg("s004")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run dashboard");

    assert!(output.status.success());
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("Parse failed");

    assert_eq!(result["song_detail"]["song_id"], "s004");
    assert_eq!(result["song_detail"]["total_days"], 42.0);
    assert_eq!(result["song_detail"]["peak_rank"], 7);
    assert_eq!(result["song_detail"]["days_to_peak"], 14.0);
}

#[test]
fn test_dashboard_rejects_song_outside_the_filtered_view() {
    let fixture = TestFixture::with_sample_dataset();

    // s002 exists in the table but is clean; it is not in the explicit view.
    let output = fixture
        .command()
        .arg("--explicit")
        .arg("explicit")
        .arg("dashboard")
        .arg("--song")
        .arg("s002")
        .output()
        .expect("Failed to run dashboard");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not in the current filtered view"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_dashboard_json_ignores_terminal_styling() {
    let fixture = TestFixture::with_sample_dataset();

    let output = fixture
        .command()
        .arg("dashboard")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run dashboard");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains('\u{1b}'), "JSON output must carry no ANSI escapes");
}
