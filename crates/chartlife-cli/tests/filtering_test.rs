mod common;
use common::TestFixture;

fn song_count(fixture: &TestFixture, filters: &[&str]) -> u64 {
    let mut cmd = fixture.command();
    for arg in filters {
        cmd.arg(arg);
    }
    let output = cmd
        .arg("stats")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run stats");

    assert!(output.status.success());
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("Parse failed");
    result["summary"]["song_count"].as_u64().expect("count")
}

#[test]
fn test_explicit_and_clean_partition_the_table() {
    let fixture = TestFixture::with_sample_dataset();

    let all = song_count(&fixture, &[]);
    let explicit = song_count(&fixture, &["--explicit", "explicit"]);
    let clean = song_count(&fixture, &["--explicit", "clean"]);

    assert_eq!(all, 8);
    assert_eq!(explicit + clean, all);
}

#[test]
fn test_filters_compose_with_and() {
    let fixture = TestFixture::with_sample_dataset();

    assert_eq!(song_count(&fixture, &["--album", "single"]), 4);
    assert_eq!(
        song_count(&fixture, &["--explicit", "explicit", "--album", "single"]),
        2
    );
}

#[test]
fn test_composed_filter_aggregates() {
    let fixture = TestFixture::with_sample_dataset();

    // Explicit singles are s001 (50 days) and s003 (21 days).
    let output = fixture
        .command()
        .arg("--explicit")
        .arg("explicit")
        .arg("--album")
        .arg("single")
        .arg("stats")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run stats");

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("Parse failed");
    assert_eq!(result["summary"]["mean_total_days"], 35.5);
    assert_eq!(result["summary"]["mean_days_to_peak"], 3.5);
}

#[test]
fn test_out_of_vocabulary_album_type_survives_only_the_all_filter() {
    let fixture = TestFixture::with_sample_dataset();

    // Unfiltered, the compilation row groups like any other.
    let output = fixture
        .command()
        .arg("stats")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run stats");
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("Parse failed");
    let groups: Vec<&str> = result["comparisons"]["by_album_type"]
        .as_array()
        .expect("groups")
        .iter()
        .map(|g| g["group"].as_str().expect("label"))
        .collect();
    assert_eq!(groups, ["album", "compilation", "single"]);

    // Neither album-type selector matches it.
    let single = song_count(&fixture, &["--album", "single"]);
    let album = song_count(&fixture, &["--album", "album"]);
    assert_eq!(single + album, 7, "the compilation row matches neither");
}

#[test]
fn test_selector_is_derived_from_the_filtered_view() {
    let fixture = TestFixture::with_sample_dataset();

    let output = fixture
        .command()
        .arg("--explicit")
        .arg("explicit")
        .arg("songs")
        .arg("list")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run songs list");

    assert!(output.status.success());
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("Parse failed");
    let ids: Vec<&str> = result["song_ids"]
        .as_array()
        .expect("ids")
        .iter()
        .map(|id| id.as_str().expect("id"))
        .collect();
    assert_eq!(ids, ["s001", "s003", "s005", "s007"]);

    // The excluded id is not queryable either.
    let output = fixture
        .command()
        .arg("--explicit")
        .arg("explicit")
        .arg("songs")
        .arg("show")
        .arg("s002")
        .output()
        .expect("Failed to run songs show");
    assert!(!output.status.success());
}
