use appicon_tools::split::{self, SplitMode, SplitPlan};
use std::fs;
use std::path::{Path, PathBuf};

const LINES: usize = 1200;

fn write_source(dir: &Path) -> PathBuf {
    let path = dir.join("SettingsView.swift");
    let text: String = (1..=LINES).map(|i| format!("// line {}\n", i)).collect();
    fs::write(&path, text).unwrap();
    path
}

fn plan_for(source: PathBuf) -> SplitPlan {
    SplitPlan {
        source,
        ..SplitPlan::default()
    }
}

fn line_count(path: &Path) -> usize {
    fs::read_to_string(path).unwrap().split_inclusive('\n').count()
}

#[test]
fn splits_a_1200_line_file_into_six_views() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path());
    let plan = plan_for(source.clone());

    let report = split::run(&plan, SplitMode::Write).unwrap();
    assert_eq!(report.source_lines, LINES);

    let views = dir.path().join("Settings").join("Views");
    let mut names: Vec<String> = fs::read_dir(&views)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "CustomProviderSheets.swift",
            "GeneralSettingsView.swift",
            "HistorySettingsView.swift",
            "LLMSettingsView.swift",
            "ModelSettingsView.swift",
            "TranscriptionSettingsView.swift",
        ]
    );

    // Lines 55..=200 (1-indexed) behind the SwiftUI header.
    let general = fs::read_to_string(views.join("GeneralSettingsView.swift")).unwrap();
    let expected_body: String = (55..=200).map(|i| format!("// line {}\n", i)).collect();
    assert_eq!(general, format!("import SwiftUI\n\n{}", expected_body));

    let llm = fs::read_to_string(views.join("LLMSettingsView.swift")).unwrap();
    assert!(llm.starts_with("import SwiftUI\nimport os\n\n// line 452\n"));
    assert!(llm.ends_with("// line 830\n"));

    let remaining = fs::read_to_string(&source).unwrap();
    assert_eq!(line_count(&source), 54 + (LINES - 1081) + 1);
    assert_eq!(report.remaining_lines, 54 + (LINES - 1081) + 1);
    assert!(remaining.contains("// line 54\n\n// line 1082\n"));
}

#[test]
fn dry_run_leaves_the_tree_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path());
    let before = fs::read_to_string(&source).unwrap();

    let report = split::run(&plan_for(source.clone()), SplitMode::DryRun).unwrap();

    assert_eq!(report.views.len(), 6);
    assert_eq!(report.views[0].body_lines, 146);
    assert!(!dir.path().join("Settings").exists());
    assert_eq!(fs::read_to_string(&source).unwrap(), before);
}

#[test]
fn second_run_produces_truncated_views() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path());
    let plan = plan_for(source.clone());
    let views = dir.path().join("Settings").join("Views");

    split::run(&plan, SplitMode::Write).unwrap();
    let first_model = line_count(&views.join("ModelSettingsView.swift"));

    let report = split::run(&plan, SplitMode::Write).unwrap();

    // The source now only has 174 lines, so most ranges fall off the end.
    assert_eq!(report.source_lines, 174);
    let model = line_count(&views.join("ModelSettingsView.swift"));
    assert!(model < first_model / 10, "model view only {} lines", model);
    assert_eq!(report.views[0].body_lines, 174 - 54);
    assert!(report.views[1..].iter().all(|v| v.body_lines == 0));
    // Head plus the blank separator; the tail range is gone.
    assert_eq!(line_count(&source), 55);
}

#[test]
fn missing_source_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let plan = plan_for(dir.path().join("missing.swift"));
    let err = split::run(&plan, SplitMode::Write).unwrap_err();
    assert!(matches!(err, split::SplitError::Read { .. }));
    assert!(!dir.path().join("Settings").exists());
}

#[test]
fn plan_can_be_loaded_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("Small.swift");
    fs::write(&source, "a\nb\nc\nd\n").unwrap();
    let plan_path = dir.path().join("plan.json");
    let json = serde_json::json!({
        "source": source,
        "views_dir": "Out",
        "header_import": "Foundation",
        "views": [{"file_name": "Mid.swift", "start": 1, "end": 3, "extra_imports": ["Combine"]}],
        "keep_head": 1,
        "keep_tail_from": 3
    });
    fs::write(&plan_path, json.to_string()).unwrap();

    let plan = SplitPlan::from_json_file(&plan_path).unwrap();
    split::run(&plan, SplitMode::Write).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("Out").join("Mid.swift")).unwrap(),
        "import Foundation\nimport Combine\n\nb\nc\n"
    );
    assert_eq!(fs::read_to_string(&source).unwrap(), "a\n\nd\n");
}

#[test]
fn mixed_line_endings_count_as_lines_and_are_written_as_lf() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("Mixed.swift");
    fs::write(&source, "a\r\nb\rc\r\nd\n").unwrap();
    let json = serde_json::json!({
        "source": source,
        "views_dir": "Out",
        "header_import": "SwiftUI",
        "views": [{"file_name": "Mid.swift", "start": 1, "end": 3}],
        "keep_head": 1,
        "keep_tail_from": 3
    });
    let plan: SplitPlan = serde_json::from_value(json).unwrap();

    let report = split::run(&plan, SplitMode::Write).unwrap();

    assert_eq!(report.source_lines, 4);
    assert_eq!(
        fs::read_to_string(dir.path().join("Out").join("Mid.swift")).unwrap(),
        "import SwiftUI\n\nb\nc\n"
    );
    assert_eq!(fs::read_to_string(&source).unwrap(), "a\n\nd\n");
}
