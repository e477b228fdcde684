// ==========================================
// 记录分类器集成测试
// ==========================================
// 测试目标: 行分区 / 排序稳定性 / 活动标签 / 时长转换 / 原子失败
// ==========================================

mod test_helpers;

use dialer_report::api::DashboardApi;
use dialer_report::config::ConfigManager;
use dialer_report::domain::DialResult;
use dialer_report::importer::{ImportError, RecordClassifier};
use test_helpers::{mixed_export, ExportBuilder, STANDARD_FILE_NAME};

fn classifier() -> RecordClassifier<ConfigManager> {
    dialer_report::logging::init_test();
    RecordClassifier::new(ConfigManager::new())
}

// ==========================================
// 场景测试
// ==========================================

#[test]
fn test_three_outcomes_metrics() {
    let bytes = ExportBuilder::new()
        .outcome("1", "2024-05-01 09:00:00", "alice", "Sale", "C-Completed")
        .outcome("2", "2024-05-01 09:01:00", "bob", "No Sale", "F-Failed")
        .outcome("3", "2024-05-01 09:02:00", "carol", "Callback", "R-Abandon")
        .bytes();

    let result = classifier()
        .classify_upload(&bytes, STANDARD_FILE_NAME)
        .expect("分类应成功");

    assert_eq!(result.outcomes.len(), 3);

    let metrics = DashboardApi::new().metrics(&result.outcomes);
    assert_eq!(metrics.total_calls, 3);
    assert_eq!(metrics.complete_calls, 1);
    assert_eq!(metrics.failed_calls, 1);
    assert_eq!(metrics.abandoned_calls, 1);
    assert_eq!(metrics.no_answer, 0);
}

#[test]
fn test_campaign_label_from_file_name() {
    let result = classifier()
        .classify_upload(&ExportBuilder::new().bytes(), "PSE-CampaignX-Completed-2024.csv")
        .unwrap();
    assert_eq!(result.campaign.as_str(), "CampaignX");
}

#[test]
fn test_duration_with_whitespace_is_parsed() {
    let bytes = ExportBuilder::new()
        .cdr("cdr-1", "2024-05-01 09:00:02", " 12 ", " 3", "9 ")
        .bytes();

    let result = classifier().classify_upload(&bytes, STANDARD_FILE_NAME).unwrap();

    assert_eq!(result.cdrs.len(), 1);
    assert_eq!(result.cdrs[0].call_duration, 12);
    assert_eq!(result.cdrs[0].ring_duration, 3);
    assert_eq!(result.cdrs[0].talk_duration, 9);
}

#[test]
fn test_non_numeric_duration_fails_whole_classification() {
    let bytes = ExportBuilder::new()
        .outcome("1", "2024-05-01 09:00:00", "alice", "Sale", "C-Completed")
        .cdr("cdr-1", "2024-05-01 09:00:02", "12", "3", "9")
        .cdr("cdr-2", "2024-05-01 09:00:09", "abc", "3", "9")
        .bytes();

    let result = classifier().classify_upload(&bytes, STANDARD_FILE_NAME);

    match result {
        Err(ImportError::DataConversionError { row, field, value }) => {
            assert_eq!(row, 3);
            assert_eq!(field, "Call Duration");
            assert_eq!(value, "abc");
        }
        other => panic!("期望 DataConversionError，实际: {:?}", other),
    }
}

#[test]
fn test_delimiter_only_row_is_call_detail_and_fails_conversion() {
    let bytes = ExportBuilder::new()
        .outcome("1", "2024-05-01 09:00:00", "alice", "Sale", "C-Completed")
        .raw_line(",,,,,,,,,")
        .bytes();

    let result = classifier().classify_upload(&bytes, STANDARD_FILE_NAME);

    match result {
        Err(ImportError::DataConversionError { row, field, value }) => {
            assert_eq!(row, 2);
            assert_eq!(field, "Call Duration");
            assert_eq!(value, "");
        }
        other => panic!("期望 DataConversionError，实际: {:?}", other),
    }
}

#[test]
fn test_stray_header_row_excluded() {
    let bytes = ExportBuilder::new().stray_header().bytes();

    let result = classifier().classify_upload(&bytes, STANDARD_FILE_NAME).unwrap();

    assert!(result.outcomes.is_empty());
    assert!(result.cdrs.is_empty());
    assert_eq!(result.stats.stray_header_rows, 1);
}

#[test]
fn test_header_only_file() {
    let result = classifier()
        .classify_upload(&ExportBuilder::new().bytes(), STANDARD_FILE_NAME)
        .unwrap();

    assert!(result.outcomes.is_empty());
    assert!(result.cdrs.is_empty());
}

// ==========================================
// 性质测试
// ==========================================

#[test]
fn test_partition_is_complete() {
    let result = classifier()
        .classify_upload(&mixed_export().bytes(), STANDARD_FILE_NAME)
        .unwrap();

    let stats = result.stats;
    assert_eq!(stats.total_rows, 7);
    assert_eq!(stats.outcome_rows, 3);
    assert_eq!(stats.cdr_rows, 2);
    assert_eq!(stats.stray_header_rows, 1);
    assert_eq!(stats.discarded_rows, 1);
    assert!(stats.is_balanced());

    assert_eq!(result.outcomes.len(), stats.outcome_rows);
    assert_eq!(result.cdrs.len(), stats.cdr_rows);
    assert!(result.outcomes.iter().all(|r| r.number_type == "mobile_number"));
}

#[test]
fn test_sorted_by_time_with_stable_ties() {
    let bytes = ExportBuilder::new()
        .outcome("20", "2024-05-01 09:05:00", "bob", "", "F-Failed")
        .outcome("10", "2024-05-01 09:00:00", "alice", "", "C-Completed")
        .outcome("21", "2024-05-01 09:05:00", "carol", "", "R-No Answer")
        .outcome("22", "2024-05-01 09:05:00", "dave", "", "R-Abandon")
        .cdr("b", "2024-05-01 09:05:00", "1", "1", "0")
        .cdr("a", "2024-05-01 09:00:00", "1", "1", "0")
        .cdr("c", "2024-05-01 09:05:00", "1", "1", "0")
        .bytes();

    let result = classifier().classify_upload(&bytes, STANDARD_FILE_NAME).unwrap();

    let outcome_ids: Vec<&str> = result.outcomes.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(outcome_ids, ["10", "20", "21", "22"]);

    let cdr_ids: Vec<&str> = result.cdrs.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(cdr_ids, ["a", "b", "c"]);
}

#[test]
fn test_campaign_tag_identical_on_every_record() {
    let result = classifier()
        .classify_upload(&mixed_export().bytes(), "PSE-Winter-Completed-2024-12.csv")
        .unwrap();

    assert!(result.outcomes.iter().all(|r| r.campaign.as_str() == "Winter"));
    assert!(result.cdrs.iter().all(|r| r.campaign.as_str() == "Winter"));
}

#[test]
fn test_classification_is_deterministic() {
    let bytes = mixed_export().bytes();
    let classifier = classifier();

    let first = classifier.classify_upload(&bytes, STANDARD_FILE_NAME).unwrap();
    let second = classifier.classify_upload(&bytes, STANDARD_FILE_NAME).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.outcomes).unwrap(),
        serde_json::to_string(&second.outcomes).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&first.cdrs).unwrap(),
        serde_json::to_string(&second.cdrs).unwrap()
    );
}

// ==========================================
// 错误路径
// ==========================================

#[test]
fn test_missing_required_column_is_schema_mismatch() {
    let bytes = b"ID,Time,Number Type.1,Agent,Dial Result\n1,2024-05-01,mobile_number,alice,F-Failed\n";

    let result = classifier().classify_upload(bytes, STANDARD_FILE_NAME);

    match result {
        Err(ImportError::SchemaMismatchError(msg)) => assert!(msg.contains("Call Disposition")),
        other => panic!("期望 SchemaMismatchError，实际: {:?}", other),
    }
}

#[test]
fn test_cdr_rows_need_full_layout() {
    let bytes = b"ID,Time,Number Type.1,Agent,Call Disposition,Dial Result\n,cdr-1,2024-05-01,12,3,9\n";

    let result = classifier().classify_upload(bytes, STANDARD_FILE_NAME);

    assert!(matches!(result, Err(ImportError::SchemaMismatchError(_))));
}

#[test]
fn test_malformed_csv_is_input_format_error() {
    let bytes = ExportBuilder::new()
        .raw_line("1,2,3,4,5,6,7,8,9,10,11,12")
        .bytes();

    let result = classifier().classify_upload(&bytes, STANDARD_FILE_NAME);

    assert!(matches!(result, Err(ImportError::InputFormatError(_))));
}

#[test]
fn test_unknown_dial_results_are_kept() {
    let bytes = ExportBuilder::new()
        .outcome("1", "2024-05-01 09:00:00", "alice", "", "B-Busy")
        .outcome("2", "2024-05-01 09:01:00", "alice", "", "R-No Answer")
        .bytes();

    let result = classifier().classify_upload(&bytes, STANDARD_FILE_NAME).unwrap();

    assert_eq!(result.outcomes[0].dial_result, DialResult::Other("B-Busy".to_string()));
    assert_eq!(result.outcomes[1].dial_result, DialResult::NoAnswer);
}

#[test]
fn test_fallback_policy_uses_raw_file_name() {
    let config = ConfigManager::from_json_str(r#"{"campaign_policy": "fallback"}"#).unwrap();
    let classifier = RecordClassifier::new(config);

    let result = classifier
        .classify_upload(&ExportBuilder::new().bytes(), "PSE-Adhoc.csv")
        .unwrap();

    assert_eq!(result.campaign.as_str(), "Adhoc.csv");
}
