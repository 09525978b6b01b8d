use std::fs;

use enterprise_data_enhancer::application::use_cases::report_generator::ReportGenerator;
use enterprise_data_enhancer::infrastructure::storage::report_path_for;
use enterprise_data_enhancer::{AppError, DataEnhancer, EnhancerConfig};

const INPUT: &str = "\
company,industry_type,revenue,employee_count,net_profit,total_assets
甲科技,软件开发,10000000,,,50000000
乙制造,机械制造,20000000,300,,
丙银行,商业银行,,,,
丁物流,物流,5000000,NaN,250000,8000000
戊农业,农业种植,4000000,,,
";

fn enhancer() -> DataEnhancer {
    DataEnhancer::new(EnhancerConfig::default()).unwrap()
}

#[test]
fn enhances_file_and_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("companies.csv");
    let output = dir.path().join("out").join("companies_enhanced.csv");
    fs::write(&input, INPUT).unwrap();

    let log = enhancer().enhance_csv_file(&input, &output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "company,industry_type,revenue,employee_count,net_profit,total_assets");
    // technology: 10M * 12 employees, 18% margin
    assert_eq!(lines[1], "甲科技,软件开发,10000000,120,1800000,50000000");
    // manufacturing: employee count kept, 12% margin
    assert_eq!(lines[2], "乙制造,机械制造,20000000,300,2400000,");
    // no revenue, nothing filled
    assert_eq!(lines[3], "丙银行,商业银行,,,,");
    // transportation: 5M * 20
    assert_eq!(lines[4], "丁物流,物流,5000000,100,250000,8000000");
    // unrecognized label falls back to retail/trade: 4M * 25, 8% margin
    assert_eq!(lines[5], "戊农业,农业种植,4000000,100,320000,");

    assert_eq!(log.total_records, 5);
    assert_eq!(log.enhanced_fields, vec!["employee_count", "net_profit"]);
    assert_eq!(log.original_missing_for("employee_count"), 4);
    assert_eq!(log.final_missing_for("employee_count"), 1);
    assert_eq!(log.original_missing_for("net_profit"), 4);
    assert_eq!(log.final_missing_for("net_profit"), 1);
    assert_eq!(log.original_missing_for("total_assets"), 3);
    assert_eq!(log.final_missing_for("total_assets"), 3);

    let report_path = report_path_for(&output);
    ReportGenerator::write(&log, &report_path).unwrap();
    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("Total records: 5"));
    assert!(report.contains("- employee_count: 4 missing (80.0%)"));
    assert!(report.contains("- employee_count: 1 missing (20.0%)"));
    assert!(report.contains("- Fields enhanced: 2"));
}

#[test]
fn second_run_over_output_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("companies.csv");
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    fs::write(&input, INPUT).unwrap();

    let e = enhancer();
    e.enhance_csv_file(&input, &first).unwrap();
    let log = e.enhance_csv_file(&first, &second).unwrap();

    assert_eq!(fs::read_to_string(&first).unwrap(), fs::read_to_string(&second).unwrap());
    assert!(log.enhanced_fields.is_empty());
    assert_eq!(log.improvement_summary.fields_enhanced, 0);
    assert_eq!(log.original_missing, log.final_missing);
}

#[test]
fn semicolon_input_keeps_its_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("companies.csv");
    let output = dir.path().join("enhanced.csv");
    fs::write(
        &input,
        "industry_type;revenue;employee_count;net_profit\n证券;2000000;;\n证券;1000000;8;1\n",
    )
    .unwrap();

    enhancer().enhance_csv_file(&input, &output).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "industry_type;revenue;employee_count;net_profit\n证券;2000000;16;500000\n证券;1000000;8;1\n"
    );
}

#[test]
fn rejects_non_csv_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("companies.xlsx");
    let output = dir.path().join("enhanced.csv");
    fs::write(&input, INPUT).unwrap();

    let result = enhancer().enhance_csv_file(&input, &output);
    assert!(matches!(result, Err(AppError::UnsupportedFormat(_))));
    assert!(!output.exists());
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = enhancer().enhance_csv_file(
        &dir.path().join("absent.csv"),
        &dir.path().join("enhanced.csv"),
    );
    assert!(matches!(result, Err(AppError::IoError(_))));
}

#[test]
fn row_wider_than_header_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("companies.csv");
    let output = dir.path().join("enhanced.csv");
    fs::write(
        &input,
        "industry_type,revenue,employee_count,net_profit\n软件,1000000,5,1,EXTRA_CELL\n",
    )
    .unwrap();

    let result = enhancer().enhance_csv_file(&input, &output);
    assert!(matches!(result, Err(AppError::ParseError(_))));
    assert!(!output.exists());
}
