// ==========================================
// 装箱预测系统 - 出货计划导入测试
// ==========================================
// 覆盖: CSV / Excel 导入、列名匹配、降级转换、格式判定
// ==========================================

mod test_helpers;

use test_helpers::{csv_content, fixture_path};
use vanning_forecast::config::FieldNames;
use vanning_forecast::importer::{ImportError, ShipmentImporter, SourceFormat};

#[test]
fn test_csv_rows_map_one_to_one_in_document_order() {
    let content = csv_content(&[
        ("2025/04/01", "12"),
        ("2025/04/02", "0"),
        ("2025/04/02", "3"),
        ("2025/04/03", "8.5"),
    ]);

    let outcome = ShipmentImporter::default()
        .ingest(content.as_bytes(), SourceFormat::Delimited)
        .unwrap();

    let pairs: Vec<(&str, f64)> = outcome
        .records
        .iter()
        .map(|r| (r.date_label(), r.unit_count))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("2025/04/01", 12.0),
            ("2025/04/02", 0.0),
            ("2025/04/02", 3.0),
            ("2025/04/03", 8.5),
        ]
    );
    let row_numbers: Vec<usize> = outcome.records.iter().map(|r| r.row_number).collect();
    assert_eq!(row_numbers, vec![1, 2, 3, 4]);
}

#[test]
fn test_fields_matched_by_name_regardless_of_column_order() {
    let content = "備考,WIG本数（40HQ換算）,日付\nmemo,6,4/1\n,,\nmemo2,abc,4/2\n";

    let outcome = ShipmentImporter::default()
        .ingest(content.as_bytes(), SourceFormat::Delimited)
        .unwrap();

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[0].date.as_deref(), Some("4/1"));
    assert_eq!(outcome.records[0].unit_count, 6.0);
    // 非数值 → 0,行仍保留
    assert_eq!(outcome.records[1].unit_count, 0.0);
    assert_eq!(outcome.summary.degraded_counts, 1);
}

#[test]
fn test_missing_count_column_coerces_every_row_to_zero() {
    let content = "日付,出荷量\n4/1,10\n4/2,20\n";

    let outcome = ShipmentImporter::default()
        .ingest(content.as_bytes(), SourceFormat::Delimited)
        .unwrap();

    assert_eq!(outcome.records.len(), 2);
    assert!(outcome.records.iter().all(|r| r.unit_count == 0.0));
    assert_eq!(outcome.summary.missing_counts, 2);
}

#[test]
fn test_custom_field_names() {
    let importer = ShipmentImporter::new(FieldNames {
        date_label: "date".to_string(),
        unit_count: "containers".to_string(),
    });
    let content = "date,containers\n2025-05-01,4\n";

    let outcome = importer.ingest_as(content.as_bytes(), "csv").unwrap();

    assert_eq!(outcome.records[0].date.as_deref(), Some("2025-05-01"));
    assert_eq!(outcome.records[0].unit_count, 4.0);
}

#[test]
fn test_unsupported_format_produces_no_records() {
    let result = ShipmentImporter::default().ingest_as(b"%PDF-1.7", "pdf");

    match result {
        Err(ImportError::UnsupportedFormat(format)) => assert_eq!(format, "pdf"),
        other => panic!("期望 UnsupportedFormat, 实际: {:?}", other),
    }
}

#[test]
fn test_corrupt_workbook_is_a_read_failure() {
    let result = ShipmentImporter::default().ingest(b"PK\x03\x04broken", SourceFormat::Workbook);
    assert!(matches!(result, Err(ImportError::WorkbookParse(_))));
}

#[test]
fn test_header_only_dataset_is_empty_not_error() {
    let outcome = ShipmentImporter::default()
        .ingest(csv_content(&[]).as_bytes(), SourceFormat::Delimited)
        .unwrap();

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.summary.total_rows, 0);
}

#[test]
fn test_invalid_utf8_cell_keeps_every_row() {
    // 第 2 行的备注列末尾混入非法字节 0xFF
    let mut bytes = "日付,WIG本数（40HQ換算）,備考\n4/1,10,\n4/2,20,手配"
        .as_bytes()
        .to_vec();
    bytes.push(0xff);
    bytes.extend_from_slice("\n4/3,30,\n".as_bytes());

    let outcome = ShipmentImporter::default()
        .ingest(&bytes, SourceFormat::Delimited)
        .unwrap();

    let counts: Vec<f64> = outcome.records.iter().map(|r| r.unit_count).collect();
    assert_eq!(counts, vec![10.0, 20.0, 30.0]);
    assert_eq!(outcome.summary.degraded_counts, 0);
}

#[test]
fn test_invalid_utf8_in_count_cell_degrades_to_zero() {
    let mut bytes = "日付,WIG本数（40HQ換算）\n4/1,".as_bytes().to_vec();
    bytes.push(0xff);
    bytes.extend_from_slice("\n4/2,5\n".as_bytes());

    let outcome = ShipmentImporter::default()
        .ingest(&bytes, SourceFormat::Delimited)
        .unwrap();

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[0].unit_count, 0.0);
    assert_eq!(outcome.records[1].unit_count, 5.0);
}

// ==========================================
// Excel 导入
// ==========================================
// 样本: 第 1 个工作表「4月」3 行（日期单元格 + 文本日期混合）,
//       第 2 个工作表「メモ」1 行（不应读取）

#[test]
fn test_workbook_reads_only_first_sheet_in_order() {
    let bytes = std::fs::read(fixture_path("wig_schedule_two_sheets.xlsx")).unwrap();

    let outcome = ShipmentImporter::default()
        .ingest(&bytes, SourceFormat::Workbook)
        .unwrap();

    let counts: Vec<f64> = outcome.records.iter().map(|r| r.unit_count).collect();
    assert_eq!(counts, vec![12.0, 0.0, 8.5]);
    assert!(outcome.records.iter().all(|r| r.unit_count != 999.0));
    assert_eq!(outcome.summary.format, SourceFormat::Workbook);
    assert_eq!(outcome.summary.total_rows, 3);
}

#[test]
fn test_workbook_date_cells_render_as_iso_dates() {
    let bytes = std::fs::read(fixture_path("wig_schedule_two_sheets.xlsx")).unwrap();

    let outcome = ShipmentImporter::default().ingest_as(&bytes, "xlsx").unwrap();

    let labels: Vec<&str> = outcome.records.iter().map(|r| r.date_label()).collect();
    assert_eq!(labels, vec!["2025-04-01", "2025/04/02", "2025-04-03"]);
}

#[test]
fn test_row_number_is_sequence_after_blank_rows_are_skipped() {
    let content = csv_content(&[("4/1", "1"), ("", ""), ("4/3", "3")]);

    let outcome = ShipmentImporter::default()
        .ingest(content.as_bytes(), SourceFormat::Delimited)
        .unwrap();

    let row_numbers: Vec<usize> = outcome.records.iter().map(|r| r.row_number).collect();
    assert_eq!(row_numbers, vec![1, 2]);
    assert_eq!(outcome.records[1].date.as_deref(), Some("4/3"));
}
