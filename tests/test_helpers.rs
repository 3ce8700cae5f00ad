// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的出货计划文件、记录序列等
// ==========================================

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use tempfile::{Builder, NamedTempFile};
use vanning_forecast::ShipmentRecord;

/// 标准表头（日付, WIG本数）
pub const CSV_HEADER: &str = "日付,WIG本数（40HQ換算）";

/// 生成 CSV 内容（带标准表头）
pub fn csv_content(rows: &[(&str, &str)]) -> String {
    let mut content = String::from(CSV_HEADER);
    content.push('\n');
    for (date, count) in rows {
        content.push_str(&format!("{},{}\n", date, count));
    }
    content
}

/// 创建临时 CSV 文件（需要保持存活）
pub fn write_temp_csv(rows: &[(&str, &str)]) -> NamedTempFile {
    write_temp_file(".csv", csv_content(rows).as_bytes())
}

/// 创建指定扩展名的临时文件
pub fn write_temp_file(suffix: &str, bytes: &[u8]) -> NamedTempFile {
    let mut temp_file = Builder::new()
        .prefix("wig_schedule_")
        .suffix(suffix)
        .tempfile()
        .expect("创建临时文件失败");
    temp_file.write_all(bytes).expect("写入临时文件失败");
    temp_file.flush().expect("刷新临时文件失败");
    temp_file
}

/// 按本数列表构造记录（日期 4/1, 4/2, ...）
pub fn records(counts: &[f64]) -> Vec<ShipmentRecord> {
    counts
        .iter()
        .enumerate()
        .map(|(i, c)| ShipmentRecord::new(Some(format!("2025/04/{:02}", i + 1)), *c, i + 1))
        .collect()
}

/// tests/fixtures 下的固定样本文件路径
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
