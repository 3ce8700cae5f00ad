// ==========================================
// 装箱预测系统 - 文件解析器实现
// ==========================================
// 阶段 0: 内存中的字节 → 原始行记录（列名 → 值）
// 支持: CSV (.csv) / Excel (.xlsx,仅第一个工作表)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::source_format::SourceFormat;
use calamine::{Data, DataType, Range, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::io::Cursor;

/// 原始行记录（表头列名 → 单元格文本）
pub type RawRow = HashMap<String, String>;

// ==========================================
// FileParser Trait
// ==========================================
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析字节内容为原始行记录
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 行记录列表（已跳过完全空白的行）
    /// - Err: 源数据无法读取
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Vec<RawRow>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(bytes);

        // 按字节读取,单元格逐个有损解码: 非法 UTF-8 只影响所在单元格
        let headers: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|h| decode_cell(h).trim().to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.byte_records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), decode_cell(value).trim().to_string());
                }
            }

            // 跳过完全空白的行
            if is_blank(&row_map) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Vec<RawRow>> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

        // 仅读取第一个 sheet;无工作表视为无数据
        let sheet_name = match workbook.sheet_names().first() {
            Some(name) => name.clone(),
            None => return Ok(Vec::new()),
        };

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::WorkbookParse(e.to_string()))?;

        Ok(rows_from_range(&range))
    }
}

/// 工作表区域 → 原始行记录（首行为表头）
pub fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
    let mut rows = range.rows();
    let header_row = match rows.next() {
        Some(row) => row,
        None => return Vec::new(),
    };

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_to_text(cell).trim().to_string())
        .collect();

    let mut records = Vec::new();
    for data_row in rows {
        let mut row_map = HashMap::new();

        for (col_idx, cell) in data_row.iter().enumerate() {
            if let Some(header) = headers.get(col_idx) {
                if header.is_empty() {
                    continue;
                }
                row_map.insert(header.clone(), cell_to_text(cell).trim().to_string());
            }
        }

        // 跳过完全空白的行
        if is_blank(&row_map) {
            continue;
        }

        records.push(row_map);
    }

    records
}

/// 单元格文本化: 日期单元格输出 YYYY-MM-DD,其余取显示文本
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::DateTime(_) => cell
            .as_date()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| cell.to_string()),
        Data::DateTimeIso(iso) => iso.clone(),
        _ => cell.to_string(),
    }
}

fn decode_cell(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn is_blank(row: &RawRow) -> bool {
    row.values().all(|v| v.is_empty())
}

// ==========================================
// 按格式选择解析器
// ==========================================
pub fn parser_for(format: SourceFormat) -> Box<dyn FileParser> {
    match format {
        SourceFormat::Delimited => Box::new(CsvParser),
        SourceFormat::Workbook => Box::new(ExcelParser),
    }
}
