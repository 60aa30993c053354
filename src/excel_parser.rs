use crate::error::{Result, ScanError};
use crate::models::SheetRow;
use calamine::{open_workbook_auto, CellErrorType, Data, Reader, Sheets};
use chrono::{NaiveDateTime, TimeDelta};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

fn open(file_path: &Path) -> Result<Sheets<BufReader<File>>> {
    open_workbook_auto(file_path).map_err(|source| ScanError::OpenWorkbook {
        path: file_path.to_path_buf(),
        source,
    })
}

/// 列出工作簿中的所有工作表
pub fn list_sheets(file_path: &Path) -> Result<Vec<String>> {
    Ok(open(file_path)?.sheet_names())
}

/// 读取整个工作表（无表头），行列号均为工作表上的绝对位置
pub fn load_sheet(file_path: &Path, sheet_name: &str) -> Result<Vec<SheetRow>> {
    let mut workbook = open(file_path)?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet_name) {
        return Err(ScanError::SheetNotFound {
            sheet: sheet_name.to_string(),
            available,
        });
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|source| ScanError::ReadSheet {
            sheet: sheet_name.to_string(),
            source,
        })?;

    // 已用区域不一定从 A1 开始
    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    debug!(
        "工作表 '{}' 区域起点 ({}, {}), 大小 {:?}",
        sheet_name,
        row_offset,
        col_offset,
        range.get_size()
    );

    let rows = range
        .rows()
        .enumerate()
        .map(|(idx, row)| {
            let mut cells = vec![None; col_offset];
            cells.extend(row.iter().map(cell_text));
            SheetRow {
                index: row_offset + idx,
                cells,
            }
        })
        .collect();

    Ok(rows)
}

/// pandas 默认视为缺失值的文本，只按整格内容精确比较
const NA_STRINGS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// 单元格转文本，空单元格返回 None
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if NA_STRINGS.contains(&s.as_str()) => None,
        Data::Error(CellErrorType::NA) => None,
        Data::Bool(true) => Some("True".to_string()),
        Data::Bool(false) => Some("False".to_string()),
        Data::DateTime(dt) if dt.is_duration() => Some(
            dt.as_duration()
                .map(format_duration)
                .unwrap_or_else(|| dt.to_string()),
        ),
        Data::DateTime(dt) => Some(
            dt.as_datetime()
                .map(|d| d.format(DATETIME_FORMAT).to_string())
                .unwrap_or_else(|| dt.to_string()),
        ),
        Data::DateTimeIso(s) => Some(
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|d| d.format(DATETIME_FORMAT).to_string())
                .unwrap_or_else(|_| s.clone()),
        ),
        other => Some(other.to_string()),
    }
}

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 时长格式化为 "H:MM:SS"，小时数不按天折算
pub fn format_duration(duration: TimeDelta) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        total % 3600 / 60,
        total % 60
    )
}
