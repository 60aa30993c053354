use crate::config::AppConfig;
use crate::error::{Result, ScanError};
use crate::excel_parser::load_sheet;
use crate::models::{KeywordGroup, MatchedCell, RowMatch, ScanReport, SheetRow};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xls", "xlsx", "xlsm", "xlsb", "ods"];

/// 把一行的非空单元格拼成一段文本
pub fn row_text(row: &SheetRow) -> String {
    row.present_cells()
        .map(|(_, value)| value)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 逐行检查各关键字组，一行命中多组时每组各记一次
pub fn search_rows(rows: &[SheetRow], groups: &[KeywordGroup]) -> Vec<RowMatch> {
    let mut matches = Vec::new();

    for row in rows {
        let text = row_text(row);
        if text.is_empty() {
            continue;
        }

        for group in groups.iter().filter(|g| g.matches(&text)) {
            debug!("行 {} 命中 {}", row.index, group.label);
            matches.push(RowMatch {
                row_index: row.index,
                label: group.label.clone(),
                field_code: group.field_code.clone(),
                cells: row
                    .present_cells()
                    .map(|(column, value)| MatchedCell {
                        column,
                        value: value.to_string(),
                    })
                    .collect(),
            });
        }
    }

    matches
}

/// 搜索单个工作簿
pub fn search_workbook(file_path: &Path, config: &AppConfig) -> Result<ScanReport> {
    let rows = load_sheet(file_path, &config.sheet_name)?;
    let matches = search_rows(&rows, &config.groups);

    info!(
        "{:?}: 共 {} 行, 命中 {} 条",
        file_path,
        rows.len(),
        matches.len()
    );

    Ok(ScanReport {
        workbook: file_path.to_string_lossy().to_string(),
        sheet: config.sheet_name.clone(),
        total_rows: rows.len(),
        matches,
    })
}

/// 扫描目录中的所有工作簿文件，无法访问的目录项记录警告后跳过
pub fn scan_workbook_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("跳过无法访问的路径: {}", e);
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension() else {
            continue;
        };
        let ext_str = ext.to_string_lossy().to_lowercase();
        if !WORKBOOK_EXTENSIONS.contains(&ext_str.as_str()) {
            continue;
        }
        // 跳过临时文件
        let is_lock_file = path
            .file_name()
            .map(|name| name.to_string_lossy().starts_with("~$"))
            .unwrap_or(false);
        if !is_lock_file {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files
}

/// 搜索文件或目录；目录中出错的工作簿跳过并记录警告
pub fn search_paths(path: &Path, config: &AppConfig) -> Result<Vec<ScanReport>> {
    if !path.is_dir() {
        return Ok(vec![search_workbook(path, config)?]);
    }

    let files = scan_workbook_files(path);
    if files.is_empty() {
        return Err(ScanError::NoWorkbooks(path.to_path_buf()));
    }
    info!("找到 {} 个工作簿", files.len());

    let mut reports = Vec::new();
    for file in &files {
        match search_workbook(file, config) {
            Ok(report) => reports.push(report),
            Err(e) => warn!("跳过 {:?}: {}", file, e),
        }
    }

    if reports.is_empty() {
        return Err(ScanError::NoReadableWorkbooks {
            path: path.to_path_buf(),
            total: files.len(),
        });
    }

    Ok(reports)
}
