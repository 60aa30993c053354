//! Fixture workbooks shared by the integration tests.

#![allow(dead_code)]

use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

pub const SHEET: &str = "案場(SPC)(object_8W9cb__c)";

/// A field-definition sheet laid out like an API export: no header row,
/// label / API name / type per row, with some blank rows and cells.
pub fn write_field_sheet(dir: &Path, file_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    let mut workbook = Workbook::new();

    let other = workbook.add_worksheet();
    other.set_name("說明").unwrap();
    other.write_string(0, 0, "棟別 不應被搜尋到").unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET).unwrap();
    sheet.write_string(0, 0, "欄位名稱").unwrap();
    sheet.write_string(0, 1, "API名稱").unwrap();
    sheet.write_string(0, 2, "類型").unwrap();

    sheet.write_string(1, 0, "案場名稱").unwrap();
    sheet.write_string(1, 1, "name").unwrap();
    sheet.write_string(1, 2, "文本").unwrap();

    // 第 2 列留空
    sheet.write_string(3, 0, "棟別").unwrap();
    sheet.write_string(3, 1, "field_WD7k1").unwrap();
    sheet.write_string(3, 2, "單選").unwrap();

    // 只有代碼，沒有中文標籤
    sheet.write_string(4, 1, "field_Q6Svh").unwrap();
    sheet.write_number(4, 3, 12).unwrap();

    sheet.write_string(5, 0, "戶別").unwrap();
    sheet.write_string(5, 2, "文本").unwrap();

    sheet.write_string(6, 0, "棟別/樓層備註").unwrap();

    workbook.save(&path).unwrap();
    path
}

/// A sheet whose used range starts at C3.
pub fn write_offset_sheet(dir: &Path, file_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET).unwrap();
    sheet.write_string(2, 2, "戶別").unwrap();
    sheet.write_string(2, 4, "field_XuJP2").unwrap();
    workbook.save(&path).unwrap();
    path
}

/// A workbook without the searched sheet.
pub fn write_unrelated_workbook(dir: &Path, file_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "棟別").unwrap();
    workbook.save(&path).unwrap();
    path
}

/// Date, elapsed-time and out-of-range date cells in one row.
pub fn write_date_sheet(dir: &Path, file_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET).unwrap();

    let datetime = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
    let elapsed = Format::new().set_num_format("[h]:mm:ss");
    let date = Format::new().set_num_format("yyyy-mm-dd");

    sheet.write_string(0, 0, "棟別").unwrap();
    sheet.write_number_with_format(0, 1, 45296.5, &datetime).unwrap();
    sheet.write_number_with_format(0, 2, 0.5, &elapsed).unwrap();
    sheet.write_number_with_format(0, 3, 1.0e15, &date).unwrap();
    sheet.write_boolean(0, 4, true).unwrap();
    sheet.write_string(0, 5, "N/A").unwrap();
    sheet.write_string(0, 6, "field_WD7k1").unwrap();

    workbook.save(&path).unwrap();
    path
}
