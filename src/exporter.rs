use crate::error::Result;
use crate::models::ScanReport;
use rust_xlsxwriter::*;
use std::path::Path;
use tracing::info;

const HEADERS: [&str; 7] = ["工作簿", "工作表", "行", "欄位標籤", "欄位代碼", "欄", "內容"];

/// 把命中记录导出为 Excel，每个非空单元格一行
pub fn export_matches(reports: &[ScanReport], output_file: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("搜尋結果")?;

    // 设置列宽
    worksheet.set_column_width(0, 30)?;
    worksheet.set_column_width(1, 24)?;
    worksheet.set_column_width(2, 8)?;
    worksheet.set_column_width(3, 12)?;
    worksheet.set_column_width(4, 16)?;
    worksheet.set_column_width(5, 8)?;
    worksheet.set_column_width(6, 40)?;

    let header_format = Format::new()
        .set_font_size(11)
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_background_color(Color::RGB(0xD3D3D3))
        .set_border(FormatBorder::Thin);

    let cell_format = Format::new()
        .set_font_size(10)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    let wrap_format = Format::new()
        .set_font_size(10)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    let mut row: u32 = 1;
    for report in reports {
        for m in &report.matches {
            for cell in &m.cells {
                worksheet.write_with_format(row, 0, &report.workbook, &cell_format)?;
                worksheet.write_with_format(row, 1, &report.sheet, &cell_format)?;
                worksheet.write_with_format(row, 2, m.row_index as f64, &cell_format)?;
                worksheet.write_with_format(row, 3, &m.label, &cell_format)?;
                worksheet.write_with_format(row, 4, &m.field_code, &cell_format)?;
                worksheet.write_with_format(row, 5, cell.column as f64, &cell_format)?;
                worksheet.write_with_format(row, 6, &cell.value, &wrap_format)?;
                row += 1;
            }
        }
    }

    worksheet.set_freeze_panes(1, 0)?;

    // 保存文件
    workbook.save(output_file)?;
    info!("已导出 {} 行到 {:?}", row - 1, output_file);

    Ok(())
}
