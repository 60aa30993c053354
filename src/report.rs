use crate::error::Result;
use crate::models::{KeywordGroup, RowMatch, ScanReport};
use std::io::Write;

/// 标题行，例如 "=== 搜尋棟別、樓層、戶別欄位 ==="
pub fn banner(groups: &[KeywordGroup]) -> String {
    let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
    format!("=== 搜尋{}欄位 ===", labels.join("、"))
}

fn write_match<W: Write>(out: &mut W, m: &RowMatch) -> std::io::Result<()> {
    writeln!(out, "找到{}欄位 (行 {}):", m.label, m.row_index)?;
    for cell in &m.cells {
        writeln!(out, "  欄位{}: {}", cell.column, cell.value)?;
    }
    writeln!(out)
}

/// 输出单个工作簿的命中记录
pub fn render_text<W: Write>(out: &mut W, report: &ScanReport) -> Result<()> {
    for m in &report.matches {
        write_match(out, m)?;
    }
    Ok(())
}

/// 输出全部结果；多个工作簿时每段前加上路径
pub fn render_all<W: Write>(
    out: &mut W,
    reports: &[ScanReport],
    groups: &[KeywordGroup],
) -> Result<()> {
    writeln!(out, "{}", banner(groups))?;
    writeln!(out)?;

    let multi = reports.len() > 1;
    for report in reports {
        if multi {
            writeln!(out, "## {}", report.workbook)?;
            writeln!(out)?;
        }
        render_text(out, report)?;
    }
    Ok(())
}

pub fn render_json<W: Write>(out: &mut W, reports: &[ScanReport]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    Ok(())
}
