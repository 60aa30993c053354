use serde::{Deserialize, Serialize};

/// 一组搜索关键字：中文标签或其对应的字段代码
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    /// 中文标签，例如 "棟別"
    pub label: String,
    /// 字段代码，例如 "field_WD7k1"
    #[serde(default)]
    pub field_code: String,
}

impl KeywordGroup {
    pub fn new(label: impl Into<String>, field_code: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            field_code: field_code.into(),
        }
    }

    /// 文本包含标签或字段代码即视为命中（区分大小写，空关键字不匹配）
    pub fn matches(&self, text: &str) -> bool {
        let hit = |needle: &str| !needle.is_empty() && text.contains(needle);
        hit(&self.label) || hit(&self.field_code)
    }
}

/// 工作表中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRow {
    /// 行号（从 0 开始，相对工作表左上角）
    pub index: usize,
    /// 各列单元格，`None` 表示空单元格
    pub cells: Vec<Option<String>>,
}

impl SheetRow {
    /// 非空单元格及其列号
    pub fn present_cells(&self) -> impl Iterator<Item = (usize, &str)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(col, cell)| cell.as_deref().map(|value| (col, value)))
    }
}

/// 命中行中的非空单元格
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedCell {
    pub column: usize,
    pub value: String,
}

/// 单条命中记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowMatch {
    pub row_index: usize,
    /// 命中的关键字组标签
    pub label: String,
    pub field_code: String,
    pub cells: Vec<MatchedCell>,
}

/// 单个工作簿的搜索结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// 工作簿路径
    pub workbook: String,
    pub sheet: String,
    /// 读取到的总行数
    pub total_rows: usize,
    pub matches: Vec<RowMatch>,
}
