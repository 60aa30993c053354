use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("无法打开工作簿 {path:?}: {source}")]
    OpenWorkbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("工作表 '{sheet}' 不存在，可用工作表: {}", .available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    #[error("无法读取工作表 '{sheet}': {source}")]
    ReadSheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("目录中没有找到工作簿: {0:?}")]
    NoWorkbooks(PathBuf),

    #[error("目录 {path:?} 中的 {total} 个工作簿都无法搜索")]
    NoReadableWorkbooks { path: PathBuf, total: usize },

    #[error("无效的关键字组: {0}")]
    InvalidGroup(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析失败: {0}")]
    Config(#[from] serde_json::Error),

    #[error("导出失败: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
}
