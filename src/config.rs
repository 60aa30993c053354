use crate::error::{Result, ScanError};
use crate::models::KeywordGroup;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const CONFIG_FILE: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 工作簿路径
    pub workbook_path: String,
    /// 工作表名称
    pub sheet_name: String,
    /// 关键字组
    pub groups: Vec<KeywordGroup>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workbook_path: "全部對象及欄位API .xlsx".to_string(),
            sheet_name: "案場(SPC)(object_8W9cb__c)".to_string(),
            groups: vec![
                KeywordGroup::new("棟別", "field_WD7k1"),
                KeywordGroup::new("樓層", "field_Q6Svh"),
                KeywordGroup::new("戶別", "field_XuJP2"),
            ],
        }
    }
}

/// 获取配置文件路径
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fieldscan")
        .join(CONFIG_FILE)
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 加载配置：指定路径时必须可用，默认路径损坏时回退到默认值
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        info!("读取配置 {:?}", path);
        return read_config(path);
    }

    let path = default_config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    match read_config(&path) {
        Ok(config) => {
            info!("读取配置 {:?}", path);
            Ok(config)
        }
        Err(e) => {
            warn!("配置文件 {:?} 无法使用，改用默认配置: {}", path, e);
            Ok(AppConfig::default())
        }
    }
}

/// 保存配置
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    // 创建配置目录
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;

    Ok(())
}

/// 解析 "标签=字段代码"，没有 "=" 时只有标签
pub fn parse_group(spec: &str) -> Result<KeywordGroup> {
    let (label, field_code) = match spec.split_once('=') {
        Some((label, code)) => (label.trim(), code.trim()),
        None => (spec.trim(), ""),
    };

    if label.is_empty() {
        return Err(ScanError::InvalidGroup(spec.to_string()));
    }

    Ok(KeywordGroup::new(label, field_code))
}
