use anyhow::{Context, Result};
use clap::Parser;
use fieldscan_lib::config::{default_config_path, load_config, parse_group, save_config};
use fieldscan_lib::excel_parser::list_sheets;
use fieldscan_lib::exporter::export_matches;
use fieldscan_lib::report::{render_all, render_json};
use fieldscan_lib::search_paths;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fieldscan")]
#[command(version, about = "在工作表中逐行搜尋欄位標籤或欄位代碼")]
struct Cli {
    /// 工作簿檔案或包含工作簿的目錄（預設取自設定檔）
    path: Option<PathBuf>,

    /// 工作表名稱
    #[arg(short, long)]
    sheet: Option<String>,

    /// 關鍵字組 "標籤=欄位代碼"，可重複指定，會取代設定檔中的全部關鍵字組
    #[arg(short, long = "group", value_name = "LABEL=CODE")]
    groups: Vec<String>,

    /// 設定檔路徑
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 以 JSON 輸出結果
    #[arg(long)]
    json: bool,

    /// 另外匯出命中結果到 .xlsx
    #[arg(short, long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// 只列出工作表名稱
    #[arg(long)]
    list_sheets: bool,

    /// 把目前生效的設定寫入設定檔
    #[arg(long)]
    save_config: bool,

    /// 日誌詳細程度（-v, -vv）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "fieldscan=warn,fieldscan_lib=warn",
        1 => "fieldscan=info,fieldscan_lib=info",
        _ => "fieldscan=debug,fieldscan_lib=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 保存配置时允许指定的配置文件尚不存在
    let explicit = cli
        .config
        .as_deref()
        .filter(|path| !cli.save_config || path.exists());
    let mut config = load_config(explicit).context("加载配置失败")?;

    if let Some(path) = &cli.path {
        config.workbook_path = path.to_string_lossy().to_string();
    }
    if let Some(sheet) = cli.sheet {
        config.sheet_name = sheet;
    }
    if !cli.groups.is_empty() {
        config.groups = cli
            .groups
            .iter()
            .map(|spec| parse_group(spec))
            .collect::<fieldscan_lib::Result<Vec<_>>>()?;
    }

    if cli.save_config {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        save_config(&config, &path).with_context(|| format!("保存配置失败: {:?}", path))?;
        eprintln!("配置已保存到 {:?}", path);
    }

    let path = PathBuf::from(&config.workbook_path);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list_sheets {
        for name in list_sheets(&path)? {
            writeln!(out, "{}", name)?;
        }
        return Ok(());
    }

    let reports = search_paths(&path, &config)?;

    if cli.json {
        render_json(&mut out, &reports)?;
    } else {
        render_all(&mut out, &reports, &config.groups)?;
    }

    if let Some(export_path) = &cli.export {
        export_matches(&reports, export_path)
            .with_context(|| format!("导出失败: {:?}", export_path))?;
    }

    Ok(())
}
