//! # 精灵图面板提取工具 — 应用入口
//!
//! 本文件仅负责日志初始化与“结果 → stdout / 退出码”的映射。
//! 业务逻辑位于 `panel` 模块，详见 `lib.rs` 架构文档。
//!
//! 日志写入 stderr，stdout 只会出现一行：base64 结果或 `Error: ...`。

use std::io::Write;

use panel_extractor::error::AppError;
use panel_extractor::panel::{LocalStorage, PanelConfig, PanelExtractor};

fn run() -> Result<(), AppError> {
    let extractor = PanelExtractor::new(LocalStorage, PanelConfig::default());
    let output = extractor.extract_panel()?;

    write_encoded_line(&mut std::io::stdout().lock(), &output.encoded)?;

    Ok(())
}

/// 将 base64 结果连同换行符整行单次写出。
fn write_encoded_line<W: Write>(out: &mut W, encoded: &str) -> std::io::Result<()> {
    let line = format!("{}\n", encoded);
    out.write_all(line.as_bytes())?;
    out.flush()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("面板提取失败: {err}");
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "Error: {err}");
        let _ = stdout.flush();
        std::process::exit(1);
    }
}
