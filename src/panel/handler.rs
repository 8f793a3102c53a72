//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `PanelExtractor` 只负责流程编排，不直接与进程输出或退出码绑定。
//! 处理链路固定为：
//! 1. 加载精灵图原始字节（含存在性前置检查）
//! 2. 解码并裁剪面板
//! 3. 编码为 PNG 并写入输出路径
//! 4. 回读输出文件并做 base64 编码
//!
//! ## 实现思路
//!
//! - 文件访问通过 `PanelStorage` 注入，测试可完全脱离磁盘。
//! - 任一阶段失败立即返回，不产生部分输出。
//! - 记录 `load/decode/save/encode/total` 阶段耗时，便于性能诊断。

use std::time::Instant;

use super::codec;
use super::{PanelConfig, PanelError, PanelOutput, PanelStorage};

/// 面板提取器。
///
/// 持有文件访问实现与配置，并编排各子模块实现完整流程。
pub struct PanelExtractor<S: PanelStorage> {
    pub(super) storage: S,
    pub(super) config: PanelConfig,
}

impl<S: PanelStorage> PanelExtractor<S> {
    /// # 示例
    /// ```rust
    /// use panel_extractor::panel::{MemoryStorage, PanelConfig, PanelError, PanelExtractor};
    ///
    /// let extractor = PanelExtractor::new(MemoryStorage::new(), PanelConfig::default());
    /// let err = extractor.extract_panel().unwrap_err();
    /// assert!(matches!(err, PanelError::NotFound(_)));
    /// ```
    pub fn new(storage: S, config: PanelConfig) -> Self {
        Self { storage, config }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 处理主入口：裁剪面板、写出中间 PNG、回读并编码为 base64。
    pub fn extract_panel(&self) -> Result<PanelOutput, PanelError> {
        let config = &self.config;
        let total_start = Instant::now();

        let load_start = Instant::now();
        let raw = self.load_source(&config.input_path, config)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let panel = self.decode_and_crop(raw, config)?;
        let decode_elapsed = decode_start.elapsed();

        let save_start = Instant::now();
        let png = Self::encode_png(&panel)?;
        self.storage.write(&config.output_path, &png)?;
        let save_elapsed = save_start.elapsed();

        let encode_start = Instant::now();
        let written = self.storage.read(&config.output_path)?;
        let encoded = codec::encode_base64(&written);
        let encode_elapsed = encode_start.elapsed();

        log::info!(
            "✅ 面板提取完成 - 输出: {} ({} 字节) load={}ms decode={}ms save={}ms encode={}ms total={}ms",
            config.output_path.display(),
            written.len(),
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            save_elapsed.as_millis(),
            encode_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(PanelOutput {
            width: panel.width(),
            height: panel.height(),
            output_path: config.output_path.clone(),
            encoded,
        })
    }
}
