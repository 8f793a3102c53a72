//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 只做读取前的必要检查：存在性（前置条件，独立的 `NotFound` 错误）与可选的体积限制。
//! 内容是否为可解码图片交给解码阶段判断，`image` 能识别的格式都可以作为输入。

use std::path::Path;

use super::source::RawImageData;
use super::{PanelConfig, PanelError, PanelExtractor, PanelStorage};

impl<S: PanelStorage> PanelExtractor<S> {
    /// 从输入路径加载精灵图原始字节。
    pub(super) fn load_source(
        &self,
        path: &Path,
        config: &PanelConfig,
    ) -> Result<RawImageData, PanelError> {
        log::info!("📁 开始读取精灵图 - 路径: {}", path.display());

        let len = self
            .storage
            .file_len(path)?
            .ok_or_else(|| PanelError::NotFound(path.display().to_string()))?;

        if len > config.max_file_size {
            return Err(PanelError::ResourceLimit(format!(
                "file too large: {:.2} MB (limit: {:.2} MB)",
                len as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = self.storage.read(path)?;

        log::debug!("📦 精灵图读取完成 - {} 字节", bytes.len());

        Ok(RawImageData {
            bytes,
            source_hint: path.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::MemoryStorage;

    fn extractor_with(path: &str, bytes: Vec<u8>) -> PanelExtractor<MemoryStorage> {
        let storage = MemoryStorage::new();
        storage.insert(path, bytes).expect("insert failed");
        PanelExtractor::new(storage, PanelConfig::default())
    }

    #[test]
    fn missing_file_is_not_found_with_path() {
        let extractor = PanelExtractor::new(MemoryStorage::new(), PanelConfig::default());

        let result = extractor.load_source(Path::new("temp_sprite.png"), &PanelConfig::default());

        match result {
            Err(PanelError::NotFound(path)) => assert_eq!(path, "temp_sprite.png"),
            other => panic!("expected NotFound, got {:?}", other.err()),
        }
    }

    #[test]
    fn oversized_file_is_rejected_when_limit_is_set() {
        let extractor = extractor_with("big.png", vec![0; 64]);
        let config = PanelConfig::default().with_max_file_size(32);

        let result = extractor.load_source(Path::new("big.png"), &config);

        assert!(matches!(result, Err(PanelError::ResourceLimit(_))));
    }

    #[test]
    fn default_config_has_no_size_limit() {
        let extractor = extractor_with("big.png", vec![0; 64 * 1024]);

        let raw = extractor
            .load_source(Path::new("big.png"), &PanelConfig::default())
            .expect("load failed");

        assert_eq!(raw.bytes.len(), 64 * 1024);
    }

    #[test]
    fn bytes_are_passed_through_unchanged() {
        let payload = b"P6\n1 1\n255\n\x01\x02\x03".to_vec();
        let extractor = extractor_with("sheet.png", payload.clone());

        let raw = extractor
            .load_source(Path::new("sheet.png"), &PanelConfig::default())
            .expect("load failed");

        assert_eq!(raw.bytes, payload);
        assert_eq!(raw.source_hint, "sheet.png");
    }
}
