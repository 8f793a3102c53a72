//! # Base64 编解码模块
//!
//! ## 设计思路
//!
//! 输出固定使用标准字母表并带填充，保证结果可被任意 base64 实现还原。
//! 解码侧同时接受纯 base64 与 Data URL，方便把打印结果直接回灌校验。

use base64::{Engine as _, engine::general_purpose};

use super::PanelError;

const DATA_URL_BASE64_MARKER: &str = ";base64,";

/// 标准 base64 编码（带填充）。
pub fn encode_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// 解码纯 base64 或 `data:image/...;base64,` 形式的文本。
pub fn decode_base64(data: &str) -> Result<Vec<u8>, PanelError> {
    let normalized = data.trim();

    let payload = if normalized.starts_with("data:") {
        let marker = normalized
            .find(DATA_URL_BASE64_MARKER)
            .ok_or_else(|| PanelError::InvalidFormat("data URL is missing the base64 marker".to_string()))?;
        &normalized[marker + DATA_URL_BASE64_MARKER.len()..]
    } else {
        normalized
    };

    general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| PanelError::Decode(format!("invalid base64: {}", e)))
}

/// 拼接 Data URL。
pub fn to_data_url(mime: &str, encoded: &str) -> String {
    format!("data:{}{}{}", mime, DATA_URL_BASE64_MARKER, encoded)
}
