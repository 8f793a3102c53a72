//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“流水线中间结果”与“对外输出”解耦：
//! - `RawImageData` 表示已加载但未解码的字节
//! - `PanelOutput` 表示最终对外可见的 base64 结果

use std::path::PathBuf;

use super::codec;

/// 加载阶段输出：原始字节与来源路径。
pub(crate) struct RawImageData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源路径（用于日志与诊断）。
    pub(crate) source_hint: String,
}

/// 面板提取结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelOutput {
    /// 面板宽度（像素）。
    pub width: u32,
    /// 面板高度（像素）。
    pub height: u32,
    /// 中间 PNG 文件路径。
    pub output_path: PathBuf,
    /// 中间 PNG 文件字节的标准 base64（带填充）。
    pub encoded: String,
}

impl PanelOutput {
    /// 输出为 `data:image/png;base64,...` 形式，便于直接嵌入网页。
    pub fn to_data_url(&self) -> String {
        codec::to_data_url("image/png", &self.encoded)
    }
}
