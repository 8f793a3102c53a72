//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载面板提取链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! 错误文本会原样出现在标准输出的 `Error: ...` 行中，因此使用英文。

/// 面板提取统一错误类型。
///
/// 该类型会在二进制入口被上转为 `AppError`，最终打印到 stdout。
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// 输入文件不存在（前置条件检查）。
    #[error("{0} not found")]
    NotFound(String),

    #[error("file error: {0}")]
    FileSystem(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("crop out of bounds: {0}")]
    OutOfBounds(String),

    #[error("resource limit: {0}")]
    ResourceLimit(String),
}
