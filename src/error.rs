//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义进程级的 `AppError`，二进制入口统一返回 `Result<(), AppError>`，
//! 再由 `main` 映射为 `Error: ...` 输出行与退出码 1。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `PanelError` 提供透明的 `From` 转换，无需手动 map。

use crate::panel::PanelError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 面板提取流水线错误（加载 / 解码 / 裁剪 / 写出）
    #[error("{0}")]
    Panel(#[from] PanelError),

    /// 标准输出写入失败
    #[error("cannot write to stdout: {0}")]
    Io(#[from] std::io::Error),
}
