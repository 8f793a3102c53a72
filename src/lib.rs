//! # 精灵图面板提取工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs  env_logger 初始化 · stdout 单行输出 · 退出码     │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↕ Result<(), AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ────── AppError (进程级错误)                    │
//! │  │                                                       │
//! │  └─ panel ────── PanelExtractor                          │
//! │      ├─ loader      存在性 · 可选体积限制                 │
//! │      ├─ pipeline    header 探测 · 解码 · 裁剪 · PNG       │
//! │      ├─ storage     LocalStorage / MemoryStorage         │
//! │      └─ codec       base64 · Data URL                    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 进程级错误 `AppError`，由 `main` 映射为 `Error:` 行与退出码 |
//! | [`panel`] | 从 16px 网格精灵图中裁剪 80×96 面板并输出 base64 |

pub mod error;
pub mod panel;
