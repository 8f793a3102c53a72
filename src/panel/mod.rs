//! # 面板提取模块（panel）
//!
//! ## 设计思路
//!
//! 该模块将“加载校验 → 解码裁剪 → PNG 写出 → 回读编码”按职责拆分为多个子模块，
//! 避免单文件膨胀与耦合。
//!
//! - `handler`：编排整条处理流水线
//! - `loader`：负责存在性检查与可选的体积限制
//! - `pipeline`：负责 header 探测、越界检查、解码、裁剪与 PNG 编码
//! - `storage`：文件访问抽象（本地文件系统 / 内存）
//! - `codec`：base64 与 Data URL
//! - `config/error/geometry/source`：配置、错误、裁剪几何、中间数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! main.rs（日志初始化 + stdout/退出码映射）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（存在性 + 可选体积限制）
//!    ├─ pipeline.rs（header 探测 + 越界 + 解码 + 裁剪 + PNG）
//!    ├─ storage.rs（写出中间文件并回读）
//!    └─ codec.rs（base64）
//!    ↓
//! 返回 PanelError 给调用方
//! ```

pub mod codec;
mod config;
mod error;
mod geometry;
mod handler;
mod loader;
mod pipeline;
mod source;
mod storage;

pub use config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, PanelConfig};
pub use error::PanelError;
pub use geometry::{CropRect, PANEL_GRID_CELL, PANEL_GRID_COLS, PANEL_GRID_ROWS, PANEL_RECT};
pub use handler::PanelExtractor;
pub use source::PanelOutput;
pub use storage::{LocalStorage, MemoryStorage, PanelStorage};
