//! # 配置模块
//!
//! ## 设计思路
//!
//! 将原本写死的路径与裁剪区域集中到 `PanelConfig`，保证默认行为与固定常量一致，
//! 同时允许测试与库调用方替换输入、输出与裁剪矩形。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产默认值（`temp_sprite.png` → `temp_panel.png`，80×96 面板）。
//! - `with_*` 方法按值链式替换单个字段。
//! - 体积与像素上限默认不设限（`u64::MAX`），库调用方可通过 `with_max_*` 按需收紧。

use std::path::PathBuf;

use super::geometry::{CropRect, PANEL_RECT};

/// 默认输入精灵图路径（相对当前工作目录）。
pub const DEFAULT_INPUT_PATH: &str = "temp_sprite.png";

/// 默认输出面板路径（相对当前工作目录）。
pub const DEFAULT_OUTPUT_PATH: &str = "temp_panel.png";

/// 面板提取配置。
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// 输入精灵图路径。
    pub input_path: PathBuf,
    /// 裁剪结果写入路径，处理结束后保留在磁盘上。
    pub output_path: PathBuf,
    /// 裁剪区域（半开区间）。
    pub crop: CropRect,
    /// 读取原始字节时允许的最大文件体积（字节），默认不限制。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`），默认不限制。
    pub max_decoded_pixels: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            crop: PANEL_RECT,
            max_file_size: u64::MAX,
            max_decoded_pixels: u64::MAX,
        }
    }
}

impl PanelConfig {
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_crop(mut self, crop: CropRect) -> Self {
        self.crop = crop;
        self
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    pub fn with_max_decoded_pixels(mut self, pixels: u64) -> Self {
        self.max_decoded_pixels = pixels;
        self
    }
}
