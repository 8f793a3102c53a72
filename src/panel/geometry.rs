//! # 裁剪几何模块
//!
//! ## 设计思路
//!
//! 精灵图按 16px 网格排布，面板由若干整格组成。
//! `CropRect` 使用半开区间 `[left, right) × [top, bottom)` 表示裁剪区域，
//! 与常见图像库的裁剪语义一致：右边界与下边界本身不包含在内。
//!
//! ## 实现思路
//!
//! - `from_corners`：由两个角点构造，拒绝空矩形与倒置矩形。
//! - `from_grid`：由网格坐标与跨度构造，乘法全部做溢出检查。
//! - `PANEL_RECT`：默认面板，5 列 × 6 行 = 80 × 96 像素。

use super::PanelError;

/// 精灵图网格单元边长（像素）。
pub const PANEL_GRID_CELL: u32 = 16;

/// 默认面板占用的网格列数。
pub const PANEL_GRID_COLS: u32 = 5;

/// 默认面板占用的网格行数。
pub const PANEL_GRID_ROWS: u32 = 6;

/// 默认面板区域：(0,0) 到 (80,96)。
pub const PANEL_RECT: CropRect = CropRect {
    left: 0,
    top: 0,
    right: PANEL_GRID_CELL * PANEL_GRID_COLS,
    bottom: PANEL_GRID_CELL * PANEL_GRID_ROWS,
};

/// 半开区间裁剪矩形（像素坐标）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    /// 由左上角与右下角（不含）构造。
    ///
    /// # 示例
    /// ```rust
    /// use panel_extractor::panel::{CropRect, PANEL_RECT};
    ///
    /// let rect = CropRect::from_corners(0, 0, 80, 96)?;
    /// assert_eq!(rect, PANEL_RECT);
    /// # Ok::<(), panel_extractor::panel::PanelError>(())
    /// ```
    pub fn from_corners(left: u32, top: u32, right: u32, bottom: u32) -> Result<Self, PanelError> {
        if right <= left || bottom <= top {
            return Err(PanelError::InvalidFormat(format!(
                "empty crop rectangle ({}, {}) - ({}, {})",
                left, top, right, bottom
            )));
        }

        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// 由网格坐标构造：从第 `(col, row)` 格开始，跨 `cols × rows` 格。
    ///
    /// # 示例
    /// ```rust
    /// use panel_extractor::panel::{CropRect, PANEL_RECT};
    ///
    /// let rect = CropRect::from_grid(16, 0, 0, 5, 6)?;
    /// assert_eq!(rect, PANEL_RECT);
    /// # Ok::<(), panel_extractor::panel::PanelError>(())
    /// ```
    pub fn from_grid(
        cell_size: u32,
        col: u32,
        row: u32,
        cols: u32,
        rows: u32,
    ) -> Result<Self, PanelError> {
        if cell_size == 0 || cols == 0 || rows == 0 {
            return Err(PanelError::InvalidFormat(format!(
                "grid span must be non-empty (cell={}, cols={}, rows={})",
                cell_size, cols, rows
            )));
        }

        let overflow = || PanelError::InvalidFormat("grid rectangle overflows u32".to_string());

        let left = col.checked_mul(cell_size).ok_or_else(overflow)?;
        let top = row.checked_mul(cell_size).ok_or_else(overflow)?;
        let right = col
            .checked_add(cols)
            .and_then(|end| end.checked_mul(cell_size))
            .ok_or_else(overflow)?;
        let bottom = row
            .checked_add(rows)
            .and_then(|end| end.checked_mul(cell_size))
            .ok_or_else(overflow)?;

        Self::from_corners(left, top, right, bottom)
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// 判断矩形是否完全落在 `width × height` 的图像内。
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right <= width && self.bottom <= height
    }
}

impl std::fmt::Display for CropRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) - ({}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
