//! # 解码与裁剪流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → 面板 → PNG 字节”的过程集中管理，并在关键节点增加资源上限控制。
//! 优先读取 header 尺寸做越界与像素检查，再进行完整解码，
//! 小于面板尺寸的精灵图无需完整解码即可失败。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素上限与裁剪区域快速拒绝
//! 3. 完整解码，并以真实尺寸再次校验
//! 4. 按半开区间裁剪
//! 5. 编码为 PNG 字节

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::io::Cursor;

use super::source::RawImageData;
use super::{CropRect, PanelConfig, PanelError, PanelExtractor, PanelStorage};

impl<S: PanelStorage> PanelExtractor<S> {
    /// 解码原始字节并裁剪出面板。
    pub(super) fn decode_and_crop(
        &self,
        raw: RawImageData,
        config: &PanelConfig,
    ) -> Result<DynamicImage, PanelError> {
        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&raw.bytes)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;
        Self::validate_crop_bounds(&config.crop, header_width, header_height)?;

        let decoded = image::load_from_memory(&raw.bytes)
            .map_err(|e| PanelError::Decode(format!("cannot decode {}: {}", raw.source_hint, e)))?;

        let (width, height) = decoded.dimensions();
        Self::validate_pixel_limits(config, width, height)?;
        Self::validate_crop_bounds(&config.crop, width, height)?;

        let crop = config.crop;
        let panel = decoded.crop_imm(crop.left, crop.top, crop.width(), crop.height());

        log::info!(
            "✅ 面板裁剪成功 - 来源: {} 原始尺寸: {}x{} 面板: {} ({}x{})",
            raw.source_hint,
            width,
            height,
            crop,
            panel.width(),
            panel.height()
        );

        Ok(panel)
    }

    /// 将面板编码为 PNG 字节。
    pub(super) fn encode_png(panel: &DynamicImage) -> Result<Vec<u8>, PanelError> {
        let mut cursor = Cursor::new(Vec::new());
        panel
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| PanelError::Encode(format!("cannot encode panel as PNG: {}", e)))?;

        Ok(cursor.into_inner())
    }

    /// 仅通过内存中的图片头信息读取宽高。
    ///
    /// 用于在完整解码前做像素与越界检查。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), PanelError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| PanelError::InvalidFormat(format!("cannot identify image format: {}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| PanelError::InvalidFormat(format!("cannot read image dimensions: {}", e)))
    }

    fn validate_pixel_limits(
        config: &PanelConfig,
        width: u32,
        height: u32,
    ) -> Result<(), PanelError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| PanelError::ResourceLimit("pixel count overflow".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(PanelError::ResourceLimit(format!(
                "image too large: {} pixels (limit: {} pixels)",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    fn validate_crop_bounds(crop: &CropRect, width: u32, height: u32) -> Result<(), PanelError> {
        if !crop.fits_within(width, height) {
            return Err(PanelError::OutOfBounds(format!(
                "region {} does not fit in {}x{} image",
                crop, width, height
            )));
        }

        Ok(())
    }
}
