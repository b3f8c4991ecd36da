//! # 解码与缩放流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → RGBA”的过程集中管理，并在关键节点增加资源上限控制。
//! 优先做尺寸检查，再进行完整解码，降低恶意输入触发高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素上限快速拒绝
//! 3. 完整解码
//! 4. 等比缩放适配尺寸上限（只缩不放）
//! 5. 转换 RGBA，并校验字节长度一致性

use fast_image_resize as fr;
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba};
use std::io::Cursor;

use super::source::{DecodedImage, RawImageData};
use super::{Bounds, ImageConfig, ImageError, ImageLoader, ResizeFilter};

impl ImageLoader {
    /// 将原始字节解码并按尺寸上限缩放为可渲染的 RGBA 数据。
    pub(super) fn decode_and_fit(
        &self,
        raw: RawImageData,
        bounds: Bounds,
        config: &ImageConfig,
    ) -> Result<DecodedImage, ImageError> {
        image::guess_format(&raw.bytes)
            .map_err(|e| ImageError::Decode(format!("不支持的图片格式：{}", e)))?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&raw.bytes)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;
        Self::validate_decoded_memory_limits(config, header_width, header_height)?;

        let decoded = image::load_from_memory(&raw.bytes)
            .map_err(|e| ImageError::Decode(format!("图片解码失败：{}", e)))?;

        let (original_width, original_height) = decoded.dimensions();
        Self::validate_pixel_limits(config, original_width, original_height)?;
        Self::validate_decoded_memory_limits(config, original_width, original_height)?;

        let fitted = Self::fit_within_bounds(decoded, bounds, config);
        let (width, height) = fitted.dimensions();

        let rgba = fitted.to_rgba8();
        let bytes = rgba.into_raw();

        let expected_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| ImageError::ResourceLimit("图片尺寸导致内存溢出风险".to_string()))?;

        if bytes.len() != expected_len {
            return Err(ImageError::Decode("解码后像素数据长度异常".to_string()));
        }

        log::info!(
            "✅ 图片解码成功 - 来源: {} 原始尺寸: {}x{} 输出尺寸: {}x{}",
            raw.source_hint,
            original_width,
            original_height,
            width,
            height
        );

        Ok(DecodedImage::new(
            width,
            height,
            original_width,
            original_height,
            bytes,
        ))
    }

    /// 仅通过内存中的图片头信息读取宽高。
    ///
    /// 用于在完整解码前做像素限制检查。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), ImageError> {
        let cursor = Cursor::new(bytes);
        let reader = image::ImageReader::new(cursor)
            .with_guessed_format()
            .map_err(|e| ImageError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| ImageError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(
        config: &ImageConfig,
        width: u32,
        height: u32,
    ) -> Result<(), ImageError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| ImageError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(ImageError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    fn validate_decoded_memory_limits(
        config: &ImageConfig,
        width: u32,
        height: u32,
    ) -> Result<(), ImageError> {
        let estimated = (width as u64)
            .checked_mul(height as u64)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| ImageError::ResourceLimit("图片解码内存估算溢出".to_string()))?;

        if estimated > config.max_decoded_bytes {
            return Err(ImageError::ResourceLimit(format!(
                "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
                estimated as f64 / 1024.0 / 1024.0,
                config.max_decoded_bytes as f64 / 1024.0 / 1024.0
            )));
        }

        Ok(())
    }

    /// 计算适配尺寸上限的目标尺寸。
    ///
    /// `scale = min(maxW/w, maxH/h)`；比例 >= 1 时返回 `None`（从不放大），
    /// 否则等比缩小，四舍五入且每边至少为 1。
    fn fit_target_dimensions(width: u32, height: u32, bounds: Bounds) -> Option<(u32, u32)> {
        let scale = (bounds.max_width() as f64 / width as f64)
            .min(bounds.max_height() as f64 / height as f64);

        if scale >= 1.0 {
            return None;
        }

        let target_width = ((width as f64 * scale).round() as u32).max(1);
        let target_height = ((height as f64 * scale).round() as u32).max(1);

        Some((target_width, target_height))
    }

    /// 等比缩放以适配尺寸上限；比例 >= 1 时保持原图。
    fn fit_within_bounds(image: DynamicImage, bounds: Bounds, config: &ImageConfig) -> DynamicImage {
        let (width, height) = image.dimensions();

        let Some((target_width, target_height)) = Self::fit_target_dimensions(width, height, bounds)
        else {
            return image;
        };

        log::info!(
            "🧩 等比缩放适配：{}x{} -> {}x{}（filter={:?}）",
            width,
            height,
            target_width,
            target_height,
            config.resize_filter
        );

        match Self::resize_with_fast_image_resize(
            &image,
            target_width,
            target_height,
            config.resize_filter,
        ) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::resize_exact：{}",
                    err
                );
                image.resize_exact(
                    target_width,
                    target_height,
                    config.resize_filter.to_image_filter(),
                )
            }
        }
    }

    fn resize_with_fast_image_resize(
        image: &DynamicImage,
        target_width: u32,
        target_height: u32,
        filter: ResizeFilter,
    ) -> Result<DynamicImage, ImageError> {
        let src = image.to_rgba8();
        let (src_width, src_height) = src.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            src.into_raw(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| ImageError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image =
            fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| ImageError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        let rgba = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(
            target_width,
            target_height,
            dst_image.into_vec(),
        )
        .ok_or_else(|| ImageError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))?;

        Ok(DynamicImage::ImageRgba8(rgba))
    }

    fn to_fast_filter(filter: ResizeFilter) -> fr::FilterType {
        match filter {
            ResizeFilter::Nearest => fr::FilterType::Box,
            ResizeFilter::Triangle => fr::FilterType::Bilinear,
            ResizeFilter::CatmullRom => fr::FilterType::CatmullRom,
            ResizeFilter::Gaussian => fr::FilterType::Mitchell,
            ResizeFilter::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}
