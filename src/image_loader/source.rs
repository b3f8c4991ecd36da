//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入类型”和“流水线中间结果”解耦：
//! - `ImageSource` 表示外部来源语义，`Auto` 文本在加载时才落到具体来源
//! - `Bounds` 表示经过校验的尺寸上限
//! - `RawImageData` 表示已加载但未解码的字节
//! - `DecodedImage` 表示可直接交给控件渲染的 RGBA 数据

use std::path::Path;

use super::ImageError;

/// 图片输入来源。
///
/// 一次构造、一次消费：`ImageLoader::load` 按值接收并拆解。
pub enum ImageSource {
    /// 已解码图像（直接透传，不再校验尺寸上限、不再缩放）。
    Decoded(DecodedImage),
    /// 内存中的原始编码字节。
    Bytes(Vec<u8>),
    /// 本地文件路径来源。
    FilePath(String),
    /// 网络地址来源。
    Url(String),
    /// Base64（支持 Data URL 与纯 Base64 字符串）。
    Base64(String),
    /// 按“本地文件 → URL → Base64”顺序在加载时识别的文本。
    Auto(String),
}

impl ImageSource {
    /// 从任意文本构造延迟识别的来源。
    pub fn auto(text: impl Into<String>) -> Self {
        Self::Auto(text.into())
    }
}

/// `Auto` 文本识别后的具体来源。
///
/// 与 `ImageSource` 的区别：不含 `Decoded` 与 `Auto`，
/// 加载分派时无需兜底分支。
pub(crate) enum ResolvedSource {
    Bytes(Vec<u8>),
    FilePath(String),
    Url(String),
    Base64(String),
}

impl ResolvedSource {
    /// 按固定顺序识别文本来源：存在的本地文件优先，其次 URL，最后按 Base64 处理。
    ///
    /// 非 Base64 的无效文本会在解码阶段以 `Decode` 失败，不做静默回退。
    pub(crate) fn from_text(text: String) -> Self {
        if Path::new(&text).is_file() {
            return Self::FilePath(text);
        }
        if Self::looks_like_url(&text) {
            return Self::Url(text);
        }
        Self::Base64(text)
    }

    /// 判断文本是否可识别为可抓取的 URL（仅限加载器支持的协议）。
    fn looks_like_url(text: &str) -> bool {
        let trimmed = text.trim_start();
        trimmed.starts_with("http://") || trimmed.starts_with("https://")
    }
}

/// 适配目标的尺寸上限（fit-within 语义）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    max_width: u32,
    max_height: u32,
}

impl Bounds {
    /// 校验并构造尺寸上限，任一值为 0 时拒绝。
    pub fn new(max_width: u32, max_height: u32) -> Result<Self, ImageError> {
        if max_width == 0 {
            return Err(ImageError::InvalidBounds(
                "max_width 必须为正数，当前值：0".to_string(),
            ));
        }
        if max_height == 0 {
            return Err(ImageError::InvalidBounds(
                "max_height 必须为正数，当前值：0".to_string(),
            ));
        }

        Ok(Self {
            max_width,
            max_height,
        })
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    pub fn max_height(&self) -> u32 {
        self.max_height
    }
}

/// 加载阶段输出：原始字节与来源标识。
pub(crate) struct RawImageData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源提示（用于日志与诊断）。
    pub(crate) source_hint: &'static str,
}

/// 解码阶段输出：可直接渲染的 RGBA 像素数据。
///
/// 由控件持有直至被替换或控件销毁。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    original_width: u32,
    original_height: u32,
    /// RGBA 字节数组（`width * height * 4`）。
    bytes: Vec<u8>,
}

impl DecodedImage {
    pub(crate) fn new(
        width: u32,
        height: u32,
        original_width: u32,
        original_height: u32,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            width,
            height,
            original_width,
            original_height,
            bytes,
        }
    }

    /// 从宿主已有的 RGBA 像素构造图像（校验字节长度一致性）。
    pub fn from_rgba(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self, ImageError> {
        let expected_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| ImageError::ResourceLimit("图片尺寸导致内存溢出风险".to_string()))?;

        if bytes.len() != expected_len {
            return Err(ImageError::Decode(format!(
                "RGBA 字节长度与尺寸不符：期望 {}，实际 {}",
                expected_len,
                bytes.len()
            )));
        }

        Ok(Self::new(width, height, width, height, bytes))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 解码时的原始尺寸（缩放前）。
    pub fn original_size(&self) -> (u32, u32) {
        (self.original_width, self.original_height)
    }

    /// 是否经过等比缩放。
    pub fn was_resized(&self) -> bool {
        self.width != self.original_width || self.height != self.original_height
    }

    pub fn rgba_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_rgba_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
