//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `ImageLoader` 只负责流程编排与配置管理，不直接与任何 GUI 工具包绑定。
//! 处理链路固定为：
//! 1. 读取配置快照
//! 2. 按来源加载原始字节
//! 3. 解码并按尺寸上限等比缩放
//!
//! ## 实现思路
//!
//! - 配置通过 `Arc<RwLock<ImageConfig>>` 支持运行时调整。
//! - 单次请求内使用“同一配置快照”，避免处理中途配置漂移。
//! - 记录 `load/decode/total` 阶段耗时，便于性能诊断。

use std::sync::{Arc, RwLock};
use std::time::Instant;

use super::source::ResolvedSource;
use super::{Bounds, DecodedImage, ImageConfig, ImageError, ImageSource};

/// 图片加载器。
///
/// 封装配置状态，并编排各子模块实现完整的“来源 → 可渲染图像”流程。
pub struct ImageLoader {
    pub(super) config: Arc<RwLock<ImageConfig>>,
}

impl ImageLoader {
    /// 根据初始配置创建加载器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use widget_ext::image_loader::{ImageConfig, ImageLoader};
    ///
    /// let loader = ImageLoader::new(ImageConfig::default());
    /// ```
    pub fn new(config: ImageConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// 获取配置快照。
    ///
    /// 作用：保证单次请求链路使用一致参数。
    pub(super) fn config_snapshot(&self) -> Result<ImageConfig, ImageError> {
        self.config
            .read()
            .map(|cfg| cfg.clone())
            .map_err(|_| ImageError::ResourceLimit("配置读取锁已中毒".to_string()))
    }

    /// 替换整套配置。
    pub fn set_config(&self, config: ImageConfig) -> Result<(), ImageError> {
        let mut current = self
            .config
            .write()
            .map_err(|_| ImageError::ResourceLimit("配置写入锁已中毒".to_string()))?;
        *current = config;

        Ok(())
    }

    /// 读取当前配置。
    pub fn get_config(&self) -> Result<ImageConfig, ImageError> {
        self.config_snapshot()
    }

    /// 加载主入口：从任意来源加载并按尺寸上限等比缩放。
    ///
    /// 已解码图像直接透传，保持原样返回。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use widget_ext::image_loader::{Bounds, ImageConfig, ImageLoader, ImageSource};
    ///
    /// # fn demo() -> Result<(), widget_ext::image_loader::ImageError> {
    /// let loader = ImageLoader::new(ImageConfig::default());
    /// let image = loader.load(
    ///     ImageSource::FilePath("/tmp/avatar.png".into()),
    ///     Bounds::new(96, 96)?,
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(&self, source: ImageSource, bounds: Bounds) -> Result<DecodedImage, ImageError> {
        let config = self.config_snapshot()?;
        let total_start = Instant::now();

        let resolved = match source {
            ImageSource::Decoded(image) => {
                log::debug!(
                    "⏩ 已解码图像直接透传 - {}x{}",
                    image.width(),
                    image.height()
                );
                return Ok(image);
            }
            ImageSource::Bytes(bytes) => ResolvedSource::Bytes(bytes),
            ImageSource::FilePath(path) => ResolvedSource::FilePath(path),
            ImageSource::Url(url) => ResolvedSource::Url(url),
            ImageSource::Base64(data) => ResolvedSource::Base64(data),
            ImageSource::Auto(text) => ResolvedSource::from_text(text),
        };

        let load_start = Instant::now();
        let raw = match resolved {
            ResolvedSource::Url(url) => self.load_from_url(&url, &config)?,
            ResolvedSource::Base64(data) => self.load_from_base64(&data, &config)?,
            ResolvedSource::FilePath(path) => self.load_from_file(&path, &config)?,
            ResolvedSource::Bytes(bytes) => self.load_from_bytes(bytes, &config)?,
        };
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let decoded = self.decode_and_fit(raw, bounds, &config)?;
        let decode_elapsed = decode_start.elapsed();

        let total_elapsed = total_start.elapsed();
        log::info!(
            "✅ 图片加载完成 - load={}ms decode={}ms total={}ms",
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            total_elapsed.as_millis()
        );

        Ok(decoded)
    }
}
