//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 统一处理不同来源（URL / Base64 / 本地文件 / 内存字节）的原始字节加载，
//! 并在“尽可能早”的阶段执行输入校验。目标是尽快失败，减少不必要内存与 CPU 消耗。
//!
//! ## 实现思路
//!
//! - URL：协议校验 + 同步 GET + 内容类型 + 体积校验。
//! - Base64：格式解析 + 解码前体积估算。
//! - 文件：存在性 + metadata 体积限制 + 读取。
//! - 网络错误统一映射到 `ImageError`，不做重试——单次失败即向上传播。

use std::path::Path;
use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};

use super::source::RawImageData;
use super::{ImageConfig, ImageError, ImageLoader};

impl ImageLoader {
    /// 从 URL 加载图片原始字节。
    ///
    /// 同步阻塞调用线程；UI 宿主应只在用户显式触发时走到这里。
    pub(super) fn load_from_url(
        &self,
        url: &str,
        config: &ImageConfig,
    ) -> Result<RawImageData, ImageError> {
        log::info!("🌐 开始下载图片 - URL: {}", Self::redact_url_for_log(url));

        let parsed = reqwest::Url::parse(url)
            .map_err(|e| ImageError::InvalidFormat(format!("URL 格式错误：{}", e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ImageError::InvalidFormat("仅支持 HTTP/HTTPS".to_string()));
        }

        let client = Self::build_http_client(config)?;
        let response = client
            .get(parsed)
            .send()
            .map_err(|e| Self::map_reqwest_error(e, url, config))?;

        if !response.status().is_success() {
            return Err(ImageError::Fetch(format!(
                "HTTP {}：{}",
                response.status().as_u16(),
                Self::status_message(response.status().as_u16())
            )));
        }

        if let Some(ct) = response.headers().get(reqwest::header::CONTENT_TYPE) {
            if let Ok(ct_str) = ct.to_str() {
                if !Self::is_image_content_type(ct_str) {
                    return Err(ImageError::InvalidFormat(format!(
                        "不是图片类型：{}",
                        ct_str
                    )));
                }
            }
        }

        if let Some(len) = response.content_length() {
            if len > config.max_file_size {
                return Err(ImageError::ResourceLimit(format!(
                    "文件过大：{:.2} MB（限制：{:.2} MB）",
                    len as f64 / 1024.0 / 1024.0,
                    config.max_file_size as f64 / 1024.0 / 1024.0
                )));
            }
        }

        let bytes = response
            .bytes()
            .map_err(|e| Self::map_reqwest_error(e, url, config))?
            .to_vec();

        if bytes.len() as u64 > config.max_file_size {
            return Err(ImageError::ResourceLimit(
                "下载后文件超过大小限制".to_string(),
            ));
        }
        Self::validate_image_signature(&bytes)?;

        log::debug!("✅ 下载完成 - {} bytes", bytes.len());

        Ok(RawImageData {
            bytes,
            source_hint: "url",
        })
    }

    /// 从 Base64 字符串加载图片原始字节。
    pub(super) fn load_from_base64(
        &self,
        data: &str,
        config: &ImageConfig,
    ) -> Result<RawImageData, ImageError> {
        log::info!("📝 开始处理 base64 图片");

        let bytes = Self::parse_base64_with_limit(data, config.max_file_size)?;

        if bytes.len() as u64 > config.max_file_size {
            return Err(ImageError::ResourceLimit(format!(
                "Base64 解码后体积过大：{:.2} MB（限制：{:.2} MB）",
                bytes.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }
        Self::validate_image_signature(&bytes)?;

        Ok(RawImageData {
            bytes,
            source_hint: "base64",
        })
    }

    /// 从本地路径加载图片原始字节。
    pub(super) fn load_from_file(
        &self,
        path: &str,
        config: &ImageConfig,
    ) -> Result<RawImageData, ImageError> {
        log::info!("📁 开始读取本地图片 - 路径: {}", path);

        let file_path = Path::new(path);
        if !file_path.exists() {
            return Err(ImageError::NotFound(format!("文件不存在：{}", path)));
        }

        let metadata = std::fs::metadata(file_path)
            .map_err(|e| ImageError::NotFound(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > config.max_file_size {
            return Err(ImageError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(file_path)
            .map_err(|e| ImageError::NotFound(format!("无法读取图片文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        Ok(RawImageData {
            bytes,
            source_hint: "file",
        })
    }

    /// 从内存字节加载（仅校验体积与签名）。
    pub(super) fn load_from_bytes(
        &self,
        bytes: Vec<u8>,
        config: &ImageConfig,
    ) -> Result<RawImageData, ImageError> {
        if bytes.len() as u64 > config.max_file_size {
            return Err(ImageError::ResourceLimit(format!(
                "字节来源体积过大：{:.2} MB（限制：{:.2} MB）",
                bytes.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }
        Self::validate_image_signature(&bytes)?;

        Ok(RawImageData {
            bytes,
            source_hint: "bytes",
        })
    }

    fn build_http_client(config: &ImageConfig) -> Result<reqwest::blocking::Client, ImageError> {
        reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.download_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| ImageError::Fetch(format!("无法创建 HTTP 客户端：{}", e)))
    }

    fn is_image_content_type(content_type: &str) -> bool {
        content_type
            .split(';')
            .next()
            .map(|base| base.trim().to_ascii_lowercase().starts_with("image/"))
            .unwrap_or(false)
    }

    fn redact_url_for_log(url: &str) -> String {
        let Ok(parsed) = reqwest::Url::parse(url) else {
            return "<invalid-url>".to_string();
        };

        let host = parsed.host_str().unwrap_or("<unknown-host>");
        let port = parsed.port().map(|p| format!(":{}", p)).unwrap_or_default();
        let path = parsed.path();

        format!("{}://{}{}{}", parsed.scheme(), host, port, path)
    }

    /// 解析 Base64 输入（支持 Data URL / 纯 Base64），解码前先按长度估算体积。
    fn parse_base64_with_limit(data: &str, max_file_size: u64) -> Result<Vec<u8>, ImageError> {
        let normalized = data.trim();

        let base64_data = if normalized.starts_with("data:image/") {
            let base64_start = normalized
                .find(";base64,")
                .ok_or_else(|| ImageError::InvalidFormat("缺少 base64 标记".to_string()))?;
            &normalized[base64_start + 8..]
        } else {
            normalized
        };

        let estimated_len = Self::estimate_base64_decoded_upper_bound_len(base64_data)?;
        if estimated_len > max_file_size {
            return Err(ImageError::ResourceLimit(format!(
                "Base64 预计解码体积过大：{:.2} MB（限制：{:.2} MB）",
                estimated_len as f64 / 1024.0 / 1024.0,
                max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        general_purpose::STANDARD
            .decode(base64_data)
            .map_err(|e| ImageError::Decode(format!("Base64 解码失败：{}", e)))
    }

    fn estimate_base64_decoded_upper_bound_len(base64_data: &str) -> Result<u64, ImageError> {
        let len = base64_data.trim().len() as u64;
        let groups = len
            .checked_add(3)
            .ok_or_else(|| ImageError::ResourceLimit("Base64 输入长度溢出".to_string()))?
            / 4;

        groups
            .checked_mul(3)
            .ok_or_else(|| ImageError::ResourceLimit("Base64 解码体积估算溢出".to_string()))
    }

    /// 统一映射 reqwest 错误到业务错误。
    fn map_reqwest_error(e: reqwest::Error, url: &str, config: &ImageConfig) -> ImageError {
        let err_msg = Self::sanitize_error_message_with_redacted_url(&e.to_string(), url);

        if e.is_timeout() {
            ImageError::Timeout(format!("下载超时（{}秒）", config.download_timeout))
        } else if e.is_connect() {
            ImageError::Fetch(format!("无法连接：{}", err_msg))
        } else {
            ImageError::Fetch(format!("请求失败：{}", err_msg))
        }
    }

    fn sanitize_error_message_with_redacted_url(error_msg: &str, url: &str) -> String {
        let redacted = Self::redact_url_for_log(url);
        error_msg.replace(url, &redacted)
    }

    /// 常见 HTTP 状态码本地化文案。
    fn status_message(code: u16) -> &'static str {
        match code {
            404 => "未找到",
            403 => "访问被拒绝",
            500..=599 => "服务器错误",
            _ => "请求失败",
        }
    }

    /// 通过文件签名（magic bytes）校验输入是否为图片。
    pub(super) fn validate_image_signature(bytes: &[u8]) -> Result<(), ImageError> {
        if bytes.is_empty() {
            return Err(ImageError::InvalidFormat("图片内容为空".to_string()));
        }

        let kind = infer::get(bytes)
            .ok_or_else(|| ImageError::InvalidFormat("无法识别图片类型".to_string()))?;

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(ImageError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_loader::ImageConfig;

    fn loader() -> ImageLoader {
        ImageLoader::new(ImageConfig::default())
    }

    #[test]
    fn load_from_base64_rejects_non_image_payload() {
        let result = loader().load_from_base64("SGVsbG8=", &ImageConfig::default());

        assert!(matches!(result, Err(ImageError::InvalidFormat(_))));
    }

    #[test]
    fn load_from_base64_rejects_invalid_text() {
        let result = loader().load_from_base64("nonexistent.png", &ImageConfig::default());

        assert!(matches!(result, Err(ImageError::Decode(_))));
    }

    #[test]
    fn parse_base64_with_limit_rejects_large_payload_before_decode() {
        let huge = "A".repeat(1024 * 1024);
        let result = ImageLoader::parse_base64_with_limit(&huge, 32);

        assert!(matches!(result, Err(ImageError::ResourceLimit(_))));
    }

    #[test]
    fn parse_base64_accepts_data_url_prefix() {
        let encoded = general_purpose::STANDARD.encode(b"abc");
        let data_url = format!("data:image/png;base64,{}", encoded);

        let decoded = ImageLoader::parse_base64_with_limit(&data_url, u64::MAX)
            .expect("data url parse failed");

        assert_eq!(decoded, b"abc");
    }

    #[test]
    fn data_url_without_marker_is_rejected() {
        let result = ImageLoader::parse_base64_with_limit("data:image/png;abc", u64::MAX);

        assert!(matches!(result, Err(ImageError::InvalidFormat(_))));
    }

    #[test]
    fn content_type_parser_accepts_image_with_params() {
        assert!(ImageLoader::is_image_content_type("image/png; charset=utf-8"));
        assert!(ImageLoader::is_image_content_type("IMAGE/JPEG"));
        assert!(!ImageLoader::is_image_content_type("text/html; charset=utf-8"));
    }

    #[test]
    fn redact_url_for_log_removes_query_and_fragment() {
        let redacted = ImageLoader::redact_url_for_log(
            "https://example.com:8443/path/img.png?token=abc123#hash",
        );

        assert_eq!(redacted, "https://example.com:8443/path/img.png");
    }

    #[test]
    fn load_from_file_reports_missing_path_as_not_found() {
        let result = loader().load_from_file(
            "/definitely/not/here/image.png",
            &ImageConfig::default(),
        );

        assert!(matches!(result, Err(ImageError::NotFound(_))));
    }

    #[test]
    fn load_from_url_rejects_non_http_scheme() {
        let result = loader().load_from_url("ftp://example.com/a.png", &ImageConfig::default());

        assert!(matches!(result, Err(ImageError::InvalidFormat(_))));
    }

    #[test]
    fn signature_validation_recognizes_png_header() {
        let png_signature = [137_u8, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 13];

        assert!(ImageLoader::validate_image_signature(&png_signature).is_ok());
    }

    #[test]
    fn signature_validation_rejects_non_image_payload() {
        let payload = b"<html><body>not an image</body></html>";
        let result = ImageLoader::validate_image_signature(payload);

        assert!(matches!(result, Err(ImageError::InvalidFormat(_))));
    }

    #[test]
    fn load_from_bytes_rejects_oversized_input() {
        let mut config = ImageConfig::default();
        config.max_file_size = 4;

        let result = loader().load_from_bytes(vec![137, 80, 78, 71, 13], &config);

        assert!(matches!(result, Err(ImageError::ResourceLimit(_))));
    }
}
