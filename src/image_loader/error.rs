//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图片链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。

/// 图片加载统一错误类型。
///
/// 该类型会在库级被上转为 `WidgetError`，最终透传给宿主应用。
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("尺寸上限无效：{0}")]
    InvalidBounds(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("网络错误：{0}")]
    Fetch(String),

    #[error("文件不可读：{0}")]
    NotFound(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("超时错误：{0}")]
    Timeout(String),
}
