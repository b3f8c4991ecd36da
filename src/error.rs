//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义库级统一的 `WidgetError` 枚举，宿主应用只需按分支匹配一种错误类型，
//! 替代各模块分散的字符串错误。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `ImageError` 提供 `From` 转换，无需手动 map。

use crate::image_loader::ImageError;

/// 库级统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// 图片加载流水线错误（下载 / 解码 / 缩放）。
    #[error("{0}")]
    Image(#[from] ImageError),

    /// 宿主工具包在回调中报告的失败。
    #[error("宿主工具包错误：{0}")]
    Host(String),
}
