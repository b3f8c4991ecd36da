//! # 图片加载模块（image_loader）
//!
//! ## 设计思路
//!
//! 该模块将“图片来源识别 → 加载校验 → 解码缩放”按职责拆分为多个子模块，
//! 避免单文件膨胀与耦合。
//!
//! - `handler`：编排整条处理流水线，持有配置
//! - `loader`：负责 URL/Base64/文件/字节加载与输入校验
//! - `pipeline`：负责解码、像素限制、等比缩放
//! - `config/error/source`：配置、错误、数据模型
//!
//! ## 实现思路
//!
//! 对外仅暴露必要类型，内部细节保持 `mod` 私有。
//! 调用链固定为：
//!
//! ```text
//! 宿主控件（widget::set_image 或直接调用）
//!    ↓
//! handler.rs（ImageLoader::load：配置快照 + 阶段耗时日志）
//!    ├─ source.rs（Auto 文本识别：文件 → URL → Base64）
//!    ├─ loader.rs（来源加载 + 体积/签名校验）
//!    └─ pipeline.rs（解码 + 像素限制 + fit-within 缩放）
//!    ↓
//! DecodedImage（由控件持有直至替换或销毁）
//! ```

mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;

pub use config::{ImageConfig, ResizeFilter};
pub use error::ImageError;
pub use handler::ImageLoader;
pub use source::{Bounds, DecodedImage, ImageSource};
