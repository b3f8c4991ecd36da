//! # 图像目标与 set_image 便捷入口
//!
//! ## 设计思路
//!
//! `ImageTarget` 是宿主控件展示图像所需的最小接口：当前渲染尺寸查询 +
//! 应用图像。`set_image` 在此之上补齐“未显式给定的尺寸上限默认取控件
//! 当前尺寸”的语义，再交给 `ImageLoader` 完成加载与缩放。

use crate::error::WidgetError;
use crate::image_loader::{Bounds, DecodedImage, ImageLoader, ImageSource};

/// 可展示图像的宿主控件接口。
pub trait ImageTarget {
    /// 当前渲染尺寸（宽、高，像素）。
    fn current_size(&self) -> (u32, u32);

    /// 应用图像（对应宿主 `configure(image=...)`）。
    ///
    /// 控件持有图像直至被替换或控件销毁。
    fn apply_image(&mut self, image: DecodedImage);
}

/// 加载图片并应用到控件。
///
/// 未显式给定的尺寸上限取控件当前渲染尺寸；任一解析后的上限为 0 时
/// 返回 `InvalidBounds`，不会产生半初始化的图像。
pub fn set_image<T: ImageTarget>(
    target: &mut T,
    loader: &ImageLoader,
    source: ImageSource,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> Result<(), WidgetError> {
    // 已解码图像在尺寸解析之前透传，与加载路径的尺寸约束无关
    let source = match source {
        ImageSource::Decoded(image) => {
            target.apply_image(image);
            return Ok(());
        }
        other => other,
    };

    let (current_width, current_height) = target.current_size();
    let bounds = Bounds::new(
        max_width.unwrap_or(current_width),
        max_height.unwrap_or(current_height),
    )?;

    let image = loader.load(source, bounds)?;
    target.apply_image(image);

    Ok(())
}
