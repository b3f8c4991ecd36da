//! # 控件辅助模块（widget）
//!
//! ## 设计思路
//!
//! 该模块承载与宿主工具包直接对接的“薄胶水”：
//!
//! - `target`：图像目标接缝与 `set_image` 便捷入口
//! - `style`：配色快捷方法与四值视图状态
//! - `command`：命令回调包装与挂接
//!
//! 宿主控件实现对应 trait 后即可获得全部快捷方法；
//! 本模块不持有任何全局状态。

mod command;
mod style;
mod target;

pub use command::{Command, CommandExt, CommandTarget};
pub use style::{StyleOption, StyleTarget, StyledExt, ViewState};
pub use target::{ImageTarget, set_image};
