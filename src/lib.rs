//! # 控件便捷层 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                宿主 GUI 工具包（外部协作者）               │
//! │                                                          │
//! │  控件对象 ── 滚动条 ── 事件循环（单线程 UI 回调）          │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↕ trait 接缝（ImageTarget / ScrollView / WheelBinder …）
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↕            本库 (widget-ext)                      │
//! │                                                          │
//! │  ┌─ error ───────── WidgetError（统一错误类型）            │
//! │  │                                                       │
//! │  ├─ image_loader ── 图片来源识别·加载校验·解码·等比缩放     │
//! │  │                                                       │
//! │  ├─ scroll ──────── 滚动条自动显隐·滚轮归一化·绑定生命周期  │
//! │  │                                                       │
//! │  └─ widget ──────── set_image 入口 / 配色与命令辅助        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `WidgetError`，图像链路错误由此上转 |
//! | [`image_loader`] | 从 URL/Base64/文件/字节加载图片并等比缩放为可渲染数据 |
//! | [`scroll`] | 滚动条自动显隐状态机、跨平台滚轮归一化、悬停期绑定 |
//! | [`widget`] | 宿主接缝 trait、`set_image` 便捷入口、配色与命令辅助 |

pub mod error;
pub mod image_loader;
pub mod scroll;
pub mod widget;
