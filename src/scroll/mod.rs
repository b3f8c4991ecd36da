//! # 滚动模块（scroll）
//!
//! ## 设计思路
//!
//! 该模块把“滚动条自动显隐”与“跨平台滚轮归一化”收敛为一个协调器，
//! 按职责拆分为多个子模块：
//!
//! - `coordinator`：自动显隐协调器，持有视图与滚动条
//! - `range`：可见比例窗口与显隐状态机
//! - `wheel`：滚轮事件形态与归一化策略
//! - `bindings`：自有的事件绑定注册表
//! - `traits`：宿主工具包接缝
//!
//! ## 实现思路
//!
//! 调用链固定为：
//!
//! ```text
//! 宿主控件回调
//!    ├─ on_xview/on_yview（每次都求值显隐，无去抖）
//!    ├─ pointer_entered/pointer_left（绑定生命周期）
//!    └─ handle_wheel（归一化 → 视图滚动）
//! ```

mod bindings;
mod coordinator;
mod range;
mod traits;
mod wheel;

pub use bindings::{BindingId, BindingRegistry};
pub use coordinator::AutoScroll;
pub use range::{ScrollRange, ScrollbarVisibility};
pub use traits::{ScrollView, ScrollbarControl, WheelBinder};
pub use wheel::{EventKind, WheelButton, WheelEvent, WheelInput, WheelNormalizer};
