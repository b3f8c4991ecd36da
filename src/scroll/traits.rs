//! # 宿主工具包接缝
//!
//! ## 设计思路
//!
//! 协调器不重写任何宿主能力，滚动视图、滚动条与事件绑定都以最小接口
//! 出现，宿主按自身控件类型实现后交给协调器持有或借用。

use super::bindings::BindingId;
use super::wheel::EventKind;

/// 可按“档位”滚动的宿主视图。
pub trait ScrollView {
    /// 水平方向滚动指定档位数（负值向左）。
    fn scroll_x_units(&mut self, units: i32);

    /// 垂直方向滚动指定档位数（负值向上）。
    fn scroll_y_units(&mut self, units: i32);
}

/// 宿主滚动条的控制端。
pub trait ScrollbarControl {
    /// 同步滑块位置（对应原生 scrollbar 的 `set(first, last)`）。
    fn set_thumb(&mut self, first: f64, last: f64);

    fn show(&mut self);

    fn hide(&mut self);
}

/// 宿主的滚轮事件绑定端。
///
/// `bind` 返回的标识由协调器记录在自有注册表中，
/// 指针离开时逐一交回 `unbind`。
pub trait WheelBinder {
    fn bind(&mut self, kind: EventKind) -> BindingId;

    fn unbind(&mut self, kind: EventKind, id: BindingId);
}
