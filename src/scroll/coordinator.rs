//! # 自动显隐滚动协调器
//!
//! ## 设计思路
//!
//! 把“滚动范围回调 → 滚动条显隐”、“指针进出 → 滚轮绑定生命周期”、
//! “滚轮事件 → 视图滚动”三条链路集中在一个协调器中。协调器不接管
//! 宿主控件的渲染细节，只通过 trait 与宿主交互。
//!
//! ## 实现思路
//!
//! - 每次范围回调都重新求值显隐，不做去抖——交互式缩放期间内容尺寸持续变化。
//! - 滚轮归一化策略在构造期选定一次。
//! - 滚轮绑定只在指针悬停期间存在，避免抢占兄弟控件的滚轮事件。
//! - 水平/垂直滚动条各自独立，任一可以缺省。

use super::bindings::BindingRegistry;
use super::range::{ScrollRange, ScrollbarVisibility};
use super::wheel::{EventKind, WheelEvent, WheelNormalizer};
use super::{BindingId, ScrollView, ScrollbarControl, WheelBinder};

/// 自动显隐滚动协调器。
///
/// 持有滚动视图与两个可缺省的滚动条控制端，负责显隐状态机、
/// 滚轮归一化与绑定生命周期。
pub struct AutoScroll<V: ScrollView> {
    view: V,
    hsb: Option<Box<dyn ScrollbarControl>>,
    vsb: Option<Box<dyn ScrollbarControl>>,
    h_visibility: ScrollbarVisibility,
    v_visibility: ScrollbarVisibility,
    normalizer: WheelNormalizer,
    bindings: BindingRegistry,
}

impl<V: ScrollView> AutoScroll<V> {
    /// 按宿主平台默认策略构造协调器。
    pub fn new(
        view: V,
        hsb: Option<Box<dyn ScrollbarControl>>,
        vsb: Option<Box<dyn ScrollbarControl>>,
    ) -> Self {
        Self::with_normalizer(view, hsb, vsb, WheelNormalizer::for_host_platform())
    }

    /// 指定归一化策略构造协调器（测试或宿主覆盖平台默认值时使用）。
    pub fn with_normalizer(
        view: V,
        hsb: Option<Box<dyn ScrollbarControl>>,
        vsb: Option<Box<dyn ScrollbarControl>>,
        normalizer: WheelNormalizer,
    ) -> Self {
        Self {
            view,
            hsb,
            vsb,
            h_visibility: ScrollbarVisibility::Hidden,
            v_visibility: ScrollbarVisibility::Hidden,
            normalizer,
            bindings: BindingRegistry::new(),
        }
    }

    /// 水平滚动范围回调（对应 xscrollcommand）。
    pub fn on_xview(&mut self, first: f64, last: f64) {
        let range = ScrollRange::new(first, last);
        Self::apply_range(&mut self.hsb, &mut self.h_visibility, range, "水平");
    }

    /// 垂直滚动范围回调（对应 yscrollcommand）。
    pub fn on_yview(&mut self, first: f64, last: f64) {
        let range = ScrollRange::new(first, last);
        Self::apply_range(&mut self.vsb, &mut self.v_visibility, range, "垂直");
    }

    /// 每次回调都执行：同步滑块位置，再按最新范围求值显隐。
    fn apply_range(
        bar: &mut Option<Box<dyn ScrollbarControl>>,
        visibility: &mut ScrollbarVisibility,
        range: ScrollRange,
        axis_label: &str,
    ) {
        let Some(bar) = bar.as_mut() else {
            return;
        };

        bar.set_thumb(range.first, range.last);

        let next = ScrollbarVisibility::for_range(range);
        if next != *visibility {
            log::debug!("📐 {}滚动条 {:?} -> {:?}", axis_label, visibility, next);
        }

        match next {
            ScrollbarVisibility::Hidden => bar.hide(),
            ScrollbarVisibility::Visible => bar.show(),
        }
        *visibility = next;
    }

    /// 指针进入滚动区域：绑定本平台的滚轮事件集合。
    ///
    /// 重复进入（未离开时）不会重复绑定。
    pub fn pointer_entered(&mut self, binder: &mut dyn WheelBinder) {
        if !self.bindings.is_empty() {
            return;
        }

        for kind in self.normalizer.event_kinds() {
            let id = binder.bind(*kind);
            self.bindings.record(*kind, id);
        }

        log::debug!(
            "🖱️ 指针进入，已绑定 {} 类滚轮事件",
            self.normalizer.event_kinds().len()
        );
    }

    /// 指针离开滚动区域：解除注册表中记录的全部绑定。
    pub fn pointer_left(&mut self, binder: &mut dyn WheelBinder) {
        for (kind, id) in self.bindings.drain() {
            binder.unbind(kind, id);
        }
    }

    /// 处理一次滚轮输入，返回实际应用到视图的档位数。
    ///
    /// 未绑定（指针不在区域内）或归一化结果为 0 的事件被忽略。
    pub fn handle_wheel(&mut self, event: &WheelEvent) -> i32 {
        if self.bindings.is_empty() {
            return 0;
        }

        let units = self.normalizer.normalize(event);
        if units == 0 {
            return 0;
        }

        if event.shifted {
            self.view.scroll_x_units(units);
        } else {
            self.view.scroll_y_units(units);
        }

        units
    }

    pub fn horizontal_visibility(&self) -> ScrollbarVisibility {
        self.h_visibility
    }

    pub fn vertical_visibility(&self) -> ScrollbarVisibility {
        self.v_visibility
    }

    /// 是否存在指定种类的滚轮绑定（诊断用）。
    pub fn is_bound(&self, kind: EventKind) -> bool {
        self.bindings.is_bound(kind)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
