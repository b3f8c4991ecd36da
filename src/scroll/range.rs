//! # 滚动范围与可见性状态
//!
//! ## 设计思路
//!
//! `ScrollRange` 是滚动控件在每次重绘/缩放时上报的可见比例窗口，
//! 属于瞬态数据，不做存储；`ScrollbarVisibility` 是它的纯函数推导结果。
//! 状态机只有两个状态：窗口为 [0, 1] 真子集时可见，覆盖全程时隐藏。

/// 滚动内容的可见比例窗口。
///
/// `first`/`last` 为 [0.0, 1.0] 区间内的比例值，由滚动控件在每次
/// 内容或视口变化时上报。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub first: f64,
    pub last: f64,
}

impl ScrollRange {
    pub fn new(first: f64, last: f64) -> Self {
        Self { first, last }
    }

    /// 内容是否完全可见（无需滚动）。
    pub fn covers_all(&self) -> bool {
        self.first <= 0.0 && self.last >= 1.0
    }
}

/// 滚动条可见性状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollbarVisibility {
    /// 初始状态；内容完全可见时回到该状态。
    #[default]
    Hidden,
    /// 可见窗口是 [0, 1] 的真子集时进入该状态。
    Visible,
}

impl ScrollbarVisibility {
    /// 由最新滚动范围推导可见性——纯函数，不依赖历史状态。
    pub fn for_range(range: ScrollRange) -> Self {
        if range.covers_all() {
            Self::Hidden
        } else {
            Self::Visible
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_range_hides_scrollbar() {
        assert_eq!(
            ScrollbarVisibility::for_range(ScrollRange::new(0.0, 1.0)),
            ScrollbarVisibility::Hidden
        );
    }

    #[test]
    fn inner_window_shows_scrollbar() {
        assert_eq!(
            ScrollbarVisibility::for_range(ScrollRange::new(0.2, 0.8)),
            ScrollbarVisibility::Visible
        );
    }

    #[test]
    fn almost_full_window_still_shows_scrollbar() {
        assert_eq!(
            ScrollbarVisibility::for_range(ScrollRange::new(0.0, 0.99)),
            ScrollbarVisibility::Visible
        );
    }

    #[test]
    fn window_anchored_at_end_shows_scrollbar() {
        assert_eq!(
            ScrollbarVisibility::for_range(ScrollRange::new(0.1, 1.0)),
            ScrollbarVisibility::Visible
        );
    }

    #[test]
    fn out_of_range_report_beyond_full_still_hides() {
        // 某些工具包在回弹时会上报略超出 [0, 1] 的值
        assert_eq!(
            ScrollbarVisibility::for_range(ScrollRange::new(-0.01, 1.01)),
            ScrollbarVisibility::Hidden
        );
    }

    #[test]
    fn default_state_is_hidden() {
        assert_eq!(ScrollbarVisibility::default(), ScrollbarVisibility::Hidden);
    }
}
