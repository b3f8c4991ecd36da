//! # 滚轮事件归一化
//!
//! ## 设计思路
//!
//! 不同平台的滚轮事件在 delta 的符号/量级以及事件形态（带符号量级的单一
//! wheel 事件 vs 离散的 button-4/5 事件）上都不一致。这里把差异收敛到一个
//! 在构造期选定一次的策略对象，运行时不再做平台字符串分派。
//!
//! ## 实现思路
//!
//! - `NotchScaled`：raw delta 除以档位刻度（默认 120）后取反。
//! - `NotchDirect`：raw delta 直接取反（量级已是档位数）。
//! - `DiscreteButtons`：button-4 映射 -1，button-5 映射 +1。
//! - 垂直滚轮与 Shift 水平滚轮使用同一归一化规则。

/// 离散滚轮按钮（X11 风格的 button-4/5 事件）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelButton {
    /// button-4，向上一档。
    Up,
    /// button-5，向下一档。
    Down,
}

/// 滚轮事件的平台原始形态。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelInput {
    /// 带符号量级的 wheel 事件。
    Delta(f64),
    /// 离散按钮事件。
    Button(WheelButton),
}

/// 一次滚轮输入。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub input: WheelInput,
    /// 是否按住 Shift（水平滚动）。
    pub shifted: bool,
}

impl WheelEvent {
    pub fn delta(delta: f64, shifted: bool) -> Self {
        Self {
            input: WheelInput::Delta(delta),
            shifted,
        }
    }

    pub fn button(button: WheelButton, shifted: bool) -> Self {
        Self {
            input: WheelInput::Button(button),
            shifted,
        }
    }
}

/// 可绑定的滚轮事件种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseWheel,
    ShiftMouseWheel,
    Button4,
    Button5,
    ShiftButton4,
    ShiftButton5,
}

/// 滚轮归一化策略。
///
/// 构造期选定一次，之后对每个事件做纯函数换算。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelNormalizer {
    /// raw delta 除以刻度后取反（Windows 观测值：刻度 120）。
    NotchScaled { notch: f64 },
    /// raw delta 直接取反（macOS：量级已是档位数）。
    NotchDirect,
    /// 离散 button-4/5 事件映射 ∓1（X11 及其他）。
    DiscreteButtons,
}

impl WheelNormalizer {
    /// Windows 滚轮刻度的观测常量。
    ///
    /// 来自实测行为而非文档保证；宿主可用自定义刻度构造 `NotchScaled` 覆盖。
    pub const DEFAULT_NOTCH: f64 = 120.0;

    /// 按编译目标平台选定策略。
    pub fn for_host_platform() -> Self {
        if cfg!(target_os = "windows") {
            Self::NotchScaled {
                notch: Self::DEFAULT_NOTCH,
            }
        } else if cfg!(target_os = "macos") {
            Self::NotchDirect
        } else {
            Self::DiscreteButtons
        }
    }

    /// 该策略需要绑定的事件种类集合。
    pub fn event_kinds(&self) -> &'static [EventKind] {
        match self {
            Self::NotchScaled { .. } | Self::NotchDirect => {
                &[EventKind::MouseWheel, EventKind::ShiftMouseWheel]
            }
            Self::DiscreteButtons => &[
                EventKind::Button4,
                EventKind::Button5,
                EventKind::ShiftButton4,
                EventKind::ShiftButton5,
            ],
        }
    }

    /// 将平台原始输入归一化为带符号的滚动档位数。
    ///
    /// 形态与策略不匹配的输入（例如离散按钮平台收到 Delta 事件）
    /// 归一化为 0，由调用侧忽略。
    pub fn normalize(&self, event: &WheelEvent) -> i32 {
        match (self, event.input) {
            (Self::NotchScaled { notch }, WheelInput::Delta(delta)) => -((delta / notch) as i32),
            (Self::NotchDirect, WheelInput::Delta(delta)) => -(delta as i32),
            (Self::DiscreteButtons, WheelInput::Button(WheelButton::Up)) => -1,
            (Self::DiscreteButtons, WheelInput::Button(WheelButton::Down)) => 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaled() -> WheelNormalizer {
        WheelNormalizer::NotchScaled {
            notch: WheelNormalizer::DEFAULT_NOTCH,
        }
    }

    #[test]
    fn scaled_positive_delta_scrolls_up_one_unit() {
        assert_eq!(scaled().normalize(&WheelEvent::delta(120.0, false)), -1);
    }

    #[test]
    fn scaled_negative_delta_scrolls_down_one_unit() {
        assert_eq!(scaled().normalize(&WheelEvent::delta(-120.0, false)), 1);
    }

    #[test]
    fn scaled_multi_notch_delta_keeps_magnitude() {
        assert_eq!(scaled().normalize(&WheelEvent::delta(360.0, false)), -3);
    }

    #[test]
    fn scaled_partial_notch_truncates_toward_zero() {
        assert_eq!(scaled().normalize(&WheelEvent::delta(60.0, false)), 0);
        assert_eq!(scaled().normalize(&WheelEvent::delta(-60.0, false)), 0);
    }

    #[test]
    fn direct_delta_negates_without_scaling() {
        assert_eq!(
            WheelNormalizer::NotchDirect.normalize(&WheelEvent::delta(2.0, false)),
            -2
        );
        assert_eq!(
            WheelNormalizer::NotchDirect.normalize(&WheelEvent::delta(-1.0, false)),
            1
        );
    }

    #[test]
    fn discrete_buttons_map_to_unit_deltas() {
        let normalizer = WheelNormalizer::DiscreteButtons;

        assert_eq!(
            normalizer.normalize(&WheelEvent::button(WheelButton::Up, false)),
            -1
        );
        assert_eq!(
            normalizer.normalize(&WheelEvent::button(WheelButton::Down, false)),
            1
        );
    }

    #[test]
    fn shift_modifier_does_not_change_normalization() {
        assert_eq!(scaled().normalize(&WheelEvent::delta(120.0, true)), -1);
        assert_eq!(
            WheelNormalizer::DiscreteButtons.normalize(&WheelEvent::button(WheelButton::Down, true)),
            1
        );
    }

    #[test]
    fn mismatched_input_shape_normalizes_to_zero() {
        assert_eq!(
            WheelNormalizer::DiscreteButtons.normalize(&WheelEvent::delta(120.0, false)),
            0
        );
        assert_eq!(
            scaled().normalize(&WheelEvent::button(WheelButton::Up, false)),
            0
        );
    }

    #[test]
    fn notch_platforms_bind_wheel_events_only() {
        assert_eq!(
            scaled().event_kinds(),
            &[EventKind::MouseWheel, EventKind::ShiftMouseWheel]
        );
        assert_eq!(
            WheelNormalizer::NotchDirect.event_kinds(),
            &[EventKind::MouseWheel, EventKind::ShiftMouseWheel]
        );
    }

    #[test]
    fn discrete_platform_binds_button_events() {
        assert_eq!(
            WheelNormalizer::DiscreteButtons.event_kinds(),
            &[
                EventKind::Button4,
                EventKind::Button5,
                EventKind::ShiftButton4,
                EventKind::ShiftButton5,
            ]
        );
    }
}
