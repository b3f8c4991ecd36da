//! # 样式与视图状态辅助
//!
//! ## 设计思路
//!
//! 原生工具包的配色配置键繁多且命名冗长。这里用 `StyleTarget` 作为宿主
//! `configure(option=value)` 的最小抽象，再以扩展 trait 提供成组的配色
//! 快捷方法；视图状态用四值枚举表达，初始为 `Hidden`。

/// 可配置的样式键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleOption {
    Foreground,
    Background,
    ActiveForeground,
    ActiveBackground,
    HighlightColor,
    HighlightBackground,
    DisabledForeground,
}

impl StyleOption {
    /// 输出宿主工具包使用的配置键名。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Foreground => "foreground",
            Self::Background => "background",
            Self::ActiveForeground => "activeforeground",
            Self::ActiveBackground => "activebackground",
            Self::HighlightColor => "highlightcolor",
            Self::HighlightBackground => "highlightbackground",
            Self::DisabledForeground => "disabledforeground",
        }
    }
}

/// 宿主控件的样式配置接口。
pub trait StyleTarget {
    /// 对应宿主 `configure(option=value)`。
    fn set_style_option(&mut self, option: StyleOption, value: &str);
}

/// 成组配色快捷方法。
///
/// 所有方法对 `None` 项保持原样不动，并返回 `&mut Self` 以支持链式调用。
pub trait StyledExt: StyleTarget {
    /// 设置常规前景/背景色。
    fn set_colors(&mut self, text: Option<&str>, background: Option<&str>) -> &mut Self {
        if let Some(background) = background {
            self.set_style_option(StyleOption::Background, background);
        }
        if let Some(text) = text {
            self.set_style_option(StyleOption::Foreground, text);
        }
        self
    }

    /// 设置激活态前景/背景色。
    fn set_active_colors(&mut self, text: Option<&str>, background: Option<&str>) -> &mut Self {
        if let Some(background) = background {
            self.set_style_option(StyleOption::ActiveBackground, background);
        }
        if let Some(text) = text {
            self.set_style_option(StyleOption::ActiveForeground, text);
        }
        self
    }

    /// 设置焦点高亮前景/背景色。
    fn set_highlight_colors(&mut self, text: Option<&str>, background: Option<&str>) -> &mut Self {
        if let Some(text) = text {
            self.set_style_option(StyleOption::HighlightColor, text);
        }
        if let Some(background) = background {
            self.set_style_option(StyleOption::HighlightBackground, background);
        }
        self
    }

    /// 设置禁用态前景色。
    fn set_disabled_color(&mut self, color: Option<&str>) -> &mut Self {
        if let Some(color) = color {
            self.set_style_option(StyleOption::DisabledForeground, color);
        }
        self
    }
}

impl<T: StyleTarget + ?Sized> StyledExt for T {}

/// 控件视图状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// 初始状态；未布局或已被隐藏。
    #[default]
    Hidden,
    Normal,
    Active,
    Disabled,
}

impl ViewState {
    /// 输出宿主工具包使用的状态字符串。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Normal => "normal",
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }

    /// 是否处于可见状态。
    pub fn is_visible(self) -> bool {
        self != Self::Hidden
    }
}
