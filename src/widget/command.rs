//! # 命令绑定辅助
//!
//! ## 设计思路
//!
//! 将“控件触发时调用的回调”包装为 `Command`，由宿主通过 `CommandTarget`
//! 挂接。回调可以失败，错误统一记录日志后向宿主透传，不在回调内部吞掉。

use crate::error::WidgetError;

/// 控件命令回调。
pub struct Command {
    func: Box<dyn FnMut() -> Result<(), WidgetError> + 'static>,
}

impl Command {
    /// 包装一个可能失败的回调。
    pub fn new<F>(func: F) -> Self
    where
        F: FnMut() -> Result<(), WidgetError> + 'static,
    {
        Self {
            func: Box::new(func),
        }
    }

    /// 包装一个不会失败的回调。
    pub fn from_fn<F>(mut func: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self::new(move || {
            func();
            Ok(())
        })
    }

    /// 执行命令；错误记录日志后返回给宿主。
    pub fn invoke(&mut self) -> Result<(), WidgetError> {
        match (self.func)() {
            Ok(()) => Ok(()),
            Err(err) => {
                log::warn!("⚠️ 命令回调执行失败：{}", err);
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command").finish_non_exhaustive()
    }
}

/// 宿主控件的命令挂接接口（对应 `configure(command=...)`）。
pub trait CommandTarget {
    fn attach_command(&mut self, command: Command);
}

/// 命令挂接快捷方法。
pub trait CommandExt: CommandTarget {
    /// 挂接一个普通回调。
    fn set_command<F>(&mut self, func: F) -> &mut Self
    where
        F: FnMut() + 'static,
        Self: Sized,
    {
        self.attach_command(Command::from_fn(func));
        self
    }

    /// 挂接一个可能失败的回调。
    fn set_fallible_command<F>(&mut self, func: F) -> &mut Self
    where
        F: FnMut() -> Result<(), WidgetError> + 'static,
        Self: Sized,
    {
        self.attach_command(Command::new(func));
        self
    }
}

impl<T: CommandTarget> CommandExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingTarget {
        command: Option<Command>,
    }

    impl CommandTarget for RecordingTarget {
        fn attach_command(&mut self, command: Command) {
            self.command = Some(command);
        }
    }

    #[test]
    fn attached_command_runs_on_invoke() {
        let hits = Rc::new(Cell::new(0u32));
        let hits_in_command = Rc::clone(&hits);

        let mut target = RecordingTarget::default();
        target.set_command(move || hits_in_command.set(hits_in_command.get() + 1));

        let mut command = target.command.expect("command should be attached");
        command.invoke().expect("command should succeed");
        command.invoke().expect("command should succeed twice");

        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn replacing_command_drops_previous_callback() {
        let mut target = RecordingTarget::default();
        target.set_command(|| {});
        target.set_command(|| {});

        assert!(target.command.is_some());
    }

    #[test]
    fn fallible_command_propagates_error() {
        let mut target = RecordingTarget::default();
        target.set_fallible_command(|| Err(WidgetError::Host("按钮回调失败".to_string())));

        let mut command = target.command.expect("command should be attached");
        let result = command.invoke();

        assert!(matches!(result, Err(WidgetError::Host(_))));
    }
}
