//! # 绑定注册表
//!
//! ## 设计思路
//!
//! 以“事件种类 → 绑定标识集合”的自有映射替代全局可变注册表。
//! 注册表归属单个协调器，生命周期与所属控件一致，控件销毁时随之释放，
//! 不会出现跨控件共享的悬挂绑定。

use std::collections::{HashMap, HashSet};

use super::wheel::EventKind;

/// 宿主工具包返回的绑定标识。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(pub u64);

/// 事件绑定注册表。
#[derive(Debug, Default)]
pub struct BindingRegistry {
    entries: HashMap<EventKind, HashSet<BindingId>>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次绑定。
    pub fn record(&mut self, kind: EventKind, id: BindingId) {
        self.entries.entry(kind).or_default().insert(id);
    }

    /// 是否存在指定种类的绑定。
    pub fn is_bound(&self, kind: EventKind) -> bool {
        self.entries
            .get(&kind)
            .map(|set| !set.is_empty())
            .unwrap_or(false)
    }

    /// 是否没有任何绑定。
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|set| set.is_empty())
    }

    /// 取出全部绑定并清空注册表。
    pub fn drain(&mut self) -> Vec<(EventKind, BindingId)> {
        let mut out = Vec::new();
        for (kind, set) in self.entries.drain() {
            for id in set {
                out.push((kind, id));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_registry_is_empty() {
        let registry = BindingRegistry::new();

        assert!(registry.is_empty());
        assert!(!registry.is_bound(EventKind::MouseWheel));
    }

    #[test]
    fn record_marks_kind_as_bound() {
        let mut registry = BindingRegistry::new();
        registry.record(EventKind::MouseWheel, BindingId(1));

        assert!(registry.is_bound(EventKind::MouseWheel));
        assert!(!registry.is_bound(EventKind::ShiftMouseWheel));
        assert!(!registry.is_empty());
    }

    #[test]
    fn duplicate_ids_collapse_in_set() {
        let mut registry = BindingRegistry::new();
        registry.record(EventKind::Button4, BindingId(7));
        registry.record(EventKind::Button4, BindingId(7));

        assert_eq!(registry.drain().len(), 1);
    }

    #[test]
    fn drain_returns_everything_and_empties() {
        let mut registry = BindingRegistry::new();
        registry.record(EventKind::MouseWheel, BindingId(1));
        registry.record(EventKind::ShiftMouseWheel, BindingId(2));

        let mut drained = registry.drain();
        drained.sort_by_key(|(_, id)| id.0);

        assert_eq!(
            drained,
            vec![
                (EventKind::MouseWheel, BindingId(1)),
                (EventKind::ShiftMouseWheel, BindingId(2)),
            ]
        );
        assert!(registry.is_empty());
    }
}
