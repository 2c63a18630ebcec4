//! Listener bookkeeping
//!
//! The host owns the real DOM listeners; this registry records which ones
//! the engine currently wants so the glue can attach/detach them and so
//! teardown can be verified. Every `add` must be paired with exactly one
//! `remove`.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Scroll,
    Click,
    PointerDown,
    PointerMove,
    PointerUp,
    PointerLeave,
    Resize,
    Intersection,
    Interval,
    AnimationFrame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

impl ListenerId {
    pub fn raw(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct ListenerRegistry {
    entries: Vec<(ListenerId, ListenerKind)>,
    next_id: u32,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add(&mut self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id.max(1));
        self.next_id = id.0.wrapping_add(1);
        self.entries.push((id, kind));
        id
    }

    /// Returns false if the listener was already removed.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        match self.entries.iter().position(|(eid, _)| *eid == id) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn remove_all(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    pub fn count(&self, kind: ListenerKind) -> usize {
        self.entries.iter().filter(|(_, k)| *k == kind).count()
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn wants(&self, kind: ListenerKind) -> bool {
        self.count(kind) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_is_single_shot() {
        let mut reg = ListenerRegistry::new();
        let a = reg.add(ListenerKind::Scroll);
        let _b = reg.add(ListenerKind::Click);
        assert_eq!(reg.total(), 2);
        assert!(reg.remove(a));
        assert!(!reg.remove(a));
        assert_eq!(reg.count(ListenerKind::Scroll), 0);
        assert!(reg.wants(ListenerKind::Click));
    }
}
