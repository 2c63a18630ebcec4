//! Media playback with the autoplay fallback
//!
//! Browsers may reject `play()` until the user has interacted with the
//! page, usually by rejecting the returned promise. Each rejected attempt
//! arms one scroll and one click listener; the first of them to fire
//! removes both and retries playback once.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{HtmlMediaElement, HtmlVideoElement};

use crate::core::{ListenerId, ListenerKind, ListenerRegistry, MotionError};

/// Playable element (a `<video>` in the browser, a mock in tests)
pub trait MediaElement {
    /// Start playback. `Err(AutoplayBlocked)` when the browser refuses
    /// synchronously.
    fn play(&mut self) -> Result<(), MotionError>;
    fn pause(&mut self);
    fn is_paused(&self) -> bool;

    /// True once per asynchronous rejection of an earlier `play`
    fn take_rejection(&mut self) -> bool {
        false
    }
}

/// A `<video>` whose play promises are always caught. A rejection raises a
/// flag that the owning `MediaSet` drains on its next poll.
pub struct WebVideo {
    element: HtmlVideoElement,
    rejected: Rc<Cell<bool>>,
    on_reject: Option<Closure<dyn FnMut(JsValue)>>,
}

impl WebVideo {
    pub fn new(element: HtmlVideoElement) -> Self {
        let rejected = Rc::new(Cell::new(false));
        let flag = Rc::clone(&rejected);
        let on_reject = Closure::wrap(Box::new(move |_reason: JsValue| flag.set(true)) as Box<dyn FnMut(JsValue)>);
        Self {
            element,
            rejected,
            on_reject: Some(on_reject),
        }
    }

    pub fn element(&self) -> &HtmlVideoElement {
        &self.element
    }
}

impl MediaElement for WebVideo {
    fn play(&mut self) -> Result<(), MotionError> {
        match HtmlMediaElement::play(&self.element) {
            Ok(promise) => {
                if let Some(cb) = self.on_reject.as_ref() {
                    let _ = promise.catch(cb);
                }
                Ok(())
            }
            Err(_) => Err(MotionError::AutoplayBlocked { media: 0 }),
        }
    }

    fn pause(&mut self) {
        let _ = self.element.pause();
    }

    fn is_paused(&self) -> bool {
        self.element.paused()
    }

    fn take_rejection(&mut self) -> bool {
        self.rejected.replace(false)
    }
}

impl Drop for WebVideo {
    fn drop(&mut self) {
        // A promise may still settle after teardown; the handler must outlive it
        if let Some(cb) = self.on_reject.take() {
            cb.forget();
        }
    }
}

#[derive(Debug, Default)]
pub struct AutoplayGuard {
    armed: Option<(ListenerId, ListenerId)>,
    /// The latest play request was the gesture retry
    retried: bool,
}

impl AutoplayGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Play `media` for a new entry; a synchronous rejection arms the
    /// fallback.
    pub fn ensure_play<M: MediaElement>(&mut self, media: &mut M, listeners: &mut ListenerRegistry) -> Result<(), MotionError> {
        self.retried = false;
        match media.play() {
            Ok(()) => Ok(()),
            Err(e) => {
                motion_warn!("[media] play rejected: {}", e);
                self.on_rejected(listeners);
                Err(e)
            }
        }
    }

    /// Arm the scroll and click listeners for the current attempt. A no-op
    /// while they are already armed.
    pub fn on_rejected(&mut self, listeners: &mut ListenerRegistry) {
        if self.armed.is_some() {
            return;
        }
        let scroll = listeners.add(ListenerKind::Scroll);
        let click = listeners.add(ListenerKind::Click);
        self.armed = Some((scroll, click));
    }

    /// The promise of the latest play request rejected. Rejections of the
    /// gesture retry are swallowed; anything else arms the fallback.
    /// Returns whether it armed.
    pub fn on_async_rejected(&mut self, listeners: &mut ListenerRegistry) -> bool {
        if self.retried {
            self.retried = false;
            motion_log!("[media] retry after gesture rejected");
            return false;
        }
        let was_armed = self.is_armed();
        self.on_rejected(listeners);
        !was_armed
    }

    /// A scroll or click happened. Removes both listeners and retries
    /// playback once; a second rejection is swallowed. Returns whether a
    /// retry happened.
    pub fn on_user_gesture<M: MediaElement>(&mut self, media: &mut M, listeners: &mut ListenerRegistry) -> bool {
        if !self.disarm(listeners) {
            return false;
        }
        self.retried = true;
        if let Err(e) = media.play() {
            motion_log!("[media] retry after gesture failed: {}", e);
        }
        true
    }

    /// Remove the fallback listeners if armed. Returns whether they were.
    pub fn disarm(&mut self, listeners: &mut ListenerRegistry) -> bool {
        match self.armed.take() {
            Some((scroll, click)) => {
                listeners.remove(scroll);
                listeners.remove(click);
                true
            }
            None => false,
        }
    }
}

/// One media element with its guard
#[derive(Debug)]
pub struct MediaSlot<M> {
    pub element: M,
    pub guard: AutoplayGuard,
}

/// Registered media elements, addressed by host-assigned ids
#[derive(Debug)]
pub struct MediaSet<M> {
    slots: Vec<(u32, MediaSlot<M>)>,
}

impl<M> Default for MediaSet<M> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<M: MediaElement> MediaSet<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the element under `id`
    pub fn insert(&mut self, id: u32, element: M, listeners: &mut ListenerRegistry) {
        self.remove(id, listeners);
        self.slots.push((
            id,
            MediaSlot {
                element,
                guard: AutoplayGuard::new(),
            },
        ));
    }

    pub fn remove(&mut self, id: u32, listeners: &mut ListenerRegistry) -> Option<M> {
        let idx = self.slots.iter().position(|(i, _)| *i == id)?;
        let (_, mut slot) = self.slots.remove(idx);
        slot.guard.disarm(listeners);
        Some(slot.element)
    }

    pub fn get(&self, id: u32) -> Option<&M> {
        self.slots.iter().find(|(i, _)| *i == id).map(|(_, s)| &s.element)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut M> {
        self.slot_mut(id).map(|s| &mut s.element)
    }

    fn slot_mut(&mut self, id: u32) -> Option<&mut MediaSlot<M>> {
        self.slots.iter_mut().find(|(i, _)| *i == id).map(|(_, s)| s)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn play(&mut self, id: u32, listeners: &mut ListenerRegistry) -> Result<(), MotionError> {
        let slot = self.slot_mut(id).ok_or_else(|| MotionError::MissingTarget {
            region: format!("media#{}", id),
        })?;
        slot.guard.ensure_play(&mut slot.element, listeners)
    }

    pub fn pause(&mut self, id: u32) {
        if let Some(slot) = self.slot_mut(id) {
            slot.element.pause();
        }
    }

    /// Asynchronous rejection reported by the host after `play` returned
    pub fn report_rejected(&mut self, id: u32, listeners: &mut ListenerRegistry) {
        if let Some(slot) = self.slot_mut(id) {
            motion_warn!("[media] {}", MotionError::AutoplayBlocked { media: id });
            slot.guard.on_async_rejected(listeners);
        }
    }

    /// Drain rejections the elements caught since the last poll into their
    /// guards. Returns how many fallbacks were armed.
    pub fn poll_rejections(&mut self, listeners: &mut ListenerRegistry) -> usize {
        let mut armed = 0;
        for (id, slot) in self.slots.iter_mut() {
            if !slot.element.take_rejection() {
                continue;
            }
            if !slot.guard.retried {
                motion_warn!("[media] {}", MotionError::AutoplayBlocked { media: *id });
            }
            if slot.guard.on_async_rejected(listeners) {
                armed += 1;
            }
        }
        armed
    }

    /// Route a scroll or click to every armed guard. Returns retry count.
    pub fn on_user_gesture(&mut self, listeners: &mut ListenerRegistry) -> usize {
        let mut retried = 0;
        for (_, slot) in self.slots.iter_mut() {
            if slot.guard.on_user_gesture(&mut slot.element, listeners) {
                retried += 1;
            }
        }
        retried
    }

    pub fn pause_all(&mut self) {
        for (_, slot) in self.slots.iter_mut() {
            slot.element.pause();
        }
    }

    /// Pause and drop everything, removing armed listeners
    pub fn clear(&mut self, listeners: &mut ListenerRegistry) {
        for (_, slot) in self.slots.iter_mut() {
            slot.guard.disarm(listeners);
            slot.element.pause();
        }
        self.slots.clear();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Media that rejects `play` while `blocked` is set. With `deferred`
    /// the rejection arrives later, the way a browser promise rejects.
    #[derive(Debug, Default)]
    pub(crate) struct FakeVideo {
        pub blocked: bool,
        pub deferred: bool,
        pub rejection: bool,
        pub paused: bool,
        pub play_calls: u32,
    }

    impl FakeVideo {
        pub(crate) fn blocked() -> Self {
            Self {
                blocked: true,
                paused: true,
                ..Self::default()
            }
        }

        pub(crate) fn deferred() -> Self {
            Self {
                deferred: true,
                ..Self::blocked()
            }
        }
    }

    impl MediaElement for FakeVideo {
        fn play(&mut self) -> Result<(), MotionError> {
            self.play_calls += 1;
            if !self.blocked {
                self.paused = false;
                Ok(())
            } else if self.deferred {
                self.rejection = true;
                Ok(())
            } else {
                Err(MotionError::AutoplayBlocked { media: 0 })
            }
        }

        fn take_rejection(&mut self) -> bool {
            std::mem::take(&mut self.rejection)
        }

        fn pause(&mut self) {
            self.paused = true;
        }

        fn is_paused(&self) -> bool {
            self.paused
        }
    }

    #[test]
    fn rejection_arms_one_retry_and_cleans_up() {
        let mut listeners = ListenerRegistry::new();
        let mut video = FakeVideo::blocked();
        let mut guard = AutoplayGuard::new();

        assert!(guard.ensure_play(&mut video, &mut listeners).is_err());
        assert_eq!(listeners.count(ListenerKind::Scroll), 1);
        assert_eq!(listeners.count(ListenerKind::Click), 1);

        // still blocked: retry fails silently
        assert!(guard.on_user_gesture(&mut video, &mut listeners));
        assert_eq!(video.play_calls, 2);
        assert_eq!(listeners.total(), 0);

        assert!(!guard.on_user_gesture(&mut video, &mut listeners));
        assert_eq!(video.play_calls, 2);
    }

    #[test]
    fn gesture_retry_starts_playback() {
        let mut listeners = ListenerRegistry::new();
        let mut set = MediaSet::new();
        set.insert(1, FakeVideo::blocked(), &mut listeners);
        assert!(set.play(1, &mut listeners).is_err());

        if let Some(v) = set.get_mut(1) {
            v.blocked = false;
        }
        assert_eq!(set.on_user_gesture(&mut listeners), 1);
        assert!(!set.get(1).unwrap().is_paused());
        assert_eq!(set.on_user_gesture(&mut listeners), 0);
    }

    #[test]
    fn clear_removes_armed_listeners() {
        let mut listeners = ListenerRegistry::new();
        let mut set = MediaSet::new();
        set.insert(3, FakeVideo::blocked(), &mut listeners);
        set.report_rejected(3, &mut listeners);
        assert_eq!(listeners.total(), 2);
        set.clear(&mut listeners);
        assert_eq!(listeners.total(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn every_rejected_entry_arms_a_fresh_fallback() {
        let mut listeners = ListenerRegistry::new();
        let mut video = FakeVideo::blocked();
        let mut guard = AutoplayGuard::new();

        assert!(guard.ensure_play(&mut video, &mut listeners).is_err());
        assert!(guard.on_user_gesture(&mut video, &mut listeners));
        assert!(!guard.is_armed());

        // the next entry is a new attempt
        assert!(guard.ensure_play(&mut video, &mut listeners).is_err());
        assert!(guard.is_armed());
        assert_eq!(listeners.count(ListenerKind::Click), 1);
        assert_eq!(video.play_calls, 3);
    }

    #[test]
    fn promise_rejection_arms_on_poll_and_retry_rejection_is_swallowed() {
        let mut listeners = ListenerRegistry::new();
        let mut set = MediaSet::new();
        set.insert(2, FakeVideo::deferred(), &mut listeners);

        assert!(set.play(2, &mut listeners).is_ok());
        assert_eq!(listeners.total(), 0);
        assert_eq!(set.poll_rejections(&mut listeners), 1);
        assert_eq!(listeners.count(ListenerKind::Scroll), 1);
        assert_eq!(listeners.count(ListenerKind::Click), 1);

        assert_eq!(set.on_user_gesture(&mut listeners), 1);
        assert_eq!(set.get(2).unwrap().play_calls, 2);
        assert_eq!(set.poll_rejections(&mut listeners), 0);
        assert_eq!(listeners.total(), 0);
        assert_eq!(set.poll_rejections(&mut listeners), 0);
    }

    #[test]
    fn unknown_media_is_a_missing_target() {
        let mut listeners = ListenerRegistry::new();
        let mut set: MediaSet<FakeVideo> = MediaSet::new();
        assert!(matches!(set.play(9, &mut listeners), Err(MotionError::MissingTarget { .. })));
    }
}
