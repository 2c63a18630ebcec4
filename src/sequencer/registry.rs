use super::effect::Effect;
use super::threshold::Layout;
use super::toggle::ToggleAction;
use super::trigger::{Scrub, Trigger, TriggerEvent, TriggerId, TriggerSpec};

/// One event from one trigger, with everything the page shell must do
#[derive(Clone, Debug, PartialEq)]
pub struct Fired {
    pub trigger: TriggerId,
    pub owner: String,
    pub event: TriggerEvent,
    pub effects: Vec<Effect>,
    /// Timeline key and the action to apply to it
    pub toggle: Option<(String, ToggleAction)>,
}

/// Scrub progress to apply to a timeline
#[derive(Clone, Debug, PartialEq)]
pub struct ScrubUpdate {
    pub timeline: String,
    pub progress: f32,
}

/// Every live trigger on the page, grouped by owning section
#[derive(Debug, Default)]
pub struct TriggerRegistry {
    triggers: Vec<Trigger>,
    next_id: u32,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the owner's triggers with `specs`. Registering the same
    /// owner twice leaves exactly one set alive. Specs whose region is not
    /// in `layout` are skipped with a warning.
    pub fn register(&mut self, owner: &str, specs: Vec<TriggerSpec>, layout: &Layout) -> Vec<TriggerId> {
        self.kill_owner(owner);

        let mut ids = Vec::with_capacity(specs.len());
        for spec in specs {
            self.next_id += 1;
            let id = TriggerId(self.next_id);
            let region = spec.region.clone();
            match Trigger::new(id, owner, spec, layout) {
                Some(trigger) => {
                    self.triggers.push(trigger);
                    ids.push(id);
                }
                None => {
                    motion_warn!("[sequencer] {}: region '{}' not found, trigger skipped", owner, region);
                }
            }
        }
        ids
    }

    /// Remove every trigger of `owner`; returns how many were removed
    pub fn kill_owner(&mut self, owner: &str) -> usize {
        let before = self.triggers.len();
        self.triggers.retain(|t| t.owner != owner);
        before - self.triggers.len()
    }

    pub fn kill_all(&mut self) {
        self.triggers.clear();
    }

    /// Live triggers, `once` triggers that already fired excluded
    pub fn count(&self) -> usize {
        self.triggers.iter().filter(|t| !t.is_killed()).count()
    }

    pub fn count_for(&self, owner: &str) -> usize {
        self.triggers.iter().filter(|t| t.owner == owner && !t.is_killed()).count()
    }

    pub fn get(&self, id: TriggerId) -> Option<&Trigger> {
        self.triggers.iter().find(|t| t.id == id)
    }

    /// Re-measure after layout changes. Triggers whose region vanished are
    /// dropped.
    pub fn refresh(&mut self, layout: &Layout) {
        self.triggers.retain_mut(|t| {
            let ok = t.measure(layout);
            if !ok {
                motion_warn!("[sequencer] {}: region '{}' gone on refresh", t.owner, t.spec.region);
            }
            ok
        });
    }

    /// Feed a scroll offset; returns fired events in registration order
    pub fn update(&mut self, scroll: f32) -> Vec<Fired> {
        let mut fired = Vec::new();
        for t in self.triggers.iter_mut() {
            for event in t.update(scroll) {
                let toggle = t.spec.timeline.as_ref().and_then(|tl| {
                    let action = t.spec.toggle.for_event(event);
                    if t.spec.scrub == Scrub::Off && action != ToggleAction::None {
                        Some((tl.clone(), action))
                    } else {
                        None
                    }
                });
                fired.push(Fired {
                    trigger: t.id,
                    owner: t.owner.clone(),
                    event,
                    effects: t.spec.effects(event).to_vec(),
                    toggle,
                });
            }
        }
        // Fired `once` triggers are dead weight from here on
        self.triggers.retain(|t| !t.is_killed());
        fired
    }

    /// Advance every scrubbed trigger by `dt` seconds
    pub fn scrub(&mut self, dt: f32) -> Vec<ScrubUpdate> {
        let mut out = Vec::new();
        for t in self.triggers.iter_mut() {
            if let Some(progress) = t.advance_scrub(dt) {
                if let Some(timeline) = t.spec.timeline.as_ref() {
                    out.push(ScrubUpdate {
                        timeline: timeline.clone(),
                        progress,
                    });
                }
            }
        }
        out
    }
}
