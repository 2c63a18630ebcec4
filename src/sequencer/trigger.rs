use super::effect::Effect;
use super::threshold::{Layout, Threshold};
use super::toggle::ToggleActions;

/// Where the scroll position is relative to the trigger range
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Before,
    Inside,
    After,
}

/// Phase machine: `Below -> Entered -> Left -> EnteredBack -> LeftBack`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Below,
    Entered,
    EnteredBack,
    Left,
    LeftBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

impl TriggerEvent {
    fn phase(self) -> Phase {
        match self {
            TriggerEvent::Enter => Phase::Entered,
            TriggerEvent::Leave => Phase::Left,
            TriggerEvent::EnterBack => Phase::EnteredBack,
            TriggerEvent::LeaveBack => Phase::LeftBack,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scrub {
    Off,
    /// Progress follows scroll exactly (`scrub: true`)
    Immediate,
    /// Progress catches up over this many seconds (`scrub: n`)
    Smoothed(f32),
}

/// Declarative trigger description, resolved against a `Layout` when
/// registered.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerSpec {
    pub region: String,
    pub start: Threshold,
    pub end: Threshold,
    pub once: bool,
    pub scrub: Scrub,
    /// Timeline driven by toggle actions or scrub
    pub timeline: Option<String>,
    pub toggle: ToggleActions,
    pub on_enter: Vec<Effect>,
    pub on_leave: Vec<Effect>,
    pub on_enter_back: Vec<Effect>,
    pub on_leave_back: Vec<Effect>,
}

impl TriggerSpec {
    pub fn new(region: &str, start: Threshold, end: Threshold) -> Self {
        Self {
            region: region.to_string(),
            start,
            end,
            once: false,
            scrub: Scrub::Off,
            timeline: None,
            toggle: ToggleActions::default(),
            on_enter: Vec::new(),
            on_leave: Vec::new(),
            on_enter_back: Vec::new(),
            on_leave_back: Vec::new(),
        }
    }

    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    pub fn scrub(mut self, scrub: Scrub, timeline: &str) -> Self {
        self.scrub = scrub;
        self.timeline = Some(timeline.to_string());
        self
    }

    pub fn toggle(mut self, toggle: ToggleActions, timeline: &str) -> Self {
        self.toggle = toggle;
        self.timeline = Some(timeline.to_string());
        self
    }

    pub fn on(mut self, event: TriggerEvent, effect: Effect) -> Self {
        match event {
            TriggerEvent::Enter => self.on_enter.push(effect),
            TriggerEvent::Leave => self.on_leave.push(effect),
            TriggerEvent::EnterBack => self.on_enter_back.push(effect),
            TriggerEvent::LeaveBack => self.on_leave_back.push(effect),
        }
        self
    }

    pub fn effects(&self, event: TriggerEvent) -> &[Effect] {
        match event {
            TriggerEvent::Enter => &self.on_enter,
            TriggerEvent::Leave => &self.on_leave,
            TriggerEvent::EnterBack => &self.on_enter_back,
            TriggerEvent::LeaveBack => &self.on_leave_back,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(pub u32);

/// A registered trigger
#[derive(Clone, Debug)]
pub struct Trigger {
    pub id: TriggerId,
    pub owner: String,
    pub spec: TriggerSpec,
    start_px: f32,
    end_px: f32,
    zone: Zone,
    phase: Phase,
    killed: bool,
    /// Displayed scrub progress
    progress: f32,
    /// Scroll-derived progress the display converges to
    target: f32,
}

impl Trigger {
    /// `None` when the region has not been measured
    pub fn new(id: TriggerId, owner: &str, spec: TriggerSpec, layout: &Layout) -> Option<Self> {
        let mut trigger = Self {
            id,
            owner: owner.to_string(),
            spec,
            start_px: 0.0,
            end_px: 0.0,
            zone: Zone::Before,
            phase: Phase::Below,
            killed: false,
            progress: 0.0,
            target: 0.0,
        };
        if trigger.measure(layout) {
            Some(trigger)
        } else {
            None
        }
    }

    /// Recompute start/end offsets. False when the region is gone.
    pub fn measure(&mut self, layout: &Layout) -> bool {
        let Some(region) = layout.region(&self.spec.region) else {
            return false;
        };
        self.start_px = self.spec.start.scroll_offset(region, layout.viewport_height);
        self.end_px = self
            .spec
            .end
            .scroll_offset(region, layout.viewport_height)
            .max(self.start_px);
        true
    }

    pub fn range(&self) -> (f32, f32) {
        (self.start_px, self.end_px)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn is_killed(&self) -> bool {
        self.killed
    }

    pub fn kill(&mut self) {
        self.killed = true;
    }

    pub fn is_active(&self) -> bool {
        self.zone == Zone::Inside
    }

    fn zone_of(&self, scroll: f32) -> Zone {
        if scroll < self.start_px {
            Zone::Before
        } else if scroll > self.end_px {
            Zone::After
        } else {
            Zone::Inside
        }
    }

    /// Feed a new scroll offset; returns the events crossed, in traversal
    /// order. A `once` trigger kills itself right after its first enter.
    pub fn update(&mut self, scroll: f32) -> Vec<TriggerEvent> {
        if self.killed {
            return Vec::new();
        }
        self.target = self.scroll_progress(scroll);
        if self.spec.scrub == Scrub::Immediate {
            self.progress = self.target;
        }

        let next = self.zone_of(scroll);
        let events: Vec<TriggerEvent> = match (self.zone, next) {
            (Zone::Before, Zone::Inside) => vec![TriggerEvent::Enter],
            (Zone::Before, Zone::After) => vec![TriggerEvent::Enter, TriggerEvent::Leave],
            (Zone::Inside, Zone::After) => vec![TriggerEvent::Leave],
            (Zone::Inside, Zone::Before) => vec![TriggerEvent::LeaveBack],
            (Zone::After, Zone::Inside) => vec![TriggerEvent::EnterBack],
            (Zone::After, Zone::Before) => vec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack],
            _ => Vec::new(),
        };
        self.zone = next;

        let mut fired = Vec::with_capacity(events.len());
        for event in events {
            self.phase = event.phase();
            fired.push(event);
            if self.spec.once && event == TriggerEvent::Enter {
                self.killed = true;
                break;
            }
        }
        fired
    }

    /// Scroll fraction through the range, clamped to [0, 1]
    pub fn scroll_progress(&self, scroll: f32) -> f32 {
        let span = self.end_px - self.start_px;
        if span <= 0.0 {
            return if scroll >= self.end_px { 1.0 } else { 0.0 };
        }
        ((scroll - self.start_px) / span).clamp(0.0, 1.0)
    }

    /// Move displayed scrub progress toward the scroll progress. Returns the
    /// progress to apply, or `None` for non-scrubbed triggers.
    pub fn advance_scrub(&mut self, dt: f32) -> Option<f32> {
        match self.spec.scrub {
            Scrub::Off => None,
            Scrub::Immediate => Some(self.progress),
            Scrub::Smoothed(seconds) => {
                if seconds <= 0.0 {
                    self.progress = self.target;
                } else {
                    let k = 1.0 - (-dt.max(0.0) * 4.0 / seconds).exp();
                    self.progress += (self.target - self.progress) * k;
                    if (self.target - self.progress).abs() < 1e-4 {
                        self.progress = self.target;
                    }
                }
                Some(self.progress)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::Region;

    fn layout() -> Layout {
        let mut l = Layout::new(1000.0);
        l.set_region("video", Region::new(2000.0, 500.0));
        l
    }

    fn spec() -> TriggerSpec {
        TriggerSpec::new("video", "top 80%".parse().unwrap(), "bottom 20%".parse().unwrap())
    }

    #[test]
    fn full_cycle_fires_each_event_once() {
        let mut t = Trigger::new(TriggerId(1), "s", spec(), &layout()).unwrap();
        assert_eq!(t.range(), (1200.0, 2300.0));
        assert!(t.update(0.0).is_empty());
        assert_eq!(t.update(1500.0), vec![TriggerEvent::Enter]);
        assert!(t.update(1600.0).is_empty());
        assert_eq!(t.update(2400.0), vec![TriggerEvent::Leave]);
        assert_eq!(t.phase(), Phase::Left);
        assert_eq!(t.update(2000.0), vec![TriggerEvent::EnterBack]);
        assert_eq!(t.phase(), Phase::EnteredBack);
        assert_eq!(t.update(100.0), vec![TriggerEvent::LeaveBack]);
        assert_eq!(t.phase(), Phase::LeftBack);
        assert_eq!(t.update(1300.0), vec![TriggerEvent::Enter]);
    }

    #[test]
    fn jumping_over_range_fires_enter_then_leave() {
        let mut t = Trigger::new(TriggerId(1), "s", spec(), &layout()).unwrap();
        assert_eq!(t.update(5000.0), vec![TriggerEvent::Enter, TriggerEvent::Leave]);
        assert_eq!(t.update(0.0), vec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack]);
    }

    #[test]
    fn once_kills_after_first_enter() {
        let mut t = Trigger::new(TriggerId(1), "s", spec().once(), &layout()).unwrap();
        assert_eq!(t.update(5000.0), vec![TriggerEvent::Enter]);
        assert!(t.is_killed());
        assert!(t.update(0.0).is_empty());
        assert!(t.update(1500.0).is_empty());
    }

    #[test]
    fn missing_region_is_not_registered() {
        let s = TriggerSpec::new("nowhere", "top top".parse().unwrap(), "bottom top".parse().unwrap());
        assert!(Trigger::new(TriggerId(1), "s", s, &layout()).is_none());
    }

    #[test]
    fn smoothed_scrub_converges() {
        let mut t = Trigger::new(TriggerId(1), "s", spec().scrub(Scrub::Smoothed(1.0), "zoom"), &layout()).unwrap();
        t.update(1750.0);
        let first = t.advance_scrub(1.0 / 60.0).unwrap();
        assert!(first > 0.0 && first < 0.5);
        for _ in 0..600 {
            t.advance_scrub(1.0 / 60.0);
        }
        assert_eq!(t.advance_scrub(1.0 / 60.0), Some(0.5));
    }

    #[test]
    fn immediate_scrub_tracks_scroll() {
        let mut t = Trigger::new(TriggerId(1), "s", spec().scrub(Scrub::Immediate, "zoom"), &layout()).unwrap();
        t.update(1475.0);
        assert_eq!(t.advance_scrub(0.0), Some(0.25));
    }
}
