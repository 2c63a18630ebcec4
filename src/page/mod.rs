//! Page shell - mounts sections and routes scroll, gestures and frames
//! through the sequencer.
//!
//! Per scroll event the order is fixed: caught play rejections, then
//! pending autoplay retries, then the header, then triggers. Per frame:
//! caught play rejections, layout refresh, scrub, timelines, counters,
//! background, logo column.

use std::collections::HashMap;

use crate::animation::{Counter, Prop, PropertyStore, Timeline};
use crate::core::{ListenerId, ListenerKind, ListenerRegistry, MotionError};
use crate::domain::{Color, FeedCatalog, LogoCatalog, PageConfig};
use crate::sequencer::{Effect, Fired, Layout, MediaElement, MediaSet, Region, ThemeService, TriggerRegistry};

pub mod facade;
pub mod header;
pub mod logo_column;
pub mod sections;

pub use facade::PageMotion;
pub use header::{HeaderState, NAV_ITEMS};
pub use logo_column::LogoColumn;
pub use sections::{PlanInput, Section, SectionPlan};

pub struct PageCore<M: MediaElement> {
    config: PageConfig,
    layout: Layout,
    registry: TriggerRegistry,
    timelines: HashMap<String, Timeline>,
    counters: Vec<Counter>,
    props: PropertyStore,
    theme: ThemeService,
    media: MediaSet<M>,
    listeners: ListenerRegistry,
    base_listeners: Vec<ListenerId>,
    column_listener: Option<ListenerId>,
    header: HeaderState,
    logo_column: LogoColumn,
    logos: LogoCatalog,
    feed: FeedCatalog,
    mounted: Vec<Section>,
    refresh_in_ms: Option<f64>,
    scroll: f32,
    destroyed: bool,
}

impl<M: MediaElement> PageCore<M> {
    pub fn new(config: PageConfig, viewport_height: f32) -> Self {
        let mut listeners = ListenerRegistry::new();
        let base_listeners = vec![listeners.add(ListenerKind::Scroll), listeners.add(ListenerKind::Resize)];
        Self {
            layout: Layout::new(viewport_height),
            registry: TriggerRegistry::new(),
            timelines: HashMap::new(),
            counters: Vec::new(),
            props: PropertyStore::new(),
            theme: ThemeService::new(config.base_background),
            media: MediaSet::new(),
            listeners,
            base_listeners,
            column_listener: None,
            header: HeaderState::new(config.header_scroll_threshold),
            logo_column: LogoColumn::new(0, config.logo_rotate_ms),
            logos: LogoCatalog::empty(),
            feed: FeedCatalog::builtin(),
            mounted: Vec::new(),
            refresh_in_ms: None,
            scroll: 0.0,
            destroyed: false,
            config,
        }
    }

    // === LAYOUT ===

    pub fn set_viewport_height(&mut self, height: f32) {
        self.layout.viewport_height = height;
        self.registry.refresh(&self.layout);
    }

    /// Record a region's document position. Takes effect for triggers on
    /// the next refresh.
    pub fn set_region(&mut self, name: &str, top: f32, height: f32) {
        self.layout.set_region(name, Region::new(top, height));
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Re-measure every trigger and re-evaluate the current scroll
    pub fn refresh(&mut self) {
        self.refresh_in_ms = None;
        self.registry.refresh(&self.layout);
        let fired = self.registry.update(self.scroll);
        self.dispatch(fired);
    }

    // === CONTENT ===

    /// Logos document as fetched by the host; failures leave the list empty.
    /// A mounted logo section is re-planned for the new list.
    pub fn load_logos(&mut self, fetched: Result<&str, &str>) {
        self.logos = LogoCatalog::load_or_empty(fetched);
        self.logo_column.set_len(self.logos.len());
        if self.mounted.contains(&Section::Logos) {
            self.mount_section(Section::Logos);
        }
    }

    pub fn logos(&self) -> &LogoCatalog {
        &self.logos
    }

    pub fn load_feed(&mut self, json: &str) -> Result<(), MotionError> {
        self.feed = FeedCatalog::from_json(json)?;
        Ok(())
    }

    pub fn feed(&self) -> &FeedCatalog {
        &self.feed
    }

    // === MEDIA ===

    pub fn add_media(&mut self, id: u32, element: M) {
        self.media.insert(id, element, &mut self.listeners);
    }

    pub fn media(&self, id: u32) -> Option<&M> {
        self.media.get(id)
    }

    /// The host saw `play()` reject asynchronously
    pub fn report_play_rejected(&mut self, id: u32) {
        self.media.report_rejected(id, &mut self.listeners);
    }

    // === SECTIONS ===

    /// Register the section's triggers and timelines. Mounting an already
    /// mounted section replaces its previous registration.
    pub fn mount_section(&mut self, section: Section) -> usize {
        if self.destroyed {
            return 0;
        }
        self.clear_section_state(section);

        let plan = sections::plan(
            section,
            PlanInput {
                logo_count: self.logos.len(),
                feed_count: self.feed.len(),
            },
        );
        let ids = self.registry.register(section.key(), plan.triggers, &self.layout);
        for (key, tl) in plan.timelines {
            tl.sample(&mut self.props);
            self.timelines.insert(key, tl);
        }
        for counter in plan.counters {
            self.props.set(counter.id(), Prop::Value, 0.0);
            self.counters.push(counter);
        }
        for key in plan.autoplay {
            if let Some(tl) = self.timelines.get_mut(&key) {
                tl.play();
            }
        }
        if section == Section::Logos && self.column_listener.is_none() {
            self.column_listener = Some(self.listeners.add(ListenerKind::Interval));
        }

        if !self.mounted.contains(&section) {
            self.mounted.push(section);
        }
        self.refresh_in_ms = Some(self.config.refresh_delay_ms);
        motion_log!("[page] mounted {} with {} triggers", section.key(), ids.len());
        ids.len()
    }

    /// Kill the section's triggers and forget its animation state
    pub fn unmount_section(&mut self, section: Section) {
        self.clear_section_state(section);
        self.mounted.retain(|s| *s != section);
        self.theme.retract(section.key(), 0.0, Default::default());
        if section == Section::Videos {
            for id in sections::VIDEO_IDS {
                self.media.pause(id);
            }
        }
        if section == Section::Logos {
            if let Some(id) = self.column_listener.take() {
                self.listeners.remove(id);
            }
        }
    }

    fn clear_section_state(&mut self, section: Section) {
        let prefix = format!("{}/", section.key());
        self.registry.kill_owner(section.key());
        self.timelines.retain(|k, _| !k.starts_with(&prefix));
        self.counters.retain(|c| !c.id().starts_with(&prefix));
        self.props.remove_prefix(&prefix);
    }

    pub fn is_mounted(&self, section: Section) -> bool {
        self.mounted.contains(&section)
    }

    // === EVENTS ===

    pub fn on_scroll(&mut self, scroll_y: f32) {
        if self.destroyed {
            return;
        }
        self.media.poll_rejections(&mut self.listeners);
        self.media.on_user_gesture(&mut self.listeners);
        self.header.on_scroll(scroll_y);
        self.scroll = scroll_y;
        let fired = self.registry.update(scroll_y);
        self.dispatch(fired);
    }

    pub fn on_click(&mut self) {
        if self.destroyed {
            return;
        }
        self.media.poll_rejections(&mut self.listeners);
        self.media.on_user_gesture(&mut self.listeners);
    }

    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut HeaderState {
        &mut self.header
    }

    fn dispatch(&mut self, fired: Vec<Fired>) {
        for f in fired {
            if let Some((key, action)) = f.toggle.as_ref() {
                match self.timelines.get_mut(key) {
                    Some(tl) => action.apply(tl),
                    None => motion_warn!("[page] {}: no timeline '{}'", f.owner, key),
                }
            }
            for effect in f.effects {
                self.run_effect(&f.owner, effect);
            }
        }
    }

    fn run_effect(&mut self, owner: &str, effect: Effect) {
        match effect {
            Effect::PlayMedia(id) => match self.media.play(id, &mut self.listeners) {
                Ok(()) | Err(MotionError::AutoplayBlocked { .. }) => {}
                Err(e) => motion_warn!("[page] {}: {}", owner, e),
            },
            Effect::PauseMedia(id) => self.media.pause(id),
            Effect::Background { color, duration, ease } => self.theme.assert(owner, color, duration, ease),
            Effect::StartCounter(key) => match self.counters.iter_mut().find(|c| c.id() == key) {
                Some(counter) => counter.start(),
                None => motion_warn!("[page] {}: no counter '{}'", owner, key),
            },
        }
    }

    // === FRAME ===

    /// Advance every running animation by `dt_ms`
    pub fn tick(&mut self, dt_ms: f64) {
        if self.destroyed {
            return;
        }
        let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        let dt = (dt_ms / 1000.0) as f32;

        self.media.poll_rejections(&mut self.listeners);
        if let Some(left) = self.refresh_in_ms.as_mut() {
            *left -= dt_ms;
            if *left <= 0.0 {
                self.refresh();
            }
        }

        for update in self.registry.scrub(dt) {
            if let Some(tl) = self.timelines.get_mut(&update.timeline) {
                tl.set_progress(update.progress);
            }
        }
        for tl in self.timelines.values_mut() {
            tl.tick(dt);
            tl.sample(&mut self.props);
        }
        for counter in self.counters.iter_mut() {
            let shown = counter.tick(dt);
            self.props.set(counter.id(), Prop::Value, shown as f32);
        }
        self.theme.tick(dt);
        if self.mounted.contains(&Section::Logos) {
            self.logo_column.advance(dt_ms);
        }
    }

    // === READ-OUT ===

    pub fn background(&self) -> Color {
        self.theme.displayed()
    }

    pub fn theme(&self) -> &ThemeService {
        &self.theme
    }

    pub fn value(&self, target: &str, prop: Prop) -> Option<f32> {
        self.props.get(target, prop)
    }

    pub fn props(&self) -> &PropertyStore {
        &self.props
    }

    /// Displayed integer of a counter
    pub fn counter(&self, key: &str) -> Option<u32> {
        self.counters.iter().find(|c| c.id() == key).map(|c| c.display())
    }

    pub fn timeline(&self, key: &str) -> Option<&Timeline> {
        self.timelines.get(key)
    }

    pub fn timeline_count(&self) -> usize {
        self.timelines.len()
    }

    pub fn trigger_count(&self) -> usize {
        self.registry.count()
    }

    pub fn triggers_for(&self, section: Section) -> usize {
        self.registry.count_for(section.key())
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn logo_column(&self) -> &LogoColumn {
        &self.logo_column
    }

    // === TEARDOWN ===

    /// Unmount everything and detach all listeners. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        for section in self.mounted.clone() {
            self.unmount_section(section);
        }
        self.registry.kill_all();
        self.media.clear(&mut self.listeners);
        for id in self.base_listeners.drain(..) {
            self.listeners.remove(id);
        }
        self.theme.reset();
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

#[cfg(test)]
mod tests;
