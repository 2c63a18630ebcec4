//! Per-section trigger and timeline presets

use crate::animation::reveal::{card_reveal, letter_reveal, split_letters};
use crate::animation::{Counter, Ease, Position, Prop, Timeline, Tween};
use crate::domain::Color;
use crate::sequencer::{Anchor, Effect, Scrub, Threshold, ToggleActions, TriggerEvent, TriggerSpec};

/// Page sections that own triggers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Videos,
    Logos,
    GreatWork,
    Feed,
}

impl Section {
    pub const ALL: [Section; 5] = [Section::Hero, Section::Videos, Section::Logos, Section::GreatWork, Section::Feed];

    /// Owner key; also the prefix of every timeline and element key
    pub fn key(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Videos => "videos",
            Section::Logos => "logos",
            Section::GreatWork => "great",
            Section::Feed => "feed",
        }
    }

    pub fn from_key(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Media ids of the four showcase videos
pub const VIDEO_IDS: [u32; 4] = [1, 2, 3, 4];

pub const GREAT_LINE_1: &str = "Great work for";
pub const GREAT_LINE_2: &str = "great people.";
pub const COUNTER_TARGETS: [u32; 3] = [100, 15, 80];

const PURPLE: Color = Color::rgb(0xb4, 0x88, 0xf1);
const CREAM: Color = Color::rgb(0xf3, 0xf3, 0xe9);

/// Sizes of host-rendered lists the presets depend on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanInput {
    pub logo_count: usize,
    pub feed_count: usize,
}

/// Everything a section registers on mount
#[derive(Debug, Default)]
pub struct SectionPlan {
    pub triggers: Vec<TriggerSpec>,
    pub timelines: Vec<(String, Timeline)>,
    pub counters: Vec<Counter>,
    /// Timelines that play as soon as the section mounts
    pub autoplay: Vec<String>,
}

const fn th(element: Anchor, viewport: Anchor) -> Threshold {
    Threshold::new(element, viewport)
}

/// Region name of the i-th showcase video
pub fn video_region(id: u32) -> String {
    format!("video{}", id)
}

pub fn counter_region(i: usize) -> String {
    format!("counter/{}", i)
}

pub fn plan(section: Section, input: PlanInput) -> SectionPlan {
    match section {
        Section::Hero => hero(),
        Section::Videos => videos(),
        Section::Logos => logos(input.logo_count),
        Section::GreatWork => great_work(),
        Section::Feed => feed(input.feed_count),
    }
}

fn hero() -> SectionPlan {
    let mut tl = Timeline::new();
    tl.add(Tween::from_to("hero/content", Prop::Y, 100.0, 0.0, 1.0).ease(Ease::Power3Out), Position::At(0.0));
    tl.add(Tween::from_to("hero/content", Prop::Opacity, 0.0, 1.0, 1.0).ease(Ease::Power3Out), Position::At(0.0));
    SectionPlan {
        timelines: vec![("hero/entrance".to_string(), tl)],
        autoplay: vec!["hero/entrance".to_string()],
        ..SectionPlan::default()
    }
}

/// Play on enter / enter-back, pause on leave (and leave-back if asked)
fn play_pause(id: u32, start: Threshold, end: Threshold, pause_on_leave_back: bool) -> TriggerSpec {
    let mut spec = TriggerSpec::new(&video_region(id), start, end)
        .on(TriggerEvent::Enter, Effect::PlayMedia(id))
        .on(TriggerEvent::EnterBack, Effect::PlayMedia(id))
        .on(TriggerEvent::Leave, Effect::PauseMedia(id));
    if pause_on_leave_back {
        spec = spec.on(TriggerEvent::LeaveBack, Effect::PauseMedia(id));
    }
    spec
}

fn background(color: Color, duration: f32, ease: Ease) -> Effect {
    Effect::Background { color, duration, ease }
}

fn videos() -> SectionPlan {
    let mut plan = SectionPlan::default();

    // video 1: playback, zoom scrub, purple background
    plan.triggers.push(play_pause(1, th(Anchor::Top, Anchor::Percent(10.0)), th(Anchor::Bottom, Anchor::Percent(20.0)), true));
    plan.triggers.push(
        TriggerSpec::new(&video_region(1), th(Anchor::Top, Anchor::Bottom), th(Anchor::Bottom, Anchor::Top))
            .scrub(Scrub::Smoothed(1.0), "videos/zoom"),
    );
    plan.triggers.push(
        TriggerSpec::new(&video_region(1), th(Anchor::Top, Anchor::Percent(10.0)), th(Anchor::Bottom, Anchor::Percent(30.0)))
            .on(TriggerEvent::Enter, background(PURPLE, 0.8, Ease::Power2Out))
            .on(TriggerEvent::LeaveBack, background(CREAM, 0.8, Ease::Power2Out)),
    );

    let mut zoom = Timeline::new();
    let v = "videos/video1";
    zoom.add(Tween::from_to(v, Prop::Scale, 0.8, 1.3, 0.5).ease(Ease::Power2Out), Position::At(0.0));
    zoom.add(Tween::from_to(v, Prop::BorderRadius, 30.0, 0.0, 0.5).ease(Ease::Power2Out), Position::At(0.0));
    zoom.add(Tween::from_to(v, Prop::Scale, 1.3, 0.8, 0.5).ease(Ease::Power2Out), Position::At(0.5));
    zoom.add(Tween::from_to(v, Prop::BorderRadius, 0.0, 30.0, 0.5).ease(Ease::Power2Out), Position::At(0.5));
    plan.timelines.push(("videos/zoom".to_string(), zoom));

    // video 2: playback, back to cream
    plan.triggers.push(play_pause(2, th(Anchor::Top, Anchor::Percent(80.0)), th(Anchor::Bottom, Anchor::Percent(20.0)), true));
    plan.triggers.push(
        TriggerSpec::new(&video_region(2), th(Anchor::Top, Anchor::Percent(10.0)), th(Anchor::Bottom, Anchor::Percent(90.0)))
            .on(TriggerEvent::Enter, background(CREAM, 1.0, Ease::Power2InOut))
            .on(TriggerEvent::LeaveBack, background(PURPLE, 1.0, Ease::Power2InOut)),
    );

    // videos 3 and 4: start at mid-viewport, no pause on leave-back
    for id in [3, 4] {
        plan.triggers.push(play_pause(id, th(Anchor::Top, Anchor::Center), th(Anchor::Bottom, Anchor::Top), false));
    }
    plan
}

fn logos(logo_count: usize) -> SectionPlan {
    let mut tl = Timeline::new();
    let title = "logos/title";
    tl.add(Tween::from_to(title, Prop::YPercent, 100.0, 0.0, 0.8).ease(Ease::Power2Out), Position::At(0.0));
    tl.add(Tween::from_to(title, Prop::Opacity, 0.0, 1.0, 0.8).ease(Ease::Power2Out), Position::At(0.0));

    // Each logo is appended after the previous one, plus its own delay
    for i in 0..logo_count {
        let key = format!("logos/logo/{}", i);
        let delay = i as f32 * 0.15;
        let start = tl.duration() + 0.1;
        tl.add(Tween::from_to(&key, Prop::Y, 50.0, 0.0, 0.6).ease(Ease::Power2Out).delay(delay), Position::At(start));
        tl.add(Tween::from_to(&key, Prop::Opacity, 0.0, 1.0, 0.6).ease(Ease::Power2Out).delay(delay), Position::At(start));
    }

    SectionPlan {
        triggers: vec![TriggerSpec::new("logos", th(Anchor::Top, Anchor::Percent(80.0)), th(Anchor::Bottom, Anchor::Percent(20.0)))
            .toggle(ToggleActions::PLAY_REVERSE, "logos/reveal")],
        timelines: vec![("logos/reveal".to_string(), tl)],
        ..SectionPlan::default()
    }
}

fn great_work() -> SectionPlan {
    let mut letters = split_letters("great/line1", GREAT_LINE_1);
    letters.extend(split_letters("great/line2", GREAT_LINE_2));
    let mut title = letter_reveal(&letters, 80.0, 0.6, 0.04, Ease::Power3Out);
    title.add(Tween::from_to("great/emoji", Prop::Y, 40.0, 0.0, 0.6).ease(Ease::BackOut(1.7)).delay(0.5), Position::At(0.0));
    title.add(Tween::from_to("great/emoji", Prop::Opacity, 0.0, 1.0, 0.6).ease(Ease::BackOut(1.7)).delay(0.5), Position::At(0.0));

    let mut plan = SectionPlan {
        triggers: vec![TriggerSpec::new("great-work", th(Anchor::Top, Anchor::Percent(80.0)), th(Anchor::Bottom, Anchor::Top))
            .once()
            .toggle(ToggleActions::PLAY_ONCE, "great/title")],
        timelines: vec![("great/title".to_string(), title)],
        ..SectionPlan::default()
    };

    for (i, target) in COUNTER_TARGETS.iter().enumerate() {
        let key = format!("great/counter/{}", i);
        plan.triggers.push(
            TriggerSpec::new(&counter_region(i), th(Anchor::Top, Anchor::Percent(90.0)), th(Anchor::Bottom, Anchor::Top))
                .once()
                .on(TriggerEvent::Enter, Effect::StartCounter(key.clone())),
        );
        plan.counters.push(Counter::new(&key, *target));
    }
    plan
}

fn feed(feed_count: usize) -> SectionPlan {
    let cards: Vec<String> = (0..feed_count).map(|i| format!("feed/card/{}", i)).collect();
    let reveal = card_reveal(&cards, 0.7, 0.8, 0.15, Ease::Power2Out);

    let mut wrapper = Timeline::new();
    wrapper.add(Tween::from_to("feed/main-wrapper", Prop::Scale, 1.0, 0.9, 1.0).ease(Ease::Power2Out), Position::At(0.0));
    wrapper.add(Tween::from_to("feed/main-wrapper", Prop::BorderRadius, 0.0, 30.0, 1.0).ease(Ease::Power2Out), Position::At(0.0));

    SectionPlan {
        triggers: vec![
            TriggerSpec::new("feed", th(Anchor::Top, Anchor::Percent(80.0)), th(Anchor::Bottom, Anchor::Top))
                .toggle(ToggleActions::PLAY_REVERSE, "feed/cards"),
            TriggerSpec::new("feed", th(Anchor::Top, Anchor::Percent(10.0)), th(Anchor::Bottom, Anchor::Percent(90.0)))
                .scrub(Scrub::Immediate, "feed/wrapper")
                .on(TriggerEvent::Enter, Effect::background(Color::WHITE, 0.5))
                .on(TriggerEvent::LeaveBack, Effect::background(Color::WHITE, 0.5)),
        ],
        timelines: vec![("feed/cards".to_string(), reveal), ("feed/wrapper".to_string(), wrapper)],
        ..SectionPlan::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for s in Section::ALL {
            assert_eq!(Section::from_key(s.key()), Some(s));
        }
        assert_eq!(Section::from_key("footer"), None);
    }

    #[test]
    fn logo_timeline_grows_with_logo_count() {
        let none = plan(Section::Logos, PlanInput::default());
        let three = plan(Section::Logos, PlanInput { logo_count: 3, feed_count: 0 });
        // 0.8, then each logo at +0.1 with delay i * 0.15 and 0.6 long
        assert!((none.timelines[0].1.duration() - 0.8).abs() < 1e-4);
        assert!((three.timelines[0].1.duration() - 3.35).abs() < 1e-3);
    }

    #[test]
    fn great_work_has_one_counter_trigger_each() {
        let p = plan(Section::GreatWork, PlanInput::default());
        assert_eq!(p.counters.len(), 3);
        assert_eq!(p.triggers.len(), 4);
        assert!(p.triggers.iter().all(|t| t.once));
    }

    #[test]
    fn videos_cover_all_four() {
        let p = plan(Section::Videos, PlanInput::default());
        for id in VIDEO_IDS {
            assert!(p.triggers.iter().any(|t| t.on_enter.contains(&Effect::PlayMedia(id))));
        }
    }
}
