use super::*;
use crate::core::ListenerKind;
use crate::sequencer::media::tests::FakeVideo;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn page() -> PageCore<FakeVideo> {
    let mut page = PageCore::new(PageConfig::default(), 1000.0);
    page.set_region("hero", 0.0, 900.0);
    page.set_region("video1", 1000.0, 800.0);
    page.set_region("video2", 2000.0, 800.0);
    page.set_region("video3", 3000.0, 800.0);
    page.set_region("video4", 4000.0, 800.0);
    page.set_region("logos", 5000.0, 600.0);
    page.set_region("great-work", 6000.0, 600.0);
    for i in 0..3 {
        page.set_region(&sections::counter_region(i), 6300.0, 50.0);
    }
    page.set_region("feed", 7000.0, 1500.0);
    page
}

fn run(page: &mut PageCore<FakeVideo>, ms: f64) {
    let mut left = ms;
    while left > 0.0 {
        page.tick(FRAME_MS.min(left));
        left -= FRAME_MS;
    }
}

const LOGOS: &str = r#"[{"id": 1, "src": "/l/1.png", "alt": "One"},
    {"id": 2, "src": "/l/2.png", "alt": "Two"},
    {"id": 3, "src": "/l/3.png", "alt": "Three"}]"#;

#[test]
fn remounting_keeps_exactly_one_set_of_triggers() {
    let mut page = page();
    page.load_logos(Ok(LOGOS));
    assert_eq!(page.mount_section(Section::Logos), 1);
    let timelines = page.timeline_count();
    for _ in 0..5 {
        page.mount_section(Section::Logos);
    }
    assert_eq!(page.triggers_for(Section::Logos), 1);
    assert_eq!(page.timeline_count(), timelines);
    assert_eq!(page.listeners().count(ListenerKind::Interval), 1);

    page.unmount_section(Section::Logos);
    assert_eq!(page.triggers_for(Section::Logos), 0);
    assert_eq!(page.timeline_count(), 0);
    assert_eq!(page.listeners().count(ListenerKind::Interval), 0);
}

#[test]
fn remounting_fires_each_enter_once() {
    let mut page = page();
    page.add_media(2, FakeVideo { paused: true, ..FakeVideo::default() });
    for _ in 0..3 {
        page.mount_section(Section::Videos);
    }
    page.on_scroll(1300.0);
    run(&mut page, 1000.0);
    assert_eq!(page.media(2).unwrap().play_calls, 1);
}

#[test]
fn every_section_mounts_against_measured_regions() {
    let mut page = page();
    let total: usize = Section::ALL.iter().map(|s| page.mount_section(*s)).sum();
    assert_eq!(page.trigger_count(), total);
    // hero has none; videos 7, logos 1, great work 4, feed 2
    assert_eq!(total, 14);
}

#[test]
fn counters_count_up_once_in_view() {
    let mut page = page();
    page.mount_section(Section::GreatWork);
    run(&mut page, 500.0);
    assert_eq!(page.counter("great/counter/0"), Some(0));

    page.on_scroll(5500.0);
    let mut last = 0;
    for _ in 0..150 {
        page.tick(FRAME_MS);
        let v = page.counter("great/counter/0").unwrap();
        assert!(v >= last);
        last = v;
    }
    assert_eq!(last, 100);
    assert_eq!(page.counter("great/counter/1"), Some(15));
    assert_eq!(page.counter("great/counter/2"), Some(80));
    assert_eq!(page.value("great/counter/0", Prop::Value), Some(100.0));

    // once triggers are gone: scrolling away and back restarts nothing
    page.on_scroll(0.0);
    page.on_scroll(5500.0);
    assert_eq!(page.triggers_for(Section::GreatWork), 0);
    assert_eq!(page.counter("great/counter/0"), Some(100));
}

#[test]
fn blocked_autoplay_retries_once_on_next_scroll() {
    let mut page = page();
    page.add_media(1, FakeVideo::blocked());
    page.mount_section(Section::Videos);

    page.on_scroll(950.0);
    assert_eq!(page.media(1).unwrap().play_calls, 1);
    assert_eq!(page.listeners().count(ListenerKind::Scroll), 2);
    assert_eq!(page.listeners().count(ListenerKind::Click), 1);

    page.on_scroll(960.0);
    assert_eq!(page.media(1).unwrap().play_calls, 2);
    assert_eq!(page.listeners().count(ListenerKind::Scroll), 1);
    assert_eq!(page.listeners().count(ListenerKind::Click), 0);

    page.on_scroll(970.0);
    page.on_click();
    assert_eq!(page.media(1).unwrap().play_calls, 2);
}

#[test]
fn blocked_video_rearms_on_each_new_entry() {
    let mut page = page();
    page.add_media(1, FakeVideo::blocked());
    page.mount_section(Section::Videos);

    page.on_scroll(950.0);
    assert_eq!(page.listeners().count(ListenerKind::Click), 1);
    page.on_scroll(960.0);
    assert_eq!(page.listeners().count(ListenerKind::Click), 0);

    page.on_scroll(0.0);
    page.on_scroll(950.0);
    assert_eq!(page.media(1).unwrap().play_calls, 3);
    assert_eq!(page.listeners().count(ListenerKind::Scroll), 2);
    assert_eq!(page.listeners().count(ListenerKind::Click), 1);
}

#[test]
fn promise_rejection_arms_fallback_on_next_frame() {
    let mut page = page();
    page.add_media(1, FakeVideo::deferred());
    page.mount_section(Section::Videos);

    page.on_scroll(950.0);
    assert_eq!(page.listeners().count(ListenerKind::Click), 0);
    page.tick(FRAME_MS);
    assert_eq!(page.listeners().count(ListenerKind::Scroll), 2);
    assert_eq!(page.listeners().count(ListenerKind::Click), 1);

    // retry is rejected again and swallowed
    page.on_click();
    assert_eq!(page.media(1).unwrap().play_calls, 2);
    run(&mut page, 100.0);
    page.on_scroll(960.0);
    assert_eq!(page.media(1).unwrap().play_calls, 2);
    assert_eq!(page.listeners().count(ListenerKind::Click), 0);
    assert_eq!(page.listeners().count(ListenerKind::Scroll), 1);
}

#[test]
fn click_retry_starts_a_video_once_allowed() {
    let mut page = page();
    page.add_media(3, FakeVideo::blocked());
    page.mount_section(Section::Videos);
    page.on_scroll(2600.0);
    assert!(page.media(3).unwrap().is_paused());

    page.report_play_rejected(3);
    assert_eq!(page.listeners().count(ListenerKind::Click), 1);
    page.media.get_mut(3).unwrap().blocked = false;
    page.on_click();
    assert!(!page.media(3).unwrap().is_paused());
    assert_eq!(page.listeners().count(ListenerKind::Click), 0);
}

#[test]
fn leaving_a_video_pauses_it() {
    let mut page = page();
    page.add_media(2, FakeVideo { paused: true, ..FakeVideo::default() });
    page.mount_section(Section::Videos);
    page.on_scroll(1300.0);
    assert!(!page.media(2).unwrap().is_paused());
    page.on_scroll(2700.0);
    assert!(page.media(2).unwrap().is_paused());
}

#[test]
fn newest_background_wins_and_retracts_on_unmount() {
    let cream = Color::rgb(0xf3, 0xf3, 0xe9);
    let purple = Color::rgb(0xb4, 0x88, 0xf1);
    let mut page = page();
    page.mount_section(Section::Videos);
    page.mount_section(Section::Feed);
    assert_eq!(page.background(), cream);

    page.on_scroll(950.0);
    run(&mut page, 1000.0);
    assert_eq!(page.background(), purple);

    page.on_scroll(6950.0);
    run(&mut page, 1500.0);
    assert_eq!(page.background(), Color::WHITE);

    page.unmount_section(Section::Feed);
    assert_eq!(page.background(), cream);
}

#[test]
fn hero_entrance_plays_on_mount() {
    let mut page = page();
    page.mount_section(Section::Hero);
    assert_eq!(page.value("hero/content", Prop::Y), Some(100.0));
    run(&mut page, 1100.0);
    assert_eq!(page.value("hero/content", Prop::Y), Some(0.0));
    assert_eq!(page.value("hero/content", Prop::Opacity), Some(1.0));
}

#[test]
fn logo_reveal_plays_forward_and_reverses_on_leave_back() {
    let mut page = page();
    page.load_logos(Ok(LOGOS));
    page.mount_section(Section::Logos);
    assert_eq!(page.value("logos/logo/2", Prop::Y), Some(50.0));

    page.on_scroll(4300.0);
    run(&mut page, 4000.0);
    assert_eq!(page.value("logos/title", Prop::YPercent), Some(0.0));
    assert_eq!(page.value("logos/logo/2", Prop::Y), Some(0.0));

    page.on_scroll(0.0);
    run(&mut page, 4000.0);
    assert_eq!(page.value("logos/title", Prop::YPercent), Some(100.0));
}

#[test]
fn logos_arriving_after_mount_extend_the_reveal() {
    let mut page = page();
    page.mount_section(Section::Logos);
    assert_eq!(page.value("logos/logo/0", Prop::Y), None);

    page.load_logos(Ok(LOGOS));
    assert_eq!(page.value("logos/logo/2", Prop::Y), Some(50.0));
    assert_eq!(page.triggers_for(Section::Logos), 1);
    assert_eq!(page.listeners().count(ListenerKind::Interval), 1);

    page.on_scroll(4300.0);
    run(&mut page, 4000.0);
    assert_eq!(page.value("logos/logo/2", Prop::Y), Some(0.0));
}

#[test]
fn failed_logo_fetch_leaves_column_empty() {
    let mut page = page();
    page.load_logos(Err("500"));
    page.mount_section(Section::Logos);
    assert!(page.logos().is_empty());
    run(&mut page, 7000.0);
    assert_eq!(page.logo_column().index(), 0);
}

#[test]
fn logo_column_rotates_while_mounted() {
    let mut page = page();
    page.load_logos(Ok(LOGOS));
    page.mount_section(Section::Logos);
    page.tick(3000.0);
    assert_eq!(page.logo_column().index(), 1);
    page.unmount_section(Section::Logos);
    page.tick(3000.0);
    assert_eq!(page.logo_column().index(), 1);
}

#[test]
fn wrapper_scale_follows_scroll() {
    let mut page = page();
    page.mount_section(Section::Feed);
    page.on_scroll(7250.0);
    page.tick(FRAME_MS);
    let scale = page.value("feed/main-wrapper", Prop::Scale).unwrap();
    assert!(scale < 1.0 && scale > 0.9, "scale {}", scale);
    page.on_scroll(9000.0);
    page.tick(FRAME_MS);
    assert_eq!(page.value("feed/main-wrapper", Prop::Scale), Some(0.9));
}

#[test]
fn refresh_after_delay_uses_new_measurements() {
    let mut page = page();
    page.load_logos(Ok(LOGOS));
    page.mount_section(Section::Logos);
    page.set_region("logos", 9000.0, 600.0);
    run(&mut page, 900.0);

    page.on_scroll(4300.0);
    assert!(!page.timeline("logos/reveal").unwrap().is_playing());
    page.on_scroll(8300.0);
    assert!(page.timeline("logos/reveal").unwrap().is_playing());
}

#[test]
fn header_tracks_scroll() {
    let mut page = page();
    page.on_scroll(50.0);
    assert!(!page.header().is_scrolled());
    page.on_scroll(150.0);
    assert!(page.header().is_scrolled());
}

#[test]
fn destroy_detaches_everything() {
    let mut page = page();
    page.add_media(1, FakeVideo::blocked());
    for s in Section::ALL {
        page.mount_section(s);
    }
    page.on_scroll(950.0);
    assert!(page.listeners().total() > 2);

    page.destroy();
    page.destroy();
    assert_eq!(page.listeners().total(), 0);
    assert_eq!(page.trigger_count(), 0);
    assert_eq!(page.timeline_count(), 0);
    assert_eq!(page.mount_section(Section::Hero), 0);
}
