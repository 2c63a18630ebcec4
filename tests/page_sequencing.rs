use humaan_motion::animation::Prop;
use humaan_motion::core::{ListenerKind, MotionError};
use humaan_motion::sequencer::MediaElement;
use humaan_motion::{PageConfig, PageCore, Section};

#[derive(Default)]
struct Video {
    allowed: bool,
    playing: bool,
    attempts: u32,
}

impl MediaElement for Video {
    fn play(&mut self) -> Result<(), MotionError> {
        self.attempts += 1;
        if self.allowed {
            self.playing = true;
            Ok(())
        } else {
            Err(MotionError::AutoplayBlocked { media: 0 })
        }
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn is_paused(&self) -> bool {
        !self.playing
    }
}

fn page() -> PageCore<Video> {
    let mut page = PageCore::new(PageConfig::default(), 900.0);
    page.set_region("video1", 900.0, 700.0);
    page.set_region("video2", 1700.0, 700.0);
    page.set_region("video3", 2500.0, 700.0);
    page.set_region("video4", 3300.0, 700.0);
    page.set_region("great-work", 4200.0, 500.0);
    for i in 0..3 {
        page.set_region(&format!("counter/{}", i), 4450.0, 40.0);
    }
    page
}

#[test]
fn scroll_through_the_video_stack() {
    let mut page = page();
    for id in 1..=4 {
        page.add_media(id, Video { allowed: true, ..Video::default() });
    }
    assert_eq!(page.mount_section(Section::Videos), 7);

    // video1 starts at top 10% of the viewport
    page.on_scroll(850.0);
    assert!(!page.media(1).unwrap().is_paused());
    assert!(page.media(2).unwrap().is_paused());

    // past video1's end, inside video2
    page.on_scroll(1500.0);
    assert!(page.media(1).unwrap().is_paused());
    assert!(!page.media(2).unwrap().is_paused());

    // back above video1 pauses it on leave-back
    page.on_scroll(1000.0);
    page.on_scroll(0.0);
    assert!(page.media(1).unwrap().is_paused());
}

#[test]
fn autoplay_fallback_is_one_shot() {
    let mut page = page();
    page.add_media(1, Video::default());
    page.mount_section(Section::Videos);

    page.on_scroll(850.0);
    assert_eq!(page.listeners().count(ListenerKind::Click), 1);
    page.on_click();
    page.on_click();
    assert_eq!(page.media(1).unwrap().attempts, 2);
    assert_eq!(page.listeners().count(ListenerKind::Click), 0);
}

#[test]
fn counters_land_on_their_targets() {
    let mut page = page();
    page.mount_section(Section::GreatWork);
    page.on_scroll(3700.0);
    for _ in 0..180 {
        page.tick(1000.0 / 60.0);
    }
    assert_eq!(page.counter("great/counter/0"), Some(100));
    assert_eq!(page.counter("great/counter/1"), Some(15));
    assert_eq!(page.counter("great/counter/2"), Some(80));
    assert_eq!(page.value("great/line1/0", Prop::Opacity), Some(1.0));
}

#[test]
fn destroyed_page_ignores_input() {
    let mut page = page();
    page.mount_section(Section::GreatWork);
    page.destroy();
    page.on_scroll(3700.0);
    page.tick(5000.0);
    assert_eq!(page.counter("great/counter/0"), None);
    assert_eq!(page.listeners().total(), 0);
}
