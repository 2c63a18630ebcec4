use std::collections::HashMap;
use std::str::FromStr;

use crate::core::MotionError;

use super::props::{Prop, PropertyStore};
use super::tween::Tween;

/// Where a tween is placed on its timeline
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Right after the current end
    End,
    /// `"+=x"` / `"-=x"`: relative to the current end
    Offset(f32),
    /// Absolute time in seconds
    At(f32),
}

impl FromStr for Position {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || MotionError::InvalidConfig(format!("bad timeline position '{}'", s));
        if s.is_empty() || s == ">" {
            return Ok(Position::End);
        }
        if let Some(rest) = s.strip_prefix("+=") {
            return rest.parse::<f32>().map(Position::Offset).map_err(|_| bad());
        }
        if let Some(rest) = s.strip_prefix("-=") {
            return rest.parse::<f32>().map(|v| Position::Offset(-v)).map_err(|_| bad());
        }
        s.parse::<f32>().map(Position::At).map_err(|_| bad())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Debug)]
struct Entry {
    start: f32,
    tween: Tween,
}

/// Ordered set of tweens sharing one playhead.
///
/// Time-driven timelines move with `tick`; scrubbed ones are positioned
/// with `set_progress` and never tick.
#[derive(Clone, Debug)]
pub struct Timeline {
    entries: Vec<Entry>,
    time: f32,
    duration: f32,
    direction: Direction,
    playing: bool,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            time: 0.0,
            duration: 0.0,
            direction: Direction::Forward,
            playing: false,
        }
    }

    /// Single-tween timeline
    pub fn single(tween: Tween) -> Self {
        let mut tl = Self::new();
        tl.add(tween, Position::End);
        tl
    }

    pub fn add(&mut self, tween: Tween, position: Position) -> &mut Self {
        let start = match position {
            Position::End => self.duration,
            Position::Offset(dx) => (self.duration + dx).max(0.0),
            Position::At(t) => t.max(0.0),
        };
        let span = finite_span(&tween);
        self.duration = self.duration.max(start + span);
        self.entries.push(Entry { start, tween });
        // Stable: equal starts keep insertion order
        self.entries.sort_by(|a, b| a.start.total_cmp(&b.start));
        self
    }

    /// Copies `template` onto every target, each delayed `each` seconds
    /// more than the previous one. All copies share one slot.
    pub fn stagger(&mut self, targets: &[String], template: &Tween, each: f32, position: Position) -> &mut Self {
        let start = match position {
            Position::End => self.duration,
            Position::Offset(dx) => (self.duration + dx).max(0.0),
            Position::At(t) => t.max(0.0),
        };
        for (i, target) in targets.iter().enumerate() {
            let mut tw = template.clone();
            tw.target = target.clone();
            tw.delay = template.delay + each * i as f32;
            self.add(tw, Position::At(start));
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            if self.time > 0.0 { 1.0 } else { 0.0 }
        } else {
            (self.time / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        self.playing = true;
    }

    pub fn reverse(&mut self) {
        self.direction = Direction::Backward;
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Continue in the current direction
    pub fn resume(&mut self) {
        self.playing = true;
    }

    pub fn restart(&mut self) {
        self.time = 0.0;
        self.play();
    }

    /// Back to the start, paused
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.direction = Direction::Forward;
        self.playing = false;
    }

    /// Jump to the end, paused
    pub fn complete(&mut self) {
        self.time = self.duration.max(f32::EPSILON);
        self.direction = Direction::Forward;
        self.playing = false;
    }

    /// Scrub the playhead. Does not change play state.
    pub fn set_progress(&mut self, p: f32) {
        self.time = p.clamp(0.0, 1.0) * self.duration;
    }

    /// Advance by `dt` seconds. Returns true while the playhead moved.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.playing || dt <= 0.0 {
            return false;
        }
        let before = self.time;
        match self.direction {
            Direction::Forward => {
                self.time += dt;
                if self.time >= self.duration {
                    self.time = self.duration.max(f32::EPSILON);
                    self.playing = false;
                }
            }
            Direction::Backward => {
                self.time -= dt;
                if self.time <= 0.0 {
                    self.time = 0.0;
                    self.playing = false;
                }
            }
        }
        self.time != before
    }

    /// Value of every (target, prop) at the playhead. The most recently
    /// started tween of a key wins; a key whose tweens have not started
    /// yet shows the first tween's starting value.
    pub fn values(&self) -> Vec<(String, Prop, f32)> {
        let mut out: Vec<(String, Prop, f32)> = Vec::new();
        let mut index: HashMap<(String, Prop), usize> = HashMap::new();
        for entry in self.entries.iter() {
            let local = self.time - entry.start;
            let key = (entry.tween.target.clone(), entry.tween.prop);
            let v = entry.tween.value_at(local);
            match index.get(&key) {
                Some(&i) if local >= 0.0 => out[i].2 = v,
                Some(_) => {}
                None => {
                    index.insert(key.clone(), out.len());
                    out.push((key.0, key.1, v));
                }
            }
        }
        out
    }

    /// Write the current values into `store`
    pub fn sample(&self, store: &mut PropertyStore) {
        for (target, prop, v) in self.values() {
            store.set(&target, prop, v);
        }
    }
}

fn finite_span(tween: &Tween) -> f32 {
    let total = tween.total_duration();
    if total.is_finite() {
        total
    } else {
        tween.delay + tween.duration
    }
}
