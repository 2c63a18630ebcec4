use crate::animation::Ease;
use crate::domain::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
struct ColorTween {
    from: Color,
    to: Color,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

/// Sole owner of the page background colour.
///
/// Sections assert a colour for their region; the newest assertion wins.
/// A change tweens from whatever is displayed at that moment, so an
/// interrupted transition never jumps.
#[derive(Clone, Debug)]
pub struct ThemeService {
    base: Color,
    assertions: Vec<(String, Color)>,
    displayed: Color,
    tween: Option<ColorTween>,
}

impl ThemeService {
    pub fn new(base: Color) -> Self {
        Self {
            base,
            assertions: Vec::new(),
            displayed: base,
            tween: None,
        }
    }

    pub fn base(&self) -> Color {
        self.base
    }

    pub fn displayed(&self) -> Color {
        self.displayed
    }

    /// Colour the background is heading to
    pub fn target(&self) -> Color {
        self.assertions.last().map(|(_, c)| *c).unwrap_or(self.base)
    }

    pub fn is_transitioning(&self) -> bool {
        self.tween.is_some()
    }

    /// Push `color` for `region` as the newest assertion
    pub fn assert(&mut self, region: &str, color: Color, duration: f32, ease: Ease) {
        self.assertions.retain(|(r, _)| r != region);
        self.assertions.push((region.to_string(), color));
        self.transition(duration, ease);
    }

    /// Drop the region's assertion; the previous newest takes over
    pub fn retract(&mut self, region: &str, duration: f32, ease: Ease) {
        let before = self.assertions.len();
        self.assertions.retain(|(r, _)| r != region);
        if self.assertions.len() != before {
            self.transition(duration, ease);
        }
    }

    /// Forget every assertion and snap back to the base colour
    pub fn reset(&mut self) {
        self.assertions.clear();
        self.tween = None;
        self.displayed = self.base;
    }

    fn transition(&mut self, duration: f32, ease: Ease) {
        let to = self.target();
        if duration <= 0.0 {
            self.tween = None;
            self.displayed = to;
            return;
        }
        if to == self.displayed {
            self.tween = None;
            return;
        }
        self.tween = Some(ColorTween {
            from: self.displayed,
            to,
            duration,
            elapsed: 0.0,
            ease,
        });
    }

    /// Advance `dt` seconds; returns the displayed colour
    pub fn tick(&mut self, dt: f32) -> Color {
        if let Some(tw) = self.tween.as_mut() {
            tw.elapsed += dt.max(0.0);
            let t = (tw.elapsed / tw.duration).min(1.0);
            self.displayed = tw.from.lerp(tw.to, tw.ease.apply(t));
            if t >= 1.0 {
                self.displayed = tw.to;
                self.tween = None;
            }
        }
        self.displayed
    }
}
