use std::str::FromStr;

use crate::animation::Timeline;
use crate::core::MotionError;

use super::trigger::TriggerEvent;

/// What a trigger does to its timeline on one event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl ToggleAction {
    pub fn apply(self, tl: &mut Timeline) {
        match self {
            ToggleAction::Play => tl.play(),
            ToggleAction::Pause => tl.pause(),
            ToggleAction::Resume => tl.resume(),
            ToggleAction::Reverse => tl.reverse(),
            ToggleAction::Restart => tl.restart(),
            ToggleAction::Reset => tl.reset(),
            ToggleAction::Complete => tl.complete(),
            ToggleAction::None => {}
        }
    }
}

impl FromStr for ToggleAction {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reverse" => ToggleAction::Reverse,
            "restart" => ToggleAction::Restart,
            "reset" => ToggleAction::Reset,
            "complete" => ToggleAction::Complete,
            "none" => ToggleAction::None,
            _ => return Err(MotionError::InvalidConfig(format!("unknown toggle action '{}'", s))),
        })
    }
}

/// Actions for enter, leave, enter-back and leave-back, in that order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// `"play none none none"`
    pub const PLAY_ONCE: ToggleActions = ToggleActions {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::None,
    };

    /// `"play none none reverse"`
    pub const PLAY_REVERSE: ToggleActions = ToggleActions {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };

    pub fn for_event(&self, event: TriggerEvent) -> ToggleAction {
        match event {
            TriggerEvent::Enter => self.on_enter,
            TriggerEvent::Leave => self.on_leave,
            TriggerEvent::EnterBack => self.on_enter_back,
            TriggerEvent::LeaveBack => self.on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_ONCE
    }
}

impl FromStr for ToggleActions {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 4 {
            return Err(MotionError::InvalidConfig(format!("toggleActions needs four words, got '{}'", s)));
        }
        Ok(Self {
            on_enter: parts[0].parse()?,
            on_leave: parts[1].parse()?,
            on_enter_back: parts[2].parse()?,
            on_leave_back: parts[3].parse()?,
        })
    }
}
