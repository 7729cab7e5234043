//! Discrete input queries
//!
//! Scenes poll "was this control just pressed" once per frame; the shell
//! owns the actual event loop and key mapping.

use crate::sim::TickInput;

/// Game controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Fire,
    Confirm,
}

impl Control {
    /// Every control, for "press anything" prompts
    pub const ALL: [Control; 6] = [
        Control::MoveLeft,
        Control::MoveRight,
        Control::MoveUp,
        Control::MoveDown,
        Control::Fire,
        Control::Confirm,
    ];
}

/// Edge-triggered input state for the current frame
pub trait InputSource {
    fn just_pressed(&self, control: Control) -> bool;
}

/// True if any control was just pressed (menu and game-over prompts)
pub fn any_pressed(source: &dyn InputSource) -> bool {
    Control::ALL.iter().any(|&c| source.just_pressed(c))
}

/// Snapshot the controls the simulation cares about
pub fn tick_input(source: &dyn InputSource) -> TickInput {
    TickInput {
        left: source.just_pressed(Control::MoveLeft),
        right: source.just_pressed(Control::MoveRight),
        up: source.just_pressed(Control::MoveUp),
        down: source.just_pressed(Control::MoveDown),
        fire: source.just_pressed(Control::Fire),
    }
}
