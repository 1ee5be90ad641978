//! Discrete action to backend control vector

use serde::{Deserialize, Serialize};

use crate::consts::TURN_SCALE;

/// Number of choices per action channel (negative, neutral, positive)
pub const ACTION_CHOICES: i32 = 3;

/// Two-channel discrete action: look (0 = right, 2 = left) and move (0 = back, 2 = forward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub look: i32,
    pub walk: i32,
}

impl Action {
    /// Both channels neutral
    pub const IDLE: Action = Action { look: 1, walk: 1 };

    pub const fn new(look: i32, walk: i32) -> Self {
        Self { look, walk }
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::IDLE
    }
}

impl From<[i32; 2]> for Action {
    fn from([look, walk]: [i32; 2]) -> Self {
        Self { look, walk }
    }
}

/// Continuous control vector `[turn, strafe, move]` the backend expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Control(pub [i32; 3]);

impl Control {
    /// No movement; used to materialize an observation after reset
    pub const ZERO: Control = Control([0, 0, 0]);

    pub fn turn(&self) -> i32 {
        self.0[0]
    }

    pub fn strafe(&self) -> i32 {
        self.0[1]
    }

    pub fn forward(&self) -> i32 {
        self.0[2]
    }
}

/// Map an action to a control vector; out-of-range channels are clamped
pub fn to_control(action: Action) -> Control {
    let look = action.look.clamp(0, ACTION_CHOICES - 1) - 1;
    let walk = action.walk.clamp(0, ACTION_CHOICES - 1) - 1;
    Control([look * TURN_SCALE, 0, walk])
}
