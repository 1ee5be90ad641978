//! Scheduled screen blackout
//!
//! Boundaries split the episode into alternating visible / blacked-out
//! segments, starting visible. A single negative boundary `-k` means a
//! periodic schedule: `k` steps visible, `k` steps dark, repeating.

use crate::error::{ArenaError, Result};

/// Whether the frame at `step` is blanked under `boundaries`
pub fn is_blacked_out(step: u32, boundaries: &[i32]) -> bool {
    match boundaries {
        [] => false,
        [period] if *period < 0 => {
            let k = period.unsigned_abs();
            (step / k) % 2 == 1
        }
        _ => {
            let step = i64::from(step);
            // Segment 0 precedes the first boundary; boundary i opens segment i + 1
            let segment = boundaries
                .iter()
                .rposition(|&b| i64::from(b) <= step)
                .map_or(0, |i| i + 1);
            segment % 2 == 1
        }
    }
}

/// Reject schedules [`is_blacked_out`] cannot interpret consistently
pub fn validate(boundaries: &[i32]) -> Result<()> {
    let invalid = |reason| ArenaError::InvalidBlackout {
        boundaries: boundaries.to_vec(),
        reason,
    };
    match boundaries {
        [] => Ok(()),
        [period] if *period < 0 => Ok(()),
        _ => {
            if boundaries.iter().any(|&b| b < 0) {
                return Err(invalid("negative period must be the only boundary"));
            }
            if boundaries.windows(2).any(|w| w[0] >= w[1]) {
                return Err(invalid("boundaries must be strictly increasing"));
            }
            Ok(())
        }
    }
}

/// Validated blackout schedule owned by an environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blackout {
    boundaries: Vec<i32>,
}

impl Blackout {
    pub fn new(boundaries: Vec<i32>) -> Result<Self> {
        validate(&boundaries)?;
        Ok(Self { boundaries })
    }

    pub fn is_blacked_out(&self, step: u32) -> bool {
        is_blacked_out(step, &self.boundaries)
    }
}
