//! Scripted key input for headless runs
//!
//! A script is a comma separated list of `key@start..end` entries: the key is
//! held from tick `start` (inclusive) until tick `end` (exclusive). Keys use
//! the same names as [`Direction::from_key`], e.g. `w@0..30,d@10..40`.

use std::str::FromStr;

use crate::error::Error;
use crate::sim::{Direction, SimulationLoop};

/// One held key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHold {
    pub direction: Direction,
    pub start: u64,
    pub end: u64,
}

/// A parsed key script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyScript {
    holds: Vec<KeyHold>,
}

impl KeyScript {
    pub fn holds(&self) -> &[KeyHold] {
        &self.holds
    }

    /// Deliver the key events due before tick `tick` runs
    ///
    /// Releases go out before presses so a key released and re-pressed on the
    /// same tick ends up held.
    pub fn apply(&self, tick: u64, sim: &mut SimulationLoop) {
        for hold in self.holds.iter().filter(|h| h.end == tick) {
            sim.set_intent(hold.direction, false);
        }
        for hold in self.holds.iter().filter(|h| h.start == tick) {
            sim.set_intent(hold.direction, true);
        }
    }
}

impl FromStr for KeyScript {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let holds = s
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(parse_hold)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { holds })
    }
}

fn parse_hold(entry: &str) -> Result<KeyHold, Error> {
    let bad = |reason| Error::Script {
        entry: entry.to_string(),
        reason,
    };

    let (key, range) = entry.split_once('@').ok_or_else(|| bad("expected key@start..end"))?;
    let direction = Direction::from_key(key.trim()).ok_or_else(|| bad("unknown key"))?;
    let (start, end) = range
        .split_once("..")
        .ok_or_else(|| bad("expected start..end"))?;
    let start: u64 = start.trim().parse().map_err(|_| bad("bad start tick"))?;
    let end: u64 = end.trim().parse().map_err(|_| bad("bad end tick"))?;
    if end <= start {
        return Err(bad("end must be after start"));
    }

    Ok(KeyHold {
        direction,
        start,
        end,
    })
}
