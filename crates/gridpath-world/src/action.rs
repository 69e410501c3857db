use std::fmt;

use gridpath_core::Cell;

use crate::error::WorldError;

/// One of the four agent moves. The discriminant is the wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Action {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Action {
    pub const ALL: [Action; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// `(row, col)` offset of the move.
    #[inline]
    pub const fn delta(self) -> Cell {
        match self {
            Self::Up => Cell::new(-1, 0),
            Self::Down => Cell::new(1, 0),
            Self::Left => Cell::new(0, -1),
            Self::Right => Cell::new(0, 1),
        }
    }

    /// The move taking `from` to the adjacent cell `to`, if they are adjacent.
    pub fn between(from: Cell, to: Cell) -> Option<Action> {
        let d = to - from;
        Self::ALL.into_iter().find(|a| a.delta() == d)
    }

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Action {
    type Error = WorldError;

    fn try_from(code: u8) -> Result<Self, WorldError> {
        match code {
            0 => Ok(Self::Up),
            1 => Ok(Self::Down),
            2 => Ok(Self::Left),
            3 => Ok(Self::Right),
            _ => Err(WorldError::InvalidAction(code)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(s)
    }
}

/// What the agent sees after a reset or step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    pub agent: Cell,
    pub goal: Cell,
}

impl Observation {
    /// `[agent.row, agent.col, goal.row, goal.col]`.
    pub fn to_array(self) -> [i32; 4] {
        [self.agent.row, self.agent.col, self.goal.row, self.goal.col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for a in Action::ALL {
            assert_eq!(Action::try_from(a.code()), Ok(a));
        }
        assert_eq!(Action::try_from(4), Err(WorldError::InvalidAction(4)));
    }

    #[test]
    fn between_adjacent_cells() {
        let c = Cell::new(3, 3);
        for a in Action::ALL {
            assert_eq!(Action::between(c, c + a.delta()), Some(a));
        }
        assert_eq!(Action::between(c, c), None);
        assert_eq!(Action::between(c, Cell::new(4, 4)), None);
    }

    #[test]
    fn observation_array() {
        let obs = Observation {
            agent: Cell::new(1, 2),
            goal: Cell::new(9, 9),
        };
        assert_eq!(obs.to_array(), [1, 2, 9, 9]);
    }
}
