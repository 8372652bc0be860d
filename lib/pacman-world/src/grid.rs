/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

//! The grid, the four facings, and where Pacman stands on the grid.

use crate::{PacmanError, ParseCommandError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest valid index on either axis. The grid is `0..=MAX_INDEX` squared.
pub const MAX_INDEX: i32 = 4;

/// Direction Pacman faces. The declaration order is the clockwise turning order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Facing {
    /// Towards increasing y.
    North,

    /// Towards increasing x.
    East,

    /// Towards decreasing y.
    South,

    /// Towards decreasing x.
    West,
}

impl Facing {
    /// All facings in clockwise order, starting at North.
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    /// The facing after a right turn.
    pub fn clockwise(self) -> Self {
        Self::from_index(self as i32 + 1)
    }

    /// The facing after a left turn.
    pub fn counter_clockwise(self) -> Self {
        Self::from_index(self as i32 - 1)
    }

    /// Unit step `(dx, dy)` taken when moving forward.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Facing::North => (0, 1),
            Facing::East => (1, 0),
            Facing::South => (0, -1),
            Facing::West => (-1, 0),
        }
    }

    /// Upper-case name, as it appears in reports.
    pub fn name(self) -> &'static str {
        match self {
            Facing::North => "NORTH",
            Facing::East => "EAST",
            Facing::South => "SOUTH",
            Facing::West => "WEST",
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facing {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|facing| facing.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCommandError::UnknownFacing(s.to_string()))
    }
}

/// A square on the grid. Both components are always within `0..=MAX_INDEX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    x: i32,
    y: i32,
}

#[derive(Deserialize)]
struct RawCoordinate {
    x: i32,
    y: i32,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = PacmanError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.x, raw.y)
    }
}

impl Coordinate {
    /// Whether `(x, y)` is a square on the grid.
    pub fn is_on_grid(x: i32, y: i32) -> bool {
        (0..=MAX_INDEX).contains(&x) && (0..=MAX_INDEX).contains(&y)
    }

    /// Create a coordinate, rejecting anything off the grid.
    pub fn new(x: i32, y: i32) -> Result<Self, PacmanError> {
        if Self::is_on_grid(x, y) {
            Ok(Self { x, y })
        } else {
            Err(PacmanError::InvalidPlacement { x, y })
        }
    }

    /// Column.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Row.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// The neighbouring square one step towards `facing`, if it is on the grid.
    pub fn step(self, facing: Facing) -> Result<Self, PacmanError> {
        let (dx, dy) = facing.offset();
        let (x, y) = (self.x + dx, self.y + dy);
        if Self::is_on_grid(x, y) {
            Ok(Self { x, y })
        } else {
            Err(PacmanError::InvalidMove { from: self, facing })
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Where a placed Pacman stands and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    /// Square Pacman stands on.
    pub coordinate: Coordinate,

    /// Direction Pacman faces.
    pub facing: Facing,
}

// Report line, e.g. `1,2,EAST`.
impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.coordinate, self.facing)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn any_facing() -> impl Strategy<Value = Facing> {
        prop_oneof![
            Just(Facing::North),
            Just(Facing::East),
            Just(Facing::South),
            Just(Facing::West),
        ]
    }

    #[test]
    fn test_clockwise_order() {
        assert_eq!(Facing::North.clockwise(), Facing::East);
        assert_eq!(Facing::East.clockwise(), Facing::South);
        assert_eq!(Facing::South.clockwise(), Facing::West);
        assert_eq!(Facing::West.clockwise(), Facing::North);
    }

    #[test]
    fn test_counter_clockwise_wraps_from_north_to_west() {
        assert_eq!(Facing::North.counter_clockwise(), Facing::West);
        assert_eq!(Facing::West.counter_clockwise(), Facing::South);
        assert_eq!(Facing::South.counter_clockwise(), Facing::East);
        assert_eq!(Facing::East.counter_clockwise(), Facing::North);
    }

    #[test]
    fn test_facing_parses_case_insensitively() {
        assert_eq!("north".parse::<Facing>(), Ok(Facing::North));
        assert_eq!(" East ".parse::<Facing>(), Ok(Facing::East));
        assert_eq!("SOUTH".parse::<Facing>(), Ok(Facing::South));
        assert_eq!(
            "up".parse::<Facing>(),
            Err(ParseCommandError::UnknownFacing("up".to_string()))
        );
    }

    #[test]
    fn test_coordinate_rejects_off_grid() {
        assert_eq!(
            Coordinate::new(5, 0),
            Err(PacmanError::InvalidPlacement { x: 5, y: 0 })
        );
        assert_eq!(
            Coordinate::new(0, -1),
            Err(PacmanError::InvalidPlacement { x: 0, y: -1 })
        );
        assert!(Coordinate::new(4, 4).is_ok());
    }

    #[test]
    fn test_step_off_the_edge_is_invalid_move() {
        let origin = Coordinate::new(0, 0).expect("origin is on the grid");
        assert_eq!(
            origin.step(Facing::West),
            Err(PacmanError::InvalidMove {
                from: origin,
                facing: Facing::West,
            })
        );
        assert_eq!(origin.step(Facing::North), Coordinate::new(0, 1));
    }

    #[test]
    fn test_pose_display_is_report_line() {
        let pose = Pose {
            coordinate: Coordinate::new(1, 2).expect("on grid"),
            facing: Facing::East,
        };
        assert_eq!(pose.to_string(), "1,2,EAST");
    }

    #[test]
    fn test_pose_serializes_with_uppercase_facing() {
        let pose = Pose {
            coordinate: Coordinate::new(3, 0).expect("on grid"),
            facing: Facing::South,
        };
        let json = serde_json::to_string(&pose).expect("serialize failed");
        assert_eq!(json, r#"{"coordinate":{"x":3,"y":0},"facing":"SOUTH"}"#);
        let back: Pose = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(back, pose);
    }

    #[test]
    fn test_off_grid_coordinate_does_not_deserialize() {
        let err = serde_json::from_str::<Coordinate>(r#"{"x":5,"y":0}"#)
            .expect_err("off-grid coordinate deserialized");
        assert!(err.to_string().contains("from 0 to 4"), "{}", err);
    }

    proptest! {
        #[test]
        fn test_four_turns_either_way_is_identity(facing in any_facing()) {
            let right = facing.clockwise().clockwise().clockwise().clockwise();
            let left = facing
                .counter_clockwise()
                .counter_clockwise()
                .counter_clockwise()
                .counter_clockwise();
            prop_assert_eq!(right, facing);
            prop_assert_eq!(left, facing);
        }

        #[test]
        fn test_left_and_right_cancel(facing in any_facing()) {
            prop_assert_eq!(facing.clockwise().counter_clockwise(), facing);
            prop_assert_eq!(facing.counter_clockwise().clockwise(), facing);
        }

        #[test]
        fn test_step_stays_on_grid_or_fails(
            x in 0..=MAX_INDEX,
            y in 0..=MAX_INDEX,
            facing in any_facing(),
        ) {
            let from = Coordinate::new(x, y).expect("on grid");
            match from.step(facing) {
                Ok(to) => {
                    prop_assert!(Coordinate::is_on_grid(to.x(), to.y()));
                    prop_assert_eq!((to.x() - x).abs() + (to.y() - y).abs(), 1);
                }
                Err(e) => prop_assert_eq!(e, PacmanError::InvalidMove { from, facing }),
            }
        }
    }
}
