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

//! Text commands: `PLACE X,Y,F`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`.

use crate::{Facing, ParseCommandError};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use std::str::FromStr;

/// One instruction for an [`Agent`](crate::Agent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Put Pacman on a square. Coordinates are not range checked until applied.
    Place {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
        /// Direction to face.
        facing: Facing,
    },

    /// Step forward one square.
    Move,

    /// Turn a quarter counter-clockwise.
    Left,

    /// Turn a quarter clockwise.
    Right,

    /// Print where Pacman is.
    Report,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Place { x, y, facing } => write!(f, "PLACE {},{},{}", x, y, facing),
            Command::Move => write!(f, "MOVE"),
            Command::Left => write!(f, "LEFT"),
            Command::Right => write!(f, "RIGHT"),
            Command::Report => write!(f, "REPORT"),
        }
    }
}

// Integers too large for i32 saturate, so they still reach the agent as off-grid placements.
fn parse_coordinate(field: &str) -> Result<i32, ParseCommandError> {
    field.parse::<i32>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i32::MAX),
        IntErrorKind::NegOverflow => Ok(i32::MIN),
        _ => Err(ParseCommandError::InvalidCoordinate(field.to_string())),
    })
}

fn parse_place(arguments: &str) -> Result<Command, ParseCommandError> {
    let fields: Vec<&str> = arguments.split(',').map(str::trim).collect();
    let [x, y, facing] = fields[..] else {
        return Err(ParseCommandError::MalformedPlace(arguments.to_string()));
    };
    let x = parse_coordinate(x)?;
    let y = parse_coordinate(y)?;
    let facing = facing.parse::<Facing>()?;
    Ok(Command::Place { x, y, facing })
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCommandError::Empty);
        }
        let (keyword, arguments) = match s.split_once(char::is_whitespace) {
            Some((keyword, arguments)) => (keyword, arguments.trim()),
            None => (s, ""),
        };

        let command = match keyword.to_ascii_uppercase().as_str() {
            "PLACE" => return parse_place(arguments),
            "MOVE" => Command::Move,
            "LEFT" => Command::Left,
            "RIGHT" => Command::Right,
            "REPORT" => Command::Report,
            _ => return Err(ParseCommandError::UnknownCommand(keyword.to_string())),
        };
        if !arguments.is_empty() {
            return Err(ParseCommandError::UnexpectedArguments {
                command: keyword.to_string(),
                arguments: arguments.to_string(),
            });
        }
        Ok(command)
    }
}
