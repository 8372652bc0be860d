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

#![warn(missing_docs)]

//! Pacman on a 5x5 grid.
//!
//! A single Pacman is placed somewhere on the grid, then turned, moved and asked to report where
//! it is. Nothing here ever panics on bad input. A rejected operation writes a diagnostic line to
//! the agent's [`Console`] and leaves the agent exactly as it was, so the caller can carry on
//! chaining calls.
//!
//! ```
//! use pacman_world::{Agent, Facing, Transcript};
//!
//! let mut agent = Agent::with_console(Transcript::new());
//! agent
//!     .place(1, 2, Facing::East)
//!     .move_forward()
//!     .move_forward()
//!     .turn_left()
//!     .move_forward()
//!     .report();
//! assert_eq!(agent.console().last(), Some("3,3,NORTH"));
//! ```

pub mod agent;
pub mod command;
pub mod console;
pub mod grid;
pub mod script;

pub use agent::Agent;
pub use command::Command;
pub use console::{Console, StdoutConsole, Transcript};
pub use grid::{Coordinate, Facing, Pose, MAX_INDEX};
pub use script::{run_script, ScriptSummary};

/// Rejected agent operation. The `Display` text of each variant is the exact diagnostic line
/// written to the console.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PacmanError {
    /// Turn, move or report before any successful placement.
    #[error("Can't do that. You have't placed the Pacman yet :/")]
    NotPlaced,

    /// Placement outside the grid.
    #[error("You can only place Pacman on a square from 0 to 4")]
    InvalidPlacement {
        /// Requested x.
        x: i32,
        /// Requested y.
        y: i32,
    },

    /// Moving forward would leave the grid.
    #[error("You can't move Pacman there")]
    InvalidMove {
        /// Where Pacman stood (and still stands).
        from: Coordinate,
        /// Direction it tried to move in.
        facing: Facing,
    },
}

/// Error parsing a command or a facing name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    /// Nothing to parse.
    #[error("empty command")]
    Empty,

    /// First word is not a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Not one of NORTH, EAST, SOUTH, WEST.
    #[error("unknown facing: {0}")]
    UnknownFacing(String),

    /// PLACE needs exactly `X,Y,F`.
    #[error("PLACE expects X,Y,F but got: {0}")]
    MalformedPlace(String),

    /// X or Y is not an integer.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// A command that takes no arguments was given some.
    #[error("{command} takes no arguments but got: {arguments}")]
    UnexpectedArguments {
        /// The command keyword.
        command: String,
        /// Whatever followed it.
        arguments: String,
    },
}
