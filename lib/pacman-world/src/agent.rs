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

//! The Pacman state machine.
//!
//! An agent starts unplaced. The only way out of that state is a valid `place`, and there is no
//! way back into it. Every other operation needs a placed agent.

use crate::{Command, Console, Coordinate, Facing, PacmanError, Pose, StdoutConsole};
use tracing::{debug, info};

/// Turning is only offered as `turn_left` / `turn_right`, never with a direction argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Left,
    Right,
}

/// A single Pacman and the console it writes to.
///
/// The chaining operations (`place`, `turn_left`, `turn_right`, `move_forward`, `report`) never
/// fail: a rejected operation writes its diagnostic to the console and changes nothing. Their
/// `try_` twins return the [`PacmanError`] instead and write nothing.
#[derive(Debug, Clone)]
pub struct Agent<C = StdoutConsole>
where
    C: Console,
{
    pose: Option<Pose>,
    console: C,
}

impl Agent<StdoutConsole> {
    /// Create an unplaced agent that prints to standard output.
    pub fn new() -> Self {
        Self::with_console(StdoutConsole)
    }
}

impl Default for Agent<StdoutConsole> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Agent<C>
where
    C: Console,
{
    /// Create an unplaced agent writing to `console`.
    pub fn with_console(console: C) -> Self {
        Self {
            pose: None,
            console,
        }
    }

    /// Current pose, or `None` while unplaced.
    pub fn pose(&self) -> Option<Pose> {
        self.pose
    }

    /// Whether a placement has ever succeeded.
    pub fn is_placed(&self) -> bool {
        self.pose.is_some()
    }

    /// The console this agent writes to.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Give up the agent and keep its console.
    pub fn into_console(self) -> C {
        self.console
    }

    fn placed_pose(&self) -> Result<Pose, PacmanError> {
        self.pose.ok_or(PacmanError::NotPlaced)
    }

    /// Place Pacman at `(x, y)` facing `facing`. Replaces any earlier placement.
    pub fn try_place(&mut self, x: i32, y: i32, facing: Facing) -> Result<Pose, PacmanError> {
        let coordinate = Coordinate::new(x, y)?;
        let pose = Pose { coordinate, facing };
        if self.pose.replace(pose).is_none() {
            debug!(%coordinate, %facing, "placed");
        } else {
            debug!(%coordinate, %facing, "re-placed");
        }
        Ok(pose)
    }

    fn turn(&mut self, way: Turn) -> Result<Facing, PacmanError> {
        let mut pose = self.placed_pose()?;
        pose.facing = match way {
            Turn::Left => pose.facing.counter_clockwise(),
            Turn::Right => pose.facing.clockwise(),
        };
        debug!(?way, facing = %pose.facing, "turned");
        self.pose = Some(pose);
        Ok(pose.facing)
    }

    /// Turn a quarter counter-clockwise. Returns the new facing.
    pub fn try_turn_left(&mut self) -> Result<Facing, PacmanError> {
        self.turn(Turn::Left)
    }

    /// Turn a quarter clockwise. Returns the new facing.
    pub fn try_turn_right(&mut self) -> Result<Facing, PacmanError> {
        self.turn(Turn::Right)
    }

    /// Step one square forward. Returns the new coordinate.
    pub fn try_move_forward(&mut self) -> Result<Coordinate, PacmanError> {
        let mut pose = self.placed_pose()?;
        pose.coordinate = pose.coordinate.step(pose.facing)?;
        debug!(coordinate = %pose.coordinate, "moved");
        self.pose = Some(pose);
        Ok(pose.coordinate)
    }

    /// The report line, e.g. `0,1,NORTH`, without writing it anywhere.
    pub fn try_report(&self) -> Result<String, PacmanError> {
        self.placed_pose().map(|pose| pose.to_string())
    }

    fn diagnose<T>(&mut self, result: Result<T, PacmanError>) -> &mut Self {
        if let Err(e) = result {
            info!(error = ?e, "rejected");
            self.console.write_line(&e.to_string());
        }
        self
    }

    /// Place Pacman at `(x, y)` facing `facing`.
    pub fn place(&mut self, x: i32, y: i32, facing: Facing) -> &mut Self {
        let result = self.try_place(x, y, facing);
        self.diagnose(result)
    }

    /// Turn a quarter counter-clockwise.
    pub fn turn_left(&mut self) -> &mut Self {
        let result = self.try_turn_left();
        self.diagnose(result)
    }

    /// Turn a quarter clockwise.
    pub fn turn_right(&mut self) -> &mut Self {
        let result = self.try_turn_right();
        self.diagnose(result)
    }

    /// Step one square forward, unless that leaves the grid.
    pub fn move_forward(&mut self) -> &mut Self {
        let result = self.try_move_forward();
        self.diagnose(result)
    }

    /// Write the report line to the console.
    pub fn report(&mut self) -> &mut Self {
        match self.try_report() {
            Ok(line) => {
                self.console.write_line(&line);
                self
            }
            Err(e) => self.diagnose::<()>(Err(e)),
        }
    }

    /// Run one command.
    pub fn apply(&mut self, command: &Command) -> &mut Self {
        match *command {
            Command::Place { x, y, facing } => self.place(x, y, facing),
            Command::Move => self.move_forward(),
            Command::Left => self.turn_left(),
            Command::Right => self.turn_right(),
            Command::Report => self.report(),
        }
    }
}
