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

//! Feed a text file of commands to one agent.
//!
//! One command per line. Blank lines and lines starting with `#` are ignored. A line that does
//! not parse, or is not UTF-8, is logged and skipped; it never stops the session.

use crate::{Agent, Command, Console};
use std::io::BufRead;
use tracing::warn;

/// What happened to the lines of a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Commands handed to the agent, rejected ones included.
    pub applied: usize,

    /// Lines that did not parse.
    pub skipped: usize,
}

/// Run every command in `reader` against `agent`.
pub fn run_script<R, C>(reader: R, agent: &mut Agent<C>) -> std::io::Result<ScriptSummary>
where
    R: BufRead,
    C: Console,
{
    let mut summary = ScriptSummary::default();
    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line = match std::str::from_utf8(&bytes) {
            Ok(line) => line,
            Err(e) => {
                warn!(line = index + 1, error = %e, "skipping command that is not UTF-8");
                summary.skipped += 1;
                continue;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match trimmed.parse::<Command>() {
            Ok(command) => {
                agent.apply(&command);
                summary.applied += 1;
            }
            Err(e) => {
                warn!(line = index + 1, error = %e, "skipping command");
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}
