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

//! Where report and diagnostic lines go.

/// A line-oriented output stream. Reports and diagnostics share the same console.
pub trait Console {
    /// Write one line. `line` never contains a newline.
    fn write_line(&mut self, line: &str);
}

impl<C> Console for &mut C
where
    C: Console + ?Sized,
{
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}

/// Console printing to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Console that keeps every line in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line written so far, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The most recent line.
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Whether `line` was written at any point.
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Number of lines written.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing was written.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Console for Transcript {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
