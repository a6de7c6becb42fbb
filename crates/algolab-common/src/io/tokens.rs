// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Whitespace-separated token reader for console exercises.
//!
//! Lines are pulled from the underlying reader only when the current line has
//! no tokens left, so prompts printed between reads appear at the right time
//! on an interactive terminal.

use crate::api::error::{LabError, Result};
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: 0,
        }
    }

    /// Line number (1-based) of the most recently read line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Next raw token. `expected` describes the value for error messages.
    pub fn next_word(&mut self, expected: &str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Err(LabError::UnexpectedEof {
                    expected: expected.to_string(),
                });
            }
            self.line += 1;
            self.pending
                .extend(buf.split_whitespace().map(str::to_string));
        }
    }

    /// Next token parsed as `T`.
    pub fn next_value<T: FromStr>(&mut self, expected: &str) -> Result<T> {
        let token = self.next_word(expected)?;
        token.parse().map_err(|_| LabError::MalformedInput {
            expected: expected.to_string(),
            found: token,
            line: self.line,
        })
    }

    /// Read `count` values of type `T`.
    pub fn next_values<T: FromStr>(&mut self, count: usize, expected: &str) -> Result<Vec<T>> {
        (0..count).map(|_| self.next_value(expected)).collect()
    }

    /// Whether any non-whitespace input remains.
    pub fn is_exhausted(&mut self) -> Result<bool> {
        while self.pending.is_empty() {
            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(true);
            }
            self.line += 1;
            self.pending
                .extend(buf.split_whitespace().map(str::to_string));
        }
        Ok(false)
    }
}
