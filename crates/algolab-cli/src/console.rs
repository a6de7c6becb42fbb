// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Console input with optional prompts.
//!
//! Prompts are written only when reading from an interactive terminal, so
//! piped input and `--input` files produce clean output.

use algolab_common::{Result, TokenReader};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;
use std::str::FromStr;

pub struct Console<R> {
    tokens: TokenReader<R>,
    interactive: bool,
}

impl Console<Box<dyn BufRead>> {
    /// Reads from `path` when given, otherwise from stdin.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let file = File::open(path)?;
                Ok(Self::new(Box::new(BufReader::new(file)), false))
            }
            None => {
                let interactive = io::stdin().is_terminal();
                Ok(Self::new(Box::new(io::stdin().lock()), interactive))
            }
        }
    }
}

impl<R: BufRead> Console<R> {
    pub fn new(reader: R, interactive: bool) -> Self {
        Self {
            tokens: TokenReader::new(reader),
            interactive,
        }
    }

    /// Writes `prompt` to `out` when attached to a terminal.
    pub fn prompt(&self, out: &mut dyn Write, prompt: &str) -> Result<()> {
        if self.interactive {
            write!(out, "{}", prompt)?;
            out.flush()?;
        }
        Ok(())
    }

    /// Shows `prompt` (interactive only) and reads one value.
    pub fn ask<T: FromStr>(
        &mut self,
        out: &mut dyn Write,
        prompt: &str,
        expected: &str,
    ) -> Result<T> {
        self.prompt(out, prompt)?;
        self.tokens.next_value(expected)
    }

    pub fn read<T: FromStr>(&mut self, expected: &str) -> Result<T> {
        self.tokens.next_value(expected)
    }

    pub fn read_many<T: FromStr>(&mut self, count: usize, expected: &str) -> Result<Vec<T>> {
        self.tokens.next_values(count, expected)
    }

    pub fn ask_word(&mut self, out: &mut dyn Write, prompt: &str, expected: &str) -> Result<String> {
        self.prompt(out, prompt)?;
        self.tokens.next_word(expected)
    }
}
