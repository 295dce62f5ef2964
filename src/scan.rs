// Copyright (C) 2025 Nuwaira
// All Rights Reserved.
//
// NOTICE: All information contained herein is, and remains
// the property of Nuwaira.
// The intellectual and technical concepts contained
// herein are proprietary to Nuwaira
// and are protected by trade secret or copyright law.
// Dissemination of this information or reproduction of this material
// is strictly forbidden unless prior written permission is obtained
// from Nuwaira.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::fs;
use std::io::Write;

use crate::config::Config;
use crate::paths::{resolve_pathspec, ScanTarget};
use crate::scope::ScopeState;

/// A single annotated match. Produced per matching line and written out
/// immediately; nothing is buffered or sorted across files.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub path: String,
    pub line_number: usize,
    pub scope_label: String,
    pub text: String,
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.path, self.line_number, self.scope_label, self.text
        )
    }
}

/// Compile the search pattern once, up front, so a malformed regex fails
/// before any file is opened.
pub fn compile_pattern(pattern: &str, ignore_case: bool) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(ignore_case)
        .build()
        .with_context(|| format!("invalid pattern {:?}", pattern))
}

/// Scan one file line by line, feeding the scope tracker before testing
/// each line, and write every match to `out` as it is found. Returns the
/// number of matching lines.
pub fn scan_file(target: &ScanTarget, re: &Regex, out: &mut dyn Write) -> Result<usize> {
    let content =
        fs::read_to_string(&target.path).with_context(|| format!("read {}", target.path))?;
    let rel_path = target.display_path();

    let mut scope = ScopeState::new();
    let mut matched = 0usize;
    for (idx, line) in content.lines().enumerate() {
        let lineno = idx + 1;
        scope
            .advance(line)
            .with_context(|| format!("{}:{}", target.path, lineno))?;
        if re.is_match(line) {
            let result = MatchResult {
                path: rel_path.to_string(),
                line_number: lineno,
                scope_label: scope.label(),
                text: line.trim_start().to_string(),
            };
            writeln!(out, "{}", result)?;
            matched += 1;
        }
    }
    Ok(matched)
}

/// The driver: compile the pattern, resolve the pathspec, then scan every
/// target in sequence. Files are processed independently; the first error
/// aborts the whole run.
pub fn run_search(
    pattern: &str,
    pathspec: &str,
    ignore_case: bool,
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    let re = compile_pattern(pattern, ignore_case)?;
    let targets = resolve_pathspec(pathspec, config)?;

    let mut total_matches = 0usize;
    for target in &targets {
        total_matches += scan_file(target, &re, out)?;
    }
    tracing::info!(
        "scanned {} files, {} matching lines",
        targets.len(),
        total_matches
    );
    Ok(())
}
