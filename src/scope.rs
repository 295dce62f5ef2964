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

use anyhow::{bail, Result};

/// Printed in place of a function name when no enclosing `def` is known,
/// e.g. inside a class body before its first method.
pub const UNSET_FN: &str = "<none>";

/// Per-file scope tracker. Reset (rebuilt) for every file; fed each line in
/// order so matches can be attributed to the enclosing function or
/// class.method.
///
/// This is a deliberate heuristic, not a parser: defs-within-defs, nested
/// classes, decorators and multi-line signatures are not understood.
#[derive(Debug, Default)]
pub struct ScopeState {
    current_class: Option<String>,
    current_function: Option<String>,
}

impl ScopeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the scope transitions for one line (trailing newline already
    /// stripped). Must be called for every line before the line is tested
    /// for a match, so a definition line is attributed to its own scope.
    pub fn advance(&mut self, line: &str) -> Result<()> {
        if line.starts_with("class ") {
            self.current_class = Some(fn_or_class_name(line)?);
            self.current_function = None;
        }

        let defines_fn = if self.current_class.is_none() {
            line.starts_with("def ")
        } else {
            is_indented_def(line)
        };
        if defines_fn {
            self.current_function = Some(fn_or_class_name(line)?);
        }

        // A blank line ends a top-level function's scope. Inside a class
        // body blank lines do not clear the current method.
        if self.current_class.is_none() && line.trim().is_empty() {
            self.current_function = None;
        }

        Ok(())
    }

    /// Scope label for the current line: `Class.method()` inside a class,
    /// `function()` otherwise, with `<none>` standing in for an unknown
    /// function name.
    pub fn label(&self) -> String {
        let func = self.current_function.as_deref().unwrap_or(UNSET_FN);
        match &self.current_class {
            Some(class) => format!("{}.{}()", class, func),
            None => format!("{}()", func),
        }
    }
}

// Method definitions are recognized as "one or more leading spaces, then
// `def `". Tab-indented defs are not recognized.
fn is_indented_def(line: &str) -> bool {
    let stripped = line.trim_start_matches(' ');
    stripped.len() < line.len() && stripped.starts_with("def ")
}

/// Given a line that introduces a class or function scope, return the name
/// of that scope: the second whitespace-separated token, truncated at its
/// first `(`. A definition line with no second token is a hard error that
/// aborts the whole run.
pub fn fn_or_class_name(line: &str) -> Result<String> {
    let token = match line.split_whitespace().nth(1) {
        Some(t) => t,
        None => bail!("malformed definition line: {:?}", line),
    };
    let name = token.split('(').next().unwrap_or_default();
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advanced(lines: &[&str]) -> ScopeState {
        let mut state = ScopeState::new();
        for line in lines {
            state.advance(line).unwrap();
        }
        state
    }

    #[test]
    fn test_fn_or_class_name() {
        let cases = vec![
            ("class Foo:", "Foo"),
            ("class Foo(Base):", "Foo"),
            ("def bar():", "bar"),
            ("    def bar(self, x):", "bar"),
            ("def bar () :", "bar"),
        ];
        for (input, expected) in cases {
            assert_eq!(fn_or_class_name(input).unwrap(), expected);
        }
    }

    #[test]
    fn test_fn_or_class_name_single_token_fails() {
        assert!(fn_or_class_name("class").is_err());
        assert!(fn_or_class_name("def").is_err());
    }

    #[test]
    fn test_method_inside_class() {
        let state = advanced(&["class Foo:", "    def bar(self):", "        x = 1"]);
        assert_eq!(state.label(), "Foo.bar()");
    }

    #[test]
    fn test_class_before_any_def() {
        let state = advanced(&["class Foo:", "    x = 1"]);
        assert_eq!(state.label(), "Foo.<none>()");
    }

    #[test]
    fn test_top_level_function() {
        let state = advanced(&["def bar():", "    x = 1"]);
        assert_eq!(state.label(), "bar()");
    }

    #[test]
    fn test_blank_line_resets_top_level_function() {
        let state = advanced(&["def bar():", "    x = 1", "", "y = 2"]);
        assert_eq!(state.label(), "<none>()");
    }

    #[test]
    fn test_blank_line_keeps_method_inside_class() {
        let state = advanced(&["class Foo:", "    def bar(self):", "", "        x = 1"]);
        assert_eq!(state.label(), "Foo.bar()");
    }

    #[test]
    fn test_new_class_resets_function() {
        let state = advanced(&["class Foo:", "    def bar(self):", "class Baz:"]);
        assert_eq!(state.label(), "Baz.<none>()");
    }

    #[test]
    fn test_tab_indented_def_not_a_method() {
        let state = advanced(&["class Foo:", "\tdef bar(self):"]);
        assert_eq!(state.label(), "Foo.<none>()");
    }

    #[test]
    fn test_indented_def_ignored_outside_class() {
        let state = advanced(&["    def inner():"]);
        assert_eq!(state.label(), "<none>()");
    }

    #[test]
    fn test_definition_line_sees_its_own_scope() {
        let mut state = ScopeState::new();
        state.advance("class Foo:").unwrap();
        assert_eq!(state.label(), "Foo.<none>()");
        state.advance("    def bar(self):").unwrap();
        assert_eq!(state.label(), "Foo.bar()");
    }
}
