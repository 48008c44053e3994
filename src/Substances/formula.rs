//! Parsing of chemical formula strings into an element -> count mapping.
//!
//! Grammar: element symbols (uppercase letter plus optional lowercase
//! letters) with optional trailing multiplier digits, and one level of
//! parenthesized groups with an optional group multiplier, e.g. "Ca(NO3)2".
//! Trailing phase marks like "(g)" or "(aq)" are stripped before the scan.
//! Chemical formulae may also contain special names for chemical groups,
//! i.e. groups of atoms, e.g. Me (methyl), which is expanded into
//! {"C": 1, "H": 3}; pass such names and their atomic composition via the
//! `groups` argument.

use log::debug;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// named chemical groups and their atomic composition, e.g. { "Me": {"C": 1, "H": 3} }
pub type Groups = HashMap<String, HashMap<String, usize>>;

#[derive(Debug, Error, PartialEq)]
pub enum FormulaError {
    #[error("Empty formula")]
    Empty,
    #[error("Unexpected character '{found}' at position {position} in formula '{formula}'")]
    UnexpectedChar {
        formula: String,
        found: char,
        position: usize,
    },
    #[error("Unclosed group in formula '{0}'")]
    UnclosedGroup(String),
    #[error("Unmatched ')' in formula '{0}'")]
    UnmatchedClose(String),
}

// one element token: symbol followed by optional count digits
fn symbol_regex() -> &'static Regex {
    static SYMBOL: OnceLock<Regex> = OnceLock::new();
    SYMBOL.get_or_init(|| Regex::new(r"([A-Z][a-z]*)(\d*)").unwrap())
}

const PHASE_MARKS: &[&str] = &[
    "(g)", "(G)", "(l)", "(L)", "(s)", "(S)", "(c)", "(C)", "(aq)", "(Aq)",
];

// phase annotations are parsing artifacts of database formulas, not part of
// the composition
fn strip_phase_marks(formula: &str) -> &str {
    let mut rest = formula;
    loop {
        let before = rest;
        for mark in PHASE_MARKS {
            if let Some(stripped) = rest.strip_suffix(mark) {
                rest = stripped;
            }
        }
        if rest == before {
            return rest;
        }
    }
}

// digits at byte position `start`; (1, start) when there are none
fn read_count(formula: &str, start: usize) -> (usize, usize) {
    let end = formula[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|offset| start + offset)
        .unwrap_or(formula.len());
    if end == start {
        (1, start)
    } else {
        (formula[start..end].parse().unwrap(), end)
    }
}

// scan a paren-free segment, adding `count * multiplier` atoms per token;
// `offset` is the segment position inside the full formula for error reporting
fn scan_segment(
    segment: &str,
    formula: &str,
    offset: usize,
    multiplier: usize,
    counts: &mut HashMap<String, usize>,
) -> Result<(), FormulaError> {
    let mut position = 0;
    for captures in symbol_regex().captures_iter(segment) {
        let token = captures.get(0).unwrap();
        if token.start() != position {
            let found = segment[position..].chars().next().unwrap();
            return Err(FormulaError::UnexpectedChar {
                formula: formula.to_string(),
                found,
                position: offset + position,
            });
        }
        let symbol = &captures[1];
        let digits = &captures[2];
        let count: usize = if digits.is_empty() {
            1
        } else {
            digits.parse().unwrap()
        };
        *counts.entry(symbol.to_string()).or_insert(0) += count * multiplier;
        position = token.end();
    }
    if position != segment.len() {
        let found = segment[position..].chars().next().unwrap();
        return Err(FormulaError::UnexpectedChar {
            formula: formula.to_string(),
            found,
            position: offset + position,
        });
    }
    Ok(())
}

// if a group name is found in the counts we get rid of it and turn it into
// regular elements, i.e. Me (methyl) becomes {"C": 1, "H": 3}
fn expand_groups(
    mut counts: HashMap<String, usize>,
    groups: Option<&Groups>,
) -> HashMap<String, usize> {
    let Some(groups) = groups else {
        return counts;
    };
    for (group_name, atomic_composition) in groups {
        if let Some(number_of_groups) = counts.remove(group_name) {
            for (atom, quantity) in atomic_composition {
                *counts.entry(atom.clone()).or_insert(0) += quantity * number_of_groups;
            }
        }
    }
    counts
}

/// Parse a chemical formula into a map of elements and their counts.
pub fn parse_formula(formula: &str) -> Result<HashMap<String, usize>, FormulaError> {
    parse_formula_with_groups(formula, None)
}

/// Parse a chemical formula, expanding named chemical groups. The `groups`
/// argument maps group names to their atomic composition, { "Me": {"C": 1, "H": 3} }.
pub fn parse_formula_with_groups(
    formula: &str,
    groups: Option<&Groups>,
) -> Result<HashMap<String, usize>, FormulaError> {
    let compact: String = formula.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = strip_phase_marks(&compact).to_string();
    if compact.is_empty() {
        return Err(FormulaError::Empty);
    }

    let mut counts = HashMap::new();
    let mut i = 0;
    while i < compact.len() {
        match compact[i..].chars().next() {
            Some('(') => {
                // one level of grouping: find the matching close, reject nesting
                let inner_start = i + 1;
                match compact[inner_start..].find(['(', ')']) {
                    Some(open_offset)
                        if compact[inner_start + open_offset..].starts_with('(') =>
                    {
                        return Err(FormulaError::UnexpectedChar {
                            formula: compact.clone(),
                            found: '(',
                            position: inner_start + open_offset,
                        });
                    }
                    Some(close_offset) => {
                        let inner_end = inner_start + close_offset;
                        let (multiplier, next) = read_count(&compact, inner_end + 1);
                        scan_segment(
                            &compact[inner_start..inner_end],
                            &compact,
                            inner_start,
                            multiplier,
                            &mut counts,
                        )?;
                        i = next;
                    }
                    None => return Err(FormulaError::UnclosedGroup(compact.clone())),
                }
            }
            Some(')') => return Err(FormulaError::UnmatchedClose(compact.clone())),
            Some(_) => {
                // plain run up to the next bracket
                let end = compact[i..]
                    .find(['(', ')'])
                    .map(|offset| i + offset)
                    .unwrap_or(compact.len());
                scan_segment(&compact[i..end], &compact, i, 1, &mut counts)?;
                i = end;
            }
            None => break,
        }
    }

    let counts = expand_groups(counts, groups);
    debug!("parsed formula '{}' into {:?}", formula, counts);
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formula() {
        let expected = HashMap::from([
            ("C".to_string(), 6),
            ("H".to_string(), 8),
            ("O".to_string(), 6),
        ]);
        assert_eq!(parse_formula("C6H8O6").unwrap(), expected);

        let expected = HashMap::from([("H".to_string(), 2), ("O".to_string(), 1)]);
        assert_eq!(parse_formula("H2O").unwrap(), expected);

        // repeated element symbols accumulate
        let expected = HashMap::from([
            ("C".to_string(), 5),
            ("H".to_string(), 7),
            ("O".to_string(), 2),
        ]);
        assert_eq!(parse_formula("C5H6OOH").unwrap(), expected);
    }

    #[test]
    fn test_parse_group_multiplier() {
        let expected = HashMap::from([
            ("Na".to_string(), 1),
            ("N".to_string(), 2),
            ("O".to_string(), 6),
        ]);
        assert_eq!(parse_formula("Na(NO3)2").unwrap(), expected);

        let expected = HashMap::from([
            ("Ba".to_string(), 1),
            ("O".to_string(), 2),
            ("H".to_string(), 2),
        ]);
        assert_eq!(parse_formula("Ba(OH)2").unwrap(), expected);

        // group without a trailing multiplier
        let expected = HashMap::from([
            ("C".to_string(), 1),
            ("O".to_string(), 2),
            ("H".to_string(), 1),
        ]);
        assert_eq!(parse_formula("C(OH)O").unwrap(), expected);
    }

    #[test]
    fn test_multi_digit_count() {
        let expected = HashMap::from([("H".to_string(), 101)]);
        assert_eq!(parse_formula("H101").unwrap(), expected);
    }

    #[test]
    fn test_phase_marks_stripped() {
        let expected = HashMap::from([("H".to_string(), 2), ("O".to_string(), 1)]);
        assert_eq!(parse_formula("H2O(g)").unwrap(), expected);
        assert_eq!(parse_formula("H2O(aq)").unwrap(), expected);
    }

    #[test]
    fn test_whitespace_ignored() {
        let expected = HashMap::from([("Na".to_string(), 1), ("Cl".to_string(), 1)]);
        assert_eq!(parse_formula(" Na Cl ").unwrap(), expected);
    }

    #[test]
    fn test_with_groups() {
        let groups = Groups::from([(
            "Me".to_string(),
            HashMap::from([("C".to_string(), 1), ("H".to_string(), 3)]),
        )]);

        // toluene
        let expected = HashMap::from([("C".to_string(), 7), ("H".to_string(), 8)]);
        assert_eq!(
            parse_formula_with_groups("C6H5Me", Some(&groups)).unwrap(),
            expected
        );

        // xylene, group inside brackets
        let expected = HashMap::from([("C".to_string(), 8), ("H".to_string(), 10)]);
        assert_eq!(
            parse_formula_with_groups("C6H4(Me)2", Some(&groups)).unwrap(),
            expected
        );
    }

    #[test]
    fn test_empty_formula() {
        assert_eq!(parse_formula(""), Err(FormulaError::Empty));
        assert_eq!(parse_formula("   "), Err(FormulaError::Empty));
    }

    #[test]
    fn test_unexpected_character() {
        let err = parse_formula("H2*O").unwrap_err();
        assert!(matches!(
            err,
            FormulaError::UnexpectedChar { found: '*', position: 2, .. }
        ));
        // lowercase start is not a symbol
        assert!(matches!(
            parse_formula("h2O").unwrap_err(),
            FormulaError::UnexpectedChar { found: 'h', .. }
        ));
    }

    #[test]
    fn test_bracket_errors() {
        assert_eq!(
            parse_formula("Ca(NO3"),
            Err(FormulaError::UnclosedGroup("Ca(NO3".to_string()))
        );
        assert_eq!(
            parse_formula("CaNO3)2"),
            Err(FormulaError::UnmatchedClose("CaNO3)2".to_string()))
        );
        // nested groups are out of the supported grammar
        assert!(matches!(
            parse_formula("K((CN)2)3").unwrap_err(),
            FormulaError::UnexpectedChar { found: '(', .. }
        ));
    }
}
