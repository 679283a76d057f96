use hashbrown::HashSet;
use regex::Regex;

use crate::pattern::ast::{PatternAst, PatternNode, PlaceholderNode};
use crate::pattern::{PatternError, PatternResult};

const OPTIONAL_SUFFIX: &str = ":?";

/// Parses a route pattern into literal and placeholder nodes.
///
/// Accepted placeholder forms are `{:name}`, `{:name:constraint}`,
/// `{:name::?}` and `{:name:constraint:?}`.
#[tracing::instrument(level = "trace", fields(pattern = %pattern))]
pub fn parse_pattern(pattern: &str) -> PatternResult<PatternAst> {
    let mut parser = PatternParser::new(pattern);
    let nodes = parser.parse_sequence()?;

    let ast = PatternAst::new(nodes);
    validate_ast(&ast, pattern)?;
    Ok(ast)
}

struct PatternParser<'a> {
    pattern: &'a str,
    chars: Vec<(usize, char)>,
    index: usize,
}

impl<'a> PatternParser<'a> {
    fn new(pattern: &'a str) -> Self {
        let chars: Vec<(usize, char)> = pattern.char_indices().collect();
        Self {
            pattern,
            chars,
            index: 0,
        }
    }

    fn parse_sequence(&mut self) -> PatternResult<Vec<PatternNode>> {
        let mut nodes = Vec::new();
        while let Some(ch) = self.peek() {
            match ch {
                '{' => {
                    nodes.push(self.parse_placeholder()?);
                }
                '}' => {
                    return Err(PatternError::UnexpectedClosingBrace {
                        pattern: self.pattern.to_string(),
                        index: self.current_byte_index(),
                    });
                }
                _ => {
                    nodes.push(self.parse_literal());
                }
            }
        }
        Ok(nodes)
    }

    fn parse_literal(&mut self) -> PatternNode {
        let mut literal = String::new();
        while let Some(ch) = self.peek() {
            if ch == '{' || ch == '}' {
                break;
            }
            literal.push(ch);
            self.next();
        }
        PatternNode::Literal(literal)
    }

    fn parse_placeholder(&mut self) -> PatternResult<PatternNode> {
        let start = self.current_byte_index();
        self.expect('{');
        if self.peek() != Some(':') {
            return Err(PatternError::PlaceholderMissingPrefix {
                pattern: self.pattern.to_string(),
                index: start,
            });
        }
        self.expect(':');

        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch == ':' || ch == '}' {
                break;
            }
            name.push(ch);
            self.next();
        }
        self.validate_name(&name, start)?;

        let body = match self.next() {
            Some('}') => String::new(),
            Some(':') => self.read_body(start)?,
            _ => {
                return Err(PatternError::UnterminatedPlaceholder {
                    pattern: self.pattern.to_string(),
                    start,
                });
            }
        };

        let (constraint, optional) = match body.strip_suffix(OPTIONAL_SUFFIX) {
            Some(rest) => (rest, true),
            None => (body.as_str(), false),
        };
        let constraint = (!constraint.is_empty()).then(|| constraint.to_string());

        Ok(PatternNode::Placeholder(PlaceholderNode::new(
            name, constraint, optional,
        )))
    }

    /// Reads the placeholder body after the name up to the closing brace,
    /// which is consumed. Braces inside the body must balance.
    fn read_body(&mut self, start: usize) -> PatternResult<String> {
        let mut depth = 0usize;
        let mut body = String::new();
        while let Some(ch) = self.next() {
            match ch {
                '\\' => {
                    let Some(escaped) = self.next() else {
                        break;
                    };
                    body.push('\\');
                    body.push(escaped);
                }
                '{' => {
                    depth += 1;
                    body.push(ch);
                }
                '}' if depth == 0 => return Ok(body),
                '}' => {
                    depth -= 1;
                    body.push(ch);
                }
                _ => body.push(ch),
            }
        }

        Err(PatternError::UnterminatedPlaceholder {
            pattern: self.pattern.to_string(),
            start,
        })
    }

    fn validate_name(&self, name: &str, start: usize) -> PatternResult<()> {
        let Some(first) = name.chars().next() else {
            return Err(PatternError::ParameterMissingName {
                pattern: self.pattern.to_string(),
                index: start,
            });
        };

        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(PatternError::ParameterInvalidStart {
                pattern: self.pattern.to_string(),
                name: name.to_string(),
                found: first,
            });
        }

        if let Some(invalid) = name
            .chars()
            .skip(1)
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(PatternError::ParameterInvalidCharacter {
                pattern: self.pattern.to_string(),
                name: name.to_string(),
                invalid,
            });
        }

        Ok(())
    }

    fn expect(&mut self, expected: char) {
        let actual = self.next();
        debug_assert_eq!(Some(expected), actual);
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).map(|(_, ch)| *ch)
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.index += 1;
        }
        ch
    }

    fn current_byte_index(&self) -> usize {
        self.chars
            .get(self.index)
            .map(|(idx, _)| *idx)
            .unwrap_or(self.pattern.len())
    }
}

fn validate_ast(ast: &PatternAst, pattern: &str) -> PatternResult<()> {
    let mut seen = HashSet::new();
    for placeholder in ast.placeholders() {
        if !seen.insert(placeholder.name.as_str()) {
            return Err(PatternError::DuplicateParamName {
                param: placeholder.name.clone(),
                pattern: pattern.to_string(),
            });
        }

        if let Some(constraint) = &placeholder.constraint {
            // the bare fragment must parse alone so wrapping it cannot rebalance it
            let checked = Regex::new(constraint)
                .and_then(|_| Regex::new(&format!("^(?:{constraint})$")));
            if let Err(err) = checked {
                return Err(PatternError::RegexConstraintInvalid {
                    pattern: pattern.to_string(),
                    name: placeholder.name.clone(),
                    error: err.to_string(),
                });
            }
        }
    }
    Ok(())
}
