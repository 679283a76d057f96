use regex::{Regex, RegexBuilder};
use smallvec::SmallVec;

use super::ast::{PatternNode, PlaceholderNode};
use super::parser::parse_pattern;
use super::{PatternError, PatternResult};

/// Matches one or more characters other than `/`.
pub const DEFAULT_CONSTRAINT: &str = "[^/]+";

/// Literal characters an optional placeholder takes along as its separator.
pub const OPTIONAL_SEPARATORS: &[char] = &['/', '.', '-', '_', ',', ';', '~'];

const SLOT_PREFIX: &str = "__slot";

/// Raw captured substrings, indexed by placeholder position.
pub type CaptureList<'p> = SmallVec<[(usize, &'p str); 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSegment {
    Literal(String),
    Placeholder(Placeholder),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub constraint: Option<String>,
    pub optional: bool,
    /// Literal separator that belongs to the optional unit, if any.
    pub separator: Option<char>,
}

impl Placeholder {
    pub fn constraint_or_default(&self) -> &str {
        self.constraint.as_deref().unwrap_or(DEFAULT_CONSTRAINT)
    }
}

#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    segments: Vec<RouteSegment>,
    regex: Regex,
    slots: Vec<String>,
    validators: Vec<Regex>,
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.segments == other.segments
            && self.regex.as_str() == other.regex.as_str()
    }
}

impl CompiledPattern {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            RouteSegment::Placeholder(placeholder) => Some(placeholder),
            RouteSegment::Literal(_) => None,
        })
    }

    pub fn placeholder(&self, name: &str) -> Option<&Placeholder> {
        self.placeholders().find(|placeholder| placeholder.name == name)
    }

    pub fn has_placeholder(&self, name: &str) -> bool {
        self.placeholder(name).is_some()
    }

    pub fn is_static(&self) -> bool {
        self.placeholders().next().is_none()
    }

    /// Checks a raw value against the constraint of the placeholder at `index`.
    pub fn accepts(&self, index: usize, value: &str) -> bool {
        self.validators
            .get(index)
            .is_some_and(|validator| validator.is_match(value))
    }

    /// Runs the compiled matcher over a normalized path. Absent optional
    /// placeholders are left out of the returned list.
    pub fn captures<'p>(&self, path: &'p str) -> Option<CaptureList<'p>> {
        let caps = self.regex.captures(path)?;
        let mut out = CaptureList::new();
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(found) = caps.name(slot) {
                out.push((index, found.as_str()));
            }
        }
        Some(out)
    }
}

/// Compiles a route pattern into an anchored matcher.
///
/// A missing leading `/` is added and trailing slashes are dropped before
/// compiling, mirroring how request paths are normalized.
#[tracing::instrument(level = "trace", fields(pattern = %pattern))]
pub fn compile_pattern(pattern: &str, case_sensitive: bool) -> PatternResult<CompiledPattern> {
    let mut nodes = parse_pattern(pattern)?.nodes;
    anchor_nodes(&mut nodes);
    let segments = lower_nodes(nodes);

    let mut source = String::with_capacity(pattern.len() * 2 + 8);
    let mut validators = Vec::new();
    let mut slots = Vec::new();
    source.push('^');
    for segment in &segments {
        match segment {
            RouteSegment::Literal(text) => source.push_str(&regex::escape(text)),
            RouteSegment::Placeholder(placeholder) => {
                let slot = format!("{SLOT_PREFIX}{}", slots.len());
                let constraint = placeholder.constraint_or_default();
                let group = format!("(?P<{slot}>(?:{constraint}))");
                if placeholder.optional {
                    source.push_str("(?:");
                    if let Some(separator) = placeholder.separator {
                        source.push_str(&regex::escape(separator.encode_utf8(&mut [0; 4])));
                    }
                    source.push_str(&group);
                    source.push_str(")?");
                } else {
                    source.push_str(&group);
                }
                slots.push(slot);
                validators.push(build_regex(
                    &format!("^(?:{constraint})$"),
                    case_sensitive,
                    pattern,
                )?);
            }
        }
    }
    source.push_str("/?$");

    let regex = build_regex(&source, case_sensitive, pattern)?;

    Ok(CompiledPattern {
        source: pattern.to_string(),
        segments,
        regex,
        slots,
        validators,
    })
}

/// Guarantees a leading `/` and drops trailing slashes from the final literal.
fn anchor_nodes(nodes: &mut Vec<PatternNode>) {
    if let Some(PatternNode::Literal(text)) = nodes.first_mut() {
        if !text.starts_with('/') {
            text.insert(0, '/');
        }
    } else {
        nodes.insert(0, PatternNode::Literal("/".to_string()));
    }
    if let Some(PatternNode::Literal(text)) = nodes.last_mut() {
        while text.ends_with('/') {
            text.pop();
        }
    }
}

/// Turns parser nodes into segments, moving the separator in front of each
/// optional placeholder into the placeholder itself.
fn lower_nodes(nodes: Vec<PatternNode>) -> Vec<RouteSegment> {
    let mut segments: Vec<RouteSegment> = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            PatternNode::Literal(text) => {
                if text.is_empty() {
                    continue;
                }
                if let Some(RouteSegment::Literal(existing)) = segments.last_mut() {
                    existing.push_str(&text);
                } else {
                    segments.push(RouteSegment::Literal(text));
                }
            }
            PatternNode::Placeholder(PlaceholderNode {
                name,
                constraint,
                optional,
            }) => {
                let separator = if optional {
                    take_separator(&mut segments)
                } else {
                    None
                };
                segments.push(RouteSegment::Placeholder(Placeholder {
                    name,
                    constraint,
                    optional,
                    separator,
                }));
            }
        }
    }
    segments
}

fn take_separator(segments: &mut Vec<RouteSegment>) -> Option<char> {
    let Some(RouteSegment::Literal(text)) = segments.last_mut() else {
        return None;
    };
    let last = text.chars().last()?;
    if !OPTIONAL_SEPARATORS.contains(&last) {
        return None;
    }
    text.pop();
    if text.is_empty() {
        segments.pop();
    }
    Some(last)
}

fn build_regex(source: &str, case_sensitive: bool, pattern: &str) -> PatternResult<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|err| PatternError::RegexCompileFailed {
            pattern: pattern.to_string(),
            error: err.to_string(),
        })
}
