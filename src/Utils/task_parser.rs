//! Parses task documents made of titled sections of `key: value, value` lines:
//!
//! ```text
//! interpolation
//! method: cubic
//! x: 0, 5, 7, 10
//! y: 0, 2, 1, 0
//! output
//! format: geogebra
//! ```
//!
//! Every section title maps to its keys, every key to the list of its values. Lines starting
//! with `//`, `#`, `%` or `;` are comments. Keys the caller expects but the document does not
//! mention are present in the result as `None`.
use log::warn;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, recognize},
    multi::{many0, many1, separated_list0},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt;

pub type SectionMap = HashMap<String, Option<Vec<Value>>>;
pub type DocumentMap = HashMap<String, SectionMap>;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn as_string(&self) -> Option<&String> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// integers are accepted wherever a float is expected
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Float(val) => write!(f, "{}", val),
            Value::Integer(val) => write!(f, "{}", val),
            Value::Boolean(val) => write!(f, "{}", val),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskParseError {
    Syntax(String),
    /// text left over after the last section that could be parsed
    Trailing(String),
}

impl fmt::Display for TaskParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskParseError::Syntax(msg) => write!(f, "Parsing error: {}", msg),
            TaskParseError::Trailing(rest) => {
                write!(f, "Failed to parse entire document. Remaining: '{}'", rest)
            }
        }
    }
}

impl std::error::Error for TaskParseError {}

fn identifier(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    map(parser, String::from).parse(input)
}

/// section title; whitespace after it is dropped
pub(crate) fn parse_title(input: &str) -> IResult<&str, String> {
    let (input, result) = identifier(input)?;
    Ok((input.trim(), result))
}

pub(crate) fn parse_key(input: &str) -> IResult<&str, String> {
    identifier(input)
}

/// one value, typed in the order integer, float, boolean, string
pub(crate) fn parse_value(input: &str) -> IResult<&str, Value> {
    let value_parser = take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\n' | '\r' | ';'));
    map(value_parser, |s: &str| {
        if let Ok(val) = s.parse::<i64>() {
            Value::Integer(val)
        } else if let Ok(val) = s.parse::<f64>() {
            Value::Float(val)
        } else if let Ok(val) = s.parse::<bool>() {
            Value::Boolean(val)
        } else {
            Value::String(s.to_string())
        }
    })
    .parse(input)
}

/// comma separated values on a single line
pub(crate) fn parse_value_list(input: &str) -> IResult<&str, Vec<Value>> {
    let separator_comma = delimited(space0, tag(","), space0);
    separated_list0(separator_comma, parse_value).parse(input)
}

pub(crate) fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<Value>)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let (input, result) =
        separated_pair(parse_key, colon_separator, parse_value_list).parse(input)?;
    Ok((input.trim(), result))
}

pub(crate) fn parse_section(input: &str) -> IResult<&str, (String, Vec<(String, Vec<Value>)>)> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let (input, _) = multispace0(input)?;
    let (input, pairs) = many1(terminated(parse_key_value_pair, space0)).parse(input)?;
    Ok((input, (title, pairs)))
}

pub(crate) fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty()
                && !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Raw document parse (no comment filtering). A key repeated inside a section keeps its last
/// value list.
pub fn parse_document(input: &str) -> IResult<&str, DocumentMap> {
    let (input, sections) =
        many1(delimited(space0, parse_section, multispace0)).parse(input)?;
    let mut result: DocumentMap = HashMap::new();
    for (title, pairs) in sections {
        let section = result.entry(title).or_default();
        for (key, values) in pairs {
            section.insert(key, Some(values));
        }
    }
    Ok((input, result))
}

/// Parses a whole task document. `expected` lists every section with its known keys: missing
/// ones are inserted as `None`, unknown ones are kept but reported with `warn!`.
pub fn parse_task_document(
    input: &str,
    expected: &[(&str, &[&str])],
) -> Result<DocumentMap, TaskParseError> {
    let filtered = filter_comments(input);
    let (remaining, mut parsed) =
        parse_document(&filtered).map_err(|e| TaskParseError::Syntax(format!("{:?}", e)))?;
    if !remaining.trim().is_empty() {
        return Err(TaskParseError::Trailing(remaining.to_string()));
    }
    for (title, section) in parsed.iter() {
        match expected.iter().find(|(t, _)| t == title) {
            None => warn!("unknown section '{}' ignored", title),
            Some((_, keys)) => {
                for key in section.keys().filter(|k| !keys.contains(&k.as_str())) {
                    warn!("unknown key '{}' in section '{}' ignored", key, title);
                }
            }
        }
    }
    for (title, keys) in expected {
        let section = parsed.entry(title.to_string()).or_default();
        for key in keys.iter() {
            section.entry(key.to_string()).or_insert(None);
        }
    }
    Ok(parsed)
}
