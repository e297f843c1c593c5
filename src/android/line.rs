//! Line level helpers shared by the `aapt` and `aapt2` dump scanners.
//!
//! A value row of a resource dump looks like
//!
//! ```text
//!       (hdpi-v4) (file) res/drawable-hdpi/ic_launcher.png type=PNG
//! ```
//!
//! i.e. a parenthesised configuration qualifier (possibly empty), a parenthesised value kind and
//! the value itself.

use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::{anychar, char, space1};
use nom::combinator::{peek, recognize};
use nom::multi::many_till;
use nom::sequence::{delimited, pair, terminated};
use nom::IResult;

use crate::types::DEFAULT_RESOURCE_CONFIG;

/// The qualifier to record, substituting `(default)` for an empty group.
pub(crate) fn config_or_default(qualifier: &str) -> &str {
    if qualifier.is_empty() {
        DEFAULT_RESOURCE_CONFIG
    } else {
        qualifier
    }
}

/// `line` without its leading ASCII whitespace.
pub fn trim_indent(line: &str) -> &str {
    line.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

/// Number of leading ASCII whitespace characters of `line`.
pub fn indent_of(line: &str) -> usize {
    line.len() - trim_indent(line).len()
}

/// The `n`th (zero based) whitespace delimited token of `line`.
pub fn token(line: &str, n: usize) -> Option<&str> {
    line.split_whitespace().nth(n)
}

// Everything up to the first `)` that is followed by blanks and another `(` group.
fn qualifier_group(input: &str) -> IResult<&str, &str> {
    delimited(
        char('('),
        recognize(many_till(
            anychar,
            peek(pair(char(')'), pair(space1, char('(')))),
        )),
        char(')'),
    )(input)
}

fn kind_group(input: &str) -> IResult<&str, &str> {
    delimited(char('('), take_till1(|c| c == ')'), char(')'))(input)
}

fn value_token(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace())(input)
}

/// Parses the `(qualifier) (kind)` prefix of an already left-trimmed row.
pub fn qualifier_and_kind(input: &str) -> IResult<&str, (&str, &str)> {
    pair(terminated(qualifier_group, space1), kind_group)(input)
}

/// Parses the `(qualifier) (file) path` shape of `aapt2` entries, returning `(qualifier, path)`.
pub fn file_row(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, qualifier) = terminated(qualifier_group, space1)(input)?;
    let (input, _) = terminated(tag("(file)"), space1)(input)?;
    let (input, path) = value_token(input)?;
    Ok((input, (qualifier, path)))
}
