// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Physical-group name records
//!
//! Decodes the `$PhysicalNames` section (identical in both format
//! versions): one record per line, `dimension tag "name"`. The names
//! feed the tag dictionaries and classifiers in [`crate::tags`]; what a
//! name means beyond the boundary/domain convention is not interpreted
//! here.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, digit1, space1},
    combinator::{map_res, opt, recognize},
    sequence::{delimited, pair, preceded},
    IResult,
};

use crate::error::{Error, Result};

const SECTION: &str = "PhysicalNames";

/// One `$PhysicalNames` record: dimension, tag, and the raw group name
/// (brackets and all, for the downstream classifiers).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalName {
    pub dim: u8,
    pub tag: i64,
    pub name: String,
}

/// Parse dimension: 0..=3
fn dimension(input: &str) -> IResult<&str, u8> {
    map_res(digit1, |s: &str| s.parse::<u8>())(input)
}

/// Parse tag: 42, -42
fn tag(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}

/// Parse the double-quoted group name
fn quoted_name(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_while1(|c| c != '"'), char('"'))(input)
}

/// Parse one record line: `dim tag "name"`
fn physical_name_line(input: &str) -> IResult<&str, PhysicalName> {
    let (input, dim) = dimension(input)?;
    let (input, tag) = preceded(space1, tag)(input)?;
    let (input, name) = preceded(space1, quoted_name)(input)?;
    Ok((
        input,
        PhysicalName {
            dim,
            tag,
            name: name.to_string(),
        },
    ))
}

/// Parse the `$PhysicalNames` section body into its records.
///
/// The body starts with the record count line; exactly that many record
/// lines follow. A count/content mismatch or an unparseable record
/// aborts the section.
pub fn parse_physical_names(section: &str) -> Result<Vec<PhysicalName>> {
    let mut lines = section.lines();
    let count_line = lines.next().ok_or(Error::MalformedSection {
        section: SECTION,
        line: 1,
        message: "empty section".into(),
    })?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| Error::MalformedSection {
            section: SECTION,
            line: 1,
            message: format!("bad record count '{}'", count_line.trim()),
        })?;

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let line_no = i + 2;
        let line = lines.next().ok_or(Error::MalformedSection {
            section: SECTION,
            line: line_no,
            message: "section ended before the declared record count".into(),
        })?;
        let (_, record) =
            physical_name_line(line.trim()).map_err(|e| Error::MalformedSection {
                section: SECTION,
                line: line_no,
                message: e.to_string(),
            })?;
        records.push(record);
    }

    Ok(records)
}
