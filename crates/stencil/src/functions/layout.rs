//! Reference-time date layouts.
//!
//! Layouts are written against the reference time
//! `Mon Jan 2 15:04:05 MST 2006`: `2006-01-02 15:04:05` reads as
//! "year-month-day hour:minute:second". They are translated into chrono
//! strftime strings with a small winnow tokenizer. Text that is not a
//! layout token is copied literally.

use winnow::combinator::{alt, repeat};
use winnow::prelude::*;
use winnow::token::any;

/// One piece of a layout string.
#[derive(Debug, Clone, PartialEq)]
enum Chunk {
    /// A strftime specifier.
    Spec(&'static str),
    /// A literal character.
    Literal(char),
}

/// Translate a layout such as `02/01/06 15:04` into `%d/%m/%y %H:%M`.
pub fn to_strftime(layout: &str) -> String {
    let mut input = layout;
    let chunks: Vec<Chunk> = match repeat(0.., chunk).parse_next(&mut input) {
        Ok(chunks) => chunks,
        Err(_) => return layout.replace('%', "%%"),
    };

    let mut out = String::with_capacity(layout.len() * 2);
    for chunk in chunks {
        match chunk {
            Chunk::Spec(spec) => out.push_str(spec),
            Chunk::Literal('%') => out.push_str("%%"),
            Chunk::Literal(c) => out.push(c),
        }
    }
    out
}

fn chunk(input: &mut &str) -> ModalResult<Chunk> {
    alt((
        names.map(Chunk::Spec),
        zone.map(Chunk::Spec),
        fraction.map(Chunk::Spec),
        padded_number.map(Chunk::Spec),
        number.map(Chunk::Spec),
        any.map(Chunk::Literal),
    ))
    .parse_next(input)
}

/// Month and weekday names, time zone abbreviation, AM/PM.
fn names(input: &mut &str) -> ModalResult<&'static str> {
    alt((
        "January".value("%B"),
        "Jan".value("%b"),
        "Monday".value("%A"),
        "Mon".value("%a"),
        "MST".value("%Z"),
        "PM".value("%p"),
        "pm".value("%P"),
    ))
    .parse_next(input)
}

fn zone(input: &mut &str) -> ModalResult<&'static str> {
    alt((
        "Z07:00".value("%:z"),
        "Z0700".value("%z"),
        "-07:00".value("%:z"),
        "-0700".value("%z"),
        "-07".value("%z"),
    ))
    .parse_next(input)
}

/// Fractional seconds; `.000` keeps trailing zeros, `.999` drops them.
fn fraction(input: &mut &str) -> ModalResult<&'static str> {
    alt((
        ".000000000".value("%.9f"),
        ".000000".value("%.6f"),
        ".000".value("%.3f"),
        ".999999999".value("%.f"),
        ".999999".value("%.f"),
        ".999".value("%.f"),
    ))
    .parse_next(input)
}

/// Longest-first: `2006` before `2`, `002` before `02`, `15` before `1`.
fn padded_number(input: &mut &str) -> ModalResult<&'static str> {
    alt((
        "2006".value("%Y"),
        "002".value("%j"),
        "01".value("%m"),
        "02".value("%d"),
        "03".value("%I"),
        "04".value("%M"),
        "05".value("%S"),
        "06".value("%y"),
        "_2".value("%e"),
        "15".value("%H"),
    ))
    .parse_next(input)
}

fn number(input: &mut &str) -> ModalResult<&'static str> {
    alt((
        "1".value("%-m"),
        "2".value("%-d"),
        "3".value("%-I"),
        "4".value("%-M"),
        "5".value("%-S"),
    ))
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::to_strftime;

    #[test]
    fn default_layout() {
        assert_eq!(to_strftime("2006-01-02 15:04:05"), "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn short_uk_layout() {
        assert_eq!(to_strftime("02/01/06"), "%d/%m/%y");
        assert_eq!(to_strftime("020106"), "%d%m%y");
    }

    #[test]
    fn offset_layout() {
        assert_eq!(to_strftime("2006-01-02T15:04:05-0700"), "%Y-%m-%dT%H:%M:%S%z");
    }

    #[test]
    fn names_and_unpadded_numbers() {
        assert_eq!(to_strftime("Mon, 2 Jan 2006 3:04PM"), "%a, %-d %b %Y %-I:%M%p");
        assert_eq!(to_strftime("January _2"), "%B %e");
    }

    #[test]
    fn literal_text_and_percent() {
        assert_eq!(to_strftime("at 100%"), "at %-m00%%");
        assert_eq!(to_strftime("week"), "week");
    }

    #[test]
    fn fractional_seconds() {
        assert_eq!(to_strftime("15:04:05.000"), "%H:%M:%S%.3f");
    }
}
