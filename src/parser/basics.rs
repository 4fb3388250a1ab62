// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use nom::bytes::complete::{tag, take_while, take_while1};
use nom::character::complete::{char, digit1, space0};
use nom::combinator::map_res;
use nom::sequence::{delimited, pair};
use nom::IResult;

pub(crate) fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')(input)
}

pub(crate) fn parse_number(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

pub(crate) fn parse_separator(input: &str) -> IResult<&str, &str> {
    delimited(
        take_while(|c: char| c == ' '),
        tag(","),
        take_while(|c: char| c == ' '),
    )(input)
}

pub(crate) fn open_paren(input: &str) -> IResult<&str, (char, &str)> {
    pair(char('('), space0)(input)
}

pub(crate) fn close_paren(input: &str) -> IResult<&str, (&str, char)> {
    pair(space0, char(')'))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_idents() {
        let parsed = parse_ident("item_A-2.0");
        let expected = ("", "item_A-2.0");

        assert_eq!(parsed, Ok(expected));

        let parsed = parse_ident("this is not ok");
        let expected = (" is not ok", "this");

        assert_eq!(parsed, Ok(expected));
    }

    #[test]
    fn test_parse_numbers() {
        let parsed = parse_number("12345");
        let expected = ("", 12345);

        assert_eq!(parsed, Ok(expected));

        let parsed = parse_number("12c3");
        let expected = ("c3", 12);
        assert_eq!(parsed, Ok(expected));

        assert!(parse_number("x1").is_err());
    }

    #[test]
    fn test_parse_separator() {
        assert_eq!(parse_separator(" ,  x"), Ok(("x", ",")));
        assert!(parse_separator("x").is_err());
    }

    #[test]
    fn test_parens() {
        assert_eq!(open_paren("(  1"), Ok(("1", ('(', "  "))));
        assert_eq!(close_paren(" )"), Ok(("", (" ", ')'))));
    }
}
