// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

mod basics;

use basics::{close_paren, open_paren, parse_ident, parse_number, parse_separator};
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{map, opt},
    sequence::{delimited, preceded, separated_pair, tuple},
    IResult,
};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Statement {
    Recommend(String, Option<usize>),
    Predict(String, String),
    Similarity(String, String),
    Similar(String, usize),
    Ratings(String),
    Users,
    Items,
}

fn parse_recommend(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag("recommend")(input)?;
    let (input, (user, top_n)) = delimited(
        open_paren,
        tuple((parse_ident, opt(preceded(parse_separator, parse_number)))),
        close_paren,
    )(input)?;

    Ok((input, Statement::Recommend(user.into(), top_n)))
}

fn parse_predict(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag("predict")(input)?;
    let (input, (user, item)) = delimited(
        open_paren,
        separated_pair(parse_ident, parse_separator, parse_ident),
        close_paren,
    )(input)?;

    Ok((input, Statement::Predict(user.into(), item.into())))
}

fn parse_similarity(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag("similarity")(input)?;
    let (input, (item_a, item_b)) = delimited(
        open_paren,
        separated_pair(parse_ident, parse_separator, parse_ident),
        close_paren,
    )(input)?;

    Ok((input, Statement::Similarity(item_a.into(), item_b.into())))
}

fn parse_similar(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag("similar")(input)?;
    let (input, (item, k)) = delimited(
        open_paren,
        separated_pair(parse_ident, parse_separator, parse_number),
        close_paren,
    )(input)?;

    Ok((input, Statement::Similar(item.into(), k)))
}

fn parse_ratings(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag("ratings")(input)?;
    let (input, user) = delimited(open_paren, parse_ident, close_paren)(input)?;

    Ok((input, Statement::Ratings(user.into())))
}

fn parse_statement(input: &str) -> IResult<&str, Statement> {
    alt((
        parse_recommend,
        parse_predict,
        // "similarity" has to go before its own prefix
        parse_similarity,
        parse_similar,
        parse_ratings,
        map(tag("users"), |_| Statement::Users),
        map(tag("items"), |_| Statement::Items),
    ))(input)
}

pub fn parse_line(input: &str) -> Option<Statement> {
    let input = input.trim();
    let (rest, statement) = parse_statement(input).ok()?;

    if rest.is_empty() {
        Some(statement)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommend_statement() {
        let parsed = parse_statement("recommend(1)");
        let expected = ("", Statement::Recommend("1".into(), None));

        assert_eq!(parsed, Ok(expected));

        let parsed = parse_statement("recommend(ana, 5)");
        let expected = ("", Statement::Recommend("ana".into(), Some(5)));

        assert_eq!(parsed, Ok(expected));
    }

    #[test]
    fn predict_statement() {
        let parsed = parse_statement("predict(1, item_C)");
        let expected = ("", Statement::Predict("1".into(), "item_C".into()));

        assert_eq!(parsed, Ok(expected));
    }

    #[test]
    fn similarity_statement() {
        let parsed = parse_statement("similarity(item_A,item_D)");
        let expected = (
            "",
            Statement::Similarity("item_A".into(), "item_D".into()),
        );

        assert_eq!(parsed, Ok(expected));
    }

    #[test]
    fn similar_statement() {
        let parsed = parse_statement("similar( item_E , 3 )");
        let expected = ("", Statement::Similar("item_E".into(), 3));

        assert_eq!(parsed, Ok(expected));
    }

    #[test]
    fn ratings_statement() {
        let parsed = parse_statement("ratings(5)");
        let expected = ("", Statement::Ratings("5".into()));

        assert_eq!(parsed, Ok(expected));
    }

    #[test]
    fn parse_valid_lines() {
        assert_eq!(parse_line("  users "), Some(Statement::Users));
        assert_eq!(parse_line("items"), Some(Statement::Items));
        assert_eq!(
            parse_line("recommend(5, 3)"),
            Some(Statement::Recommend("5".into(), Some(3)))
        );
    }

    #[test]
    fn parse_invalid_lines() {
        assert!(parse_line("recommend()").is_none());
        assert!(parse_line("recommend(1, x)").is_none());
        assert!(parse_line("similar(item_A)").is_none());
        assert!(parse_line("predict(1, item_C);").is_none());
        assert!(parse_line("connect(books)").is_none());
    }
}
