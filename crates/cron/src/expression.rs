//! Whole-expression validation: keyword short-circuit, field split, then
//! left-to-right field checks that stop at the first failure.

use crate::error::ValidationError;
use crate::field::{FIELDS, FIELD_COUNT};
use crate::keyword::Keyword;
use crate::term::Term;

/// A syntactically valid expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CronExpression {
    Keyword(Keyword),
    /// Always exactly [`FIELD_COUNT`] terms, in [`FIELDS`] order.
    Fields(Vec<Term>),
}

/// Parse and check `expression`, returning its typed form.
pub fn parse(expression: &str) -> Result<CronExpression, ValidationError> {
    let trimmed = expression.trim();
    if let Some(keyword) = Keyword::parse(trimmed) {
        return Ok(CronExpression::Keyword(keyword));
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    if fields.len() != FIELD_COUNT {
        return Err(ValidationError::FieldCountMismatch {
            expected: FIELD_COUNT,
            actual: fields.len(),
        });
    }

    let mut terms = Vec::with_capacity(FIELD_COUNT);
    for (domain, text) in FIELDS.iter().zip(fields) {
        let term = Term::parse(text, domain).map_err(|source| ValidationError::Field {
            position: domain.ordinal(),
            name: domain.name,
            source,
        })?;
        terms.push(term);
    }
    Ok(CronExpression::Fields(terms))
}

/// Check `expression` without keeping the parsed form.
pub fn validate(expression: &str) -> Result<(), ValidationError> {
    parse(expression).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, TermError};
    use crate::term::Span;

    #[test]
    fn accepts_common_expressions() {
        for expr in [
            "* * * * *",
            "0 * * * *",
            "*/5 9-17 * * 1-5",
            "30 9 1,15 * *",
            "0 0 * * 0",
            "0 0 * * 7",
            "0-59/15 0-23/2 1-31/3 1-12/4 0-7/2",
            "  15   10 * * *  ",
            "0\t0\t1\t1\t*",
        ] {
            assert!(validate(expr).is_ok(), "{expr:?} should be valid");
        }
    }

    #[test]
    fn keywords_short_circuit_with_surrounding_whitespace() {
        assert_eq!(parse("  @Daily \n"), Ok(CronExpression::Keyword(Keyword::Daily)));
        assert!(validate("@REBOOT").is_ok());
    }

    #[test]
    fn wrong_field_counts() {
        assert_eq!(
            validate("* * *"),
            Err(ValidationError::FieldCountMismatch {
                expected: 5,
                actual: 3
            })
        );
        assert_eq!(
            validate("* * * * * *"),
            Err(ValidationError::FieldCountMismatch {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(
            validate("   "),
            Err(ValidationError::FieldCountMismatch {
                expected: 5,
                actual: 0
            })
        );
    }

    #[test]
    fn keyword_with_extra_tokens_is_a_field_count_error() {
        assert_eq!(validate("@daily now").unwrap_err().kind(), ErrorKind::FieldCountMismatch);
    }

    #[test]
    fn first_failing_field_wins() {
        let err = validate("* 24 0 13 8").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Field {
                position: 2,
                name: "hour",
                source: TermError::ValueOutOfDomain {
                    value: 24,
                    min: 0,
                    max: 23
                },
            }
        );
    }

    #[test]
    fn each_field_reports_its_own_position() {
        let cases = [
            ("60 * * * *", 1, "minute"),
            ("* 24 * * *", 2, "hour"),
            ("* * 0 * *", 3, "day-of-month"),
            ("* * * 13 *", 4, "month"),
            ("* * * * 8", 5, "weekday"),
        ];
        for (expr, position, name) in cases {
            let err = validate(expr).unwrap_err();
            assert_eq!(err.position(), Some(position), "{expr}");
            assert_eq!(err.field_name(), Some(name), "{expr}");
        }
    }

    #[test]
    fn parse_returns_typed_terms() {
        let parsed = parse("*/15 1-5/2 3 1,2 *").unwrap();
        assert_eq!(
            parsed,
            CronExpression::Fields(vec![
                Term::SteppedWildcard { step: 15 },
                Term::SteppedRange {
                    span: Span { start: 1, end: 5 },
                    step: 2
                },
                Term::Single(3),
                Term::List(vec![
                    crate::term::ListItem::Single(1),
                    crate::term::ListItem::Single(2)
                ]),
                Term::Wildcard,
            ])
        );
    }

    #[test]
    fn weekday_range_end_is_bounded_by_seven() {
        assert!(validate("0 0 * * 5-7").is_ok());
        assert_eq!(
            validate("0 0 * * 6-8").unwrap_err().kind(),
            ErrorKind::RangeBoundOutOfDomain
        );
    }
}
