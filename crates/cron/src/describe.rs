//! Plain-English rendering of an expression.

use crate::expression::{parse, CronExpression};
use crate::field::FIELD_COUNT;

/// Clause prefix per field, in field order.
const LABELS: [&str; FIELD_COUNT] = ["at minute", "hour", "on day", "in month", "on weekday"];

const EVERY_MINUTE: &str = "Every minute";

/// Describe `expression`. Never fails: invalid input yields a message that
/// embeds the validation error.
pub fn describe(expression: &str) -> String {
    let trimmed = expression.trim();
    match parse(trimmed) {
        Ok(CronExpression::Keyword(keyword)) => keyword.description().to_string(),
        Ok(CronExpression::Fields(_)) => {
            let clauses: Vec<String> = LABELS
                .iter()
                .zip(trimmed.split_whitespace())
                .filter(|(_, field)| *field != "*")
                .map(|(label, field)| format!("{label} {}", phrase(field)))
                .collect();
            if clauses.is_empty() {
                EVERY_MINUTE.to_string()
            } else {
                clauses.join(", ")
            }
        }
        Err(e) => format!("Invalid cron expression: {e}"),
    }
}

fn phrase(field: &str) -> String {
    match field.strip_prefix("*/") {
        Some(step) => format!("every {step}"),
        None => field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::Keyword;

    #[test]
    fn all_wildcards_runs_every_minute() {
        assert_eq!(describe("* * * * *"), "Every minute");
    }

    #[test]
    fn skips_wildcard_fields() {
        assert_eq!(
            describe("0 0 1 1 *"),
            "at minute 0, hour 0, on day 1, in month 1"
        );
        assert_eq!(describe("* * * * 1-5"), "on weekday 1-5");
    }

    #[test]
    fn stepped_wildcard_reads_as_every() {
        assert_eq!(describe("*/15 * * * *"), "at minute every 15");
        assert_eq!(describe("0 */2 * * *"), "at minute 0, hour every 2");
    }

    #[test]
    fn other_shapes_render_verbatim() {
        assert_eq!(
            describe("1-5/2 9,17 * * *"),
            "at minute 1-5/2, hour 9,17"
        );
    }

    #[test]
    fn keywords_use_fixed_text() {
        for k in Keyword::ALL {
            assert_eq!(describe(k.as_str()), k.description());
        }
        assert_eq!(describe(" @REBOOT "), "Once at system startup");
    }

    #[test]
    fn invalid_input_embeds_the_error() {
        assert_eq!(
            describe("60 * * * *"),
            "Invalid cron expression: field 1 (minute): value 60 out of bounds [0-59]"
        );
        assert!(describe("* *").starts_with("Invalid cron expression: "));
    }
}
