use ck_cron::ValidationError;

use crate::ui;

/// Validate `expression` and return its description.
pub fn render(expression: &str) -> Result<String, ValidationError> {
    ck_cron::validate(expression)?;
    Ok(ck_cron::describe(expression))
}

/// Print the verdict for one expression. Returns `false` when invalid.
pub fn run(expression: &str) -> bool {
    match render(expression) {
        Ok(description) => {
            ui::success(&format!("Valid: {}", expression.trim()));
            println!("  {description}");
            true
        }
        Err(e) => {
            ui::error(&format!("Invalid: {e}"));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_expression_is_described() {
        assert_eq!(render("*/5 * * * 1-5").unwrap(), "at minute every 5, on weekday 1-5");
        assert_eq!(
            render("@hourly").unwrap(),
            "Once an hour at the start of the hour (0 * * * *)"
        );
    }

    #[test]
    fn invalid_expression_reports_the_field() {
        let err = render("0 25 * * *").unwrap_err();
        assert_eq!(err.to_string(), "field 2 (hour): value 25 out of bounds [0-23]");
        assert!(!run("0 25 * * *"));
    }
}
