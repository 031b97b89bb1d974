use std::fmt;

/// Which end of a `start-end` range a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    Start,
    End,
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeBound::Start => write!(f, "start"),
            RangeBound::End => write!(f, "end"),
        }
    }
}

/// Failure inside a single field term.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    #[error("invalid step value: {step} (must be a positive integer)")]
    InvalidStep { step: String },

    #[error("invalid step syntax: {term}")]
    InvalidStepSyntax { term: String },

    #[error("invalid range syntax: {range}")]
    InvalidRangeSyntax { range: String },

    #[error("invalid range {bound}: {text}")]
    InvalidRangeBound { bound: RangeBound, text: String },

    #[error("range {bound} {value} out of bounds [{min}-{max}]")]
    RangeBoundOutOfDomain {
        bound: RangeBound,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("range start {start} cannot be greater than end {end}")]
    InvalidRangeOrder { start: i64, end: i64 },

    #[error("invalid value: {text}")]
    InvalidValue { text: String },

    #[error("value {value} out of bounds [{min}-{max}]")]
    ValueOutOfDomain { value: i64, min: i64, max: i64 },
}

/// Failure of a whole expression.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "cron expression must have exactly {expected} fields \
         (minute hour day-of-month month weekday), got {actual}"
    )]
    FieldCountMismatch { expected: usize, actual: usize },

    /// `position` is 1-based.
    #[error("field {position} ({name}): {source}")]
    Field {
        position: usize,
        name: &'static str,
        #[source]
        source: TermError,
    },
}

/// Flat error taxonomy, independent of where in the expression it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FieldCountMismatch,
    InvalidStep,
    InvalidStepSyntax,
    InvalidRangeSyntax,
    InvalidRangeBound,
    RangeBoundOutOfDomain,
    InvalidRangeOrder,
    InvalidValue,
    ValueOutOfDomain,
}

impl TermError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TermError::InvalidStep { .. } => ErrorKind::InvalidStep,
            TermError::InvalidStepSyntax { .. } => ErrorKind::InvalidStepSyntax,
            TermError::InvalidRangeSyntax { .. } => ErrorKind::InvalidRangeSyntax,
            TermError::InvalidRangeBound { .. } => ErrorKind::InvalidRangeBound,
            TermError::RangeBoundOutOfDomain { .. } => ErrorKind::RangeBoundOutOfDomain,
            TermError::InvalidRangeOrder { .. } => ErrorKind::InvalidRangeOrder,
            TermError::InvalidValue { .. } => ErrorKind::InvalidValue,
            TermError::ValueOutOfDomain { .. } => ErrorKind::ValueOutOfDomain,
        }
    }
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::FieldCountMismatch { .. } => ErrorKind::FieldCountMismatch,
            ValidationError::Field { source, .. } => source.kind(),
        }
    }

    /// Name of the failing field, if the failure is field-specific.
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            ValidationError::FieldCountMismatch { .. } => None,
            ValidationError::Field { name, .. } => Some(name),
        }
    }

    /// 1-based position of the failing field, if the failure is field-specific.
    pub fn position(&self) -> Option<usize> {
        match self {
            ValidationError::FieldCountMismatch { .. } => None,
            ValidationError::Field { position, .. } => Some(*position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_display_names_position_and_bounds() {
        let err = ValidationError::Field {
            position: 1,
            name: "minute",
            source: TermError::ValueOutOfDomain {
                value: 60,
                min: 0,
                max: 59,
            },
        };
        assert_eq!(err.to_string(), "field 1 (minute): value 60 out of bounds [0-59]");
        assert_eq!(err.kind(), ErrorKind::ValueOutOfDomain);
        assert_eq!(err.field_name(), Some("minute"));
        assert_eq!(err.position(), Some(1));
    }

    #[test]
    fn count_mismatch_has_no_field() {
        let err = ValidationError::FieldCountMismatch {
            expected: 5,
            actual: 3,
        };
        assert!(err.to_string().ends_with("got 3"));
        assert_eq!(err.kind(), ErrorKind::FieldCountMismatch);
        assert!(err.field_name().is_none());
        assert!(err.position().is_none());
    }

    #[test]
    fn range_bound_display() {
        let err = TermError::RangeBoundOutOfDomain {
            bound: RangeBound::End,
            value: 25,
            min: 0,
            max: 23,
        };
        assert_eq!(err.to_string(), "range end 25 out of bounds [0-23]");
    }
}
