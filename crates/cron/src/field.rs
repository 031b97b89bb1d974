//! Field domain table: name and inclusive numeric bounds for each position.

/// Numeric domain of one positional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDomain {
    pub name: &'static str,
    /// Zero-based position in the expression.
    pub position: usize,
    pub min: i64,
    pub max: i64,
    /// Extra value accepted for a bare single value in this field only.
    pub alias: Option<i64>,
}

impl FieldDomain {
    /// Whether `value` lies in `[min, max]`. Aliases are not considered.
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether `value` is this field's alias value.
    pub fn is_alias(&self, value: i64) -> bool {
        self.alias == Some(value)
    }

    /// One-based position, as reported in diagnostics.
    pub fn ordinal(&self) -> usize {
        self.position + 1
    }
}

/// Number of fields in a non-keyword expression.
pub const FIELD_COUNT: usize = 5;

pub const MINUTE: FieldDomain = FieldDomain {
    name: "minute",
    position: 0,
    min: 0,
    max: 59,
    alias: None,
};

pub const HOUR: FieldDomain = FieldDomain {
    name: "hour",
    position: 1,
    min: 0,
    max: 23,
    alias: None,
};

pub const DAY_OF_MONTH: FieldDomain = FieldDomain {
    name: "day-of-month",
    position: 2,
    min: 1,
    max: 31,
    alias: None,
};

pub const MONTH: FieldDomain = FieldDomain {
    name: "month",
    position: 3,
    min: 1,
    max: 12,
    alias: None,
};

/// 0 and 7 both denote Sunday.
pub const WEEKDAY: FieldDomain = FieldDomain {
    name: "weekday",
    position: 4,
    min: 0,
    max: 7,
    alias: Some(7),
};

/// All five fields in evaluation order.
pub const FIELDS: [FieldDomain; FIELD_COUNT] = [MINUTE, HOUR, DAY_OF_MONTH, MONTH, WEEKDAY];
