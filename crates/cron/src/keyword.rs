//! The `@` special keywords that stand in for a whole expression.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Yearly,
    Annually,
    Monthly,
    Weekly,
    Daily,
    Midnight,
    Hourly,
    Reboot,
}

impl Keyword {
    pub const ALL: [Keyword; 8] = [
        Keyword::Yearly,
        Keyword::Annually,
        Keyword::Monthly,
        Keyword::Weekly,
        Keyword::Daily,
        Keyword::Midnight,
        Keyword::Hourly,
        Keyword::Reboot,
    ];

    /// Match an already-trimmed expression against the keyword set, ignoring case.
    pub fn parse(text: &str) -> Option<Keyword> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(text))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Yearly => "@yearly",
            Keyword::Annually => "@annually",
            Keyword::Monthly => "@monthly",
            Keyword::Weekly => "@weekly",
            Keyword::Daily => "@daily",
            Keyword::Midnight => "@midnight",
            Keyword::Hourly => "@hourly",
            Keyword::Reboot => "@reboot",
        }
    }

    /// The five-field form this keyword abbreviates. `@reboot` has none.
    pub fn equivalent(&self) -> Option<&'static str> {
        match self {
            Keyword::Yearly | Keyword::Annually => Some("0 0 1 1 *"),
            Keyword::Monthly => Some("0 0 1 * *"),
            Keyword::Weekly => Some("0 0 * * 0"),
            Keyword::Daily | Keyword::Midnight => Some("0 0 * * *"),
            Keyword::Hourly => Some("0 * * * *"),
            Keyword::Reboot => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Keyword::Yearly | Keyword::Annually => {
                "Once a year at midnight on January 1st (0 0 1 1 *)"
            }
            Keyword::Monthly => "Once a month at midnight on the 1st (0 0 1 * *)",
            Keyword::Weekly => "Once a week at midnight on Sunday (0 0 * * 0)",
            Keyword::Daily | Keyword::Midnight => "Once a day at midnight (0 0 * * *)",
            Keyword::Hourly => "Once an hour at the start of the hour (0 * * * *)",
            Keyword::Reboot => "Once at system startup",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
