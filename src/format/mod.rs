use std::fmt;

use chrono::{DateTime, Utc};

/// Whole-cent amount rendered as "$1,234.56".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency(pub i64);

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let dollars = (abs / 100).to_string();
        let cents = abs % 100;
        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, digit) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        write!(f, "{}${}.{:02}", sign, grouped, cents)
    }
}

/// Shared timestamp rendering convention for bidder-facing views.
pub fn format_timestamp(t: DateTime<Utc>) -> String {
    t.format("%m/%d/%Y %I:%M %P UTC").to_string()
}
