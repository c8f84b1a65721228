//! Rupiah formatting for tax amounts.
//!
//! Formatting never fails: anything that cannot be read as a finite number is
//! shown as a zero amount.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::models::CellValue;

/// Values that may be read as a monetary amount
pub trait AsAmount {
    fn as_amount(&self) -> Option<f64>;
}

impl AsAmount for f64 {
    fn as_amount(&self) -> Option<f64> {
        Some(*self)
    }
}

impl AsAmount for f32 {
    fn as_amount(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl AsAmount for i32 {
    fn as_amount(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl AsAmount for i64 {
    fn as_amount(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl AsAmount for u32 {
    fn as_amount(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl AsAmount for u64 {
    fn as_amount(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl AsAmount for str {
    fn as_amount(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok()
    }
}

impl AsAmount for String {
    fn as_amount(&self) -> Option<f64> {
        self.as_str().as_amount()
    }
}

impl AsAmount for CellValue {
    fn as_amount(&self) -> Option<f64> {
        match self {
            CellValue::Number(number) => Some(*number),
            CellValue::Text(text) => text.as_amount(),
            CellValue::Null => None,
        }
    }
}

impl<T: AsAmount> AsAmount for Option<T> {
    fn as_amount(&self) -> Option<f64> {
        self.as_ref().and_then(AsAmount::as_amount)
    }
}

impl<T: AsAmount + ?Sized> AsAmount for &T {
    fn as_amount(&self) -> Option<f64> {
        (**self).as_amount()
    }
}

/// Currency display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Text placed before the amount, including any trailing space
    pub prefix: String,
    pub thousands_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            prefix: "Rp. ".to_string(),
            thousands_separator: '.',
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CurrencyFormatter {
    config: CurrencyFormat,
}

impl CurrencyFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CurrencyFormat) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CurrencyFormat {
        &self.config
    }

    /// Format any amount-like value, falling back to zero
    pub fn format<T: AsAmount + ?Sized>(&self, value: &T) -> String {
        match value.as_amount() {
            Some(amount) => self.format_amount(amount),
            None => {
                trace!("value is not a number, formatting as zero");
                self.zero()
            }
        }
    }

    /// Round to whole units and group thousands
    pub fn format_amount(&self, amount: f64) -> String {
        if !amount.is_finite() {
            trace!("non-finite amount {}, formatting as zero", amount);
            return self.zero();
        }

        let rounded = format!("{:.0}", amount);
        let (negative, digits) = match rounded.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, rounded.as_str()),
        };
        let grouped = group_thousands(digits, self.config.thousands_separator);

        if negative && digits.bytes().any(|b| b != b'0') {
            format!("{}-{}", self.config.prefix, grouped)
        } else {
            format!("{}{}", self.config.prefix, grouped)
        }
    }

    fn zero(&self) -> String {
        format!("{}0", self.config.prefix)
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Format with the default "Rp. " prefix and `.` separator
pub fn format_rupiah<T: AsAmount>(value: T) -> String {
    CurrencyFormatter::default().format(&value)
}
