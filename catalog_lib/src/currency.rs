//! Locale-aware currency formatting for prices.

/// How a locale writes an amount of money.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    /// Text between the symbol and the digits.
    pub separator: &'static str,
    pub decimal: char,
    pub grouping: char,
}

/// Brazilian real, written the way `pt-BR` does: `R$ 1.234,50`.
pub const PT_BR: CurrencyFormat = CurrencyFormat {
    symbol: "R$",
    separator: " ",
    decimal: ',',
    grouping: '.',
};

/// US dollar, written the way `en-US` does: `$1,234.50`.
pub const EN_US: CurrencyFormat = CurrencyFormat {
    symbol: "$",
    separator: "",
    decimal: '.',
    grouping: ',',
};

impl Default for CurrencyFormat {
    fn default() -> Self {
        PT_BR
    }
}

impl CurrencyFormat {
    /// Looks up a locale tag (`pt-BR`, `en_US`, ...), case-insensitively.
    pub fn for_locale(locale: &str) -> Option<Self> {
        match locale.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "pt-br" | "pt" => Some(PT_BR),
            "en-us" | "en" => Some(EN_US),
            _ => None,
        }
    }

    /// Formats `amount` with two decimals, grouping thousands.
    ///
    /// NaN renders as `NaN` and infinities as `∞`.
    pub fn format(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{}{}NaN", self.symbol, self.separator);
        }
        let sign = if amount < 0.0 { "-" } else { "" };
        if amount.is_infinite() {
            return format!("{}{}{}∞", sign, self.symbol, self.separator);
        }
        let fixed = format!("{:.2}", amount.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        // -0.001 rounds to zero and loses its sign
        let sign = if fixed.bytes().all(|b| b == b'0' || b == b'.') { "" } else { sign };
        format!(
            "{}{}{}{}{}{}",
            sign,
            self.symbol,
            self.separator,
            group_thousands(whole, self.grouping),
            self.decimal,
            fraction
        )
    }
}

fn group_thousands(digits: &str, grouping: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(grouping);
        }
        out.push(digit);
    }
    out
}
