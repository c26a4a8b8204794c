use std::fmt;
use std::hash::{Hash, Hasher};

/// A currency as listed by the remote API: ISO-style code plus display name.
///
/// Equality and hashing consider the `code` only. The display name is
/// whatever the provider sends and two entries with the same code refer to
/// the same currency even if their names differ.
#[derive(Debug, Clone)]
pub struct Currency {
    code: String,
    name: String,
}

impl Currency {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.code, self.name)
    }
}

/// An amount of a specific currency. No sign invariant at the type level;
/// validity is checked by the exchange command before any conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    amount: f64,
    currency: Currency,
}

impl Money {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Converts this amount into `target` using `rate` as the multiplier
    /// for one unit of the source currency.
    pub fn convert(&self, rate: f64, target: Currency) -> Money {
        Money::new(self.amount * rate, target)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_name() {
        let a = Currency::new("USD", "United States Dollar");
        let b = Currency::new("USD", "US Dollar");

        assert_eq!(a, b);
    }

    #[test]
    fn different_codes_are_not_equal() {
        let usd = Currency::new("USD", "United States Dollar");
        let eur = Currency::new("EUR", "Euro");

        assert_ne!(usd, eur);
    }

    #[test]
    fn hash_follows_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Currency::new("USD", "United States Dollar"));
        set.insert(Currency::new("USD", "US Dollar"));

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn convert_is_exact_multiplication() {
        let usd = Currency::new("USD", "United States Dollar");
        let eur = Currency::new("EUR", "Euro");
        let money = Money::new(123.45, usd);

        let result = money.convert(1.0837, eur.clone());

        assert_eq!(result.amount(), 123.45 * 1.0837);
        assert_eq!(result.currency(), &eur);
    }

    #[test]
    fn display_formats_amount_with_code() {
        let money = Money::new(10.0, Currency::new("EUR", "Euro"));
        assert_eq!(money.to_string(), "10.00 EUR");
    }
}
