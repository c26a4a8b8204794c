pub mod currency;
pub mod rates;

pub use currency::{Currency, Money};
pub use rates::{ChartSpec, ExchangeRate, ExchangeRateTimeSeries};
