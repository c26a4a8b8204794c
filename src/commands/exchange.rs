use std::fmt;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use poll_promise::Promise;

use crate::data::frankfurter::{ApiError, FrankfurterClient};
use crate::domain::{ChartSpec, Currency, ExchangeRate, ExchangeRateTimeSeries, Money};
use crate::utils::time_utils::lookback_start;

use super::context::{CommandContext, ExchangeInputs};
use super::registry::{Command, CommandError, CommandRegistry};

#[derive(Debug, Clone)]
pub enum ExchangeError {
    /// Same-currency conversion, negative amount, or unusable selector
    /// state. Raised before any network call is made.
    InvalidInput,
    Api(ApiError),
}

impl fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeError::InvalidInput => write!(f, "invalid exchange input"),
            ExchangeError::Api(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ExchangeError {}

impl From<ApiError> for ExchangeError {
    fn from(err: ApiError) -> Self {
        ExchangeError::Api(err)
    }
}

/// Everything a completed exchange produces: the conversion for the money
/// display plus the series and chart spec for the animator.
pub struct ExchangeOutcome {
    pub source: Money,
    pub result: Money,
    pub rate: ExchangeRate,
    pub series: ExchangeRateTimeSeries,
    pub spec: ChartSpec,
}

pub type ExchangeJob = Promise<Result<ExchangeOutcome, ExchangeError>>;

/// Reads the selector state into a `(source, target)` pair. Out-of-range
/// indices (empty currency list) and unparseable amounts are invalid input.
pub fn parse_inputs(
    currencies: &[Currency],
    inputs: &ExchangeInputs,
) -> Result<(Money, Currency), ExchangeError> {
    let source_currency = currencies
        .get(inputs.source_idx)
        .ok_or(ExchangeError::InvalidInput)?;
    let target_currency = currencies
        .get(inputs.target_idx)
        .ok_or(ExchangeError::InvalidInput)?;
    let amount: f64 = inputs
        .amount_text
        .trim()
        .parse()
        .map_err(|_| ExchangeError::InvalidInput)?;

    Ok((
        Money::new(amount, source_currency.clone()),
        target_currency.clone(),
    ))
}

fn validate(source: &Money, target: &Currency) -> Result<(), ExchangeError> {
    // Negated form so NaN amounts fail too; `parse` accepts "nan".
    if source.currency().code() == target.code() || !(source.amount() >= 0.0) {
        return Err(ExchangeError::InvalidInput);
    }
    Ok(())
}

/// The full exchange: validate, fetch the latest rate, convert, fetch the
/// trailing historical series, and assemble the chart spec. Validation runs
/// first; invalid input never reaches the network.
pub fn run_exchange(
    client: &FrankfurterClient,
    source: Money,
    target: Currency,
    lookback_days: i64,
    today: NaiveDate,
) -> Result<ExchangeOutcome, ExchangeError> {
    validate(&source, &target)?;

    let rate = client.latest_rate(source.currency(), &target)?;
    let result = source.convert(rate.rate(), target.clone());

    let start = lookback_start(today, lookback_days);
    let series = client.time_series(source.currency(), &target, start)?;

    let spec = ChartSpec::new(
        format!("{}/{}", source.currency().code(), target.code()),
        crate::config::CHART.x_axis_label,
        crate::config::CHART.y_axis_label,
    );

    Ok(ExchangeOutcome {
        source,
        result,
        rate,
        series,
        spec,
    })
}

/// The "exchange money" command. Validates on the calling (UI) thread for
/// immediate feedback, then runs the fetches on a worker so the interface
/// never freezes on a request; the app polls the job and applies the final
/// display update on the egui thread.
pub struct ExchangeCommand;

impl Command for ExchangeCommand {
    fn execute(
        &self,
        _registry: &CommandRegistry,
        ctx: &mut CommandContext<'_>,
    ) -> Result<(), CommandError> {
        if ctx.exchange_job.is_some() {
            log::info!("exchange already in flight; ignoring trigger");
            return Ok(());
        }

        let (source, target) = parse_inputs(ctx.currencies, ctx.inputs)?;
        validate(&source, &target).map_err(CommandError::from)?;

        let client = Arc::clone(ctx.client);
        let lookback_days = ctx.config.lookback_days;
        let promise = Promise::spawn_thread("exchange_fetch", move || {
            run_exchange(
                client.as_ref(),
                source,
                target,
                lookback_days,
                Local::now().date_naive(),
            )
        });
        *ctx.exchange_job = Some(promise);
        Ok(())
    }
}
