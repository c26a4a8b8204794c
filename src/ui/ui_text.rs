/// Every user-visible string in one place.
pub struct UiText {
    pub window_title: &'static str,
    pub amount_label: &'static str,
    pub from_label: &'static str,
    pub to_label: &'static str,
    pub convert_button: &'static str,
    pub swap_button: &'static str,
    pub info_button: &'static str,
    pub error_title: &'static str,
    pub error_dismiss: &'static str,
    pub invalid_input: &'static str,
    pub fetching_heading: &'static str,
    pub fetching_hint: &'static str,
    pub no_currencies: &'static str,
    pub last_update_prefix: &'static str,
    pub info_heading: &'static str,
    pub info_body: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "FX Lens",
    amount_label: "Amount",
    from_label: "From",
    to_label: "To",
    convert_button: "Convert",
    swap_button: "⇄ Swap",
    info_button: "Info",
    error_title: "Error",
    error_dismiss: "OK",
    invalid_input: "Please, insert valid data",
    fetching_heading: "Fetching rates...",
    fetching_hint: "Contacting the rate service",
    no_currencies: "Currency list unavailable. Check your connection and restart.",
    last_update_prefix: "Last update: ",
    info_heading: "FX Lens",
    info_body: "\
Convert an amount between two currencies and watch how their exchange rate \
moved over the past year.

1. Enter an amount and pick the source and target currencies.
2. Press Convert to fetch the latest rate and draw the one-year history.
3. Press ⇄ Swap to flip the two selections and convert again.

Rates are reference rates published once per business day by the \
Frankfurter API (https://frankfurter.dev), so the chart shows one point \
per day and no weekend data. The converted amount uses the most recently \
published rate; the \"Last update\" line below the result shows which \
day's fixing it is.",
};
