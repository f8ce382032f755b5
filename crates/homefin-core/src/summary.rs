//! Balance summaries and conversion into the EUR reporting currency.

use homefin_domain::{conversion_rate, Account, AccountKind};

/// Converts an amount into EUR using the static rate table. Unknown codes
/// fall back to parity so a single bad record cannot sink a whole forecast.
pub fn convert_to_eur(amount: f64, currency: &str) -> f64 {
    match conversion_rate(currency) {
        Some(rate) => amount * rate,
        None => {
            tracing::warn!(currency, "no conversion rate, assuming parity with EUR");
            amount
        }
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Total of liquid account balances in EUR. Every balance forecast
    /// starts from this value.
    pub fn liquid_balance_eur(accounts: &[Account]) -> f64 {
        accounts
            .iter()
            .filter(|account| account.kind.is_liquid())
            .map(|account| convert_to_eur(account.balance, &account.currency))
            .sum()
    }

    /// Assets minus loan debt, in EUR. Loan balances carry the outstanding
    /// amount owed, so they subtract; lending balances are owed to the user
    /// and add.
    pub fn net_worth_eur(accounts: &[Account]) -> f64 {
        accounts
            .iter()
            .map(|account| {
                let value = convert_to_eur(account.balance, &account.currency);
                if account.kind == AccountKind::Loan {
                    -value
                } else {
                    value
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn liquid_balance_converts_and_filters() {
        let accounts = vec![
            Account::new("Checking", AccountKind::Checking, "EUR").with_balance(1000.0),
            Account::new("Dollars", AccountKind::Savings, "USD").with_balance(100.0),
            Account::new("House", AccountKind::Property, "EUR").with_balance(300_000.0),
        ];
        assert_relative_eq!(
            SummaryService::liquid_balance_eur(&accounts),
            1000.0 + 100.0 * 0.92
        );
    }

    #[test]
    fn net_worth_subtracts_loan_debt() {
        let accounts = vec![
            Account::new("Checking", AccountKind::Checking, "EUR").with_balance(5000.0),
            Account::new("Mortgage", AccountKind::Loan, "EUR").with_balance(150_000.0),
            Account::new("Friend loan", AccountKind::Lending, "EUR").with_balance(2000.0),
        ];
        assert_relative_eq!(SummaryService::net_worth_eur(&accounts), -143_000.0);
    }

    #[test]
    fn unknown_currency_falls_back_to_parity() {
        assert_relative_eq!(convert_to_eur(42.0, "XXX"), 42.0);
    }
}
