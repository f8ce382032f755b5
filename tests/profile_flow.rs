use chrono::NaiveDate;
use homefin::{
    profile_warnings, Account, AccountKind, AmortizationEngine, BillPayment, FinancialGoal,
    ForecastEngine, Frequency, GoalDirection, JsonProfileStorage, PaymentOverride, Profile,
    ProfileStorage, RecurringTransaction, SummaryService, TransactionKind,
};
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_profile() -> Profile {
    let mut profile = Profile::new("Family");

    let checking = profile.add_account(
        Account::new("Checking", AccountKind::Checking, "EUR").with_balance(2500.0),
    );
    profile.add_account(Account::new("Savings", AccountKind::Savings, "USD").with_balance(1000.0));
    let loan = profile.add_account(
        Account::new("Car loan", AccountKind::Loan, "EUR")
            .with_balance(9000.0)
            .with_linked_account(checking)
            .with_loan_terms(12_000.0, 0.0, 24, date(2025, 1, 1)),
    );

    let mut rent = RecurringTransaction::new(
        checking,
        TransactionKind::Expense,
        800.0,
        "EUR",
        Frequency::Monthly,
        date(2025, 2, 1),
    );
    rent.due_date_of_month = Some(1);
    profile.add_recurring_transaction(rent);
    profile.add_recurring_transaction(
        RecurringTransaction::new(
            checking,
            TransactionKind::Transfer,
            500.0,
            "EUR",
            Frequency::Monthly,
            date(2025, 2, 1),
        )
        .with_to_account(loan),
    );

    profile.add_goal(FinancialGoal::one_time(
        "New bike",
        600.0,
        GoalDirection::Expense,
        date(2025, 5, 1),
    ));
    profile.add_bill(BillPayment::new("Insurance", 150.0, "EUR", date(2025, 2, 10)));

    profile.set_payment_override(
        loan,
        2,
        PaymentOverride {
            principal: Some(600.0),
            ..Default::default()
        },
    );
    profile
}

#[test]
fn schedules_and_forecasts_survive_a_round_trip() {
    let profile = sample_profile();
    assert!(profile_warnings(&profile).is_empty());

    let dir = tempdir().expect("tempdir");
    let storage = JsonProfileStorage::new(dir.path().join("profiles"), dir.path().join("backups"))
        .expect("storage");
    storage.save_profile("family", &profile).expect("save");
    let loaded = storage.load_profile("family").expect("load");

    let reference = date(2025, 1, 15);
    let loan = loaded
        .accounts
        .iter()
        .find(|account| account.kind == AccountKind::Loan)
        .expect("loan account");
    let overrides = loaded.overrides_for(loan.id).cloned().unwrap_or_default();
    let schedule =
        AmortizationEngine::generate_schedule(loan, &loaded.transactions, &overrides, reference);

    assert_eq!(schedule.len(), 24);
    assert_eq!(schedule[1].principal, 600.0);
    assert!(schedule.last().unwrap().outstanding_balance.abs() < 1e-6);

    let forecast = ForecastEngine::balance_forecast(
        &loaded.accounts,
        &loaded.recurring_transactions,
        &loaded.goals,
        &loaded.bills,
        reference,
        date(2025, 3, 15),
    );
    assert_eq!(forecast.len(), 60);
    assert!((forecast[0].value - SummaryService::liquid_balance_eur(&loaded.accounts)).abs() < 1e-9);
    // Rent, loan transfers, and the February bill all land inside the window.
    let last = forecast.last().unwrap().value;
    let expected = forecast[0].value - 2.0 * 800.0 - 2.0 * 500.0 - 150.0;
    assert!((last - expected).abs() < 1e-6);
}

#[test]
fn dirty_tracking_drives_the_flush_cycle() {
    let mut profile = sample_profile();
    assert!(profile.is_dirty());

    let dir = tempdir().expect("tempdir");
    let storage = JsonProfileStorage::new(dir.path().join("profiles"), dir.path().join("backups"))
        .expect("storage");
    storage.save_profile("family", &profile).expect("save");
    profile.mark_clean();
    assert!(!profile.is_dirty());

    profile.refresh_bill_statuses(date(2025, 3, 1));
    // The February bill became overdue, so the document needs another flush.
    assert!(profile.is_dirty());
}
