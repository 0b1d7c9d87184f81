use savings_core::{
    annual_growth, chart_slices, filter_accounts, projected_total, sort_accounts, summarize,
    Account, SortOption,
};
use uuid::Uuid;

fn account_created_at(name: &str, institution: &str, balance: f64, created_at: i64) -> Account {
    Account::with_id(
        Uuid::new_v4(),
        name,
        institution,
        balance,
        balance / 10.0,
        "#FF6B6B",
        created_at,
    )
}

fn sample_pair() -> Vec<Account> {
    vec![
        Account::new("Account 1", "Bank 1", 1000.0, 100.0, "#FF6B6B"),
        Account::new("Account 2", "Bank 2", 2000.0, 200.0, "#4ECDC4"),
    ]
}

#[test]
fn summarize_totals_balances_and_contributions() {
    let summary = summarize(&sample_pair());

    assert_eq!(summary.total_balance, 3000.0);
    assert_eq!(summary.total_monthly_contribution, 300.0);
    assert_eq!(summary.account_count, 2);
}

#[test]
fn summarize_empty_snapshot_is_zero() {
    let summary = summarize(&[]);

    assert_eq!(summary.total_balance, 0.0);
    assert_eq!(summary.total_monthly_contribution, 0.0);
    assert_eq!(summary.account_count, 0);
}

#[test]
fn projected_total_sums_individual_projections() {
    // (1000 + 100*12) + (2000 + 200*12) = 2200 + 4400 = 6600
    assert_eq!(projected_total(&sample_pair(), 12), 6600.0);
}

#[test]
fn annual_growth_is_twelve_contributions() {
    let account = Account::new("Fund", "Bank", 0.0, 250.0, "#4ECDC4");
    assert_eq!(annual_growth(&account), 3000.0);
}

#[test]
fn sorts_cover_all_four_orders() {
    let accounts = vec![
        account_created_at("Beta", "Zeta Bank", 50.0, 300),
        account_created_at("Alpha", "Midtown Credit", 70.0, 100),
        account_created_at("Gamma", "Acme Savings", 60.0, 200),
    ];

    let by_name = sort_accounts(accounts.clone(), SortOption::Name);
    let names: Vec<&str> = by_name.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);

    let by_balance = sort_accounts(accounts.clone(), SortOption::Balance);
    let balances: Vec<f64> = by_balance.iter().map(|a| a.balance).collect();
    assert_eq!(balances, vec![70.0, 60.0, 50.0]);

    let by_institution = sort_accounts(accounts.clone(), SortOption::Institution);
    let institutions: Vec<&str> = by_institution
        .iter()
        .map(|a| a.institution.as_str())
        .collect();
    assert_eq!(
        institutions,
        vec!["Acme Savings", "Midtown Credit", "Zeta Bank"]
    );

    let by_created = sort_accounts(accounts, SortOption::CreatedAt);
    let created: Vec<i64> = by_created.iter().map(|a| a.created_at).collect();
    assert_eq!(created, vec![300, 200, 100]);
}

#[test]
fn filter_matches_name_and_institution_case_insensitively() {
    let accounts = vec![
        Account::new("Emergency Fund", "Chase Bank", 1.0, 0.0, "#FF6B6B"),
        Account::new("Vacation", "Wells Fargo", 1.0, 0.0, "#4ECDC4"),
    ];

    let by_name = filter_accounts(&accounts, "emergency");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Emergency Fund");

    let by_institution = filter_accounts(&accounts, "WELLS");
    assert_eq!(by_institution.len(), 1);
    assert_eq!(by_institution[0].institution, "Wells Fargo");

    assert!(filter_accounts(&accounts, "nonexistent").is_empty());
}

#[test]
fn empty_search_keeps_every_account() {
    let accounts = sample_pair();
    assert_eq!(filter_accounts(&accounts, "").len(), 2);
    assert_eq!(filter_accounts(&accounts, "   ").len(), 2);
}

#[test]
fn chart_slices_mirror_snapshot_order_and_colors() {
    let accounts = sample_pair();
    let slices = chart_slices(&accounts);

    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].name, "Account 1");
    assert_eq!(slices[0].balance, 1000.0);
    assert_eq!(slices[0].color_hex, "#FF6B6B");
    assert_eq!(slices[1].color_hex, "#4ECDC4");
}
