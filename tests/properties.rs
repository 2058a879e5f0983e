//! Property tests for the payroll calculator and the employee store.

use proptest::prelude::*;
use rust_decimal::Decimal;

use employee_payroll::models::{EmployeeFields, round_currency};
use employee_payroll::payroll::{calculate_deductions, tds_rate_for_country};
use employee_payroll::store::EmployeeStore;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

fn fields(country: &str, cents: i64) -> EmployeeFields {
    EmployeeFields {
        first_name: Some("Jane".to_string()),
        last_name: Some("Roe".to_string()),
        job_title: Some("Analyst".to_string()),
        country: Some(country.to_string()),
        salary: Some(Decimal::new(cents, 2).into()),
    }
}

/// Flips the case of each letter according to `mask`.
fn recase(text: &str, mask: &[bool]) -> String {
    text.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn tax_plus_net_equals_rounded_gross(
        cents in 0i64..1_000_000_000,
        country in prop::sample::select(vec!["India", "United States", "USA", "Canada", ""]),
    ) {
        let gross = Decimal::new(cents, 2);
        let deductions = calculate_deductions(country, gross);

        prop_assert_eq!(deductions.tax + deductions.net_salary, round_currency(gross));
        prop_assert_eq!(deductions.tax_rate, tds_rate_for_country(country));
        prop_assert!(deductions.tax >= Decimal::ZERO);
        prop_assert!(deductions.tax.scale() <= 2);
    }

    #[test]
    fn country_metrics_ignore_case(
        salaries in prop::collection::vec(1i64..=9_999_999_999, 1..8),
        stored_mask in prop::collection::vec(any::<bool>(), 1..6),
        query_mask in prop::collection::vec(any::<bool>(), 1..6),
    ) {
        let rt = runtime();
        let (stored, queried, lower) = rt.block_on(async {
            let store = EmployeeStore::in_memory();
            for cents in &salaries {
                store
                    .create(fields(&recase("india", &stored_mask), *cents))
                    .await
                    .unwrap();
            }
            store.create(fields("Canada", 123)).await.unwrap();

            (
                store.salary_metrics_by_country("India").await.unwrap(),
                store
                    .salary_metrics_by_country(&recase("india", &query_mask))
                    .await
                    .unwrap(),
                store.salary_metrics_by_country("india").await.unwrap(),
            )
        });

        prop_assert_eq!(stored.minimum_salary, queried.minimum_salary);
        prop_assert_eq!(stored.maximum_salary, queried.maximum_salary);
        prop_assert_eq!(stored.average_salary, queried.average_salary);
        prop_assert_eq!(lower.average_salary, queried.average_salary);
        prop_assert!(stored.minimum_salary <= stored.average_salary);
        prop_assert!(stored.average_salary <= stored.maximum_salary);
    }

    #[test]
    fn empty_update_changes_nothing(cents in 1i64..=9_999_999_999, country in "[A-Za-z ]{1,12}[A-Za-z]") {
        let rt = runtime();
        let (created, updated) = rt.block_on(async {
            let store = EmployeeStore::in_memory();
            let created = store.create(fields(&country, cents)).await.unwrap();
            let updated = store
                .update(created.id, EmployeeFields::default())
                .await
                .unwrap();
            (created, updated)
        });

        prop_assert_eq!(&updated.first_name, &created.first_name);
        prop_assert_eq!(&updated.last_name, &created.last_name);
        prop_assert_eq!(&updated.job_title, &created.job_title);
        prop_assert_eq!(&updated.country, &created.country);
        prop_assert_eq!(updated.salary, created.salary);
        prop_assert_eq!(updated.created_at, created.created_at);
    }
}
