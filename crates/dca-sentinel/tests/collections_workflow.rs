use chrono::NaiveDate;
use dca_sentinel::workflows::collections::report::render_html;
use dca_sentinel::workflows::collections::{
    allocate, demo, AgencyRecord, AllocationConfig, CaseRecord, CollectionsEngine,
    CollectionsGuard, GovernanceTier, RecoveryPredictor,
};

fn agency(name: &str, recovery_rate: f64, sla_adherence: f64) -> AgencyRecord {
    AgencyRecord {
        name: Some(name.to_string()),
        recovery_rate: Some(recovery_rate),
        sla_adherence: Some(sla_adherence),
    }
}

fn case(id: &str, amount: f64, days_overdue: i64) -> CaseRecord {
    CaseRecord {
        case_id: Some(id.to_string()),
        invoice_amount: Some(amount),
        days_overdue: Some(days_overdue),
    }
}

#[test]
fn alpha_beta_scenario_prefers_premier_agency() {
    let config = AllocationConfig::default();
    let guard = CollectionsGuard::from_config(&config);
    let agencies = guard
        .agencies(vec![agency("Alpha", 0.95, 0.98), agency("Beta", 0.40, 0.50)])
        .expect("agencies validate");
    let cases = guard
        .cases(vec![case("C1", 450_000.0, 15), case("C2", 5_000.0, 95)])
        .expect("cases validate");

    let result = allocate(&cases, &agencies, &config);

    assert_eq!(agencies[0].tier, GovernanceTier::Premier);
    let alpha = result.bucket("Alpha").expect("alpha bucket");
    assert_eq!(alpha.assignments[0].case_id.0, "C1");
    assert!(result.bucket("Beta").expect("beta bucket").assignments.is_empty());

    let c1 = alpha.assignments[0].recovery_probability;
    let same_amount_stale =
        RecoveryPredictor::new(config.recovery).predict(450_000.0, 95, agencies[0].trust_score);
    assert!(c1 > same_amount_stale);
    assert_eq!(result.total_cases(), 2);
}

#[test]
fn restricted_only_roster_routes_large_case_to_fallback() {
    let engine = CollectionsEngine::default();

    let run = engine
        .run(
            vec![case("BIG", 60_000.0, 10)],
            vec![agency("Gamma", 0.30, 0.30)],
        )
        .expect("run succeeds");

    assert_eq!(run.agencies[0].tier, GovernanceTier::Restricted);
    assert!(run.allocation.buckets[0].assignments.is_empty());
    assert_eq!(run.allocation.fallback.cases[0].id.0, "BIG");
}

#[test]
fn dashboard_renders_every_bucket() {
    let run = CollectionsEngine::default()
        .run(
            {
                let mut cases = demo::cases();
                cases.push(case("IND-7705", 75_000.0, 70));
                cases
            },
            vec![agency("Gamma <Ltd>", 0.30, 0.30)],
        )
        .expect("run succeeds");
    let generated_on = NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date");

    let html = render_html(&run.summary(), generated_on);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Generated 2025-10-01"));
    assert!(html.contains("Gamma &lt;Ltd&gt;"));
    assert!(html.contains("RESTRICTED"));
    assert!(html.contains("INTERNAL_LEGAL"));
    assert!(html.contains("CRITICAL escalation: Case IND-7704"));
    assert!(html.contains("₹637,000.00"));
    assert!(html.contains("No cases assigned."));
}
