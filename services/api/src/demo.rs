use chrono::{Local, NaiveDate};
use clap::Args;
use dca_sentinel::config::AppConfig;
use dca_sentinel::error::AppError;
use dca_sentinel::telemetry;
use dca_sentinel::workflows::collections::report::render_html;
use dca_sentinel::workflows::collections::report::views::CollectionsReportSummary;
use dca_sentinel::workflows::collections::{demo, AllocationRun, CollectionsEngine};
use dca_sentinel::workflows::intake::CsvIntake;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Where to write the HTML dashboard (defaults to SENTINEL_REPORT_PATH)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Print the allocation summary as JSON instead of the console report
    #[arg(long)]
    pub(crate) json: bool,
    /// Override the reporting date shown on the dashboard (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct AllocateArgs {
    /// Case export with `case_id,invoice_amount,days_overdue` columns
    #[arg(long)]
    pub(crate) cases: PathBuf,
    /// Agency export with `dca_name,recovery_rate,sla_adherence` columns
    #[arg(long)]
    pub(crate) agencies: PathBuf,
    #[command(flatten)]
    pub(crate) report: ReportArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    #[command(flatten)]
    pub(crate) report: ReportArgs,
}

pub(crate) fn run_allocate(args: AllocateArgs) -> Result<(), AppError> {
    let AllocateArgs {
        cases,
        agencies,
        report,
    } = args;

    let (config, engine) = prepare_engine()?;
    let run = CsvIntake::run_from_paths(&engine, &cases, &agencies)?;
    let output = report
        .output
        .clone()
        .unwrap_or_else(|| config.collections.report_path.clone());

    publish(&run, &output, &report)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { report } = args;

    let (config, engine) = prepare_engine()?;
    if !report.json {
        println!("DCA Sentinel demo (synthetic portfolio)");
    }
    let run = engine.run(demo::cases(), demo::agencies())?;
    let output = report
        .output
        .clone()
        .unwrap_or_else(|| config.collections.report_path.clone());

    publish(&run, &output, &report)
}

fn prepare_engine() -> Result<(AppConfig, CollectionsEngine), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let engine = CollectionsEngine::new(config.collections.allocation_config())?;
    Ok((config, engine))
}

fn publish(run: &AllocationRun, output: &Path, args: &ReportArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let summary = run.summary();

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(err) => println!("Allocation summary unavailable: {}", err),
        }
    } else {
        render_allocation_report(&summary, today);
    }

    write_dashboard(&summary, output, today)?;
    if !args.json {
        println!("\nDashboard generated: {}", output.display());
    }
    Ok(())
}

pub(crate) fn write_dashboard(
    summary: &CollectionsReportSummary,
    output: &Path,
    today: NaiveDate,
) -> Result<(), AppError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output, render_html(summary, today))?;
    Ok(())
}

pub(crate) fn render_allocation_report(summary: &CollectionsReportSummary, today: NaiveDate) {
    let kpis = &summary.kpis;
    println!("Allocation report ({})", today);
    println!(
        "- {} cases | portfolio value {:.2} | {:.1}% average recovery probability",
        kpis.total_cases, kpis.portfolio_value, kpis.average_recovery_probability
    );
    println!(
        "- {} assigned | {} routed to {} | {} critical SLA alerts",
        kpis.assigned_cases, kpis.fallback_cases, summary.fallback.name, kpis.critical_alerts
    );

    println!("\nAgency governance");
    for agency in &summary.agencies {
        println!(
            "- {}: trust {:.1} | {} | {} cases | {:.2} assigned",
            agency.name,
            agency.trust_score,
            agency.tier_label,
            agency.assignments.len(),
            agency.assigned_value
        );
        for assignment in &agency.assignments {
            println!(
                "  - {}: {:.2} | {} days overdue | {:.1}% recovery",
                assignment.case_id,
                assignment.amount,
                assignment.days_overdue,
                assignment.recovery_probability
            );
        }
    }

    if summary.fallback.cases.is_empty() {
        println!("\n{}: none", summary.fallback.name);
    } else {
        println!("\n{}", summary.fallback.name);
        for case in &summary.fallback.cases {
            println!(
                "- {}: {:.2} | {} days overdue",
                case.case_id, case.amount, case.days_overdue
            );
        }
    }

    if summary.alerts.is_empty() {
        println!("\nSLA alerts: none");
    } else {
        println!("\nSLA alerts");
        for alert in &summary.alerts {
            println!("- [{}] {}", alert.severity_label, alert.message);
        }
    }
}
