use chrono::NaiveDate;

use super::views::{AgencyView, CollectionsReportSummary, FallbackView, SlaAlertView};

const STYLE: &str = r#"
    :root { --brand: #4D148C; --accent: #FF6200; --bg: #f4f4f9; }
    body { font-family: 'Segoe UI', sans-serif; background: var(--bg); margin: 0; }
    .nav { background: var(--brand); color: white; padding: 15px 40px; display: flex;
           justify-content: space-between; align-items: center; border-bottom: 5px solid var(--accent); }
    .container { padding: 30px; }
    .stats { display: flex; gap: 20px; margin-bottom: 30px; }
    .card { background: white; padding: 20px; border-radius: 10px; flex: 1;
            box-shadow: 0 4px 6px rgba(0,0,0,0.1); border-left: 5px solid var(--accent); }
    .card h3 { font-size: 0.8em; color: #777; margin: 0; }
    .card p { font-size: 1.8em; font-weight: bold; margin: 10px 0; color: var(--brand); }
    .agency-box { background: white; border-radius: 10px; padding: 20px; margin-bottom: 20px;
                  box-shadow: 0 2px 10px rgba(0,0,0,0.05); }
    .badge { padding: 5px 15px; border-radius: 20px; font-weight: bold; font-size: 0.8em; }
    table { width: 100%; border-collapse: collapse; margin-top: 15px; }
    th { text-align: left; color: #888; border-bottom: 1px solid #eee; padding: 10px; }
    td { padding: 10px; border-bottom: 1px solid #fafafa; font-size: 0.9em; }
    .alert { color: #c0392b; font-weight: bold; }
"#;

/// Render a self-contained HTML dashboard for a report summary.
pub fn render_html(summary: &CollectionsReportSummary, generated_on: NaiveDate) -> String {
    let kpis = &summary.kpis;
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>DCA Sentinel</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&format!(
        "<div class=\"nav\"><h2>DCA Sentinel: Agency Governance</h2><span>Generated {}</span></div>\n",
        generated_on
    ));

    html.push_str("<div class=\"container\">\n<div class=\"stats\">\n");
    html.push_str(&stat_card(
        "PORTFOLIO UNDER MANAGEMENT",
        &format_amount(kpis.portfolio_value),
    ));
    html.push_str(&stat_card(
        "AVG RECOVERY PROBABILITY",
        &format!("{:.1}%", kpis.average_recovery_probability),
    ));
    html.push_str(&stat_card(
        "CASES ASSIGNED",
        &format!("{} / {}", kpis.assigned_cases, kpis.total_cases),
    ));
    html.push_str(&stat_card(
        "CRITICAL SLA ALERTS",
        &kpis.critical_alerts.to_string(),
    ));
    html.push_str("</div>\n");

    for agency in &summary.agencies {
        html.push_str(&agency_section(agency));
    }

    if !summary.fallback.cases.is_empty() {
        html.push_str(&fallback_section(&summary.fallback));
    }

    if !summary.alerts.is_empty() {
        html.push_str(&alerts_section(&summary.alerts));
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn stat_card(title: &str, value: &str) -> String {
    format!(
        "<div class=\"card\"><h3>{}</h3><p>{}</p></div>\n",
        escape(title),
        escape(value)
    )
}

fn agency_section(agency: &AgencyView) -> String {
    let color = agency.color;
    let mut section = format!(
        "<div class=\"agency-box\">\n\
         <div style=\"display:flex; justify-content:space-between; align-items:center;\">\
         <h3 style=\"color:var(--brand); margin:0;\">{name} <small>(trust {trust:.1})</small></h3>\
         <span class=\"badge\" style=\"background:{color}22; color:{color}; border:1px solid {color};\">{tier}</span>\
         </div>\n",
        name = escape(&agency.name),
        trust = agency.trust_score,
        color = color,
        tier = agency.tier_label,
    );

    if agency.assignments.is_empty() {
        section.push_str("<p>No cases assigned.</p>\n</div>\n");
        return section;
    }

    section.push_str(
        "<table>\n<tr><th>Case ID</th><th>Invoice Amount</th><th>Days Overdue</th><th>Recovery Probability</th></tr>\n",
    );
    for item in &agency.assignments {
        section.push_str(&format!(
            "<tr><td>{}</td><td style=\"font-weight:bold;\">{}</td><td>{}</td><td style=\"color:var(--accent);\">{:.1}%</td></tr>\n",
            escape(&item.case_id),
            format_amount(item.amount),
            item.days_overdue,
            item.recovery_probability
        ));
    }
    section.push_str("</table>\n</div>\n");
    section
}

fn fallback_section(fallback: &FallbackView) -> String {
    let mut section = format!(
        "<div class=\"agency-box\">\n<h3 style=\"margin:0;\">{} <small>(no eligible agency)</small></h3>\n\
         <table>\n<tr><th>Case ID</th><th>Invoice Amount</th><th>Days Overdue</th></tr>\n",
        escape(&fallback.name)
    );
    for case in &fallback.cases {
        section.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&case.case_id),
            format_amount(case.amount),
            case.days_overdue
        ));
    }
    section.push_str("</table>\n</div>\n");
    section
}

fn alerts_section(alerts: &[SlaAlertView]) -> String {
    let mut section = String::from("<h3>SLA Alerts</h3>\n");
    for alert in alerts {
        section.push_str(&format!("<p class=\"alert\">{}</p>\n", escape(&alert.message)));
    }
    section
}

/// Rupee amount with thousands separators and paise.
pub(crate) fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (rupees, paise) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(rupees.len() + rupees.len() / 3);
    for (index, digit) in rupees.chars().enumerate() {
        if index > 0 && (rupees.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}₹{grouped}.{paise}")
}

pub(crate) fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
