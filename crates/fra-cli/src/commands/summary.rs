//! `summary`, `timeline` and `performance`

use anyhow::Result;
use fra_core::DatasetStore;
use tabled::Tabled;

use crate::cli::{GroupBy, SummaryArgs, TimelineArgs};
use crate::output::{format_area, format_counts, OutputWriter};

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Claims")]
    claims: usize,
    #[tabled(rename = "Area (ha)")]
    area: String,
    #[tabled(rename = "Approved")]
    approved: usize,
    #[tabled(rename = "By Type")]
    by_type: String,
}

#[derive(Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Submitted")]
    submitted: usize,
    #[tabled(rename = "Area (ha)")]
    area: String,
    #[tabled(rename = "Approved")]
    approved: usize,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Submitted")]
    submitted: usize,
    #[tabled(rename = "Area (ha)")]
    area: String,
}

pub fn rollup(args: SummaryArgs, store: &DatasetStore, output: &OutputWriter) -> Result<()> {
    let (title, summary) = match args.by {
        GroupBy::State => ("State-wise Summary", store.state_summary()),
        GroupBy::Tribal => ("Tribal Community Analysis", store.tribal_summary()),
    };

    if output.is_json() {
        return output.result(summary);
    }

    output.section(title);
    let rows = summary
        .iter()
        .map(|(group, s)| GroupRow {
            group: group.clone(),
            claims: s.total_claims,
            area: format_area(Some(s.total_area_ha)),
            approved: s.approved_claims,
            by_type: format_counts(&s.claims_by_type),
        })
        .collect();
    output.table(rows);

    Ok(())
}

pub fn timeline(args: TimelineArgs, store: &DatasetStore, output: &OutputWriter) -> Result<()> {
    let timeline = match args.year {
        Some(year) => store.timeline_for_year(year),
        None => store.timeline(),
    };

    if output.is_json() {
        return output.result(timeline);
    }

    output.section("Yearly Submissions");
    output.table(
        timeline
            .yearly
            .iter()
            .map(|(year, y)| YearRow {
                year: *year,
                submitted: y.claims_submitted,
                area: format_area(Some(y.total_area_ha)),
                approved: y.claims_approved,
            })
            .collect(),
    );

    output.section("Monthly Submissions");
    output.table(
        timeline
            .monthly
            .iter()
            .map(|(month, m)| MonthRow {
                month: *month,
                submitted: m.claims_submitted,
                area: format_area(Some(m.total_area_ha)),
            })
            .collect(),
    );

    Ok(())
}

pub fn performance(store: &DatasetStore, output: &OutputWriter) -> Result<()> {
    let metrics = store.performance();

    if output.is_json() {
        return output.result(metrics);
    }

    output.section("Claims");
    output.kv("Total", metrics.total_claims);
    output.kv("Approved", metrics.approved_claims);
    output.kv("Pending", metrics.pending_claims);
    output.kv("Rejected", metrics.rejected_claims);

    output.section("Rates");
    output.kv("Approval", format!("{:.2}%", metrics.approval_rate));
    output.kv("Pending", format!("{:.2}%", metrics.pending_rate));
    output.kv("Field verification", format!("{:.2}%", metrics.field_verification_rate));
    output.kv("GPS verification", format!("{:.2}%", metrics.gps_verification_rate));

    output.section("Area");
    output.kv("Total", format!("{:.2} ha", metrics.total_area_ha));
    output.kv("Average claim", format!("{:.2} ha", metrics.average_claim_size_ha));

    Ok(())
}
