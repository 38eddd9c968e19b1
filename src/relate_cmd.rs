//! Relate command: classify two periods and show their set operations.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info_span};

use tempora_calendar::Chronology;
use tempora_interval::Period;

use crate::cli::RelateArgs;
use crate::convert;

/// How period `a` relates to period `b`.
#[derive(Debug, Serialize)]
pub struct RelateReport {
    pub a: String,
    pub b: String,
    pub relation: String,
    pub inverse: String,
    pub intersection: Option<String>,
    pub union: Option<String>,
    pub gap: Option<String>,
    pub difference: Vec<String>,
}

/// Builds the report for `a` against `b`, formatting in `chronology`.
pub fn relate_report(chronology: &Chronology, a: &Period, b: &Period) -> RelateReport {
    let show = |p: Period| p.format(chronology);
    let relation = a.relation(b);
    RelateReport {
        a: show(*a),
        b: show(*b),
        relation: relation.to_string(),
        inverse: relation.inverse().to_string(),
        intersection: a.intersection(b).map(show),
        union: a.union(b).map(show),
        gap: a.gap(b).map(show),
        difference: a.difference(b).into_iter().map(show).collect(),
    }
}

/// Renders a report as `name: value` lines; absent results print as `-`.
pub fn render_relate(report: &RelateReport) -> String {
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    let difference = if report.difference.is_empty() {
        "-".to_string()
    } else {
        report.difference.join(" ")
    };
    [
        format!("a:            {}", report.a),
        format!("b:            {}", report.b),
        format!("relation:     a {} b", report.relation),
        format!("intersection: {}", optional(&report.intersection)),
        format!("union:        {}", optional(&report.union)),
        format!("gap:          {}", optional(&report.gap)),
        format!("difference:   {difference}"),
    ]
    .join("\n")
}

pub fn run(args: RelateArgs, chronology: &Chronology) -> Result<()> {
    let _cmd = info_span!("relate").entered();
    let a = period(chronology, &args.a_start, &args.a_end).context("invalid first period")?;
    let b = period(chronology, &args.b_start, &args.b_end).context("invalid second period")?;
    let report = relate_report(chronology, &a, &b);
    debug!(relation = %report.relation, "periods related");
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize relation")?;
        println!("{json}");
    } else {
        println!("{}", render_relate(&report));
    }
    Ok(())
}

fn period(chronology: &Chronology, start: &str, end: &str) -> Result<Period> {
    let start = convert::parse_instant(chronology, start)?;
    let end = convert::parse_instant(chronology, end)?;
    Ok(Period::new(start, end)?)
}
