use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use share_cli::pipeline::{check_paths, load_checker};
use share_ingest::read_terminology;
use share_report::{ReportFormat, write_report};
use share_validate::CheckRun;
use tracing::info_span;

use crate::cli::{CheckArgs, ConfigArgs, ReportFormatArg, TermsArgs};
use crate::summary::apply_table_style;

/// A finished check plus the report file written for it, if any.
pub struct CheckOutcome {
    pub run: CheckRun,
    pub report: Option<PathBuf>,
}

pub fn run_rules(args: &ConfigArgs) -> Result<()> {
    let checker = load_checker(args.config.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["#", "Rule", "Description"]);
    apply_table_style(&mut table);
    for (idx, (name, description)) in checker.engine().describe().into_iter().enumerate() {
        table.add_row(vec![(idx + 1).to_string(), name.to_string(), description]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let _span = info_span!("check").entered();
    let checker = load_checker(args.config.config.as_deref())?;
    let run = check_paths(&checker, &args.paths)?;
    let report = match &args.output_dir {
        Some(dir) => {
            let format = match args.report_format {
                ReportFormatArg::Json => ReportFormat::Json,
                ReportFormatArg::Csv => ReportFormat::Csv,
            };
            let today = chrono::Local::now().date_naive();
            Some(write_report(&run.log, dir, format, today)?)
        }
        None => None,
    };
    Ok(CheckOutcome { run, report })
}

pub fn run_terms(args: &TermsArgs) -> Result<()> {
    let terms = read_terminology(&args.path)
        .with_context(|| format!("read terminology {}", args.path.display()))?;
    let mut table = Table::new();
    table.set_header(vec!["Term", "C-Code", "Context", "Coded"]);
    apply_table_style(&mut table);
    for term in terms.iter().filter(|term| !args.uncoded || !term.is_coded()) {
        table.add_row(vec![
            term.name.clone(),
            term.code.clone().unwrap_or_default(),
            term.terminology_type.clone().unwrap_or_default(),
            if term.is_coded() { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
