use std::io;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use share_model::Finding;
use share_report::{template_title, write_csv, write_json};

use crate::cli::OutputFormatArg;
use crate::commands::CheckOutcome;

pub fn print_outcome(outcome: &CheckOutcome, format: OutputFormatArg) {
    let findings = outcome.run.log.all();
    let written = match format {
        OutputFormatArg::Table => {
            print_summary(outcome);
            Ok(())
        }
        OutputFormatArg::Json => write_json(findings, io::stdout().lock()),
        OutputFormatArg::Csv => write_csv(findings, io::stdout().lock()),
    };
    if let Err(error) = written {
        eprintln!("error: {error:#}");
    }
    if let Some(path) = &outcome.report {
        eprintln!("Report: {}", path.display());
    }
    if !outcome.run.failures.is_empty() {
        eprintln!("Unreadable templates:");
        for failure in &outcome.run.failures {
            eprintln!("- {}: {}", failure.template, failure.reason);
        }
    }
}

fn print_summary(outcome: &CheckOutcome) {
    let run = &outcome.run;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Template"),
        header_cell("Title"),
        header_cell("Sheet"),
        header_cell("Findings"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);

    for template in &run.checked {
        let title = template_title(template);
        let counts = sheet_counts(run.log.for_template(template));
        if counts.is_empty() {
            table.add_row(vec![
                Cell::new(template),
                Cell::new(&title),
                dim_cell("-"),
                count_cell(0),
            ]);
        }
        for (sheet, count) in counts {
            table.add_row(vec![
                Cell::new(template),
                Cell::new(&title),
                Cell::new(sheet),
                count_cell(count),
            ]);
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("{} templates", run.checked.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(run.log.len()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_finding_table(run.log.all());
}

fn print_finding_table(findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Template"),
        header_cell("Sheet"),
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    apply_finding_table_style(&mut table);
    for finding in findings {
        let field = if finding.field.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(&finding.field)
        };
        table.add_row(vec![
            Cell::new(&finding.template),
            Cell::new(&finding.sheet),
            field,
            Cell::new(&finding.column),
            Cell::new(&finding.message),
        ]);
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

/// Findings per sheet in first-seen order.
fn sheet_counts<'a>(findings: impl Iterator<Item = &'a Finding>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for finding in findings {
        match counts
            .iter_mut()
            .find(|(sheet, _)| *sheet == finding.sheet)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((finding.sheet.as_str(), 1)),
        }
    }
    counts
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_finding_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(200);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(15)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
