use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use copydesk_model::{
    Constraint, DefaultValue, DocumentType, Severity, ValidationReport, value::display_string,
};
use copydesk_registry::SchemaRegistry;

pub fn print_report(report: &ValidationReport, document: &Path) {
    println!("Document: {}", document.display());
    println!("Type: {}", report.type_name);
    if report.is_empty() {
        println!("No violations.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Severity"),
        header_cell("Rule"),
        header_cell("Message"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for violation in &report.violations {
        table.add_row(vec![
            name_cell(&violation.field),
            severity_cell(violation.severity),
            Cell::new(violation.kind),
            Cell::new(&violation.message),
        ]);
    }
    println!("{table}");
    println!(
        "{} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );
}

pub fn print_types(registry: &SchemaRegistry) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Title"),
        header_cell("Fields"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for doc_type in registry.iter() {
        table.add_row(vec![
            name_cell(&doc_type.name),
            Cell::new(doc_type.display_title()),
            Cell::new(doc_type.fields.len()),
        ]);
    }
    println!("{table}");
}

pub fn print_fields(doc_type: &DocumentType) {
    println!("Type: {}", doc_type.display_title());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Title"),
        header_cell("Constraints"),
        header_cell("Conditional"),
        header_cell("Default"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for field in &doc_type.fields {
        table.add_row(vec![
            name_cell(&field.name),
            Cell::new(&field.kind),
            Cell::new(field.display_title()),
            constraint_cell(&field.constraints),
            conditional_cell(field.hidden_when.is_some()),
            default_cell(field.default.as_ref()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(28)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Fixed(18)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn constraint_cell(constraints: &[Constraint]) -> Cell {
    if constraints.is_empty() {
        return dim_cell("-");
    }
    let described: Vec<String> = constraints.iter().map(describe_constraint).collect();
    Cell::new(described.join(", "))
}

fn describe_constraint(constraint: &Constraint) -> String {
    match constraint.severity {
        Severity::Error => constraint.kind.describe(),
        Severity::Warning => format!("{} (warning)", constraint.kind.describe()),
    }
}

fn conditional_cell(conditional: bool) -> Cell {
    if conditional {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn default_cell(default: Option<&DefaultValue>) -> Cell {
    match default {
        Some(DefaultValue::Fixed { value }) => match display_string(value) {
            Some(text) => Cell::new(text),
            None => dim_cell("-"),
        },
        Some(DefaultValue::CurrentDatetime) => Cell::new("current datetime"),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn name_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
