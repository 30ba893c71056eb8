use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

// -- Row builders --

/// One row per top-level entry of a JSON object. Anything else has no
/// tabular form and is printed as JSON instead.
fn build_field_rows(value: &Value) -> Option<Vec<FieldRow>> {
    let object = value.as_object()?;
    Some(
        object
            .iter()
            .map(|(field, value)| FieldRow {
                field: field.clone(),
                value: format_cell(value),
            })
            .collect(),
    )
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// -- Output --

pub fn print_value(value: &Value, format: &OutputFormat) {
    let rows = match format {
        OutputFormat::Json => None,
        OutputFormat::Table | OutputFormat::Markdown => build_field_rows(value),
    };
    match rows {
        Some(rows) => {
            let mut table = Table::new(rows);
            if let OutputFormat::Markdown = format {
                table.with(Style::markdown());
            }
            println!("{}", table);
        }
        None => print_json(value),
    }
}

pub fn print_json(data: &Value) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
