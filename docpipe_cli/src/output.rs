use docpipe_api::routes::Route;
use serde::Serialize;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct RouteRow {
    #[tabled(rename = "Path")]
    #[serde(rename = "Path")]
    path: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Icon")]
    #[serde(rename = "Icon")]
    icon: String,
    #[tabled(rename = "View")]
    #[serde(rename = "View")]
    view: String,
}

#[derive(Tabled, Serialize)]
struct StatusRow {
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: u16,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

fn build_route_rows(routes: &[Route]) -> Vec<RouteRow> {
    routes
        .iter()
        .map(|r| RouteRow {
            path: format!("/{}", r.path),
            name: r.name.to_string(),
            title: r.meta.title.to_string(),
            icon: r.meta.icon.to_string(),
            view: r.view.to_string(),
        })
        .collect()
}

fn build_status_rows(statuses: &[(u16, &str)]) -> Vec<StatusRow> {
    statuses
        .iter()
        .map(|(status, description)| StatusRow {
            status: *status,
            description: description.to_string(),
        })
        .collect()
}

pub fn print_routes(routes: &[Route], format: &OutputFormat) {
    let rows = build_route_rows(routes);
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Json => print_json(&rows),
    }
}

pub fn print_status_codes(statuses: &[(u16, &str)], format: &OutputFormat) {
    let rows = build_status_rows(statuses);
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Json => print_json(&rows),
    }
}

/// Prints a backend response. Arrays of objects become a table; anything else is pretty JSON.
pub fn print_value(value: &Value, format: &OutputFormat) {
    match format {
        OutputFormat::Table => match build_value_rows(value) {
            Some(rows) => {
                let mut builder = Builder::default();
                for row in rows {
                    builder.push_record(row);
                }
                println!("{}", builder.build());
            }
            None => print_json(value),
        },
        OutputFormat::Json => print_json(value),
    }
}

/// Header row plus one row per object, columns in order of first appearance.
fn build_value_rows(value: &Value) -> Option<Vec<Vec<String>>> {
    let items = value.as_array()?;
    if items.is_empty() || !items.iter().all(Value::is_object) {
        return None;
    }

    let mut columns: Vec<String> = Vec::new();
    for item in items.iter().filter_map(Value::as_object) {
        for key in item.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    let mut rows = vec![columns.clone()];
    for item in items.iter().filter_map(Value::as_object) {
        rows.push(
            columns
                .iter()
                .map(|col| match item.get(col) {
                    None | Some(Value::Null) => String::new(),
                    Some(Value::String(s)) => s.clone(),
                    Some(other) => other.to_string(),
                })
                .collect(),
        );
    }
    Some(rows)
}

pub fn print_json<T: serde::Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
