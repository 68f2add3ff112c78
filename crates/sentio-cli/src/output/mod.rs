use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    // Columns in first-seen field order, which is struct declaration order.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{render, table::render_entity_table, value_to_cell};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        keywords: Vec<&'static str>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            id: "x",
            keywords: vec!["budget"],
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["keywords"][0], "budget");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            id: "x",
            keywords: vec![],
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn array_of_objects_renders_columns_in_field_order() {
        let rows = vec![
            Example {
                id: "cmt-1",
                keywords: vec!["deadline", "burden"],
            },
            Example {
                id: "cmt-2",
                keywords: vec![],
            },
        ];
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("id"));
        assert!(lines[0].contains("keywords"));
        assert!(lines[2].contains("deadline, burden"));
    }

    #[test]
    fn string_arrays_join_into_one_cell() {
        let value = serde_json::json!(["a", "b"]);
        assert_eq!(value_to_cell(&value), "a, b");
        let mixed = serde_json::json!([1, "b"]);
        assert_eq!(value_to_cell(&mixed), "[1,\"b\"]");
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["id", "sentiment", "summary"];
        let rows = vec![
            vec!["cmt-1".to_string(), "▲ Positive".to_string(), "short".to_string()],
            vec![
                "cmt-200".to_string(),
                "– Neutral".to_string(),
                "a much longer summary".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            super::table::TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].chars().count(), lines[3].chars().count());
    }
}
