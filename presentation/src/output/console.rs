//! Console output formatting for conversion results

use colored::Colorize;
use examforge_domain::{Model, QuestionSchema, StructuredRecord};
use serde_json::Value;

/// Formats records, schemas and model listings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a batch of converted records field by field
    pub fn format_records(records: &[StructuredRecord], schema: &QuestionSchema) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!(
            "{} ({} record{})",
            schema.name,
            records.len(),
            if records.len() == 1 { "" } else { "s" }
        )));
        output.push('\n');

        for (index, record) in records.iter().enumerate() {
            output.push_str(&format!(
                "\n{}\n",
                format!("── Record {} ──", index + 1).yellow().bold()
            ));
            for field in &schema.fields {
                match record.get(&field.name) {
                    Some(value) => {
                        output.push_str(&format!(
                            "  {} {}\n",
                            format!("{}:", field.name).cyan().bold(),
                            Self::display_value(value)
                        ));
                    }
                    None => {
                        output.push_str(&format!(
                            "  {} {}\n",
                            format!("{}:", field.name).cyan().bold(),
                            "-".dimmed()
                        ));
                    }
                }
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format records as a pretty-printed JSON array
    pub fn format_records_json(records: &[StructuredRecord]) -> String {
        let values: Vec<Value> = records
            .iter()
            .map(|r| Value::Object(r.values().clone()))
            .collect();
        serde_json::to_string_pretty(&Value::Array(values)).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format the schema list (one line per schema)
    pub fn format_schema_list(schemas: &[QuestionSchema]) -> String {
        if schemas.is_empty() {
            return format!("{}\n", "No question types defined.".dimmed());
        }

        let mut output = String::new();
        output.push_str(&format!("{}\n", "Question types:".cyan().bold()));
        for schema in schemas {
            output.push_str(&format!(
                "  {} {} ({} field{})\n",
                schema.id.yellow().bold(),
                schema.name,
                schema.fields.len(),
                if schema.fields.len() == 1 { "" } else { "s" }
            ));
            if !schema.description.is_empty() {
                output.push_str(&format!("      {}\n", schema.description.dimmed()));
            }
        }
        output
    }

    /// Format one schema in full, including its field contract
    pub fn format_schema(schema: &QuestionSchema) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&schema.name));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Id:".cyan().bold(), schema.id));
        if !schema.description.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "Description:".cyan().bold(),
                schema.description
            ));
        }

        output.push_str(&Self::section_header("Fields"));
        for field in &schema.fields {
            let requirement = if field.required {
                "required".green()
            } else {
                "optional".dimmed()
            };
            output.push_str(&format!(
                "  {} {} ({})\n",
                field.name.yellow().bold(),
                field.field_type.name(),
                requirement
            ));
            if let Some(description) = &field.description {
                output.push_str(&format!("      {}\n", description.dimmed()));
            }
        }

        output.push_str(&Self::section_header("Prompt template"));
        output.push_str(&Self::indent(&schema.prompt_template, "  "));
        output.push('\n');
        output.push_str(&Self::footer());
        output
    }

    /// Format the model listing, marking which ones have credentials
    pub fn format_models(available: &[Model], default: Model) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Models:".cyan().bold()));
        for model in Model::all() {
            let usable = available.contains(&model);
            let marker = if usable { "v".green() } else { "x".red() };
            let default_tag = if model == default {
                " (default)".cyan().to_string()
            } else {
                String::new()
            };
            output.push_str(&format!(
                "  {} {}{} - {} [{} tokens]\n",
                marker,
                model.as_str().bold(),
                default_tag,
                model.description(),
                model.token_budget()
            ));
        }
        output.push_str(&format!(
            "\n{}\n",
            "v = credential configured, x = credential missing".dimmed()
        ));
        output
    }

    fn display_value(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            Value::Object(map) => {
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort_by_key(|(k, _)| k.as_str());
                entries
                    .into_iter()
                    .map(|(k, v)| match v {
                        Value::String(s) => format!("{}: {}", k, s),
                        other => format!("{}: {}", k, other),
                    })
                    .collect::<Vec<_>>()
                    .join("; ")
            }
            other => other.to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use examforge_domain::{FieldDefinition, FieldType};
    use serde_json::{Map, json};

    fn schema() -> QuestionSchema {
        QuestionSchema::new("single_choice", "Single choice")
            .with_field(FieldDefinition::new("question", FieldType::Text).required())
            .with_field(FieldDefinition::new("options", FieldType::TextList).required())
            .with_field(FieldDefinition::new("answer", FieldType::Text).required())
            .with_prompt_template("{text}")
    }

    fn record() -> StructuredRecord {
        let mut values = Map::new();
        values.insert("question".into(), json!("2+2=?"));
        values.insert("options".into(), json!(["3", "4"]));
        values.insert("answer".into(), json!("4"));
        StructuredRecord::from_values(values)
    }

    #[test]
    fn test_format_records_contains_fields() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_records(&[record()], &schema());
        assert!(output.contains("Record 1"));
        assert!(output.contains("question: 2+2=?"));
        assert!(output.contains("options: 3, 4"));
    }

    #[test]
    fn test_format_records_json_is_array() {
        let output = ConsoleFormatter::format_records_json(&[record()]);
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["answer"], json!("4"));
    }

    #[test]
    fn test_format_models_marks_available() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_models(&[Model::DeepseekChat], Model::DeepseekChat);
        assert!(output.contains("deepseek-chat"));
        assert!(output.contains("(default)"));
        assert!(output.contains("qwen-max"));
    }

    #[test]
    fn test_format_schema_list_empty() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_schema_list(&[]);
        assert!(output.contains("No question types"));
    }
}
