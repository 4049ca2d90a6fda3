//! Prompt construction for the conversion flow

use crate::schema::entities::{QuestionSchema, TEXT_PLACEHOLDER};

/// Builds the instruction text sent to an AI backend
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt used for every conversion request
    pub fn system() -> &'static str {
        r#"You are a professional exam question conversion assistant.
Convert raw question text to JSON exactly as instructed.
Output only JSON — no explanations, no Markdown fences, no surrounding prose."#
    }

    /// Build the user prompt for one conversion request.
    ///
    /// Deterministic concatenation: the schema's prompt template with the
    /// `{text}` placeholder substituted, followed by a field contract derived
    /// from the schema definition. The template itself is always present in
    /// the output.
    pub fn build(schema: &QuestionSchema, raw_text: &str) -> String {
        let mut prompt = schema.prompt_template.replace(TEXT_PLACEHOLDER, raw_text);

        prompt.push_str("\n\nField contract:\n");
        for field in &schema.fields {
            let requirement = if field.required {
                "required"
            } else {
                "optional"
            };
            match &field.description {
                Some(desc) => prompt.push_str(&format!(
                    "- \"{}\" ({}, {}): {}\n",
                    field.name,
                    field.field_type.prompt_hint(),
                    requirement,
                    desc
                )),
                None => prompt.push_str(&format!(
                    "- \"{}\" ({}, {})\n",
                    field.name,
                    field.field_type.prompt_hint(),
                    requirement
                )),
            }
        }

        prompt.push_str(
            r#"
Rules:
1. Output a JSON array with one object per question, even for a single question.
2. Use exactly the field names above — do not add, rename, or omit fields.
3. Omit optional fields rather than inventing values for them.
4. Output JSON only, with no other text."#,
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::entities::{FieldDefinition, FieldType, QuestionSchema};

    fn schema() -> QuestionSchema {
        QuestionSchema::new("single_choice", "Single choice")
            .with_field(
                FieldDefinition::new("question", FieldType::Text)
                    .required()
                    .with_description("The question text"),
            )
            .with_field(FieldDefinition::new("answer", FieldType::Text).required())
            .with_prompt_template("Convert to JSON as shown.\n\nQuestions:\n{text}")
    }

    #[test]
    fn test_prompt_contains_template_and_text() {
        let prompt = PromptTemplate::build(&schema(), "2+2=?\nA. 3\nB. 4");
        assert!(prompt.contains("Convert to JSON as shown."));
        assert!(prompt.contains("2+2=?\nA. 3\nB. 4"));
        assert!(!prompt.contains(TEXT_PLACEHOLDER));
    }

    #[test]
    fn test_prompt_lists_every_field() {
        let prompt = PromptTemplate::build(&schema(), "text");
        assert!(prompt.contains("\"question\" (a string, required): The question text"));
        assert!(prompt.contains("\"answer\" (a string, required)"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = PromptTemplate::build(&schema(), "same input");
        let b = PromptTemplate::build(&schema(), "same input");
        assert_eq!(a, b);
    }
}
