//! Built-in question-type schemas
//!
//! Seeded into the schema store on first use. Users can edit or delete
//! them like any other schema.

use super::entities::{FieldDefinition, FieldType, QuestionSchema};

/// The default schemas shipped with examforge
pub fn default_schemas() -> Vec<QuestionSchema> {
    vec![single_choice(), multiple_choice(), true_false()]
}

fn single_choice() -> QuestionSchema {
    QuestionSchema::new("single_choice", "Single choice")
        .with_description("A question with exactly one correct answer")
        .with_field(
            FieldDefinition::new("question", FieldType::Text)
                .required()
                .with_description("The question text"),
        )
        .with_field(
            FieldDefinition::new("options", FieldType::TextMap)
                .required()
                .with_description("Options keyed by letter (A, B, C, ...)"),
        )
        .with_field(
            FieldDefinition::new("answer", FieldType::Text)
                .required()
                .with_description("The letter of the correct option"),
        )
        .with_field(
            FieldDefinition::new("analysis", FieldType::Text)
                .with_description("Optional explanation of the answer"),
        )
        .with_prompt_template(
            r#"Convert the following single-choice questions to JSON. Requirements:
1. Put the question text in the "question" field
2. Put the options in the "options" field as an object keyed by letter (A, B, C, ...)
3. Put the correct option letter in the "answer" field
4. If an explanation is present, put it in the optional "analysis" field

Example input:
Which of these is a Python built-in function?
A. print()
B. display()
C. show()
D. output()
Answer: A

Example output:
[
    {
        "question": "Which of these is a Python built-in function?",
        "options": {
            "A": "print()",
            "B": "display()",
            "C": "show()",
            "D": "output()"
        },
        "answer": "A"
    }
]

Convert these questions:
{text}"#,
        )
}

fn multiple_choice() -> QuestionSchema {
    QuestionSchema::new("multiple_choice", "Multiple choice")
        .with_description("A question with two or more correct answers")
        .with_field(
            FieldDefinition::new("question", FieldType::Text)
                .required()
                .with_description("The question text"),
        )
        .with_field(
            FieldDefinition::new("options", FieldType::TextMap)
                .required()
                .with_description("Options keyed by letter (A, B, C, ...)"),
        )
        .with_field(
            FieldDefinition::new("answer", FieldType::TextList)
                .required()
                .with_description("The letters of all correct options"),
        )
        .with_field(
            FieldDefinition::new("analysis", FieldType::Text)
                .with_description("Optional explanation of the answer"),
        )
        .with_prompt_template(
            r#"Convert the following multiple-choice questions to JSON. Requirements:
1. Put the question text in the "question" field
2. Put the options in the "options" field as an object keyed by letter (A, B, C, ...)
3. Put the correct option letters in the "answer" field as an array
4. If an explanation is present, put it in the optional "analysis" field

Example input:
Which of these are Python numeric types? (multiple answers)
A. int
B. str
C. float
D. bytes
Answer: A, C

Example output:
[
    {
        "question": "Which of these are Python numeric types? (multiple answers)",
        "options": {
            "A": "int",
            "B": "str",
            "C": "float",
            "D": "bytes"
        },
        "answer": ["A", "C"]
    }
]

Convert these questions:
{text}"#,
        )
}

fn true_false() -> QuestionSchema {
    QuestionSchema::new("true_false", "True or false")
        .with_description("A statement judged true or false")
        .with_field(
            FieldDefinition::new("question", FieldType::Text)
                .required()
                .with_description("The statement text"),
        )
        .with_field(
            FieldDefinition::new("answer", FieldType::Boolean)
                .required()
                .with_description("true if the statement is correct"),
        )
        .with_field(
            FieldDefinition::new("analysis", FieldType::Text)
                .with_description("Optional explanation of the answer"),
        )
        .with_prompt_template(
            r#"Convert the following true/false questions to JSON. Requirements:
1. Put the statement in the "question" field
2. Put the verdict in the "answer" field: true if correct, false otherwise
3. If an explanation is present, put it in the optional "analysis" field

Example input:
Python is a compiled language. (true/false)
Answer: false

Example output:
[
    {
        "question": "Python is a compiled language.",
        "answer": false
    }
]

Convert these questions:
{text}"#,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        for schema in default_schemas() {
            schema
                .validate()
                .unwrap_or_else(|e| panic!("default schema {} invalid: {}", schema.id, e));
        }
    }

    #[test]
    fn test_default_ids() {
        let ids: Vec<String> = default_schemas().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["single_choice", "multiple_choice", "true_false"]);
    }
}
