//! Prompt text and response schema for explanation requests

use serde_json::{json, Value};

/// Build the mentor prompt with the snippet embedded verbatim in a fence.
pub fn build_prompt(code: &str) -> String {
    format!(
        r#"
You are a senior engineering mentor pair-programming with a developer who is preparing for technical interviews at top-tier tech companies.
Your goal is to explain a given code snippet in a way that demonstrates deep understanding and readiness for interviews.

First, formulate a thought-provoking "Why?" question to encourage critical thinking about the provided code. For example, "That's an interesting approach. Before we dive in, why might you have chosen this specific algorithm over another for this problem?" Place this question in the 'initialQuestion' field of the JSON response.

Given the following code snippet:
```
{code}
```

Then, provide a detailed explanation in JSON format. The JSON object must conform to the provided schema. Your explanations should be technical, precise, and supportive, clear enough for a mid-level engineer but demonstrating the depth expected of a senior candidate.
"#
    )
}

/// Structured-output schema mirroring `CodeExplanation`; every field required.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "initialQuestion": {
                "type": "STRING",
                "description": "A thought-provoking 'Why?' question to the user about their code choice, to encourage critical thinking."
            },
            "lineByLineExplanation": {
                "type": "ARRAY",
                "description": "A detailed explanation for each line or logical block of code.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "line": {
                            "type": "STRING",
                            "description": "The line number(s) being explained, e.g., '1-3' or '5'."
                        },
                        "explanation": {
                            "type": "STRING",
                            "description": "The detailed explanation for that line/block."
                        }
                    },
                    "required": ["line", "explanation"]
                }
            },
            "bigOAnalysis": {
                "type": "OBJECT",
                "description": "Analysis of the time and space complexity of the code.",
                "properties": {
                    "timeComplexity": {
                        "type": "STRING",
                        "description": "The time complexity (Big O notation) with a justification."
                    },
                    "spaceComplexity": {
                        "type": "STRING",
                        "description": "The space complexity (Big O notation) with a justification."
                    }
                },
                "required": ["timeComplexity", "spaceComplexity"]
            },
            "tradeoffsAndAlternatives": {
                "type": "STRING",
                "description": "A discussion of alternative algorithms or data structures, including their trade-offs."
            },
            "systemDesignContext": {
                "type": "STRING",
                "description": "An explanation of how this code could fit into a larger system."
            },
            "behavioralQuestions": {
                "type": "ARRAY",
                "description": "A list of potential behavioral interview questions related to the code snippet.",
                "items": { "type": "STRING" }
            }
        },
        "required": [
            "initialQuestion",
            "lineByLineExplanation",
            "bigOAnalysis",
            "tradeoffsAndAlternatives",
            "systemDesignContext",
            "behavioralQuestions"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_code_verbatim() {
        let code = "fn main() {\n    println!(\"hi\");\n}";
        let prompt = build_prompt(code);
        assert!(prompt.contains(&format!("```\n{code}\n```")));
        assert!(prompt.contains("initialQuestion"));
    }

    #[test]
    fn test_schema_requires_every_section() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(required.len(), 6);
        for key in required {
            assert!(schema["properties"].get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_schema_nested_required() {
        let schema = response_schema();
        assert_eq!(
            schema["properties"]["bigOAnalysis"]["required"],
            json!(["timeComplexity", "spaceComplexity"])
        );
        assert_eq!(
            schema["properties"]["lineByLineExplanation"]["items"]["required"],
            json!(["line", "explanation"])
        );
    }
}
