use async_trait::async_trait;
use serde_json::json;

use crate::domain::{Tool, ToolError};

#[derive(Clone, Default)]
pub struct AddTool;

#[async_trait]
impl Tool for AddTool {
    fn name(&self) -> &'static str {
        "add_numbers"
    }
    fn description(&self) -> &'static str {
        "Add two numbers together"
    }
    fn input_schema(&self) -> serde_json::Value {
        json!({
          "type": "object",
          "properties": {
            "x": { "type": "number" },
            "y": { "type": "number" }
          },
          "required": ["x", "y"]
        })
    }
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let Some(x) = arguments.get("x").and_then(|v| v.as_f64()) else {
            return Err(ToolError::Message("missing 'x'".into()));
        };
        let Some(y) = arguments.get("y").and_then(|v| v.as_f64()) else {
            return Err(ToolError::Message("missing 'y'".into()));
        };
        Ok(json!({ "result": x + y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn it_adds_integers() {
        let out = AddTool.call(&json!({"x": 2, "y": 3})).await.unwrap();
        assert_eq!(out["result"], 5.0);
    }

    #[tokio::test]
    async fn it_adds_negative_fractions() {
        let out = AddTool.call(&json!({"x": -1.5, "y": 1.5})).await.unwrap();
        assert_eq!(out["result"], 0.0);
    }

    #[tokio::test]
    async fn it_validates_missing_operands() {
        let err = AddTool.call(&json!({"x": 1})).await.unwrap_err();
        assert!(err.to_string().contains("missing 'y'"));
        let err = AddTool.call(&json!({})).await.unwrap_err();
        assert!(err.to_string().contains("missing 'x'"));
    }
}
