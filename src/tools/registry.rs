//! Explicit tool registry: name -> handler + schema, built once at startup
//! and read-only thereafter.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::Tool;
use crate::pipeline::SummaryPipeline;

use super::add::AddTool;
use super::summarize::SummarizeTool;

#[derive(Clone)]
pub struct Registry(pub Arc<HashMap<&'static str, Arc<dyn Tool>>>);

pub fn build_registry(pipeline: Arc<SummaryPipeline>) -> Registry {
    let mut map: HashMap<&'static str, Arc<dyn Tool>> = HashMap::new();
    let add: Arc<dyn Tool> = Arc::new(AddTool);
    map.insert(add.name(), add);
    let summarize: Arc<dyn Tool> = Arc::new(SummarizeTool::new(pipeline));
    map.insert(summarize.name(), summarize);
    Registry(Arc::new(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::fetch::Fetcher;
    use crate::pipeline::{PipelineError, SummarizationBackend};

    struct NoopBackend;

    #[async_trait::async_trait]
    impl SummarizationBackend for NoopBackend {
        async fn generate(&self, _prompt: &str) -> Result<String, PipelineError> {
            Ok("ok".into())
        }
    }

    fn registry() -> Registry {
        build_registry(Arc::new(SummaryPipeline::new(
            Fetcher::new(),
            Arc::new(NoopBackend),
        )))
    }

    #[test]
    fn it_registers_both_tools() {
        let reg = registry();
        assert!(reg.0.contains_key("add_numbers"));
        assert!(reg.0.contains_key("summarize_url"));
        assert_eq!(reg.0.len(), 2);
    }

    #[tokio::test]
    async fn registered_add_tool_is_callable() {
        let reg = registry();
        let tool = reg.0.get("add_numbers").unwrap();
        let out = tool
            .call(&serde_json::json!({"x": 2, "y": 3}))
            .await
            .unwrap();
        assert_eq!(out["result"], 5.0);
    }
}
