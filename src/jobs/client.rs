use crate::api::graphql::CrmSchema;
use crate::jobs::errors::JobError;
use async_graphql::{Request, Schema, Variables};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

/// Executes a GraphQL operation and returns its `data` object.
#[async_trait]
pub trait CrmClient: Send + Sync {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, JobError>;
}

/// Talks to a running CRM server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCrmClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpCrmClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpCrmClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Deserialize)]
struct GraphQLResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQLErrorBody>,
}

#[derive(Deserialize)]
struct GraphQLErrorBody {
    message: String,
}

#[async_trait]
impl CrmClient for HttpCrmClient {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, JobError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| JobError::Transport(e.to_string()))?;

        let body: GraphQLResponse = response
            .json()
            .await
            .map_err(|e| JobError::MalformedResponse(e.to_string()))?;

        if !body.errors.is_empty() {
            return Err(JobError::GraphQL(
                body.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        body.data
            .ok_or_else(|| JobError::MalformedResponse("missing data".to_string()))
    }
}

/// Runs operations against an in-process schema, bypassing HTTP.
#[async_trait]
impl CrmClient for CrmSchema {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, JobError> {
        let request = Request::new(query).variables(Variables::from_json(variables));
        let response = Schema::execute(self, request).await;

        if !response.errors.is_empty() {
            return Err(JobError::GraphQL(
                response.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        Ok(response.data.into_json()?)
    }
}
