use crate::jobs::HEARTBEAT_TIME_FORMAT;
use crate::jobs::client::CrmClient;
use crate::jobs::errors::JobError;
use crate::jobs::log_file::append_lines;
use chrono::NaiveDateTime;
use serde_json::Value;
use std::path::Path;

pub const HELLO_QUERY: &str = "query { hello }";

pub fn alive_line(now: NaiveDateTime) -> String {
    format!("{} CRM is alive", now.format(HEARTBEAT_TIME_FORMAT))
}

pub fn hello_line(now: NaiveDateTime, hello: &Result<String, JobError>) -> String {
    let timestamp = now.format(HEARTBEAT_TIME_FORMAT);
    match hello {
        Ok(value) => format!("{} GraphQL hello: {}", timestamp, value),
        Err(err) => format!("{} GraphQL hello check failed: {}", timestamp, err),
    }
}

pub async fn check_hello(client: &dyn CrmClient) -> Result<String, JobError> {
    let data = client.execute(HELLO_QUERY, Value::Null).await?;

    data.get("hello")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| JobError::MalformedResponse("missing field 'hello'".to_string()))
}

/// Records that the CRM is alive, then whether the API answers `hello`.
///
/// The liveness line is written before the probe so it lands even when the
/// server is unreachable. A failed probe is logged, not returned.
pub async fn run(
    client: &dyn CrmClient,
    log_file: &Path,
    now: NaiveDateTime,
) -> Result<(), JobError> {
    append_lines(log_file, &[alive_line(now)]).await?;

    let hello = check_hello(client).await;
    if let Err(err) = &hello {
        tracing::warn!("Heartbeat hello check failed: {}", err);
    }

    append_lines(log_file, &[hello_line(now, &hello)]).await?;
    Ok(())
}
