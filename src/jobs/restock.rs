use crate::jobs::RESTOCK_TIME_FORMAT;
use crate::jobs::client::CrmClient;
use crate::jobs::errors::JobError;
use crate::jobs::log_file::append_lines;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

pub const RESTOCK_MUTATION: &str = r#"
mutation {
  updateLowStockProducts {
    message
    updatedProducts {
      id
      name
      stock
    }
  }
}
"#;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestockReport {
    pub message: String,
    pub updated_products: Vec<RestockedProduct>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RestockedProduct {
    pub id: i32,
    pub name: String,
    pub stock: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RestockData {
    update_low_stock_products: RestockReport,
}

pub async fn restock(client: &dyn CrmClient) -> Result<RestockReport, JobError> {
    let data = client.execute(RESTOCK_MUTATION, Value::Null).await?;
    let data: RestockData = serde_json::from_value(data)?;

    Ok(data.update_low_stock_products)
}

pub fn restock_lines(report: &RestockReport, now: NaiveDateTime) -> Vec<String> {
    let timestamp = now.format(RESTOCK_TIME_FORMAT);
    report
        .updated_products
        .iter()
        .map(|p| format!("{}: Restocked {}, new stock: {}", timestamp, p.name, p.stock))
        .collect()
}

pub async fn run(
    client: &dyn CrmClient,
    log_file: &Path,
    now: NaiveDateTime,
) -> Result<RestockReport, JobError> {
    let report = restock(client).await?;
    append_lines(log_file, &restock_lines(&report, now)).await?;

    tracing::info!("{}", report.message);
    Ok(report)
}
