use crate::jobs::client::CrmClient;
use crate::jobs::errors::JobError;
use crate::jobs::log_file::append_lines;
use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::json;
use std::path::Path;

pub const RECENT_ORDERS_QUERY: &str = r#"
query RecentOrders($dateFrom: DateTime!, $dateTo: DateTime!) {
  allOrders(orderDate_Gte: $dateFrom, orderDate_Lte: $dateTo) {
    edges {
      node {
        id
        orderDate
        customer {
          email
        }
      }
    }
  }
}
"#;

pub const REMINDERS_PROCESSED_MESSAGE: &str = "Order reminders processed!";

/// Inclusive range of order dates to remind about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeWindow {
    pub fn last_days(now: DateTime<Utc>, days: i64) -> Self {
        TimeWindow {
            from: now - Duration::days(days),
            to: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub order_id: i32,
    pub customer_email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecentOrdersData {
    all_orders: OrderConnection,
}

#[derive(Deserialize)]
struct OrderConnection {
    edges: Vec<OrderEdge>,
}

#[derive(Deserialize)]
struct OrderEdge {
    node: OrderNode,
}

#[derive(Deserialize)]
struct OrderNode {
    id: i32,
    customer: CustomerNode,
}

#[derive(Deserialize)]
struct CustomerNode {
    email: String,
}

/// Orders placed within `window`, one reminder each.
pub async fn fetch_reminders(
    client: &dyn CrmClient,
    window: TimeWindow,
) -> Result<Vec<Reminder>, JobError> {
    let variables = json!({
        "dateFrom": window.from.to_rfc3339_opts(SecondsFormat::Secs, true),
        "dateTo": window.to.to_rfc3339_opts(SecondsFormat::Secs, true),
    });

    let data = client.execute(RECENT_ORDERS_QUERY, variables).await?;
    let data: RecentOrdersData = serde_json::from_value(data)?;

    Ok(data
        .all_orders
        .edges
        .into_iter()
        .map(|edge| Reminder {
            order_id: edge.node.id,
            customer_email: edge.node.customer.email,
        })
        .collect())
}

pub fn reminder_line(reminder: &Reminder, at: NaiveDateTime) -> String {
    format!(
        "{}: Reminder for Order {} to {}",
        at.format("%Y-%m-%dT%H:%M:%S%.6f"),
        reminder.order_id,
        reminder.customer_email
    )
}

pub async fn run(
    client: &dyn CrmClient,
    log_file: &Path,
    now: NaiveDateTime,
    days: i64,
) -> Result<Vec<Reminder>, JobError> {
    let reminders = fetch_reminders(client, TimeWindow::last_days(now.and_utc(), days)).await?;

    let lines: Vec<String> = reminders.iter().map(|r| reminder_line(r, now)).collect();
    append_lines(log_file, &lines).await?;

    tracing::info!(count = reminders.len(), "Order reminders logged");
    Ok(reminders)
}
