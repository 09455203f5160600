use crate::data::filters::{CustomerPredicate, Filter, parse_order_by};
use crate::data::models::customer::{Customer, CustomerDraft, NewCustomer};
use crate::data::repos::traits::repository::{CustomerRepository, Window};
use crate::services::errors::CustomerServiceError;
use crate::utils::clock::Clock;
use diesel::result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// Phone format accepted by single customer creation.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?1?\d{9,15}$").expect("phone pattern is a valid regex")
});

/// Phone format accepted by bulk creation: `+` and 10 to 15 digits, or
/// `123-456-7890`.
static BULK_PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+\d{10,15}|\d{3}-\d{3}-\d{4})$").expect("bulk phone pattern is a valid regex")
});

pub const CUSTOMER_CREATED_MESSAGE: &str = "Customer created successfully.";

/// Result of a bulk import: the customers that were created, in input
/// order, and one message per rejected entry.
#[derive(Debug, Default, PartialEq)]
pub struct BulkCreateOutcome {
    pub customers: Vec<Customer>,
    pub errors: Vec<String>,
}

pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
    clock: Arc<dyn Clock>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>, clock: Arc<dyn Clock>) -> Self {
        CustomerService { repo, clock }
    }

    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, CustomerServiceError> {
        self.repo
            .get_all()
            .await
            .map(Option::unwrap_or_default)
            .map_err(|_| CustomerServiceError::DatabaseError)
    }

    pub async fn count_customers(
        &self,
        filter: &Filter<CustomerPredicate>,
    ) -> Result<i64, CustomerServiceError> {
        self.repo
            .count(filter)
            .await
            .map_err(|_| CustomerServiceError::DatabaseError)
    }

    /// Filtered, ordered slice of customers. `order_by` holds field names,
    /// `-` prefixed for descending order.
    pub async fn search_customers(
        &self,
        filter: &Filter<CustomerPredicate>,
        order_by: &[String],
        window: Window,
    ) -> Result<Vec<Customer>, CustomerServiceError> {
        let order = parse_order_by(order_by)?;

        self.repo
            .search(filter, &order, window)
            .await
            .map_err(|_| CustomerServiceError::DatabaseError)
    }

    pub async fn create_customer(
        &self,
        draft: CustomerDraft,
    ) -> Result<Customer, CustomerServiceError> {
        if draft.name.trim().is_empty() {
            return Err(CustomerServiceError::MissingName);
        }
        if draft.email.trim().is_empty() {
            return Err(CustomerServiceError::MissingEmail);
        }
        if self.email_taken(&draft.email).await? {
            return Err(CustomerServiceError::DuplicateEmail(draft.email));
        }
        if let Some(phone) = draft.phone.as_deref() {
            if !phone.is_empty() && !PHONE_PATTERN.is_match(phone) {
                return Err(CustomerServiceError::InvalidPhoneFormat);
            }
        }

        let customer = self.insert(draft).await?;
        tracing::info!(customer_id = customer.customer_id, "Customer created");

        Ok(customer)
    }

    /// Creates each entry independently, in input order. A rejected entry is
    /// reported as `"Entry N: ..."` (zero-based) and does not stop the batch.
    /// Entries are processed one at a time, so a duplicate email later in the
    /// same batch is rejected.
    pub async fn bulk_create_customers(&self, drafts: Vec<CustomerDraft>) -> BulkCreateOutcome {
        let mut outcome = BulkCreateOutcome::default();

        for (idx, draft) in drafts.into_iter().enumerate() {
            match self.create_bulk_entry(draft).await {
                Ok(customer) => outcome.customers.push(customer),
                Err(reason) => outcome.errors.push(format!("Entry {}: {}", idx, reason)),
            }
        }

        tracing::info!(
            created = outcome.customers.len(),
            rejected = outcome.errors.len(),
            "Bulk customer import finished"
        );

        outcome
    }

    async fn create_bulk_entry(&self, draft: CustomerDraft) -> Result<Customer, String> {
        if draft.name.trim().is_empty() {
            return Err("Name is required.".to_string());
        }
        if draft.email.trim().is_empty() {
            return Err("Email is required.".to_string());
        }

        let duplicate = |email: &str| format!("Email '{}' already exists.", email);

        match self.email_taken(&draft.email).await {
            Ok(true) => return Err(duplicate(&draft.email)),
            Ok(false) => {}
            Err(e) => return Err(e.to_string()),
        }
        if let Some(phone) = draft.phone.as_deref() {
            if !phone.is_empty() && !BULK_PHONE_PATTERN.is_match(phone) {
                return Err("Invalid phone format.".to_string());
            }
        }

        let email = draft.email.clone();
        self.insert(draft).await.map_err(|e| match e {
            CustomerServiceError::DuplicateEmail(_) => duplicate(&email),
            other => other.to_string(),
        })
    }

    async fn email_taken(&self, email: &str) -> Result<bool, CustomerServiceError> {
        self.repo
            .get_by_email(email)
            .await
            .map(|found| found.is_some())
            .map_err(|_| CustomerServiceError::DatabaseError)
    }

    /// The unique index on email is the final arbiter when two requests race
    /// past the existence check.
    async fn insert(&self, draft: CustomerDraft) -> Result<Customer, CustomerServiceError> {
        let email = draft.email.clone();
        let new_customer = NewCustomer {
            name: draft.name,
            email: draft.email,
            phone: draft.phone.filter(|phone| !phone.is_empty()),
            created_at: draft.created_at.unwrap_or_else(|| self.clock.now()),
        };

        self.repo.add(new_customer).await.map_err(|e| match e {
            result::Error::DatabaseError(result::DatabaseErrorKind::UniqueViolation, _) => {
                tracing::warn!(%email, "Email uniqueness violated on insert");
                CustomerServiceError::DuplicateEmail(email)
            }
            e => {
                tracing::error!("Error creating customer: {}", e);
                CustomerServiceError::DatabaseError
            }
        })
    }
}
