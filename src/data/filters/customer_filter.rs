use crate::data::filters::SortField;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub enum CustomerPredicate {
    NameContains(String),
    EmailContains(String),
    CreatedAtGte(NaiveDateTime),
    CreatedAtLte(NaiveDateTime),
    /// Phone starts with the given prefix, e.g. `+1`.
    PhoneStartsWith(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Id,
    Name,
    Email,
    Phone,
    CreatedAt,
}

impl SortField for CustomerField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" | "customer_id" | "customerId" => Some(CustomerField::Id),
            "name" => Some(CustomerField::Name),
            "email" => Some(CustomerField::Email),
            "phone" => Some(CustomerField::Phone),
            "created_at" | "createdAt" => Some(CustomerField::CreatedAt),
            _ => None,
        }
    }
}
