use crate::data::filters::FilterError;

/// Error category reported to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Consistency,
    Internal,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::Conflict => "CONFLICT_ERROR",
            ErrorKind::NotFound => "NOT_FOUND_ERROR",
            ErrorKind::Consistency => "CONSISTENCY_ERROR",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }
}

pub trait ServiceError: std::error::Error {
    fn kind(&self) -> ErrorKind;
}

#[derive(Debug, PartialEq)]
pub enum CustomerServiceError {
    MissingName,
    MissingEmail,
    DuplicateEmail(String),
    InvalidPhoneFormat,
    InvalidOrderField(String),
    DatabaseError,
}

impl std::error::Error for CustomerServiceError {}

impl std::fmt::Display for CustomerServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerServiceError::MissingName => write!(f, "Name is required."),
            CustomerServiceError::MissingEmail => write!(f, "Email is required."),
            CustomerServiceError::DuplicateEmail(_) => write!(f, "Email already exists."),
            CustomerServiceError::InvalidPhoneFormat => {
                write!(f, "Phone number must be in valid format.")
            }
            CustomerServiceError::InvalidOrderField(field) => {
                write!(f, "Cannot order by unknown field '{}'.", field)
            }
            CustomerServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

impl ServiceError for CustomerServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            CustomerServiceError::MissingName
            | CustomerServiceError::MissingEmail
            | CustomerServiceError::InvalidPhoneFormat
            | CustomerServiceError::InvalidOrderField(_) => ErrorKind::Validation,
            CustomerServiceError::DuplicateEmail(_) => ErrorKind::Conflict,
            CustomerServiceError::DatabaseError => ErrorKind::Internal,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ProductServiceError {
    MissingName,
    InvalidPrice,
    /// The price does not fit the stored price column.
    PriceOutOfRange,
    NegativeStock,
    InvalidOrderField(String),
    DatabaseError,
}

impl std::error::Error for ProductServiceError {}

impl std::fmt::Display for ProductServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductServiceError::MissingName => write!(f, "Name is required."),
            ProductServiceError::InvalidPrice => write!(f, "Price must be a positive number."),
            ProductServiceError::PriceOutOfRange => write!(f, "Price cannot exceed 99999999.99."),
            ProductServiceError::NegativeStock => write!(f, "Stock cannot be negative."),
            ProductServiceError::InvalidOrderField(field) => {
                write!(f, "Cannot order by unknown field '{}'.", field)
            }
            ProductServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

impl ServiceError for ProductServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            ProductServiceError::MissingName
            | ProductServiceError::InvalidPrice
            | ProductServiceError::PriceOutOfRange
            | ProductServiceError::NegativeStock
            | ProductServiceError::InvalidOrderField(_) => ErrorKind::Validation,
            ProductServiceError::DatabaseError => ErrorKind::Internal,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum OrderServiceError {
    EmptyProductList,
    UnknownCustomer(i32),
    UnknownProduct,
    /// The summed prices do not fit the stored amount column.
    TotalOutOfRange,
    InvalidOrderField(String),
    DatabaseError,
}

impl std::error::Error for OrderServiceError {}

impl std::fmt::Display for OrderServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderServiceError::EmptyProductList => {
                write!(f, "At least one product ID is required.")
            }
            OrderServiceError::UnknownCustomer(_) => write!(f, "Invalid customer ID."),
            OrderServiceError::UnknownProduct => write!(f, "One or more product IDs are invalid."),
            OrderServiceError::TotalOutOfRange => {
                write!(f, "Order total cannot exceed 99999999.99.")
            }
            OrderServiceError::InvalidOrderField(field) => {
                write!(f, "Cannot order by unknown field '{}'.", field)
            }
            OrderServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

impl ServiceError for OrderServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            OrderServiceError::EmptyProductList
            | OrderServiceError::TotalOutOfRange
            | OrderServiceError::InvalidOrderField(_) => ErrorKind::Validation,
            OrderServiceError::UnknownCustomer(_) => ErrorKind::NotFound,
            OrderServiceError::UnknownProduct => ErrorKind::Consistency,
            OrderServiceError::DatabaseError => ErrorKind::Internal,
        }
    }
}

impl From<FilterError> for CustomerServiceError {
    fn from(e: FilterError) -> Self {
        match e {
            FilterError::UnknownOrderField(field) => CustomerServiceError::InvalidOrderField(field),
        }
    }
}

impl From<FilterError> for ProductServiceError {
    fn from(e: FilterError) -> Self {
        match e {
            FilterError::UnknownOrderField(field) => ProductServiceError::InvalidOrderField(field),
        }
    }
}

impl From<FilterError> for OrderServiceError {
    fn from(e: FilterError) -> Self {
        match e {
            FilterError::UnknownOrderField(field) => OrderServiceError::InvalidOrderField(field),
        }
    }
}
