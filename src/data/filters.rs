//! Query filters and ordering for the entity collections.
//!
//! A [`Filter`] is a conjunction of predicates. Each entity has its own
//! tagged predicate enum ([`CustomerPredicate`], [`ProductPredicate`],
//! [`OrderPredicate`]) and sortable field enum. Repositories render both
//! into SQL.

pub mod customer_filter;
pub mod order_filter;
pub mod product_filter;

pub use customer_filter::{CustomerField, CustomerPredicate};
pub use order_filter::{OrderField, OrderPredicate};
pub use product_filter::{ProductField, ProductPredicate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    UnknownOrderField(String),
}

impl std::error::Error for FilterError {}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::UnknownOrderField(field) => {
                write!(f, "Cannot order by unknown field '{}'.", field)
            }
        }
    }
}

/// Predicates combined with logical AND. An empty filter matches everything.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter<P> {
    predicates: Vec<P>,
}

impl<P> Default for Filter<P> {
    fn default() -> Self {
        Filter {
            predicates: Vec::new(),
        }
    }
}

impl<P> Filter<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: P) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Adds the predicate only when the parameter was supplied.
    pub fn with_opt<T>(self, value: Option<T>, predicate: impl FnOnce(T) -> P) -> Self {
        match value {
            Some(value) => self.with(predicate(value)),
            None => self,
        }
    }

    pub fn predicates(&self) -> &[P] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// A column an entity collection can be sorted by.
pub trait SortField: Sized + Copy {
    /// Accepts both snake_case and camelCase spellings.
    fn from_name(name: &str) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy<F> {
    pub field: F,
    pub direction: Direction,
}

impl<F: SortField> OrderBy<F> {
    /// Parses `"name"` or `"-name"`; the leading `-` means descending.
    pub fn parse(raw: &str) -> Result<Self, FilterError> {
        let raw = raw.trim();
        let (name, direction) = match raw.strip_prefix('-') {
            Some(rest) => (rest, Direction::Desc),
            None => (raw, Direction::Asc),
        };

        F::from_name(name)
            .map(|field| OrderBy { field, direction })
            .ok_or_else(|| FilterError::UnknownOrderField(raw.to_string()))
    }
}

pub fn parse_order_by<F: SortField>(names: &[String]) -> Result<Vec<OrderBy<F>>, FilterError> {
    names.iter().map(|raw| OrderBy::<F>::parse(raw)).collect()
}

/// Escapes LIKE wildcards so the value is matched literally. MySQL's
/// default escape character is the backslash.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// LIKE pattern for a case-insensitive substring match against `LOWER(col)`.
pub fn contains_pattern(value: &str) -> String {
    format!("%{}%", escape_like(&value.to_lowercase()))
}

/// LIKE pattern for a prefix match.
pub fn prefix_pattern(value: &str) -> String {
    format!("{}%", escape_like(value))
}
