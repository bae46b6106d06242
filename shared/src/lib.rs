use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Generic envelope wrapping every payload returned by the finance API.
///
/// Both fields are optional: list endpoints carry `data` plus `paging`,
/// detail endpoints carry only `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub page: u32,
    pub limit: u32,
    pub total_page: u32,
    pub total_count: u64,
}

/// Error envelope mapping a field name to its list of error messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ErrorResponse {
    /// Flatten the envelope into a single human-readable message.
    pub fn to_message(&self) -> String {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        parts.join("; ")
    }
}

/// Data the layout loader resolves for every page render: the locale
/// to translate with and the path the shell is rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutData {
    pub locale: String,
    pub pathname: String,
}

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Expense => write!(f, "expense"),
        }
    }
}

/// A single ledger entry as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    /// RFC 3339 timestamp of the transaction itself
    pub date: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
    /// ID of the category this transaction belongs to
    pub category: String,
    pub category_name: String,
    /// Optional URL of an uploaded receipt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub modified_at: String,
    pub created_by: String,
    pub modified_by: String,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// Amount signed by direction: expenses count against the balance.
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// A transaction category as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub modified_at: String,
    pub created_by: String,
    pub modified_by: String,
}

/// Payload of the transaction list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetTransactionsData {
    pub transactions: Vec<Transaction>,
    pub total_data: u64,
    pub total_page: u32,
}

pub type GetTransactionsResponse = Response<GetTransactionsData>;

/// Payload of the category list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCategoriesData {
    pub categories: Vec<Category>,
    pub total_data: u64,
    pub total_page: u32,
}

pub type GetCategoriesResponse = Response<GetCategoriesData>;

/// Income/expense totals for the summary endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryData {
    pub total_income: f64,
    pub total_expense: f64,
}

impl SummaryData {
    pub fn balance(&self) -> f64 {
        self.total_income - self.total_expense
    }
}

pub type SummaryResponse = Response<SummaryData>;

/// Query filters accepted by the transaction list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TransactionFilters {
    /// Render the set fields as query-string pairs, in a stable order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(amount) = &self.amount {
            pairs.push(("amount", amount.clone()));
        }
        if let Some(date) = &self.date {
            pairs.push(("date", date.clone()));
        }
        if let Some(transaction_type) = &self.transaction_type {
            pairs.push(("type", transaction_type.to_string()));
        }
        if let Some(description) = &self.description {
            pairs.push(("description", description.clone()));
        }
        if let Some(active) = self.active {
            pairs.push(("active", active.to_string()));
        }
        if let Some(created_at) = &self.created_at {
            pairs.push(("created_at", created_at.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }

    /// Render the filters as a query string without the leading `?`.
    /// Empty when no filter is set.
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<String> = self
            .to_query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        pairs.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_transaction_list_envelope() {
        let json = r#"{
            "data": {
                "transactions": [{
                    "id": "0b9a8f6e-1c2d-4e3f-8a9b-0c1d2e3f4a5b",
                    "amount": 150000.0,
                    "date": "2024-11-02T09:15:00Z",
                    "type": "income",
                    "description": "Monthly dues",
                    "category": "6e5d4c3b-2a19-4807-b6c5-d4e3f2a1b0c9",
                    "category_name": "Dues",
                    "active": true,
                    "created_at": "2024-11-02T09:16:21Z",
                    "modified_at": "2024-11-02T09:16:21Z",
                    "created_by": "admin",
                    "modified_by": "admin"
                }],
                "total_data": 1,
                "total_page": 1
            },
            "paging": {
                "page": 1,
                "limit": 10,
                "total_page": 1,
                "total_count": 1
            }
        }"#;

        let response: GetTransactionsResponse = serde_json::from_str(json).unwrap();
        let data = response.data.unwrap();
        assert_eq!(data.transactions.len(), 1);

        let transaction = &data.transactions[0];
        assert_eq!(transaction.transaction_type, TransactionType::Income);
        assert_eq!(transaction.category_name, "Dues");
        assert_eq!(transaction.proof, None);
        assert!(transaction.is_income());
        assert_eq!(transaction.signed_amount(), 150000.0);

        let paging = response.paging.unwrap();
        assert_eq!(paging.page, 1);
        assert_eq!(paging.total_count, 1);
    }

    #[test]
    fn test_deserialize_category() {
        let json = r#"{
            "id": "6e5d4c3b-2a19-4807-b6c5-d4e3f2a1b0c9",
            "name": "Dues",
            "description": "Monthly member dues",
            "active": true,
            "created_at": "2024-10-01T08:00:00Z",
            "modified_at": "2024-10-01T08:00:00Z",
            "created_by": "admin",
            "modified_by": "admin"
        }"#;

        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.name, "Dues");
        assert_eq!(category.description.as_deref(), Some("Monthly member dues"));
    }

    #[test]
    fn test_expense_signed_amount_is_negative() {
        let json = r#"{
            "id": "t-1",
            "amount": 25000.0,
            "date": "2024-11-03T10:00:00Z",
            "type": "expense",
            "description": "Road repair",
            "category": "c-1",
            "category_name": "Infrastructure",
            "proof": "https://example.com/receipt.jpg",
            "active": true,
            "created_at": "2024-11-03T10:01:00Z",
            "modified_at": "2024-11-03T10:01:00Z",
            "created_by": "admin",
            "modified_by": "admin"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert!(!transaction.is_income());
        assert_eq!(transaction.signed_amount(), -25000.0);
        assert_eq!(
            transaction.proof.as_deref(),
            Some("https://example.com/receipt.jpg")
        );
    }

    #[test]
    fn test_error_envelope_message() {
        let json = r#"{
            "errors": {
                "amount": ["must be greater than zero"],
                "date": ["is required", "must be RFC 3339"]
            }
        }"#;

        let envelope: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.to_message(),
            "amount: must be greater than zero; date: is required, must be RFC 3339"
        );
    }

    #[test]
    fn test_summary_balance() {
        let json = r#"{"data": {"total_income": 500000.0, "total_expense": 125000.0}}"#;

        let response: SummaryResponse = serde_json::from_str(json).unwrap();
        let summary = response.data.unwrap();
        assert_eq!(summary.balance(), 375000.0);
        assert!(response.paging.is_none());
    }

    #[test]
    fn test_filters_to_query_string() {
        let filters = TransactionFilters {
            transaction_type: Some(TransactionType::Expense),
            active: Some(true),
            page: Some(2),
            limit: Some(10),
            ..Default::default()
        };

        assert_eq!(
            filters.to_query_string(),
            "type=expense&active=true&page=2&limit=10"
        );
    }

    #[test]
    fn test_empty_filters_to_query_string() {
        assert_eq!(TransactionFilters::default().to_query_string(), "");
    }
}
