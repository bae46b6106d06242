pub mod use_categories;
pub mod use_layout;
pub mod use_summary;
pub mod use_transactions;
