pub mod citation_frequency;
pub mod product_code;
pub mod recency;
pub mod regulatory_history;
pub mod section_context;
