// Domain-specific error types
pub mod errors;

// Quotes and the cleaned quote table
pub mod quote;

// Output views and result document
pub mod report;

// Numeric helpers shared by the aggregators
pub mod stats;
