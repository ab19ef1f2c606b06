// Views derived from the cleaned table
pub mod aggregation;

// Merges views with static blocks
pub mod assembler;

// CSV ingestion and cleaning
pub mod loader;

// End-to-end batch run
pub mod pipeline;
