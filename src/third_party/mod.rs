pub mod gold_api;
