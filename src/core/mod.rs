pub mod api;
pub mod cli;
pub mod enrichment;
pub mod paths;
pub mod search_result;
pub mod settings_config;
pub mod view_state;
