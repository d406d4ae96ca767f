pub mod duckduckgo;

pub use duckduckgo::DuckDuckGoSearchTool;
