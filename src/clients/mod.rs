pub mod analyze_client;

pub use analyze_client::AnalyzeClient;
