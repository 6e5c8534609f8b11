mod mymemory_client;
mod script_range_detector;

pub use mymemory_client::MyMemoryClient;
pub use script_range_detector::ScriptRangeDetector;
