//! gemtally-core: sales report parser and aggregator

pub mod gems;
pub mod parser;
pub mod types;

pub use gems::{GEM_MARKER, extract_gems, is_gem_only_line, sum_gems};
pub use parser::{Line, PersonLine, classify_line, parse_report};
pub use types::{GEM_RATE_PER_THOUSAND, ParseResult, PersonRecord};
