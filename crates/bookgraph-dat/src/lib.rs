//! # bookgraph-dat
//!
//! Stanford GraphBase `.dat` parser for bookgraph - extracts characters and
//! chapter co-occurrence encounters from literary datasets.
//!
//! ## Features
//!
//! - Parse a `.dat` file or an in-memory string into a caller-owned graph
//! - Two line shapes: character definitions and chapter encounters;
//!   everything else is skipped
//! - Fail-loud data integrity: undefined character references abort the
//!   parse with chapter and line context
//! - Safe: No panics, graceful error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use bookgraph::BookGraph;
//! use bookgraph_dat::Parser;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = BookGraph::new();
//! let parser = Parser::new();
//!
//! let source = "AB Alice, the heroine\nCD Carl, her companion\n1.1:AB,CD";
//! let stats = parser.parse_source(source, &mut graph)?;
//!
//! assert_eq!(stats.definitions, 2);
//! assert_eq!(graph.encounter_count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod error;

mod line;
mod parser;

pub use error::{ParseError, Result};
pub use line::{classify, encounter_groups, Line};
pub use parser::{ParseStats, Parser};
