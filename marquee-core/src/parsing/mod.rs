//! Parsers for the textual values found in queries and catalog rows.

pub mod actors;
pub mod duration;
pub mod range;
pub mod votes;

pub use actors::parse_actors;
pub use duration::parse_duration;
pub use range::{Interval, parse_range};
pub use votes::{VotesMode, parse_vote_range, parse_votes};
