pub mod completer;
pub mod locate;
pub mod matcher;

pub use completer::CompletionCoordinator;
pub use locate::{MatchSpan, find_match_span};
pub use matcher::{INVALID_SCORE, Penalties, Side, StringMatcher, Typo};
