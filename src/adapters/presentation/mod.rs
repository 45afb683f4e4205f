//! Presentation adapters - Implementations of the RankingPublisher port.

mod in_memory;
mod terminal;

pub use in_memory::{InMemoryRankingPublisher, Published};
pub use terminal::{render_table, TerminalPublisher};
