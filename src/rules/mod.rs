//! Stateless rules for win and draw detection.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{WinningLine, winning_line, WIN_LINES};
