pub mod alternatives_writer;
pub mod block_locator;
pub mod warn_writer;

pub use alternatives_writer::{render_alternatives, Layout};
pub use block_locator::{BlockLocator, BlockMatch};
pub use warn_writer::WarnWriter;
