//! Expand `${var}` and `$(include ...)` templates once per row of tabular data.
//!
//! ```text
//! $$              literal `$`
//! ${ ... }        binding lookup; the rendered body, trimmed, is the key
//! $( ... )        command; the rendered body is split into name and arguments
//! $(include p)    inline the rendered file `p`, relative to the including file
//! ```
//!
//! Variables and commands nest freely, and a close delimiter that closes
//! nothing is kept as literal text.

pub mod batch;
pub mod error;
pub mod tpl;

pub use error::{Error, Result};
pub use tpl::engine::{Template, parse};
pub use tpl::render::render;
pub use tpl::render_context::Bindings;
