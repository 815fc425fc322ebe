//! Template-driven password generation and strength measurement.

pub mod charset;
pub mod entropy;
mod generate;
pub mod keyboard;
pub mod template;

pub use charset::{Pool, PoolTable};
pub use entropy::{entropy, pool_entropy, template_entropy};
pub use generate::{generate, generate_batch, generate_one};
pub use keyboard::KeyboardBias;
pub use template::{DEFAULT_TEMPLATE, Template};
