mod args;

pub use args::{Cli, normalize_args};
