//! Command implementations.

pub mod config;
pub mod dedup;
pub mod extract;
pub mod prompt;
pub mod solution;
pub mod synthesize;

pub use self::config::execute_config;
pub use self::dedup::execute_dedup;
pub use self::extract::execute_extract;
pub use self::prompt::execute_prompt;
pub use self::solution::execute_solution;
pub use self::synthesize::execute_synthesize;

use crate::error::Result;
use std::fs;
use std::io::{self, Read};

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
