//! Command implementations.

pub mod appeal;
pub mod claims;
pub mod config;
pub mod justify;

pub use self::appeal::{execute_appeal, prepare_appeal};
pub use self::claims::execute_claims;
pub use self::config::execute_config;
pub use self::justify::execute_justify;

use crate::error::Result;
use std::fs;
use std::io::{self, Read};

/// Read a whole input file, or stdin when `path` is "-".
pub(crate) fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
