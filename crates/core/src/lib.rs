// crates/core/src/lib.rs
//! Line concatenation core for `catter`.
//!
//! ```
//! use catter_core::{Catter, Source};
//! use std::io::Cursor;
//!
//! let source = Source::from_reader("doc", Cursor::new("hello\nworld\n"));
//! let mut out = Vec::new();
//! Catter::new(vec![source], true).run(&mut out).unwrap();
//! assert_eq!(out, b"     0  hello\n     1  world\n");
//! ```

pub mod catter;
pub mod error;
pub mod source;

pub use catter::{Catter, NUMBER_WIDTH, format_numbered};
pub use error::{CatError, Result};
pub use source::Source;
