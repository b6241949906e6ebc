//! TIN formats, ABN checksum, and validation.
//!
//! This module has no I/O of its own: the ABN registry is reached through
//! the [`AbnLookup`] trait.

mod abn;
mod error;
mod formats;
mod result;
mod template;
mod validator;

pub use abn::*;
pub use error::*;
pub use formats::*;
pub use result::*;
pub use template::{Template, TemplateToken};
pub use validator::*;
