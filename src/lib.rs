//! # bonafide
//!
//! Interactive generator for one-page bonafide certificate PDFs.
//!
//! Running the binary asks for eight student-record fields on the terminal,
//! re-prompting until each one passes validation, then renders the
//! certificate to `bonafide_certificate.pdf` in the working directory. The
//! logo asset (`logo.png`) and a TTF font family must be present at render
//! time; see the README for the font search order.
//!
//! ## Modules
//!
//! - `collect` - Interactive prompt loop that gathers and validates the record
//! - `compose` - Certificate text derivation and PDF assembly
//! - `config` - Fixed institution text, asset paths, and layout constants
//! - `error` - Crate error type and `Result` alias
//! - `record` - The validated certificate record
//! - `validate` - Pure per-field predicates

pub mod collect;
pub mod compose;
pub mod config;
pub mod error;
pub mod record;
pub mod validate;
