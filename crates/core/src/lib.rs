//! Core library for codeshift
//!
//! This crate implements the **Functional Core** of the codeshift application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! - **`codeshift_core`** (this crate): pure transformation functions with zero I/O
//! - **`codeshift`**: I/O operations and orchestration (the Imperative Shell)
//!
//! All functions in this crate are deterministic and side-effect free, so they can
//! be tested with simple fixture data and no mocking.
//!
//! # Module Organization
//!
//! - [`catalog`]: the fixed enumeration of supported languages and their extensions
//! - [`extract`]: extraction of source code from free-form model responses
//! - [`job`]: the per-file translation job description
//! - [`paths`]: output path computation under the target language's extension
//! - [`prompt`]: prompt and system-message construction for both conversation roles
//! - [`text`]: byte-to-text decoding with a permissive fallback encoding

pub mod catalog;
pub mod extract;
pub mod job;
pub mod paths;
pub mod prompt;
pub mod text;

pub use catalog::Language;
pub use extract::extract_code;
pub use job::TranslationJob;
