//! Lossless tokenizer, editor, and serializer for xbps-src template
//! files.
//!
//! A template is decomposed into an ordered sequence of typed
//! fragments (whitespace, comments, `key=value` assignments, and
//! shell-style function blocks). Edits touch only the fragments they
//! target, so everything else (formatting, comments, ordering,
//! duplicate assignments) serializes back byte for byte.
//!
//! # Quick start
//!
//! ## Parse, edit, and re-serialize a template
//!
//! ```
//! use xbps_template_rs::{serialize, tokenize};
//!
//! let input = "# Template file for 'foo'\npkgname=foo\nversion=1.0\nrevision=1\n";
//! let mut tokenized = tokenize(input);
//! assert!(tokenized.rest.is_empty());
//!
//! tokenized.document.set("version", "1.1", None);
//! let output = serialize(&tokenized.document);
//! assert_eq!(output, "# Template file for 'foo'\npkgname=foo\nversion=1.1\nrevision=1\n");
//! ```
//!
//! ## Expand variable references
//!
//! ```
//! use xbps_template_rs::tokenize_full;
//!
//! let document = tokenize_full("pkgname=foo\nversion=1.0\nwrksrc=${pkgname}-${version}\n")
//!     .expect("template should tokenize");
//! assert_eq!(document.get_expanded("wrksrc").as_deref(), Some("foo-1.0"));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod document;
pub mod expand;
pub mod fragment;
pub mod serializer;
pub mod tokenizer;

pub use document::Document;
pub use fragment::Fragment;
pub use serializer::serialize;
pub use tokenizer::{TokenizeError, Tokenized, tokenize, tokenize_full};
