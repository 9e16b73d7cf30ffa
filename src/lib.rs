//! # fogbind
//!
//! Binds a single JSON content document into a set of static HTML page
//! shells. The shells are complete, styled pages with placeholder copy; the
//! content document supplies the real copy, lists and links. Binding replaces
//! text in existing anchors and regenerates the children of list containers.
//! It never invents new structure beyond the repeated items themselves.
//!
//! # Architecture
//!
//! ```text
//! location ─► page::resolve ─► PageIdentity ─┐
//!                                            ├─► bind::bind_page(dom) ─► BindReport
//! source ─► loader::load ─► ContentDocument ─┘
//! ```
//!
//! [`engine::run`] ties the three together for one page. [`site`] runs the
//! engine over every shell in a directory, in parallel, and writes the result.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Typed content document; every field tolerates absence and bad shapes |
//! | [`page`] | Location path → page identity |
//! | [`loader`] | `ContentSource` fetch capability, single fail-soft load |
//! | [`dom`] | Parsed shell with anchor lookup and mutation primitives |
//! | [`fragments`] | Maud templates for repeated records, link sanitizing |
//! | [`bind`] | Section binders, the guard policy, and the per-anchor report |
//! | [`engine`] | One page load: resolve, load, bind |
//! | [`site`] | Directory build and check over all shells |
//! | [`config`] | `config.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Skips Are Not Errors
//!
//! A shell that lacks an anchor, or a document that lacks a field, is a normal
//! situation: the page keeps its static markup for that spot. Binders record a
//! skip in the [`bind::BindReport`] and move on. Only failing to obtain the
//! document at all is logged as an error, and even then the page is left as
//! it was.
//!
//! ## Typed, Lenient Content
//!
//! The document is deserialized into typed structs, but each optional field
//! is a [`content::Slot`] that distinguishes "missing" from "present but the
//! wrong shape". A malformed subtree degrades to a skip for its binders and
//! does not poison its siblings.
//!
//! ## Escaped Fragments
//!
//! Every generated fragment goes through [Maud](https://maud.lambda.xyz/), so
//! content strings are escaped at render time, and link targets are checked
//! for script-bearing schemes. Scalar bindings set text nodes, never markup.

pub mod bind;
pub mod config;
pub mod content;
pub mod dom;
pub mod engine;
pub mod fragments;
pub mod loader;
pub mod output;
pub mod page;
pub mod site;

#[cfg(test)]
pub(crate) mod test_helpers;
