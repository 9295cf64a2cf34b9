//! Annotation engine for the transient drawing layer.
//!
//! This crate is compiled to WebAssembly and runs in the browser on top of a
//! canvas the host mounts over other content. It owns the full lifecycle of a
//! drawing session: translating pointer and keyboard input into shapes,
//! keeping an undo/redo history of snapshots, erasing by hit-test, and drawing
//! the result. The host is responsible only for wiring DOM events to the
//! engine, supplying the toolbar's [`input::ToolSettings`], and exporting the
//! rendered canvas when the user is done.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Shape variants and the ordered [`doc::Drawing`] |
//! | [`history`] | Snapshot stack behind undo/redo |
//! | [`input`] | Tool settings, keys, and the gesture state machine |
//! | [`hit`] | Per-shape hit-testing and the erase dispatcher |
//! | [`geometry`] | Points and distance predicates |
//! | [`render`] | Scene rendering onto a 2D surface |
//! | [`config`] | Tunables (erase tolerance, arrowheads, text metrics) |
//! | [`consts`] | Shared numeric defaults |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod history;
pub mod hit;
pub mod input;
pub mod render;
