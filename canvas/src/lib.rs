//! Drawing playground canvas: raster surface, tools, and undo/redo history.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of a playground session: translating raw pointer and key
//! events into surface mutations, keeping a linear snapshot history for
//! undo/redo, previewing shapes while they are dragged, and exporting the
//! surface as PNG. The host layer wires DOM events to the engine and reacts
//! to the returned [`engine::Action`]s. Nothing is persisted; a session lives
//! as long as its [`engine::EngineCore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser [`engine::Engine`] and testable [`engine::EngineCore`] |
//! | [`input`] | Tools, host events, and the gesture state machine |
//! | [`surface`] | RGBA raster buffer, snapshots, and painters |
//! | [`history`] | Linear undo/redo over committed snapshots |
//! | [`style`] | Colours and stroke widths |
//! | [`geom`] | Points and rectangles in surface pixels |
//! | [`export`] | PNG and data-URI export |
//! | [`render`] | Blit and preview overlay on a 2D context |
//! | [`consts`] | Shared defaults (size, colours, width limits) |

pub mod consts;
pub mod engine;
pub mod export;
pub mod geom;
pub mod history;
pub mod input;
pub mod render;
pub mod style;
pub mod surface;
