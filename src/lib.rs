// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires these modules together.
//
// Module responsibilities:
// - `cli`: clap definitions for the argument surface.
// - `input`: pure validation and canonicalization of user-supplied
//   dates and graph colors.
// - `request`: builds `{method, url, headers, body}` descriptors for
//   each pixe.la operation; performs no I/O.
// - `api`: the `Transport` trait plus the blocking reqwest client that
//   implements it.
// - `dispatch`: routes a parsed action to the right validator/builder
//   pair and enforces per-action required flags.
// - `report`: turns a wire response into user-facing output.
// - `ui`: interactive prompts for graph unit and color.
//
// Keeping the pure layers (`input`, `request`, `dispatch`, `report`)
// separate from console and network I/O makes them testable with a
// recording transport double instead of a live service.
pub mod api;
pub mod cli;
pub mod dispatch;
pub mod input;
pub mod report;
pub mod request;
pub mod ui;
