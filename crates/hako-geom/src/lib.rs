#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = r"Geometry primitives for Hako.

This crate provides the axis-aligned rectangle (`Rect`) used across the
framework for bounding areas, layout, and hit-testing. It layers on the
vector types from `hako-math`.

Design notes:
- Pure value types; every query is a pure function of the fields.
- Overlap semantics are inclusive on edges, so rectangles that merely touch
  still count as intersecting.
- Disjoint intersection queries return the canonical zero rectangle rather
  than an error; callers that need to tell 'no overlap' from 'overlap at
  the origin' check `intersects` first.
"]

pub mod rect;

pub use rect::Rect;
