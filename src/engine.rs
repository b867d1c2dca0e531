//! Detection engine.
//!
//! This module is the internal entry point used by `api.rs`. It is split into
//! focused submodules under `src/engine/` while the public path stays
//! `crate::engine::Detector`.
//!
//! ## How the parts work together
//!
//! Classifying a User-Agent is a short, fixed pipeline:
//!
//! ```text
//! browser rules (rules/browser, precedence order) ──┐
//!                                                    │
//! input ── UaText::new (lowercased once) ────────────┼─ Detector::new
//!                                                    v
//!                            browser stage (detector.rs)
//!                              - is_active gate per rule (trigger.rs)
//!                              - first Some(BrowserMatch) wins
//!                                                    │
//!                                                    v
//!                            platform stage (rules/platform)
//!                              - first matching token row
//!                              - WOW64/Win64, Windows version
//!                                                    │
//!                                                    v
//!                            cobrand stage (rules/cobrand)
//!                                                    │
//!                                                    v
//!                       DetectionBuilder::build (builder.rs) -> Detection
//! ```
//!
//! Unlike a parser there is no search: each stage is a single ordered scan and
//! the first hit decides. The order of the browser chain is therefore the
//! classification policy, and `rule_names()` exposes it so tests can pin it.
//!
//! ## Responsibilities by module
//!
//! - `detector.rs`: runs the stages, collects metrics, emits `tracing` events.
//! - `trigger.rs`: cheap substring gate that skips rules which cannot match.
//! - `builder.rs`: the per-call accumulator frozen into a `Detection`.
//! - `metrics.rs`: timing and rule counters for `detect_verbose`.
//!
//! ## Adding a browser
//!
//! Write the rule in `src/rules/browser/rules.rs`, give it triggers that are a
//! necessary condition for its production, and place it in `get()` before any
//! rule that would otherwise claim its UAs (most importantly `safari` and the
//! `mozilla` catch-all). Add table cases in `rules/browser/tests.rs`.

#[path = "engine/builder.rs"]
mod builder;
#[path = "engine/detector.rs"]
mod detector;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/trigger.rs"]
mod trigger;

pub use detector::Detector;
