//! Benchmark-only crate; see `benches/` for the criterion suites.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
