//! Expose mdmeta's internal API for use in unit testing. While it *could* be
//! useful, we do not recommend using this API in production code; depend on
//! `mdmeta-extract` instead.
pub mod cli;
pub mod config;
pub mod report;
pub mod scan;
