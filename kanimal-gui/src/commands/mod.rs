//! Command implementations for the front-end.

/// One-shot conversion of the files given on the command line.
pub mod convert;
