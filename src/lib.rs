//! Workspace root package. Holds the rusty-hook pre-commit configuration; the
//! library and CLI live under `crates/`.
