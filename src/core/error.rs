//! The typed error carried at the protocol boundary (spec.md §7).
//!
//! Internal engine functions (`play_move`, `generate_moves`, the search) are
//! total on well-formed positions and never return a `Result`. Only the
//! `ltp_server` layer deals in errors, and it needs to distinguish a small,
//! fixed set of categories when it renders the tagged `error` wire response —
//! this type is how that category survives a trip through `anyhow::Error`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorKind {
    InvalidDepth,
    DepthTooLarge,
    ParseFailure,
}

impl EngineErrorKind {
    /// The wire category/sub-category pair from spec.md §6's
    /// `("error", <category>, <sub-category>, ...)` response.
    pub fn wire_parts(&self) -> (&'static str, &'static str) {
        match self {
            EngineErrorKind::InvalidDepth => ("input", "invalid-depth"),
            EngineErrorKind::DepthTooLarge => ("input", "depth-too-large"),
            EngineErrorKind::ParseFailure => ("input", "parse-failure"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineError {
    pub kind: EngineErrorKind,
    pub detail: String,
}

impl EngineError {
    pub fn new(kind: EngineErrorKind, detail: impl Into<String>) -> EngineError {
        EngineError { kind, detail: detail.into() }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (category, sub_category) = self.kind.wire_parts();
        write!(f, "{category}/{sub_category}: {}", self.detail)
    }
}

impl std::error::Error for EngineError {}
