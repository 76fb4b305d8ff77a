//! Browser-facing route table.
//!
//! Three levels: `/`, `/{ch}` and `/{ch}/{op}`. The first two are index pages
//! that redirect one level down; only `/{ch}/{op}` renders. Each level also
//! contributes a layout load whose data every page below it receives.

use crate::model::{ChapterId, OpId};
use std::fmt;

pub const DEFAULT_CHAPTER: ChapterId = 0;
pub const DEFAULT_OP: OpId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Chapter { ch: ChapterId },
    Op { ch: ChapterId, op: OpId },
}

/// A cache server endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Chapters,
    ChapterDetail { ch: ChapterId },
    Snapshot { ch: ChapterId, op: OpId },
}

/// What the page at a route does once its layouts are loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// 303 See Other to a more specific route
    Redirect(Route),
    /// Fetch the snapshot at (ch, op) and render it
    Fetch { ch: ChapterId, op: OpId },
}

/// Parse a path segment as an id. Only plain ASCII digits are accepted, so
/// `+1`, `01x` or the empty segment name no page.
pub fn parse_id(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl Route {
    pub fn parse(path: &str) -> Option<Route> {
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Some(Route::Root),
            [ch] => Some(Route::Chapter { ch: parse_id(ch)? }),
            [ch, op] => Some(Route::Op {
                ch: parse_id(ch)?,
                op: parse_id(op)?,
            }),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Chapter { ch } => format!("/{}", ch),
            Route::Op { ch, op } => format!("/{}/{}", ch, op),
        }
    }

    /// The chapter whose layout is in effect, if any. The root layout always is.
    pub fn chapter(&self) -> Option<ChapterId> {
        match self {
            Route::Root => None,
            Route::Chapter { ch } | Route::Op { ch, .. } => Some(*ch),
        }
    }

    pub fn page(&self) -> PageAction {
        match *self {
            Route::Root => PageAction::Redirect(Route::Op {
                ch: DEFAULT_CHAPTER,
                op: DEFAULT_OP,
            }),
            Route::Chapter { ch } => PageAction::Redirect(Route::Op { ch, op: DEFAULT_OP }),
            Route::Op { ch, op } => PageAction::Fetch { ch, op },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Chapters => "/chapters".to_string(),
            Endpoint::ChapterDetail { ch } => format!("/chapters/{}", ch),
            Endpoint::Snapshot { ch, op } => format!("/chapters/{}/{}/snapshot", ch, op),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
