//! Route loaders: run a route's layout loads and page action against a
//! `CacheSource`.
//!
//! All requests of one navigation are issued concurrently inside the caller's
//! future. The first failure drops the sibling requests, and dropping the
//! future (the browser went away) drops every request still in flight.

use crate::model::{Chapter, ChapterDetail, ChapterId, OpId, Snapshot};
use crate::routing::{Endpoint, PageAction, Route};
use crate::source::{CacheSource, SourceError};
use serde::Serialize;
use std::future::Future;

/// Data the layouts above a route expose to its page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutData {
    pub chapters: Vec<Chapter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_details: Option<ChapterDetail>,
}

/// Everything the `/{ch}/{op}` page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageData {
    pub ch: ChapterId,
    pub op: OpId,
    pub chapters: Vec<Chapter>,
    pub chapter_details: ChapterDetail,
    pub cache_state: Snapshot,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    Redirect { to: Route, layout: LayoutData },
    Page(PageData),
}

#[derive(Debug, thiserror::Error)]
#[error("failed to load {endpoint}: {source}")]
pub struct LoadError {
    pub endpoint: Endpoint,
    #[source]
    pub source: SourceError,
}

async fn tagged<T>(
    endpoint: Endpoint,
    request: impl Future<Output = Result<T, SourceError>>,
) -> Result<T, LoadError> {
    request.await.map_err(|source| {
        let err = LoadError { endpoint, source };
        log::warn!("{} ({})", err, err.source.kind());
        err
    })
}

/// Run the layout loads in effect at a chapter level (or the root, for `None`).
pub async fn load_layout<S: CacheSource + ?Sized>(
    source: &S,
    ch: Option<ChapterId>,
) -> Result<LayoutData, LoadError> {
    let chapters = tagged(Endpoint::Chapters, source.list_chapters());

    match ch {
        None => Ok(LayoutData {
            chapters: chapters.await?,
            chapter_details: None,
        }),
        Some(ch) => {
            let details = tagged(
                Endpoint::ChapterDetail { ch },
                source.get_chapter_detail(ch),
            );
            let (chapters, details) = tokio::try_join!(chapters, details)?;
            Ok(LayoutData {
                chapters,
                chapter_details: Some(details),
            })
        }
    }
}

/// Load a route. Index routes come back as `Loaded::Redirect` once their
/// layouts loaded; `/{ch}/{op}` comes back as `Loaded::Page`.
pub async fn load<S: CacheSource + ?Sized>(source: &S, route: Route) -> Result<Loaded, LoadError> {
    let result = match route.page() {
        PageAction::Redirect(to) => load_layout(source, route.chapter())
            .await
            .map(|layout| Loaded::Redirect { to, layout }),
        PageAction::Fetch { ch, op } => load_page(source, ch, op).await.map(Loaded::Page),
    };

    match &result {
        Ok(Loaded::Redirect { to, .. }) => log::debug!("{} redirects to {}", route, to),
        Ok(Loaded::Page(data)) => log::debug!(
            "{} loaded {} cache entries",
            route,
            data.cache_state.len()
        ),
        // Failures were logged as they happened
        Err(_) => {}
    }

    result
}

/// Load the `/{ch}/{op}` page: both layouts and the snapshot.
pub async fn load_page<S: CacheSource + ?Sized>(
    source: &S,
    ch: ChapterId,
    op: OpId,
) -> Result<PageData, LoadError> {
    let chapters = tagged(Endpoint::Chapters, source.list_chapters());
    let details = tagged(
        Endpoint::ChapterDetail { ch },
        source.get_chapter_detail(ch),
    );
    let snapshot = tagged(Endpoint::Snapshot { ch, op }, source.get_snapshot(ch, op));
    let (chapters, chapter_details, cache_state) = tokio::try_join!(chapters, details, snapshot)?;

    Ok(PageData {
        ch,
        op,
        chapters,
        chapter_details,
        cache_state,
    })
}
