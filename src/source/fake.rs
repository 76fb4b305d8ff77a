use crate::model::{Chapter, ChapterDetail, ChapterId, OpHead, OpId, Snapshot};
use crate::routing::Endpoint;
use crate::source::{CacheSource, SourceError};
use parking_lot::Mutex;
use std::collections::HashMap;

/// In-memory `CacheSource` that records every request it serves.
#[derive(Default)]
pub struct FakeSource {
    pub chapters: Vec<Chapter>,
    pub details: HashMap<ChapterId, ChapterDetail>,
    pub snapshots: HashMap<(ChapterId, OpId), Snapshot>,
    pub unreachable: bool,
    requests: Mutex<Vec<Endpoint>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a chapter with `op_count` plain ops and an empty snapshot per op.
    pub fn with_chapter(mut self, id: ChapterId, op_count: u64) -> Self {
        let head = Chapter {
            id,
            data: format!("chapter-{}", id),
            fingerprint: format!("fp-{}", id),
        };
        let ops = (0..op_count)
            .map(|op| OpHead {
                id: op,
                desc: format!("Pull key{}", op),
                is_comment: false,
            })
            .collect();
        for op in 0..op_count {
            self.snapshots.insert((id, op), Snapshot::default());
        }
        self.chapters.push(head.clone());
        self.details.insert(id, ChapterDetail { head, ops });
        self
    }

    pub fn with_snapshot(mut self, ch: ChapterId, op: OpId, snapshot: Snapshot) -> Self {
        self.snapshots.insert((ch, op), snapshot);
        self
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<Endpoint> {
        self.requests.lock().clone()
    }

    pub fn count(&self, endpoint: Endpoint) -> usize {
        self.requests.lock().iter().filter(|e| **e == endpoint).count()
    }

    fn record(&self, endpoint: Endpoint) -> Result<(), SourceError> {
        self.requests.lock().push(endpoint);
        if self.unreachable {
            return Err(SourceError::Unreachable {
                url: format!("fake://{}", endpoint.path()),
                reason: "connection refused".to_string(),
            });
        }
        Ok(())
    }

    fn not_found(endpoint: Endpoint) -> SourceError {
        SourceError::NotFound {
            url: format!("fake://{}", endpoint.path()),
        }
    }
}

#[async_trait::async_trait]
impl CacheSource for FakeSource {
    async fn list_chapters(&self) -> Result<Vec<Chapter>, SourceError> {
        self.record(Endpoint::Chapters)?;
        Ok(self.chapters.clone())
    }

    async fn get_chapter_detail(&self, ch: ChapterId) -> Result<ChapterDetail, SourceError> {
        let endpoint = Endpoint::ChapterDetail { ch };
        self.record(endpoint)?;
        self.details
            .get(&ch)
            .cloned()
            .ok_or_else(|| Self::not_found(endpoint))
    }

    async fn get_snapshot(&self, ch: ChapterId, op: OpId) -> Result<Snapshot, SourceError> {
        let endpoint = Endpoint::Snapshot { ch, op };
        self.record(endpoint)?;
        self.snapshots
            .get(&(ch, op))
            .cloned()
            .ok_or_else(|| Self::not_found(endpoint))
    }

    fn origin(&self) -> String {
        "fake://".to_string()
    }
}
