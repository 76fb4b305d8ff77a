use crate::model::{Chapter, ChapterDetail, ChapterId, OpId, Snapshot};
use crate::source::SourceError;

/// Read access to the cache server, one method per endpoint.
#[async_trait::async_trait]
pub trait CacheSource: Send + Sync {
    /// GET `/chapters`
    async fn list_chapters(&self) -> Result<Vec<Chapter>, SourceError>;
    /// GET `/chapters/{ch}`
    async fn get_chapter_detail(&self, ch: ChapterId) -> Result<ChapterDetail, SourceError>;
    /// GET `/chapters/{ch}/{op}/snapshot`
    async fn get_snapshot(&self, ch: ChapterId, op: OpId) -> Result<Snapshot, SourceError>;

    /// Where this source reads from, for health reporting and logs
    fn origin(&self) -> String;
}
