use async_trait::async_trait;

use crate::{HeadlineQuery, RawHeadlines, Result};

/// Source of top headlines for a country/category pair.
///
/// Implementations make exactly one outbound call per invocation and return
/// non-success upstream statuses as data rather than errors, so callers
/// decide how to surface them. `Err` is reserved for transport failures.
#[async_trait]
pub trait HeadlineProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn top_headlines(&self, query: &HeadlineQuery) -> Result<RawHeadlines>;
}
