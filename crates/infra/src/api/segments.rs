//! Customer segments (read-only)

use std::sync::Arc;

use futures::Stream;
use reqwest::Method;
use squarely_domain::{Page, Segment};
use tracing::instrument;

use super::errors::ApiError;
use super::pagination::paginate;
use crate::http::{Route, Transport};

/// Client for `/v2/customers/segments`
#[derive(Debug, Clone)]
pub struct SegmentsClient {
    transport: Arc<Transport>,
}

impl SegmentsClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, cursor: Option<&str>) -> Result<Page<Segment>, ApiError> {
        let query: Vec<(&str, String)> =
            cursor.map(|cursor| ("cursor", cursor.to_string())).into_iter().collect();

        self.transport
            .send(Method::GET, &Route::fixed("customers/segments"), &query, None)
            .await?
            .into_page("segments")
    }

    pub fn list_all(&self) -> impl Stream<Item = Result<Segment, ApiError>> + Send + 'static {
        let client = self.clone();
        paginate(None, move |cursor| {
            let client = client.clone();
            async move { client.list(cursor.as_deref()).await }
        })
    }

    #[instrument(skip(self))]
    pub async fn retrieve(&self, segment_id: &str) -> Result<Segment, ApiError> {
        let route = Route::format("customers/segments/{segment_id}", &[("segment_id", segment_id)])?;
        self.transport.send(Method::GET, &route, &[], None).await?.into_record("segment")
    }
}
