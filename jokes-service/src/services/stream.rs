//! The emission stream behind `/api/jokes/stream`.

use crate::models::JokeCatalog;
use crate::services::metrics;
use futures::Stream;
use std::time::Duration;

/// Lazily emit each catalog message in definition order.
///
/// The session owns nothing but its cursor (the generator's position in the
/// catalog), so concurrent sessions never touch each other's state. The
/// pause runs between consecutive messages only: the first message goes out
/// immediately and the stream ends right after the last one. Dropping the
/// stream mid-pause abandons the session; there is no cleanup to do.
pub fn joke_stream(catalog: JokeCatalog, interval: Duration) -> impl Stream<Item = String> {
    async_stream::stream! {
        for (cursor, joke) in catalog.iter().enumerate() {
            if cursor > 0 {
                tokio::time::sleep(interval).await;
            }
            yield joke.to_string();
        }
        metrics::record_session_completed();
    }
}
