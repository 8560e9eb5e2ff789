use crate::services::{joke_stream, metrics};
use crate::startup::AppState;
use axum::extract::State;
use axum::response::sse::{Event, Sse};
use futures::{Stream, StreamExt};
use std::convert::Infallible;

/// `GET /api/jokes/stream`
///
/// Opens a fresh emission session: every catalog message is sent as one
/// `data: <text>\n\n` frame, with the configured pause between frames, and
/// the connection closes after the last one. No keep-alive comments are
/// sent, so the body is exactly the data frames. A client that reconnects
/// starts over from the first message.
pub async fn stream_jokes(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    metrics::record_session_opened();
    tracing::debug!(messages = state.catalog.len(), "stream session opened");

    let stream = joke_stream(state.catalog.clone(), state.interval)
        .map(|joke| Ok::<_, Infallible>(Event::default().data(joke)));

    Sse::new(stream)
}
