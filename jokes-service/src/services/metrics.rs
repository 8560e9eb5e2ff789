//! Domain metrics for the jokes stream.

use metrics::counter;

/// Record a newly opened stream session.
pub fn record_session_opened() {
    counter!("jokes_stream_sessions_total").increment(1);
}

/// Record a session that emitted its full sequence.
pub fn record_session_completed() {
    counter!("jokes_stream_sessions_completed_total").increment(1);
}
