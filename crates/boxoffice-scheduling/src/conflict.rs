//! Buffered interval-overlap test for auditorium scheduling.

use chrono::Duration;

use boxoffice_core::types::window::TimeWindow;

/// Whether a candidate window collides with an existing booking once
/// the turnaround buffer is applied.
///
/// The existing window is expanded by `buffer` on both sides, then
/// compared with half-open semantics: `a.start < b.end && b.start <
/// a.end`. The buffer is a comparison-time constant; stored windows
/// never include it.
pub fn windows_overlap(candidate: &TimeWindow, existing: &TimeWindow, buffer: Duration) -> bool {
    let expanded_start = existing.start - buffer;
    let expanded_end = existing.end + buffer;
    candidate.start < expanded_end && expanded_start < candidate.end
}
