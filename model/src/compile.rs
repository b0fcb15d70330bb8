use crate::segment::{cumulative_triple, error_line, labeled_pair};
use crate::{RenderableSegment, RouteError, RouteSequence};

/// Every segment of the route at once, without elapsed-time labels. For `n >= 2` records, this
/// is `3 * (n - 1) + 1` segments: per pair, the actual line, predicted line, and error line at the
/// first record; then the error line at the final record. Empty for fewer than 2 records.
pub fn compile_total(route: &RouteSequence) -> Vec<RenderableSegment> {
    if !route.has_segments() {
        return Vec::new();
    }
    let records = route.records();

    let mut segments = Vec::with_capacity(3 * (records.len() - 1) + 1);
    for pair in records.windows(2) {
        segments.extend(cumulative_triple(&pair[0], &pair[1]));
    }
    // The last record has no successor, but still has an error
    if let Some(last) = records.last() {
        segments.push(error_line(last));
    }
    segments
}

/// The labeled actual and predicted lines between records `idx` and `idx + 1`. Empty for fewer
/// than 2 records.
pub fn compile_single(
    route: &RouteSequence,
    idx: usize,
) -> Result<Vec<RenderableSegment>, RouteError> {
    let max = match route.last_segment_index() {
        Some(max) => max,
        None => return Ok(Vec::new()),
    };
    if idx > max {
        return Err(RouteError::OutOfRange { index: idx, max });
    }
    let records = route.records();
    Ok(labeled_pair(&records[idx], &records[idx + 1]).to_vec())
}
