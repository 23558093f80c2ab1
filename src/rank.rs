use crate::schema::Record;

/// Number of records a report keeps.
pub const TOP_N: usize = 3;

/// Order `records` and keep the first `limit`.
///
/// Two stable passes: points descending, then division ascending. Within a
/// division the points order of the first pass survives, and records equal on
/// both keys keep their input order.
pub fn rank_top(mut records: Vec<Record>, limit: usize) -> Vec<Record> {
    records.sort_by(|a, b| b.points.cmp(&a.points));
    records.sort_by_key(|r| r.division);
    records.truncate(limit);
    records
}

/// [`rank_top`] with the report's fixed limit.
pub fn rank(records: Vec<Record>) -> Vec<Record> {
    rank_top(records, TOP_N)
}
