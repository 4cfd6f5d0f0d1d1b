use crate::types::{DateRange, Timestamped};

/// Select records whose timestamp falls inside `range`, bounds inclusive
///
/// Without an active bound every record is returned, including undated ones.
/// Once any bound parses, records with a missing or unparseable `ts` are
/// dropped. Order is preserved and the input is never touched.
pub fn filter_events_by_date<'a, T>(records: &'a [T], range: Option<&DateRange>) -> Vec<&'a T>
where
    T: Timestamped,
{
    let (start, end) = range
        .map(DateRange::active_bounds)
        .unwrap_or((None, None));

    if start.is_none() && end.is_none() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| {
            let Some(at) = record.timestamp().and_then(|ts| ts.to_instant()) else {
                return false;
            };
            start.is_none_or(|start| at >= start) && end.is_none_or(|end| at <= end)
        })
        .collect()
}
