use crate::Record;

/// Smallest and largest key in one pass, `None` for empty input.
#[inline]
pub fn min_max_key(data: &[Record]) -> Option<(u32, u32)> {
    let (first, rest) = data.split_first()?;
    let mut min = first.key;
    let mut max = first.key;
    for record in rest {
        if record.key < min {
            min = record.key;
        }
        if record.key > max {
            max = record.key;
        }
    }
    Some((min, max))
}

#[inline]
pub fn is_sorted_by_key(data: &[Record]) -> bool {
    data.windows(2).all(|w| w[0].key <= w[1].key)
}
