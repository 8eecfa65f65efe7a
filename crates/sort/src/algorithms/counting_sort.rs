use vector::Vector;

use crate::Record;

use super::common;

/// Stable counting sort by `Record::key`.
///
/// The histogram holds one `u32` counter per key in `min..=max`, so memory
/// follows the key spread rather than the input length; a spread close to
/// `u32::MAX` allocates close to 2^32 counters. `data` is only replaced once
/// the output is complete.
pub fn sort(data: &mut Vector<Record>) {
    let Some((min, max)) = common::min_max_key(data) else {
        return;
    };

    let range = (max - min) as usize + 1;
    let mut counts = Vector::from_elem(range, 0_u32);
    let mut output = Vector::from_elem(data.len(), Record::default());

    for record in data.iter() {
        counts[(record.key - min) as usize] += 1;
    }

    let mut running = 0_u32;
    for count in counts.iter_mut() {
        running += *count;
        *count = running;
    }

    // Reverse scan, place, then decrement: the last record of a key group
    // takes the highest slot of that group, which keeps equal keys in input order.
    for record in data.iter().rev() {
        let idx = (record.key - min) as usize;
        let slot = counts[idx] - 1;
        output[slot as usize] = *record;
        counts[idx] -= 1;
    }

    data.move_from(&mut output);
}
