//! Diamond traversal of the loaded world region.

/// Enumerate every column with `|x| + |z| <= radius`.
///
/// Four quadrant passes tile the diamond exactly once, with no overlap and
/// no gap; the origin is covered by the first pass. Visitation
/// order only affects emission sequencing (useful for progressive loading),
/// never the column values, since every column is computed independently.
pub fn columns(radius: i32) -> impl Iterator<Item = (i32, i32)> {
    // Q1: x in [0, R], z in [0, R - x]
    let q1 = (0..=radius).flat_map(move |x| (0..=radius - x).map(move |z| (x, z)));
    // Q2: x in [0, R], z in [-(R - x), -1], scanned outward from -1
    let q2 = (0..=radius).flat_map(move |x| (1..=radius - x).map(move |z| (x, -z)));
    // Q3: x in [-R, -1], z in [-(R + x), 0], scanned outward from 0
    let q3 = (1..=radius).flat_map(move |x| (0..=radius - x).map(move |z| (-x, -z)));
    // Q4: x in [-R, -1], z in [1, R + x]
    let q4 = (1..=radius).flat_map(move |x| (1..=radius - x).map(move |z| (-x, z)));

    q1.chain(q2).chain(q3).chain(q4)
}
