/// Minimum number of single-character insertions, deletions or substitutions
/// turning `a` into `b`.
///
/// Runs in `O(len(a) * len(b))` time and keeps a single row sized by the
/// shorter input, so memory stays `O(min(len(a), len(b)))`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let (long, short) = if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let short: Vec<char> = short.chars().collect();
    if short.is_empty() {
        return long.chars().count();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.chars().enumerate() {
        // `diag` holds the previous row's value at column j before it is overwritten.
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(lc != sc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
        }
    }

    row[short.len()]
}
