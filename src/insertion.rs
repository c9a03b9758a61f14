/// Sorts `v` in place with a shift based insertion sort.
///
/// Stable. *O*(*n*^2) worst-case, but *O*(*n* + *d*) where *d* is the number of inversions, which
/// makes it the right finisher for inputs in which every element is already close to its sorted
/// position.
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    for tail in 1..v.len() {
        insert_tail(&mut v[..=tail]);
    }
}

/// Moves the last element of `v` left until it is no longer less than its predecessor, assuming
/// `v[..v.len() - 1]` is sorted.
fn insert_tail<T: Ord>(v: &mut [T]) {
    let tail = v.len() - 1;
    let mut gap = tail;

    // Strict comparison keeps equal elements in their original order.
    while gap > 0 && v[tail] < v[gap - 1] {
        gap -= 1;
    }

    // Shift `v[gap..tail]` one slot right and drop the key into the gap.
    v[gap..].rotate_right(1);
}
