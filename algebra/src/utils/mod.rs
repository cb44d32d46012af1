//! Small helpers shared by the transform tables.

/// Reverses the lowest `bits` bits of `value`.
///
/// ```plain
/// normal order:        0  1  2  3  4  5  6  7
/// bit-reversed order:  0  4  2  6  1  5  3  7
/// ```
#[inline]
pub fn reverse_lsbs(value: usize, bits: u32) -> usize {
    if bits == 0 {
        0
    } else {
        value.reverse_bits() >> (usize::BITS - bits)
    }
}

/// Permutes `values` into bit-reversed order using a precomputed index table.
#[inline]
pub fn bit_reverse_permute<T>(values: &mut [T], reverse_lsbs: &[usize]) {
    debug_assert_eq!(values.len(), reverse_lsbs.len());
    for (i, &j) in reverse_lsbs.iter().enumerate() {
        if i < j {
            values.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_lsbs() {
        let order: Vec<usize> = (0..8).map(|i| reverse_lsbs(i, 3)).collect();
        assert_eq!(order, [0, 4, 2, 6, 1, 5, 3, 7]);
        assert_eq!(reverse_lsbs(0, 0), 0);
    }
}
