//! Chunking with the remainder kept at the old end

use super::PaginateError;

/// Split `items` (oldest first) into chunks of `size`.
///
/// The `len % size` oldest items form a short first chunk; every later chunk
/// holds exactly `size` items. Appending to `items` therefore never moves an
/// item between the full chunks, only the leading remainder grows.
///
/// # Examples
/// ```
/// use quietparty::pagination::chunk_with_early_overflow;
///
/// let items: Vec<u32> = (1..=10).collect();
/// let chunks = chunk_with_early_overflow(&items, 7).unwrap();
/// assert_eq!(chunks, vec![&[1, 2, 3][..], &[4, 5, 6, 7, 8, 9, 10][..]]);
/// ```
pub fn chunk_with_early_overflow<T>(
    items: &[T],
    size: usize,
) -> Result<Vec<&[T]>, PaginateError> {
    if size == 0 {
        return Err(PaginateError::InvalidArgument(
            "chunk size must be greater than 0".to_string(),
        ));
    }

    let overflow = items.len() % size;
    let mut chunks = Vec::with_capacity(items.len().div_ceil(size));

    if overflow > 0 {
        chunks.push(&items[..overflow]);
    }
    chunks.extend(items[overflow..].chunks_exact(size));

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    #[test]
    fn test_overflow_chunk_first() {
        let items = numbers(10);
        let chunks = chunk_with_early_overflow(&items, 7).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], &[1, 2, 3]);
        assert_eq!(chunks[1], &[4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_exact_multiple_has_no_overflow() {
        let items = numbers(14);
        let chunks = chunk_with_early_overflow(&items, 7).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(chunks[1], &[8, 9, 10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u32> = Vec::new();
        assert!(chunk_with_early_overflow(&items, 7).unwrap().is_empty());
    }

    #[test]
    fn test_zero_size_rejected() {
        let items = numbers(3);
        assert!(matches!(
            chunk_with_early_overflow(&items, 0),
            Err(PaginateError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_single_chunk_cases() {
        let items = numbers(5);
        assert_eq!(chunk_with_early_overflow(&items, 5).unwrap(), vec![&items[..]]);
        assert_eq!(chunk_with_early_overflow(&items, 9).unwrap(), vec![&items[..]]);
    }

    #[test]
    fn test_partition_properties() {
        for size in 1..=9 {
            for n in 0..=40 {
                let items = numbers(n);
                let chunks = chunk_with_early_overflow(&items, size).unwrap();

                let flattened: Vec<u32> = chunks.iter().flat_map(|c| c.iter().copied()).collect();
                assert_eq!(flattened, items, "n={} size={}", n, size);
                assert_eq!(chunks.len(), (n as usize).div_ceil(size));

                for (i, chunk) in chunks.iter().enumerate() {
                    let overflow = n as usize % size;
                    if i == 0 && overflow > 0 {
                        assert_eq!(chunk.len(), overflow);
                    } else {
                        assert_eq!(chunk.len(), size);
                    }
                }
            }
        }
    }

    #[test]
    fn test_chunks_survive_appending_a_full_page() {
        let size = 4;
        let before = numbers(9);
        let after = numbers(13);

        let old = chunk_with_early_overflow(&before, size).unwrap();
        let new = chunk_with_early_overflow(&after, size).unwrap();

        assert_eq!(new.len(), old.len() + 1);
        assert_eq!(&new[..old.len()], &old[..]);
        assert_eq!(new[old.len()], &[10, 11, 12, 13]);
    }
}
