//! Circular index arithmetic over a fixed collection size

use crate::error::{GalleryError, Result};

/// Index after `index` in a collection of `total` items, wrapping to the first.
pub fn advance(index: usize, total: usize) -> Result<usize> {
    if total == 0 {
        return Err(GalleryError::DegenerateCollection);
    }
    Ok((index % total + 1) % total)
}

/// Index before `index` in a collection of `total` items, wrapping to the last.
pub fn retreat(index: usize, total: usize) -> Result<usize> {
    if total == 0 {
        return Err(GalleryError::DegenerateCollection);
    }
    Ok((index % total + total - 1) % total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_to_first() {
        assert_eq!(advance(0, 5).unwrap(), 1);
        assert_eq!(advance(4, 5).unwrap(), 0);
        assert_eq!(advance(0, 1).unwrap(), 0);
    }

    #[test]
    fn test_retreat_wraps_to_last() {
        assert_eq!(retreat(3, 5).unwrap(), 2);
        assert_eq!(retreat(0, 5).unwrap(), 4);
        assert_eq!(retreat(0, 1).unwrap(), 0);
    }

    #[test]
    fn test_empty_collection_is_degenerate() {
        assert!(matches!(advance(0, 0), Err(GalleryError::DegenerateCollection)));
        assert!(matches!(retreat(0, 0), Err(GalleryError::DegenerateCollection)));
    }

    #[test]
    fn test_advance_then_retreat_round_trips() {
        for total in 1..=7 {
            for index in 0..total {
                let there = advance(index, total).unwrap();
                assert_eq!(retreat(there, total).unwrap(), index);
            }
        }
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for total in 1..=7 {
            for start in 0..total {
                let mut index = start;
                for _ in 0..total {
                    index = advance(index, total).unwrap();
                }
                assert_eq!(index, start, "total={total} start={start}");
            }
        }
    }
}
