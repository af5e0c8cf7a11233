// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Allocation helpers for the per line buffers (classes, levels, maps). They reserve
//! the exact capacity up front and turn an allocation failure into
//! [`BidiError::ResourceExhaustion`] instead of aborting the process.

use crate::{BidiError, BidiResult};

/// Empty [Vec] with room for exactly `capacity` elements.
///
/// # Errors
///
/// Returns [`BidiError::ResourceExhaustion`] naming `what` if the memory can't be
/// reserved.
pub fn try_vec_with_capacity<T>(what: &'static str, capacity: usize) -> BidiResult<Vec<T>> {
    let mut acc = Vec::new();
    acc.try_reserve_exact(capacity)
        .map_err(|_| BidiError::ResourceExhaustion {
            what,
            requested: capacity,
        })?;
    Ok(acc)
}

/// [Vec] of `len` copies of `value`.
///
/// # Errors
///
/// Returns [`BidiError::ResourceExhaustion`] naming `what` if the memory can't be
/// reserved.
pub fn try_vec_filled<T: Clone>(
    what: &'static str,
    value: T,
    len: usize,
) -> BidiResult<Vec<T>> {
    let mut acc = try_vec_with_capacity(what, len)?;
    acc.resize(len, value);
    Ok(acc)
}

/// Collects an exact size iterator into a [Vec] whose capacity is reserved up front.
///
/// # Errors
///
/// Returns [`BidiError::ResourceExhaustion`] naming `what` if the memory can't be
/// reserved.
pub fn try_vec_from_iter<T>(
    what: &'static str,
    iter: impl ExactSizeIterator<Item = T>,
) -> BidiResult<Vec<T>> {
    let mut acc = try_vec_with_capacity(what, iter.len())?;
    acc.extend(iter);
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_try_vec_filled() {
        let acc = try_vec_filled("levels", 7_u8, 3).unwrap();
        assert_eq2!(acc, vec![7, 7, 7]);
    }

    #[test]
    fn test_try_vec_from_iter() {
        let acc = try_vec_from_iter("map", 0..4_usize).unwrap();
        assert_eq2!(acc, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_capacity_overflow_is_resource_exhaustion() {
        let result = try_vec_with_capacity::<u64>("map", usize::MAX);
        assert_eq2!(
            result,
            Err(BidiError::ResourceExhaustion {
                what: "map",
                requested: usize::MAX
            })
        );
    }
}
