// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BidiResult, try_vec_filled};

/// Logical to visual index map of one line. Entry `i` is the visual position (screen
/// order, left to right) of the character at logical position `i`. This orientation is
/// the only one exposed; [`ReorderMap::invert`] builds the visual to logical form when a
/// caller needs it.
///
/// The identity map of the fast path is stored as just its length, so pure LTR lines
/// never allocate a map.
///
/// ```
/// use r3bl_bidi::ReorderMap;
///
/// let map = ReorderMap::from_logical_to_visual(vec![0, 3, 2, 1]).unwrap().unwrap();
/// assert_eq!(map.visual_pos(1), Some(3));
/// assert_eq!(map.invert().unwrap(), vec![0, 3, 2, 1]);
/// assert!(ReorderMap::identity(4).is_identity());
/// ```
#[derive(Debug, Clone)]
pub struct ReorderMap {
    repr: MapRepr,
}

#[derive(Debug, Clone)]
enum MapRepr {
    Identity(usize),
    Permutation(Vec<usize>),
}

/// Two maps are equal when they send every logical position to the same visual
/// position, however they are stored.
impl PartialEq for ReorderMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.visual_positions().eq(other.visual_positions())
    }
}

impl Eq for ReorderMap {}

impl Default for ReorderMap {
    fn default() -> Self { ReorderMap::identity(0) }
}

impl ReorderMap {
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self {
            repr: MapRepr::Identity(len),
        }
    }

    /// Wraps a logical to visual permutation. Returns `None` if `map` is not a
    /// permutation of `0..map.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`BidiError::ResourceExhaustion`] if the buffer for the permutation check
    /// can't be reserved.
    ///
    /// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
    pub fn from_logical_to_visual(map: Vec<usize>) -> BidiResult<Option<Self>> {
        if !is_permutation(&map)? {
            return Ok(None);
        }
        Ok(Some(Self {
            repr: MapRepr::Permutation(map),
        }))
    }

    /// Builds the map from a visual to logical order (what rule L2 produces), by
    /// inverting it.
    pub(crate) fn from_visual_to_logical(order: &[usize]) -> BidiResult<Self> {
        if order.iter().enumerate().all(|(visual, &logical)| visual == logical) {
            return Ok(Self::identity(order.len()));
        }
        Ok(Self {
            repr: MapRepr::Permutation(invert_permutation(order)?),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.repr {
            MapRepr::Identity(len) => *len,
            MapRepr::Permutation(map) => map.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// `true` if every character is drawn at its logical position.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        match &self.repr {
            MapRepr::Identity(_) => true,
            MapRepr::Permutation(map) => {
                map.iter().enumerate().all(|(logical, &visual)| logical == visual)
            }
        }
    }

    /// Visual position of the character at logical position `logical`.
    #[must_use]
    pub fn visual_pos(&self, logical: usize) -> Option<usize> {
        match &self.repr {
            MapRepr::Identity(len) => (logical < *len).then_some(logical),
            MapRepr::Permutation(map) => map.get(logical).copied(),
        }
    }

    /// Visual positions in logical order, ie: the map as a sequence.
    pub fn visual_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).map(move |logical| match &self.repr {
            MapRepr::Identity(_) => logical,
            MapRepr::Permutation(map) => map[logical],
        })
    }

    /// Copies the map into a [Vec], entry `i` is the visual position of logical `i`.
    ///
    /// # Errors
    ///
    /// Returns [`BidiError::ResourceExhaustion`] if the buffer can't be reserved.
    ///
    /// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
    pub fn to_vec(&self) -> BidiResult<Vec<usize>> {
        let mut acc = try_vec_filled("reorder map", 0, self.len())?;
        for (slot, visual) in acc.iter_mut().zip(self.visual_positions()) {
            *slot = visual;
        }
        Ok(acc)
    }

    /// The visual to logical form: entry `v` is the logical position of the character
    /// drawn at visual position `v`.
    ///
    /// # Errors
    ///
    /// Returns [`BidiError::ResourceExhaustion`] if the buffer can't be reserved.
    ///
    /// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
    pub fn invert(&self) -> BidiResult<Vec<usize>> {
        match &self.repr {
            MapRepr::Identity(_) => self.to_vec(),
            MapRepr::Permutation(map) => invert_permutation(map),
        }
    }

    /// Logical positions in visual order, ie: the order to draw the characters in.
    ///
    /// # Errors
    ///
    /// Returns [`BidiError::ResourceExhaustion`] if the buffer can't be reserved.
    ///
    /// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
    pub fn iter_logical_in_visual_order(
        &self,
    ) -> BidiResult<impl Iterator<Item = usize> + use<>> {
        Ok(self.invert()?.into_iter())
    }

    /// `true` if the map is a permutation of `0..len`. Always holds for maps built by
    /// this crate. The identity form answers without allocating.
    ///
    /// # Errors
    ///
    /// Returns [`BidiError::ResourceExhaustion`] if the buffer for the check can't be
    /// reserved.
    ///
    /// [`BidiError::ResourceExhaustion`]: crate::BidiError::ResourceExhaustion
    pub fn is_permutation(&self) -> BidiResult<bool> {
        match &self.repr {
            MapRepr::Identity(_) => Ok(true),
            MapRepr::Permutation(map) => is_permutation(map),
        }
    }
}

fn is_permutation(map: &[usize]) -> BidiResult<bool> {
    let mut seen = try_vec_filled("permutation check", false, map.len())?;
    for &it in map {
        match seen.get_mut(it) {
            Some(slot) if !*slot => *slot = true,
            _ => return Ok(false),
        }
    }
    Ok(true)
}

/// `map` must be a permutation of `0..map.len()`.
fn invert_permutation(map: &[usize]) -> BidiResult<Vec<usize>> {
    let mut acc = try_vec_filled("inverted map", 0, map.len())?;
    for (from, &to) in map.iter().enumerate() {
        acc[to] = from;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BidiError, assert_eq2};

    #[test]
    fn test_identity() {
        let map = ReorderMap::identity(3);
        assert!(map.is_identity());
        assert!(map.is_permutation().unwrap());
        assert_eq2!(map.len(), 3);
        assert_eq2!(map.visual_pos(2), Some(2));
        assert_eq2!(map.visual_pos(3), None);
        assert_eq2!(map.to_vec().unwrap(), vec![0, 1, 2]);
        assert_eq2!(map.invert().unwrap(), vec![0, 1, 2]);
        assert!(ReorderMap::default().is_empty());
    }

    #[test]
    fn test_from_logical_to_visual_rejects_non_permutations() {
        assert!(ReorderMap::from_logical_to_visual(vec![0, 0]).unwrap().is_none());
        assert!(ReorderMap::from_logical_to_visual(vec![0, 2]).unwrap().is_none());
        assert!(ReorderMap::from_logical_to_visual(vec![1, 0]).unwrap().is_some());
        assert!(ReorderMap::from_logical_to_visual(vec![]).unwrap().is_some());
    }

    #[test]
    fn test_is_permutation_is_fallible() {
        let map = ReorderMap::from_logical_to_visual(vec![2, 0, 1]).unwrap().unwrap();
        assert_eq2!(map.is_permutation(), Ok(true));
        assert_eq2!(is_permutation(&[1, 1, 0]), Ok(false));
        assert_eq2!(is_permutation(&[0, 3]), Ok(false));

        // The identity form never reserves a buffer, even when a copy of it can't be.
        let huge = ReorderMap::identity(usize::MAX);
        assert_eq2!(huge.is_permutation(), Ok(true));
        assert_eq2!(
            huge.to_vec(),
            Err(BidiError::ResourceExhaustion {
                what: "reorder map",
                requested: usize::MAX,
            })
        );
    }

    #[test]
    fn test_invert_round_trip() {
        // Logical 0 is drawn at 2, logical 1 at 0, logical 2 at 1.
        let map = ReorderMap::from_logical_to_visual(vec![2, 0, 1]).unwrap().unwrap();
        let visual_to_logical = map.invert().unwrap();
        assert_eq2!(visual_to_logical, vec![1, 2, 0]);
        let back = ReorderMap::from_visual_to_logical(&visual_to_logical).unwrap();
        assert_eq2!(back, map);

        let order: Vec<usize> = map.iter_logical_in_visual_order().unwrap().collect();
        assert_eq2!(order, vec![1, 2, 0]);
        let composed: Vec<usize> = order.iter().map(|&it| map.visual_pos(it).unwrap()).collect();
        assert_eq2!(composed, vec![0, 1, 2]);
    }

    #[test]
    fn test_from_visual_to_logical_detects_identity() {
        let map = ReorderMap::from_visual_to_logical(&[0, 1, 2]).unwrap();
        assert_eq2!(map, ReorderMap::identity(3));
        assert!(
            !ReorderMap::from_logical_to_visual(vec![1, 0])
                .unwrap()
                .unwrap()
                .is_identity()
        );
        assert_eq2!(
            ReorderMap::from_logical_to_visual(vec![0, 1]).unwrap().unwrap(),
            ReorderMap::identity(2)
        );
    }
}
