// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Fixed-length row of light and dark disks.
//!
//! `DiskState` stores one bit per disk (set = light) in a `FixedBitSet`. The
//! length is fixed at construction; the only mutation is an adjacent swap,
//! so the number of light and dark disks never changes either.
//!
//! Two predicates classify a row. `is_alternating` holds exactly for the
//! layout produced by `DiskState::new` (L, D, L, D, ...), and `is_sorted`
//! holds when every dark disk sits in the lower half and every light disk in
//! the upper half. Both inspect every position of the row.

use crate::{color::DiskColor, error::DiskStateError};
use fixedbitset::FixedBitSet;
use std::{fmt::Display, str::FromStr};

/// The state of one row of disks.
///
/// # Examples
///
/// ```rust
/// # use disks_model::state::DiskState;
/// let row = DiskState::new(3);
/// assert_eq!(row.total_count(), 6);
/// assert_eq!(row.to_string(), "L D L D L D");
/// assert!(row.is_alternating());
/// assert!(!row.is_sorted());
/// ```
#[derive(Clone)]
pub struct DiskState {
    lights: FixedBitSet,
}

impl DiskState {
    /// Creates an alternating row with `light_count` light and as many dark
    /// disks, starting with a light disk at index 0.
    ///
    /// # Panics
    ///
    /// Panics if `light_count` is zero or if `2 * light_count` overflows
    /// `usize`.
    pub fn new(light_count: usize) -> Self {
        assert!(
            light_count > 0,
            "called `DiskState::new` with a light count of zero"
        );
        let Some(total) = light_count.checked_mul(2) else {
            panic!(
                "called `DiskState::new` with a light count whose row length overflows: {}",
                light_count
            );
        };

        Self::alternating(total)
    }

    /// Fallible version of [`DiskState::new`].
    pub fn try_new(light_count: usize) -> Result<Self, DiskStateError> {
        if light_count == 0 {
            return Err(DiskStateError::ZeroLightCount);
        }
        let total = light_count
            .checked_mul(2)
            .ok_or(DiskStateError::TooLarge { light_count })?;
        Ok(Self::alternating(total))
    }

    fn alternating(total: usize) -> Self {
        let mut lights = FixedBitSet::with_capacity(total);
        for i in (0..total).step_by(2) {
            lights.insert(i);
        }
        Self { lights }
    }

    /// Builds a row from an arbitrary color sequence.
    ///
    /// The sequence must be non-empty and contain as many light as dark
    /// disks, which also makes its length even.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use disks_model::{color::DiskColor, state::DiskState};
    /// let row = DiskState::from_colors([DiskColor::Dark, DiskColor::Light]).unwrap();
    /// assert!(row.is_sorted());
    /// ```
    pub fn from_colors<I>(colors: I) -> Result<Self, DiskStateError>
    where
        I: IntoIterator<Item = DiskColor>,
    {
        let colors: Vec<DiskColor> = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(DiskStateError::Empty);
        }

        let light = colors.iter().filter(|c| c.is_light()).count();
        let dark = colors.len() - light;
        if light != dark {
            return Err(DiskStateError::Unbalanced { light, dark });
        }

        let mut lights = FixedBitSet::with_capacity(colors.len());
        for (i, color) in colors.iter().enumerate() {
            lights.set(i, color.is_light());
        }
        Ok(Self { lights })
    }

    /// Returns the number of disks in the row.
    #[inline]
    pub fn total_count(&self) -> usize {
        self.lights.len()
    }

    /// Returns the number of light disks, half the row.
    #[inline]
    pub fn light_count(&self) -> usize {
        self.total_count() / 2
    }

    /// Returns the number of dark disks, equal to the light count.
    #[inline]
    pub fn dark_count(&self) -> usize {
        self.light_count()
    }

    /// Returns `true` if `index` addresses a disk of this row.
    #[inline]
    pub fn is_index(&self, index: usize) -> bool {
        index < self.total_count()
    }

    /// Returns the color of the disk at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> DiskColor {
        assert!(
            self.is_index(index),
            "called `DiskState::get` with index out of bounds: the len is {} but the index is {}",
            self.total_count(),
            index
        );
        self.color_at(index)
    }

    /// Fallible version of [`DiskState::get`].
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<DiskColor, DiskStateError> {
        if !self.is_index(index) {
            return Err(DiskStateError::IndexOutOfBounds {
                index,
                len: self.total_count(),
            });
        }
        Ok(self.color_at(index))
    }

    /// Swaps the disk at `left_index` with its right neighbor.
    ///
    /// # Panics
    ///
    /// Panics if `left_index + 1` is out of bounds, which includes the last
    /// index of the row.
    #[inline]
    pub fn swap(&mut self, left_index: usize) {
        assert!(
            self.has_right_neighbor(left_index),
            "called `DiskState::swap` with left index out of bounds: the len is {} but the left index is {}",
            self.total_count(),
            left_index
        );
        self.swap_unchecked(left_index);
    }

    /// Fallible version of [`DiskState::swap`]. On error the row is left
    /// untouched.
    #[inline]
    pub fn try_swap(&mut self, left_index: usize) -> Result<(), DiskStateError> {
        if !self.has_right_neighbor(left_index) {
            return Err(DiskStateError::SwapOutOfBounds {
                left_index,
                len: self.total_count(),
            });
        }
        self.swap_unchecked(left_index);
        Ok(())
    }

    /// Returns an iterator over the disk colors from left to right.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = DiskColor> + ExactSizeIterator + '_ {
        (0..self.total_count()).map(move |i| self.color_at(i))
    }

    /// Returns `true` if the row reads L, D, L, D, ... over its whole length.
    ///
    /// Rows with fewer than two disks are never alternating.
    pub fn is_alternating(&self) -> bool {
        if self.total_count() < 2 {
            return false;
        }
        self.iter()
            .enumerate()
            .all(|(i, color)| color.is_light() == (i % 2 == 0))
    }

    /// Returns `true` if all dark disks occupy `[0, n)` and all light disks
    /// occupy `[n, 2n)`, where `n` is the dark count.
    pub fn is_sorted(&self) -> bool {
        if self.total_count() < 2 {
            return false;
        }
        let n = self.dark_count();
        self.lights.count_ones(..n) == 0 && self.lights.count_ones(n..) == self.total_count() - n
    }

    /// Returns the number of pairs `(i, j)` with `i < j`, a light disk at `i`
    /// and a dark disk at `j`.
    ///
    /// Every adjacent light-dark swap removes exactly one such pair, so this
    /// is the number of swaps needed to sort the row.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use disks_model::state::DiskState;
    /// assert_eq!(DiskState::new(1).inversion_count(), 1);
    /// assert_eq!(DiskState::new(3).inversion_count(), 6);
    /// ```
    pub fn inversion_count(&self) -> u64 {
        let mut lights_seen: u64 = 0;
        let mut inversions: u64 = 0;
        for color in self.iter() {
            match color {
                DiskColor::Light => lights_seen += 1,
                DiskColor::Dark => inversions += lights_seen,
            }
        }
        inversions
    }

    #[inline(always)]
    fn color_at(&self, index: usize) -> DiskColor {
        if self.lights.contains(index) {
            DiskColor::Light
        } else {
            DiskColor::Dark
        }
    }

    #[inline(always)]
    fn has_right_neighbor(&self, left_index: usize) -> bool {
        left_index
            .checked_add(1)
            .is_some_and(|right| self.is_index(right))
    }

    #[inline(always)]
    fn swap_unchecked(&mut self, left_index: usize) {
        let left = self.lights.contains(left_index);
        let right = self.lights.contains(left_index + 1);
        self.lights.set(left_index, right);
        self.lights.set(left_index + 1, left);
    }
}

impl PartialEq for DiskState {
    fn eq(&self, other: &Self) -> bool {
        self.total_count() == other.total_count() && self.iter().eq(other.iter())
    }
}

impl Eq for DiskState {}

impl std::fmt::Debug for DiskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiskState({})", self)
    }
}

impl Display for DiskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, color) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

impl FromStr for DiskState {
    type Err = DiskStateError;

    /// Parses the rendered form, e.g. `"L D L D"`. Symbols are separated by
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .split_whitespace()
            .enumerate()
            .map(|(position, token)| {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        DiskColor::try_from(c).map_err(|_| DiskStateError::InvalidSymbol {
                            symbol: token.to_string(),
                            position,
                        })
                    }
                    _ => Err(DiskStateError::InvalidSymbol {
                        symbol: token.to_string(),
                        position,
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_colors(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    fn row(s: &str) -> DiskState {
        s.parse().expect("test row must parse")
    }

    fn naive_is_sorted(colors: &[DiskColor]) -> bool {
        let n = colors.len() / 2;
        colors[..n].iter().all(|c| c.is_dark()) && colors[n..].iter().all(|c| c.is_light())
    }

    fn naive_is_alternating(colors: &[DiskColor]) -> bool {
        colors.len() >= 2
            && colors.windows(2).all(|w| w[0] != w[1])
            && colors[0] == DiskColor::Light
    }

    #[test]
    fn test_new_builds_alternating_layout() {
        let state = DiskState::new(3);
        assert_eq!(state.total_count(), 6);
        assert_eq!(state.light_count(), 3);
        assert_eq!(state.dark_count(), 3);
        for i in 0..6 {
            let expected = if i % 2 == 0 {
                DiskColor::Light
            } else {
                DiskColor::Dark
            };
            assert_eq!(state.get(i), expected, "mismatch at index {i}");
        }
    }

    #[test]
    fn test_to_string_matches_rendered_form() {
        assert_eq!(DiskState::new(1).to_string(), "L D");
        assert_eq!(DiskState::new(3).to_string(), "L D L D L D");
    }

    #[test]
    #[should_panic(expected = "called `DiskState::new` with a light count of zero")]
    fn test_new_panics_on_zero() {
        let _ = DiskState::new(0);
    }

    #[test]
    fn test_try_new_rejects_zero() {
        assert_eq!(DiskState::try_new(0), Err(DiskStateError::ZeroLightCount));
        assert_eq!(DiskState::try_new(2), Ok(DiskState::new(2)));
    }

    #[test]
    fn test_try_new_rejects_overflowing_count() {
        let light_count = usize::MAX / 2 + 1;
        assert_eq!(
            DiskState::try_new(light_count),
            Err(DiskStateError::TooLarge { light_count })
        );
    }

    #[test]
    #[should_panic(expected = "called `DiskState::new` with a light count whose row length overflows")]
    fn test_new_panics_on_overflowing_count() {
        let _ = DiskState::new(usize::MAX / 2 + 1);
    }

    #[test]
    fn test_new_is_alternating_and_not_sorted() {
        for k in 1..=64 {
            let state = DiskState::new(k);
            assert!(state.is_alternating(), "k = {k}");
            assert!(!state.is_sorted(), "k = {k}");
        }
    }

    #[test]
    #[should_panic(expected = "called `DiskState::get` with index out of bounds")]
    fn test_get_panics_out_of_bounds() {
        let state = DiskState::new(2);
        let _ = state.get(4);
    }

    #[test]
    fn test_try_get_reports_bounds() {
        let state = DiskState::new(2);
        assert_eq!(state.try_get(3), Ok(DiskColor::Dark));
        assert_eq!(
            state.try_get(4),
            Err(DiskStateError::IndexOutOfBounds { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_swap_exchanges_neighbors() {
        let mut state = DiskState::new(2);
        state.swap(0);
        assert_eq!(state, row("D L L D"));
        state.swap(2);
        assert_eq!(state, row("D L D L"));
        state.swap(1);
        assert_eq!(state, row("D D L L"));
        assert!(state.is_sorted());
    }

    #[test]
    #[should_panic(expected = "called `DiskState::swap` with left index out of bounds")]
    fn test_swap_panics_at_last_index() {
        let mut state = DiskState::new(2);
        state.swap(3);
    }

    #[test]
    fn test_try_swap_leaves_row_untouched_on_error() {
        let mut state = DiskState::new(2);
        let before = state.clone();
        assert_eq!(
            state.try_swap(3),
            Err(DiskStateError::SwapOutOfBounds {
                left_index: 3,
                len: 4
            })
        );
        assert_eq!(
            state.try_swap(usize::MAX),
            Err(DiskStateError::SwapOutOfBounds {
                left_index: usize::MAX,
                len: 4
            })
        );
        assert_eq!(state, before);
        assert_eq!(state.try_swap(2), Ok(()));
        assert_eq!(state, row("L D D L"));
    }

    #[test]
    fn test_is_alternating_checks_every_position() {
        assert!(row("L D L D").is_alternating());
        // Differs only at the end.
        assert!(!row("L D D L").is_alternating());
        // Alternates but starts with dark.
        assert!(!row("D L D L").is_alternating());
        assert!(!row("D D L L").is_alternating());
    }

    #[test]
    fn test_is_sorted_checks_every_position() {
        assert!(row("D L").is_sorted());
        assert!(row("D D D L L L").is_sorted());
        // Light disk in the lower half.
        assert!(!row("D L D L L D").is_sorted());
        // Dark disk at the very end.
        assert!(!row("D D L L D L").is_sorted());
        assert!(!row("L L D D").is_sorted());
    }

    #[test]
    fn test_predicates_agree_with_naive_versions_on_random_rows() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for n in 1..=12 {
            for _ in 0..50 {
                let mut colors: Vec<DiskColor> = std::iter::repeat_n(DiskColor::Dark, n)
                    .chain(std::iter::repeat_n(DiskColor::Light, n))
                    .collect();
                colors.shuffle(&mut rng);

                let state = DiskState::from_colors(colors.iter().copied()).unwrap();
                assert_eq!(state.is_sorted(), naive_is_sorted(&colors), "{state}");
                assert_eq!(
                    state.is_alternating(),
                    naive_is_alternating(&colors),
                    "{state}"
                );
            }
        }
    }

    #[test]
    fn test_from_colors_validation() {
        assert_eq!(
            DiskState::from_colors(std::iter::empty()),
            Err(DiskStateError::Empty)
        );
        assert_eq!(
            DiskState::from_colors([DiskColor::Light, DiskColor::Light, DiskColor::Dark]),
            Err(DiskStateError::Unbalanced { light: 2, dark: 1 })
        );
    }

    #[test]
    fn test_from_str_rejects_bad_symbols() {
        assert_eq!(
            "L X".parse::<DiskState>(),
            Err(DiskStateError::InvalidSymbol {
                symbol: "X".to_string(),
                position: 1
            })
        );
        assert_eq!(
            "LD".parse::<DiskState>(),
            Err(DiskStateError::InvalidSymbol {
                symbol: "LD".to_string(),
                position: 0
            })
        );
        assert_eq!("".parse::<DiskState>(), Err(DiskStateError::Empty));
    }

    #[test]
    fn test_equality_requires_same_length_and_colors() {
        assert_eq!(DiskState::new(2), row("L D L D"));
        assert_ne!(DiskState::new(2), DiskState::new(3));
        assert_ne!(row("L D L D"), row("L D D L"));
    }

    #[test]
    fn test_inversion_count() {
        assert_eq!(row("D D L L").inversion_count(), 0);
        assert_eq!(row("L L D D").inversion_count(), 4);
        for n in 1..=20u64 {
            assert_eq!(
                DiskState::new(n as usize).inversion_count(),
                n * (n + 1) / 2
            );
        }
    }

    #[test]
    fn test_debug_shows_rendered_row() {
        assert_eq!(format!("{:?}", DiskState::new(1)), "DiskState(L D)");
    }
}
