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

use std::fmt::Display;

/// The color of a single disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiskColor {
    Dark,
    Light,
}

impl DiskColor {
    /// Returns the single-character symbol used when rendering a row.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use disks_model::color::DiskColor;
    /// assert_eq!(DiskColor::Light.symbol(), 'L');
    /// assert_eq!(DiskColor::Dark.symbol(), 'D');
    /// ```
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            DiskColor::Dark => 'D',
            DiskColor::Light => 'L',
        }
    }

    /// Returns `true` for a light disk.
    #[inline]
    pub const fn is_light(self) -> bool {
        matches!(self, DiskColor::Light)
    }

    /// Returns `true` for a dark disk.
    #[inline]
    pub const fn is_dark(self) -> bool {
        matches!(self, DiskColor::Dark)
    }
}

impl Display for DiskColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for DiskColor {
    type Error = char;

    /// Parses `'L'` / `'D'` (case-insensitive). The rejected character is
    /// handed back as the error.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' | 'l' => Ok(DiskColor::Light),
            'D' | 'd' => Ok(DiskColor::Dark),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_and_display_agree() {
        for color in [DiskColor::Dark, DiskColor::Light] {
            assert_eq!(color.to_string(), color.symbol().to_string());
        }
    }

    #[test]
    fn test_predicates_are_exclusive() {
        assert!(DiskColor::Light.is_light());
        assert!(!DiskColor::Light.is_dark());
        assert!(DiskColor::Dark.is_dark());
        assert!(!DiskColor::Dark.is_light());
    }

    #[test]
    fn test_try_from_char() {
        assert_eq!(DiskColor::try_from('L'), Ok(DiskColor::Light));
        assert_eq!(DiskColor::try_from('d'), Ok(DiskColor::Dark));
        assert_eq!(DiskColor::try_from('x'), Err('x'));
    }
}
