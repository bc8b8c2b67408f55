//! Fixed-width bit mask selecting positions of an input sequence.
//!
//! A [`Mask`] of width `n` describes one positional subset of an `n`-element
//! sequence: bit `k` is set iff the element at position `k` is selected.
//! Read as a binary number with bit 0 least significant, the mask is the index
//! of the subset in the canonical enumeration order, so [`Mask::increment`]
//! steps from one subset to the next.

/// A bit mask of fixed width, backed by a vector of u64 words.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Mask {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
    /// Number of valid positions
    width: usize,
    /// Number of set bits (cached for O(1) len())
    count: usize,
}

impl Mask {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates an all-zero mask over `width` positions.
    pub fn new(width: usize) -> Self {
        let num_words = (width + Self::BITS_PER_WORD - 1) / Self::BITS_PER_WORD;
        Self {
            words: vec![0; num_words],
            width,
            count: 0,
        }
    }

    /// Creates the mask whose binary value is `index`.
    ///
    /// Returns `None` if `index` does not fit in `width` bits.
    pub fn from_index(width: usize, index: u64) -> Option<Self> {
        if width < u64::BITS as usize && index >> width != 0 {
            return None;
        }
        let mut mask = Self::new(width);
        if let Some(word) = mask.words.first_mut() {
            *word = index;
            mask.count = index.count_ones() as usize;
        }
        Some(mask)
    }

    /// Returns the number of positions.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of valid bits in the word at `word_idx`.
    #[inline]
    fn word_bits(&self, word_idx: usize) -> usize {
        let rem = self.width % Self::BITS_PER_WORD;
        if word_idx + 1 == self.words.len() && rem != 0 {
            rem
        } else {
            Self::BITS_PER_WORD
        }
    }

    /// Adds one to the mask, bit 0 being least significant.
    ///
    /// Returns `false` if the mask was all ones; it then wraps to all zeros.
    pub fn increment(&mut self) -> bool {
        for word_idx in 0..self.words.len() {
            let bits = self.word_bits(word_idx);
            let full = if bits == Self::BITS_PER_WORD {
                u64::MAX
            } else {
                (1u64 << bits) - 1
            };

            let word = self.words[word_idx];
            if word == full {
                // Carry into the next word
                self.words[word_idx] = 0;
                self.count -= bits;
                continue;
            }

            self.count = self.count - word.trailing_ones() as usize + 1;
            self.words[word_idx] = word + 1;
            return true;
        }
        false
    }

    /// Returns an iterator over selected positions, in ascending order.
    pub fn iter(&self) -> MaskIter<'_> {
        MaskIter {
            mask: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Collects the elements of `items` at the selected positions.
    ///
    /// # Panics
    ///
    /// Panics if `items.len() != width`.
    pub fn select<T: Clone>(&self, items: &[T]) -> Vec<T> {
        assert_eq!(items.len(), self.width, "Mask width does not match the input length");
        let mut subset = Vec::with_capacity(self.count);
        subset.extend(self.iter().map(|k| items[k].clone()));
        subset
    }
}

/// Iterator over selected positions of a [`Mask`].
pub struct MaskIter<'a> {
    mask: &'a Mask,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for MaskIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * Mask::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.mask.words.len() {
                return None;
            }
            self.current_word = self.mask.words[self.word_idx];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_new() {
        let m = Mask::new(100);
        assert!(m.is_empty());
        assert_eq!(m.width(), 100);
        assert_eq!(m.iter().count(), 0);
    }

    #[test]
    fn test_iter_second_word() {
        let mut m = Mask::from_index(100, 0b100101000).unwrap();
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![3, 5, 8]);
        let mut full = Mask::from_index(70, u64::MAX).unwrap();
        assert!(full.increment());
        assert!(full.increment());
        assert_eq!(full.iter().collect::<Vec<_>>(), vec![0, 64]);
        assert!(m.increment());
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![0, 3, 5, 8]);
    }

    #[test]
    fn test_increment_counts() {
        let mut m = Mask::new(3);
        let mut seen = vec![m.iter().collect::<Vec<_>>()];
        while m.increment() {
            seen.push(m.iter().collect());
        }
        assert_eq!(
            seen,
            vec![
                vec![],
                vec![0],
                vec![1],
                vec![0, 1],
                vec![2],
                vec![0, 2],
                vec![1, 2],
                vec![0, 1, 2],
            ]
        );
        // Wrapped around
        assert!(m.is_empty());
    }

    #[test]
    fn test_increment_zero_width() {
        let mut m = Mask::new(0);
        assert!(!m.increment());
        assert!(m.is_empty());
    }

    #[test]
    fn test_increment_carries_across_words() {
        let mut m = Mask::from_index(70, u64::MAX).unwrap();
        assert_eq!(m.len(), 64);
        assert!(m.increment());
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![64]);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_increment_full_width_word() {
        let mut m = Mask::from_index(64, u64::MAX).unwrap();
        assert!(!m.increment());
        assert!(m.is_empty());
    }

    #[test]
    fn test_from_index() {
        let m = Mask::from_index(4, 0b1010).unwrap();
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(m.len(), 2);
        assert!(Mask::from_index(3, 8).is_none());
        assert!(Mask::from_index(0, 0).is_some());
        assert!(Mask::from_index(0, 1).is_none());
        assert!(Mask::from_index(100, u64::MAX).is_some());
    }

    #[test]
    fn test_select() {
        let m = Mask::from_index(3, 0b101).unwrap();
        assert_eq!(m.select(&['a', 'b', 'c']), vec!['a', 'c']);
    }
}
