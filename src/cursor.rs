use crate::error::Error;
use crate::sequence::ByteSequence;
use core::fmt::{Debug, Formatter};

/// A single movable position over a byte sequence that never goes out of
/// bounds.
///
/// The cursor is logically infinite: advancing past the last byte wraps to
/// the first, retreating before the first wraps to the last, and arbitrary
/// `i64` indices (negative or far out of range) resolve into the sequence by
/// mathematical modulo. Position state is owned exclusively by the cursor and
/// mutated only by [`next`] and [`previous`]; it is not internally
/// synchronized.
///
/// # Examples
/// ```
/// use cyclic_bytes::CyclicCursor;
///
/// let bytes = [0x0Au8, 0x0B, 0x0C];
/// let mut cursor = CyclicCursor::new(&bytes).unwrap();
/// assert_eq!(cursor.next(), 0x0A);
/// assert_eq!(cursor.next(), 0x0B);
/// assert_eq!(cursor.next(), 0x0C);
/// // Wrapped around.
/// assert_eq!(cursor.next(), 0x0A);
/// ```
///
/// [`next`]: CyclicCursor::next
/// [`previous`]: CyclicCursor::previous
pub struct CyclicCursor<'a, S: ByteSequence + ?Sized> {
    seq: &'a S,
    position: usize,
}

impl<'a, S: ByteSequence + ?Sized> CyclicCursor<'a, S> {
    /// Creates a cursor over `seq`, starting at position 0.
    ///
    /// # Errors
    /// Returns [`Error::EmptySequence`] for a zero-length sequence, for which
    /// no position could ever be resolved.
    pub fn new(seq: &'a S) -> Result<Self, Error> {
        if seq.is_empty() {
            return Err(Error::EmptySequence);
        }
        Ok(Self { seq, position: 0 })
    }

    /// Returns the byte at the current position without moving.
    pub fn get(&self) -> u8 {
        self.seq.get(self.position)
    }

    /// Returns the byte at `index` resolved into the sequence, without
    /// moving the cursor.
    ///
    /// Any `i64` is a valid index; it is resolved into `[0, length)` by
    /// mathematical modulo, so `-1` reads the last byte and `length` reads
    /// the first.
    ///
    /// # Examples
    /// ```
    /// use cyclic_bytes::CyclicCursor;
    ///
    /// let bytes = [0x0Au8, 0x0B, 0x0C];
    /// let cursor = CyclicCursor::new(&bytes).unwrap();
    /// assert_eq!(cursor.get_at(-1), 0x0C);
    /// assert_eq!(cursor.get_at(3), 0x0A);
    /// assert_eq!(cursor.get_at(11), 0x0C);
    /// ```
    pub fn get_at(&self, index: i64) -> u8 {
        self.seq.get(self.resolve(index))
    }

    /// Returns the byte at the current position, then advances by one,
    /// wrapping to position 0 past the end.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u8 {
        let value = self.seq.get(self.position);
        self.position += 1;
        if self.position == self.seq.length() {
            self.position = 0;
        }
        value
    }

    /// Retreats by one position, wrapping to the last byte before position
    /// 0, then returns the byte there.
    ///
    /// One `previous` call exactly undoes the movement of the immediately
    /// preceding [`next`](CyclicCursor::next) call and returns the same byte.
    pub fn previous(&mut self) -> u8 {
        self.position = match self.position {
            0 => self.seq.length() - 1,
            p => p - 1,
        };
        self.seq.get(self.position)
    }

    /// Always `true`; the cursor wraps forever.
    pub fn has_next(&self) -> bool {
        true
    }

    /// Returns the current position, in `[0, length)`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Resolves an arbitrary index into `[0, length)`.
    ///
    /// In-range indices pass through untouched; everything else takes the
    /// Euclidean remainder, which is non-negative for any input.
    fn resolve(&self, index: i64) -> usize {
        let length = self.seq.length() as i64;
        if (0..length).contains(&index) {
            return index as usize;
        }
        let resolved = index.rem_euclid(length);
        assert!(
            (0..length).contains(&resolved),
            "Resolved index {resolved} escaped [0, {length})"
        );
        resolved as usize
    }
}

/// Cloning yields a fresh cursor over the same sequence, reset to position 0.
///
/// A clone is a fresh start, not a positional copy.
impl<S: ByteSequence + ?Sized> Clone for CyclicCursor<'_, S> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            position: 0,
        }
    }
}

impl<S: ByteSequence + ?Sized> Debug for CyclicCursor<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CyclicCursor")
            .field("position", &self.position)
            .field("length", &self.seq.length())
            .finish()
    }
}
