use crate::error::{Error, MissingBindings};

/// A mutable, fixed-length, randomly addressable run of bytes.
///
/// This is the capability every algorithm in this crate operates through, so
/// that the same rotation and combination code runs over plain arrays, slices,
/// limited views ([`Window`]) and foreign types bound through [`RawSequence`].
///
/// All three operations are `O(1)`. Callers inside this crate normalize every
/// index into `[0, length)` before handing it to `get`/`set`; implementations
/// may therefore panic on an out-of-range index, like slice indexing does.
///
/// # Examples
/// ```
/// use cyclic_bytes::ByteSequence;
///
/// fn swap_ends<S: ByteSequence + ?Sized>(seq: &mut S) {
///     let last = seq.length() - 1;
///     let (a, b) = (seq.get(0), seq.get(last));
///     seq.set(0, b);
///     seq.set(last, a);
/// }
///
/// let mut bytes = [0x01u8, 0x02, 0x03];
/// swap_ends(&mut bytes);
/// assert_eq!(bytes, [0x03, 0x02, 0x01]);
/// ```
pub trait ByteSequence {
    /// Returns the number of addressable bytes.
    fn length(&self) -> usize;

    /// Returns the byte at `index`, which must be in `[0, length)`.
    fn get(&self, index: usize) -> u8;

    /// Stores `value` at `index`, which must be in `[0, length)`.
    fn set(&mut self, index: usize, value: u8);

    /// Returns `true` if the sequence holds no bytes.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

impl ByteSequence for [u8] {
    fn length(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> u8 {
        self[index]
    }

    fn set(&mut self, index: usize, value: u8) {
        self[index] = value;
    }
}

impl<const N: usize> ByteSequence for [u8; N] {
    fn length(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> u8 {
        self[index]
    }

    fn set(&mut self, index: usize, value: u8) {
        self[index] = value;
    }
}

/// A limit-bounded view over a byte slice.
///
/// The effective length of the sequence is the current limit; bytes at or
/// beyond the limit are invisible to the rotation and combination engines and
/// are never touched.
///
/// # Examples
/// ```
/// use cyclic_bytes::{ByteSequence, Window, rotate};
///
/// let mut bytes = [0b1000_0000u8, 0x00, 0xAA];
/// let mut window = Window::with_limit(&mut bytes, 2);
/// assert_eq!(window.length(), 2);
///
/// // Rotates only the first two bytes; the third is out of view.
/// rotate(&mut window, 1);
/// assert_eq!(bytes, [0b0100_0000, 0x00, 0xAA]);
/// ```
#[derive(Debug)]
pub struct Window<'a> {
    bytes: &'a mut [u8],
    limit: usize,
}

impl<'a> Window<'a> {
    /// Creates a view over the whole slice, with the limit at its length.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        let limit = bytes.len();
        Self { bytes, limit }
    }

    /// Creates a view over the first `limit` bytes of the slice.
    ///
    /// # Panics
    /// Panics if `limit > bytes.len()`.
    pub fn with_limit(bytes: &'a mut [u8], limit: usize) -> Self {
        assert!(limit <= bytes.len(), "Limit {limit} out of bounds");
        Self { bytes, limit }
    }

    /// Returns the current limit, which is also the effective length.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Moves the limit.
    ///
    /// # Panics
    /// Panics if `limit > bytes.len()` for the underlying slice.
    pub fn set_limit(&mut self, limit: usize) {
        assert!(limit <= self.bytes.len(), "Limit {limit} out of bounds");
        self.limit = limit;
    }
}

impl ByteSequence for Window<'_> {
    fn length(&self) -> usize {
        self.limit
    }

    fn get(&self, index: usize) -> u8 {
        self.bytes[..self.limit][index]
    }

    fn set(&mut self, index: usize, value: u8) {
        self.bytes[..self.limit][index] = value;
    }
}

/// The three function bindings needed to drive [`RawSequence`].
///
/// All fields default to absent; fill in the ones the inner type supports and
/// let [`RawSequence::new`] report the rest.
pub struct RawBindings<T> {
    /// Returns the number of addressable bytes of the inner value.
    pub length: Option<fn(&T) -> usize>,
    /// Reads the byte at an index of the inner value.
    pub get: Option<fn(&T, usize) -> u8>,
    /// Stores a byte at an index of the inner value.
    pub set: Option<fn(&mut T, usize, u8)>,
}

impl<T> Default for RawBindings<T> {
    fn default() -> Self {
        Self {
            length: None,
            get: None,
            set: None,
        }
    }
}

impl<T> Clone for RawBindings<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawBindings<T> {}

/// Adapts an arbitrary inner value into a [`ByteSequence`] through three
/// caller-supplied functions.
///
/// This is the escape hatch for byte-addressable types that cannot implement
/// [`ByteSequence`] directly, e.g. types from another crate.
///
/// # Examples
/// ```
/// use cyclic_bytes::{RawBindings, RawSequence, rotate};
///
/// // A u32 treated as four little-endian bytes.
/// let mut seq = RawSequence::new(
///     0x8118_0700u32,
///     RawBindings {
///         length: Some(|_| 4),
///         get: Some(|word, i| word.to_le_bytes()[i]),
///         set: Some(|word, i, value| {
///             let mut bytes = word.to_le_bytes();
///             bytes[i] = value;
///             *word = u32::from_le_bytes(bytes);
///         }),
///     },
/// )
/// .unwrap();
///
/// rotate(&mut seq, 8);
/// assert_eq!(seq.into_inner(), 0x1807_0081);
/// ```
#[derive(Debug)]
pub struct RawSequence<T> {
    inner: T,
    length: fn(&T) -> usize,
    get: fn(&T, usize) -> u8,
    set: fn(&mut T, usize, u8),
}

impl<T> RawSequence<T> {
    /// Binds `inner` through the given functions.
    ///
    /// # Errors
    /// Returns [`Error::MissingBindings`] if any binding is absent. The error
    /// names every absent binding, not just the first.
    ///
    /// # Examples
    /// ```
    /// use cyclic_bytes::{Error, RawBindings, RawSequence};
    ///
    /// let result = RawSequence::new(0u32, RawBindings { length: Some(|_| 4), ..Default::default() });
    /// let Err(Error::MissingBindings(missing)) = result else {
    ///     panic!("expected a binding error");
    /// };
    /// assert!(!missing.length);
    /// assert!(missing.get);
    /// assert!(missing.set);
    /// ```
    pub fn new(inner: T, bindings: RawBindings<T>) -> Result<Self, Error> {
        match (bindings.length, bindings.get, bindings.set) {
            (Some(length), Some(get), Some(set)) => Ok(Self {
                inner,
                length,
                get,
                set,
            }),
            (length, get, set) => {
                let missing = MissingBindings {
                    length: length.is_none(),
                    get: get.is_none(),
                    set: set.is_none(),
                };
                debug_assert!(missing.any());
                Err(Error::MissingBindings(missing))
            }
        }
    }

    /// Returns a shared reference to the inner value.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Returns a mutable reference to the inner value.
    ///
    /// Mutating the value through this reference must not change its length.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwraps the inner value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> ByteSequence for RawSequence<T> {
    fn length(&self) -> usize {
        (self.length)(&self.inner)
    }

    fn get(&self, index: usize) -> u8 {
        (self.get)(&self.inner, index)
    }

    fn set(&mut self, index: usize, value: u8) {
        (self.set)(&mut self.inner, index, value)
    }
}
