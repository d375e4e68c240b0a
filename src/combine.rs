use crate::cursor::CyclicCursor;
use crate::error::Error;
use crate::sequence::ByteSequence;
use core::fmt::{Debug, Formatter};

/// The built-in byte combination operators.
///
/// # Examples
/// ```
/// use cyclic_bytes::ByteOp;
///
/// assert_eq!(ByteOp::Xor.apply(0b1100, 0b1010), 0b0110);
/// assert_eq!(ByteOp::And.apply(0b1100, 0b1010), 0b1000);
/// assert_eq!(ByteOp::Or.apply(0b1100, 0b1010), 0b1110);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOp {
    /// Bitwise exclusive or. Applying it twice with the same cyclic source
    /// restores the operand.
    Xor,
    /// Bitwise and.
    And,
    /// Bitwise or.
    Or,
}

impl ByteOp {
    /// Combines two bytes.
    pub const fn apply(self, a: u8, b: u8) -> u8 {
        match self {
            ByteOp::Xor => a ^ b,
            ByteOp::And => a & b,
            ByteOp::Or => a | b,
        }
    }
}

/// Reads a byte sequence cyclically and combines it, byte by byte, with
/// other buffers.
///
/// The buffer owns a [`CyclicCursor`] whose position persists across calls,
/// so sequential operations continue consuming the source where the previous
/// one left off. If an operand is longer than the source, the source wraps
/// around as many times as needed.
///
/// # Examples
/// ```
/// use cyclic_bytes::{ByteOp, CyclicReadBuffer};
///
/// let key = [0x0Fu8, 0xF0];
/// let mut data = [0x12u8, 0x34, 0x56];
/// let mut buffer = CyclicReadBuffer::new(&key).unwrap();
///
/// buffer.apply_operation(&mut data, ByteOp::Xor);
/// // The two-byte key wrapped around for the third byte.
/// assert_eq!(data, [0x12 ^ 0x0F, 0x34 ^ 0xF0, 0x56 ^ 0x0F]);
/// ```
pub struct CyclicReadBuffer<'a, S: ByteSequence + ?Sized> {
    cursor: CyclicCursor<'a, S>,
}

impl<'a, S: ByteSequence + ?Sized> CyclicReadBuffer<'a, S> {
    /// Creates a combination buffer reading `source` cyclically from its
    /// first byte.
    ///
    /// # Errors
    /// Returns [`Error::EmptySequence`] for a zero-length source.
    pub fn new(source: &'a S) -> Result<Self, Error> {
        Ok(Self {
            cursor: CyclicCursor::new(source)?,
        })
    }

    /// Wraps an existing cursor, continuing from its current position.
    pub fn from_cursor(cursor: CyclicCursor<'a, S>) -> Self {
        Self { cursor }
    }

    /// Returns the owned cursor, e.g. to inspect its position.
    pub fn cursor(&self) -> &CyclicCursor<'a, S> {
        &self.cursor
    }

    /// Combines `operand` in place with the cyclically read source, using a
    /// built-in operator.
    ///
    /// Walks `operand` linearly; for each of its bytes one byte is consumed
    /// from the source, wrapping as needed, and the result is stored back.
    pub fn apply_operation<O: ByteSequence + ?Sized>(&mut self, operand: &mut O, op: ByteOp) {
        self.apply_with(operand, |a, b| op.apply(a, b));
    }

    /// Combines `operand` in place using a custom byte-domain operator.
    ///
    /// The operator receives the operand byte first and the cyclically read
    /// source byte second.
    ///
    /// # Examples
    /// ```
    /// use cyclic_bytes::CyclicReadBuffer;
    ///
    /// let key = [0x01u8];
    /// let mut data = [0x10u8, 0x20];
    /// let mut buffer = CyclicReadBuffer::new(&key).unwrap();
    /// buffer.apply_with(&mut data, |a, b| a.wrapping_sub(b));
    /// assert_eq!(data, [0x0F, 0x1F]);
    /// ```
    pub fn apply_with<O: ByteSequence + ?Sized>(
        &mut self,
        operand: &mut O,
        mut op: impl FnMut(u8, u8) -> u8,
    ) {
        for i in 0..operand.length() {
            let combined = op(operand.get(i), self.cursor.next());
            operand.set(i, combined);
        }
    }

    /// Combines `operand` in place using an integer-domain operator.
    ///
    /// Both bytes are widened to unsigned 0–255 integers before combination
    /// and the result is truncated back to a byte, so arithmetic operators
    /// behave the same as they would on unsigned values.
    ///
    /// # Examples
    /// ```
    /// use cyclic_bytes::CyclicReadBuffer;
    ///
    /// let key = [0x02u8];
    /// let mut data = [0xFFu8];
    /// let mut buffer = CyclicReadBuffer::new(&key).unwrap();
    /// buffer.apply_int_with(&mut data, |a, b| a + b);
    /// assert_eq!(data, [0x01]); // truncated back to a byte
    /// ```
    pub fn apply_int_with<O: ByteSequence + ?Sized>(
        &mut self,
        operand: &mut O,
        mut op: impl FnMut(u32, u32) -> u32,
    ) {
        self.apply_with(operand, |a, b| (op(u32::from(a), u32::from(b)) & 0xFF) as u8);
    }

    /// Returns an infinite lazy iterator over the cyclically read source.
    ///
    /// The stream shares the buffer's cursor, so it is not restartable:
    /// consuming it advances the same position later operations continue
    /// from. It never ends; the caller decides when to stop consuming.
    ///
    /// # Examples
    /// ```
    /// use cyclic_bytes::CyclicReadBuffer;
    ///
    /// let key = [0x0Au8, 0x0B];
    /// let mut buffer = CyclicReadBuffer::new(&key).unwrap();
    /// let mut stream = buffer.stream();
    /// assert_eq!(stream.next(), Some(0x0A));
    /// assert_eq!(stream.next(), Some(0x0B));
    /// assert_eq!(stream.next(), Some(0x0A));
    /// ```
    pub fn stream(&mut self) -> ByteStream<'_, 'a, S> {
        ByteStream {
            cursor: &mut self.cursor,
        }
    }
}

/// Cloning yields a buffer over the same source with its cursor reset to
/// position 0, like cloning the cursor itself.
impl<S: ByteSequence + ?Sized> Clone for CyclicReadBuffer<'_, S> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
        }
    }
}

impl<S: ByteSequence + ?Sized> Debug for CyclicReadBuffer<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CyclicReadBuffer")
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// Infinite lazy byte stream over a cyclically read sequence.
///
/// Returned by [`CyclicReadBuffer::stream`]. Never yields `None`; do not
/// `collect` it.
pub struct ByteStream<'s, 'a, S: ByteSequence + ?Sized> {
    cursor: &'s mut CyclicCursor<'a, S>,
}

impl<S: ByteSequence + ?Sized> Iterator for ByteStream<'_, '_, S> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.cursor.next())
    }
}

/// Combines `operand` in place with a cyclically read `source`, without
/// requiring the caller to construct a cursor.
///
/// Both sides are generic over [`ByteSequence`], so any pairing of the
/// shipped representations (arrays, slices, [`Window`](crate::Window)s,
/// [`RawSequence`](crate::RawSequence)s) works on either side.
///
/// # Errors
/// Returns [`Error::EmptySequence`] for a zero-length source; the operand is
/// left untouched.
///
/// # Examples
/// ```
/// use cyclic_bytes::{ByteOp, Window, combine};
///
/// let mut key = [0x0Fu8, 0xF0, 0xAA];
/// let key_view = Window::with_limit(&mut key, 2);
/// let mut data = [0x12u8, 0x34, 0x56];
///
/// combine(&mut data, &key_view, ByteOp::Xor).unwrap();
/// assert_eq!(data, [0x12 ^ 0x0F, 0x34 ^ 0xF0, 0x56 ^ 0x0F]);
/// ```
pub fn combine<O, S>(operand: &mut O, source: &S, op: ByteOp) -> Result<(), Error>
where
    O: ByteSequence + ?Sized,
    S: ByteSequence + ?Sized,
{
    let mut buffer = CyclicReadBuffer::new(source)?;
    buffer.apply_operation(operand, op);
    Ok(())
}
