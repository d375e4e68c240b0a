use crate::sequence::ByteSequence;

const BYTE_WIDTH: i64 = 8;

/// The helper operators the rotation loop is wired from.
///
/// Each rotation call selects its loop condition, its two shifts and its
/// amount-reduction step from this set exactly once, based on direction, so
/// the forward and backward walks share one loop body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    Lt,
    Gt,
    Shl,
    Shr,
    Add,
    Sub,
}

impl BinOp {
    pub(crate) fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            BinOp::Lt => (a < b) as i64,
            BinOp::Gt => (a > b) as i64,
            BinOp::Shl => a << b,
            // logical shift, no sign extension
            BinOp::Shr => ((a as u64) >> b) as i64,
            BinOp::Add => a + b,
            BinOp::Sub => a - b,
        }
    }
}

/// Rotates the bits of the whole sequence by `amount` positions, in place.
///
/// A positive `amount` rotates right (towards higher byte indices), a
/// negative one rotates left. The magnitude is taken modulo the bit width of
/// the sequence first, so any `i64` is a valid amount; a zero amount or an
/// empty sequence is a no-op.
///
/// # Examples
/// ```
/// use cyclic_bytes::rotate;
///
/// let mut bytes = [0x81u8, 0x18, 0x07];
/// rotate(&mut bytes, 9);
/// assert_eq!(bytes, [0x03, 0xC0, 0x8C]);
/// rotate(&mut bytes, -9);
/// assert_eq!(bytes, [0x81, 0x18, 0x07]);
/// ```
pub fn rotate<S: ByteSequence + ?Sized>(seq: &mut S, amount: i64) {
    rotate_from(seq, amount, 0);
}

/// Rotates the bits of `seq` from byte index `from` to the end of the
/// sequence. See [`rotate_range`] for the full contract.
///
/// # Examples
/// ```
/// use cyclic_bytes::rotate_from;
///
/// let mut bytes = [0xFFu8, 0b1000_0000, 0x00];
/// rotate_from(&mut bytes, 1, 1);
/// assert_eq!(bytes, [0xFF, 0b0100_0000, 0x00]);
/// ```
pub fn rotate_from<S: ByteSequence + ?Sized>(seq: &mut S, amount: i64, from: isize) {
    rotate_range(seq, amount, from, isize::MAX);
}

/// Rotates the bits of the byte range `[from, to)` of `seq` by `amount`
/// positions, in place.
///
/// The range bounds are normalized, never rejected: they are swapped if given
/// in descending order and clamped into `[0, length]`. The sign of `amount`
/// selects the direction (positive rotates right, negative rotates left) and
/// its magnitude is reduced modulo the bit width of the addressed range, so
/// any `i64` is a valid amount. Bytes outside `[from, to)` are never touched.
///
/// A zero amount, an empty range or an empty sequence is a silent no-op.
///
/// # Examples
/// ```
/// use cyclic_bytes::rotate_range;
///
/// let mut bytes = [0xAAu8, 0x0F, 0xF0, 0xAA];
/// // Rotate only the two middle bytes, one full byte width.
/// rotate_range(&mut bytes, 8, 1, 3);
/// assert_eq!(bytes, [0xAA, 0xF0, 0x0F, 0xAA]);
/// ```
pub fn rotate_range<S: ByteSequence + ?Sized>(seq: &mut S, amount: i64, from: isize, to: isize) {
    let len = seq.length();
    if amount == 0 || len == 0 {
        return;
    }
    let start = from.min(to).max(0) as usize;
    let end = from.max(to).min(len as isize);
    if end <= start as isize {
        return;
    }
    let end = end as usize;
    let range_bits = (end - start) as i64 * BYTE_WIDTH;

    let mut amount = amount % range_bits;
    if amount == 0 {
        return;
    }

    // Any magnitude above a byte width decomposes into repeated full-byte
    // rotations plus one residual sub-byte rotation.
    let step_op = if amount < 0 { BinOp::Add } else { BinOp::Sub };
    if amount.abs() > BYTE_WIDTH {
        let chunk = if amount < 0 { -BYTE_WIDTH } else { BYTE_WIDTH };
        while amount.abs() > BYTE_WIDTH {
            rotate_range(seq, chunk, start as isize, end as isize);
            amount = step_op.apply(amount, BYTE_WIDTH);
        }
    }

    let forward = amount > 0;
    let walk_start = if forward {
        start as isize
    } else {
        end as isize - 1
    };
    let walk_end = if forward {
        end as isize
    } else {
        start as isize - 1
    };
    let direction: isize = if forward { 1 } else { -1 };
    let amount = amount.unsigned_abs() as u32;
    let back_shift = 8 - amount;
    let end_cond = if forward { BinOp::Lt } else { BinOp::Gt };
    let (shift_op, back_shift_op) = if forward {
        (BinOp::Shr, BinOp::Shl)
    } else {
        (BinOp::Shl, BinOp::Shr)
    };
    let carry_mask: u32 = if forward {
        (1 << amount) - 1
    } else {
        (0xFF << back_shift) & 0xFF
    };

    let mut carry = 0u32;
    let mut i = walk_start;
    while end_cond.apply(i as i64, walk_end as i64) == 1 {
        let idx = i as usize;
        let current = u32::from(seq.get(idx));
        let outgoing =
            back_shift_op.apply(i64::from(current & carry_mask), i64::from(back_shift)) as u32;
        let shifted = shift_op.apply(i64::from(current), i64::from(amount)) as u32 & 0xFF;
        seq.set(idx, (shifted | carry) as u8);
        carry = outgoing & 0xFF;
        i += direction;
    }
    // The carry of the walk's last byte wraps around into its first.
    let closing = walk_start as usize;
    let closed = seq.get(closing) | carry as u8;
    seq.set(closing, closed);
}

/// Like [`rotate`], but hands the sequence back for chaining.
///
/// # Examples
/// ```
/// use cyclic_bytes::{ByteSequence, rotated};
///
/// let mut bytes = [0x81u8, 0x18, 0x07];
/// assert_eq!(rotated(&mut bytes, 9).get(0), 0x03);
/// ```
pub fn rotated<S: ByteSequence + ?Sized>(seq: &mut S, amount: i64) -> &mut S {
    rotate(seq, amount);
    seq
}
