//! MSB-first bit packing for binary PBM rows.
//!
//! Each row occupies `ceil(width / 8)` bytes. Bit 7 of byte `b` holds column
//! `8 * b`; pad bits after the last column are written as 0 and ignored on
//! read. Bits never cross a row boundary.

use alloc::vec::Vec;

/// Packed length of one row of `width` samples.
pub(crate) fn row_bytes(width: usize) -> usize {
    width.div_ceil(8)
}

/// Append the samples packed in `packed` to `out`, stopping after `width`.
pub(crate) fn unpack_row(packed: &[u8], width: usize, out: &mut Vec<bool>) {
    debug_assert_eq!(packed.len(), row_bytes(width));
    out.extend(
        packed
            .iter()
            .flat_map(|&byte| (0..8).map(move |k| byte & (0x80 >> k) != 0))
            .take(width),
    );
}

/// Append `row` packed MSB-first to `out`, zero-padding the last byte.
pub(crate) fn pack_row(row: &[bool], out: &mut Vec<u8>) {
    for chunk in row.chunks(8) {
        let byte = chunk
            .iter()
            .enumerate()
            .fold(0u8, |acc, (k, &bit)| if bit { acc | (0x80 >> k) } else { acc });
        out.push(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn msb_is_leftmost() {
        let mut out = Vec::new();
        pack_row(&[true, false, false, false, false, false, false, true], &mut out);
        assert_eq!(out, [0b1000_0001]);

        let mut row = Vec::new();
        unpack_row(&[0b0100_0000], 2, &mut row);
        assert_eq!(row, [false, true]);
    }

    #[test]
    fn padding_is_zero_and_ignored() {
        let mut out = Vec::new();
        pack_row(&[true; 9], &mut out);
        assert_eq!(out, [0xff, 0x80]);

        // Garbage in the pad bits does not leak into the row.
        let mut row = Vec::new();
        unpack_row(&[0xff, 0xff], 9, &mut row);
        assert_eq!(row, vec![true; 9]);
    }

    #[test]
    fn widths_around_byte_boundaries() {
        for width in [1usize, 7, 8, 9, 15, 16, 17] {
            let row: Vec<bool> = (0..width).map(|i| i % 3 == 0).collect();
            let mut packed = Vec::new();
            pack_row(&row, &mut packed);
            assert_eq!(packed.len(), row_bytes(width), "width {width}");

            let used = width % 8;
            if used != 0 {
                let pad_mask = 0xffu8 >> used;
                assert_eq!(packed[packed.len() - 1] & pad_mask, 0, "width {width}");
            }

            let mut unpacked = Vec::new();
            unpack_row(&packed, width, &mut unpacked);
            assert_eq!(unpacked, row, "width {width}");
        }
    }
}
