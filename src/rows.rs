//! Scanline layout over a flat 32-bpp pixel buffer.
//!
//! Row *i* of a `width`-pixel image occupies bytes
//! `[i * 4 * width, (i + 1) * 4 * width)` of the buffer, top to bottom,
//! with no padding between rows. The header's `bytes_per_line` field is
//! deliberately not consulted — `xwd` never pads 32-bpp scanlines.
//!
//! Nothing here copies pixel bytes; every row is a view into the buffer
//! handed in. Callers are expected to have validated the buffer length
//! (the decode entry points do); indexing past it panics.

use core::ops::Range;

/// Bytes per scanline for a `width`-pixel row at 4 bytes per pixel.
pub(crate) fn stride(width: u32) -> usize {
    width as usize * 4
}

/// Byte range of row `y` within the flat pixel buffer.
pub(crate) fn row_span(width: u32, y: u32) -> Range<usize> {
    let stride = stride(width);
    let start = y as usize * stride;
    start..start + stride
}

/// Iterator over the scanlines of a decoded image, top to bottom.
///
/// Yields exactly `height` slices of `4 * width` bytes each. Unlike
/// `slice::chunks_exact`, it stops at `height` rows even when the buffer
/// carries trailing bytes (the whole-buffer zero-copy path aliases the
/// entire tail of the input), and a zero-width image yields empty rows
/// rather than dividing by zero.
#[derive(Clone, Debug)]
pub struct Rows<'a> {
    buf: &'a [u8],
    stride: usize,
    remaining: u32,
}

impl<'a> Rows<'a> {
    pub(crate) fn new(buf: &'a [u8], width: u32, height: u32) -> Rows<'a> {
        Rows {
            buf,
            stride: stride(width),
            remaining: height,
        }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.remaining == 0 {
            return None;
        }
        let (row, rest) = self.buf.split_at(self.stride);
        self.buf = rest;
        self.remaining -= 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Rows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_partition_the_buffer() {
        let width = 3u32;
        let height = 4u32;
        let buf: alloc::vec::Vec<u8> = (0..width * height * 4).map(|i| i as u8).collect();

        let rows: alloc::vec::Vec<&[u8]> = Rows::new(&buf, width, height).collect();
        assert_eq!(rows.len(), height as usize);

        let mut offset = 0;
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), stride(width));
            assert_eq!(*row, &buf[offset..offset + stride(width)]);
            assert_eq!(row_span(width, y as u32), offset..offset + stride(width));
            offset += stride(width);
        }
        assert_eq!(offset, buf.len(), "rows must cover the buffer exactly");
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let buf = [7u8; 4 * 2 * 2 + 5];
        let rows: alloc::vec::Vec<&[u8]> = Rows::new(&buf, 2, 2).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == 8));
    }

    #[test]
    fn zero_width_yields_empty_rows() {
        let rows: alloc::vec::Vec<&[u8]> = Rows::new(&[], 0, 3).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn zero_height_yields_nothing() {
        let buf = [0u8; 16];
        assert_eq!(Rows::new(&buf, 2, 0).count(), 0);
    }
}
