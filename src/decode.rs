//! Decode entry points and the decoded-image type.

use alloc::borrow::Cow;

use log::trace;

use crate::color::{Bounds, Color, ColorModel};
use crate::error::XwdError;
use crate::header::{HEADER_LEN, XwdHeader};
use crate::rows::{self, Rows};

/// A decoded XWD image: the file header plus a 32-bpp pixel buffer.
///
/// Pixels may be owned (the stream path copies into a fresh buffer) or
/// borrowed straight from the caller's input (the zero-copy paths). The
/// image is immutable after construction; the borrowing constructors tie
/// its lifetime to the source buffer so the aliased bytes cannot be
/// mutated or freed underneath it.
#[derive(Clone, Debug)]
pub struct XwdImage<'a> {
    header: XwdHeader,
    pixels: Cow<'a, [u8]>,
}

/// Decode an XWD dump from a stream, copying pixel data into a fresh
/// buffer.
///
/// Each section is read to its exact byte count: 100 header bytes, the
/// window name and color-map table (skipped), then `4 * width * height`
/// pixel bytes. End of input before a section completes is
/// [`XwdError::TruncatedStream`]; any other stream failure propagates as
/// [`XwdError::Io`]. Nothing of a partial decode survives an error.
///
/// The safe default: the returned image owns its pixels and has no
/// lifetime tie to the stream. If decode throughput matters and the whole
/// file is already in memory, use [`decode`] instead.
#[cfg(feature = "std")]
pub fn decode_stream<R: std::io::Read>(reader: &mut R) -> Result<XwdImage<'static>, XwdError> {
    let mut block = [0u8; HEADER_LEN];
    read_full(reader, &mut block)?;
    let header = XwdHeader::parse(&block);
    trace!(
        "xwd stream: {}x{} depth {} bpp {}, skipping {} name + {} colormap bytes",
        header.pixmap_width,
        header.pixmap_height,
        header.pixmap_depth,
        header.bits_per_pixel,
        header.window_name_len(),
        header.colormap_len()
    );

    skip_full(reader, header.window_name_len())?;
    skip_full(reader, header.colormap_len())?;

    let pixel_len =
        usize::try_from(header.pixmap_len()).map_err(|_| XwdError::DimensionsTooLarge {
            width: header.pixmap_width,
            height: header.pixmap_height,
        })?;
    let mut pixels = alloc::vec![0u8; pixel_len];
    read_full(reader, &mut pixels)?;

    Ok(XwdImage {
        header,
        pixels: Cow::Owned(pixels),
    })
}

/// Read exactly `buf.len()` bytes, mapping a premature EOF to the
/// distinct truncation error.
#[cfg(feature = "std")]
fn read_full<R: std::io::Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), XwdError> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            XwdError::TruncatedStream
        } else {
            XwdError::Io(e)
        }
    })
}

/// Discard exactly `n` bytes from the stream without buffering them.
#[cfg(feature = "std")]
fn skip_full<R: std::io::Read>(reader: &mut R, n: u64) -> Result<(), XwdError> {
    let copied = std::io::copy(&mut std::io::Read::take(&mut *reader, n), &mut std::io::sink())?;
    if copied < n {
        return Err(XwdError::TruncatedStream);
    }
    Ok(())
}

/// Decode an XWD dump held entirely in memory, borrowing the pixel region
/// from `data` instead of copying it.
///
/// Returns [`XwdError::IncompleteBuffer`] when `data` is not longer than
/// the 100-byte header block, or shorter than
/// `header_size + 12 * colormap_entries + 4 * width * height` bytes; a
/// buffer of exactly that length succeeds. Trailing bytes beyond the
/// pixel span are aliased but never read.
pub fn decode(data: &[u8]) -> Result<XwdImage<'_>, XwdError> {
    let block = match data.first_chunk::<HEADER_LEN>() {
        Some(block) if data.len() > HEADER_LEN => block,
        _ => {
            return Err(XwdError::IncompleteBuffer {
                needed: HEADER_LEN as u64 + 1,
                actual: data.len() as u64,
            });
        }
    };
    let header = XwdHeader::parse(block);

    let start = header.pixmap_offset();
    let needed = start.saturating_add(header.pixmap_len());
    trace!(
        "xwd buffer: {}x{}, pixels at {}..{} of {}",
        header.pixmap_width,
        header.pixmap_height,
        start,
        needed,
        data.len()
    );
    if (data.len() as u64) < needed {
        return Err(XwdError::IncompleteBuffer {
            needed,
            actual: data.len() as u64,
        });
    }

    Ok(XwdImage {
        header,
        pixels: Cow::Borrowed(&data[start as usize..]),
    })
}

/// Decode a bare pixel buffer against a header obtained elsewhere,
/// borrowing the buffer directly.
///
/// `data` must hold at least `4 * width * height` bytes or
/// [`XwdError::IncompleteBuffer`] is returned; trailing bytes are aliased
/// but ignored. For dumps whose header and pixels arrive separately
/// (e.g. a shared-memory segment alongside a control message).
pub fn decode_pixels<'a>(header: &XwdHeader, data: &'a [u8]) -> Result<XwdImage<'a>, XwdError> {
    let needed = header.pixmap_len();
    if (data.len() as u64) < needed {
        return Err(XwdError::IncompleteBuffer {
            needed,
            actual: data.len() as u64,
        });
    }

    Ok(XwdImage {
        header: *header,
        pixels: Cow::Borrowed(data),
    })
}

impl<'a> XwdImage<'a> {
    /// The parsed file header.
    pub fn header(&self) -> &XwdHeader {
        &self.header
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.header.pixmap_width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.header.pixmap_height
    }

    /// The flat pixel buffer. For the whole-buffer zero-copy path this is
    /// the aliased tail of the input and may extend past the pixel span.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The `4 * width` bytes of scanline `y`.
    ///
    /// Panics when `y` is outside [`Self::bounds`].
    pub fn row(&self, y: u32) -> &[u8] {
        &self.pixels[rows::row_span(self.width(), y)]
    }

    /// Iterate over scanlines, top to bottom.
    pub fn rows(&self) -> Rows<'_> {
        Rows::new(&self.pixels, self.width(), self.height())
    }

    /// The rectangle (0,0)–(width,height).
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_x: 0,
            min_y: 0,
            max_x: self.width(),
            max_y: self.height(),
        }
    }

    /// The color of pixel (x, y).
    ///
    /// Pixel words are stored low-to-high as blue, green, red, padding —
    /// little-endian BGR regardless of the header's declared byte order.
    /// No bounds check beyond slice indexing: coordinates outside
    /// [`Self::bounds`] panic.
    pub fn color_at(&self, x: u32, y: u32) -> Color {
        let row = self.row(y);
        let offset = x as usize * 4;
        Color::new(row[offset + 2], row[offset + 1], row[offset])
    }

    /// The color model shared by every XWD image.
    pub fn color_model(&self) -> ColorModel {
        ColorModel
    }

    /// Whether the pixel buffer is borrowed from the decode input.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    /// Take ownership of the pixel data (copies if borrowed), detaching
    /// the image from the source buffer's lifetime.
    pub fn into_owned(self) -> XwdImage<'static> {
        XwdImage {
            header: self.header,
            pixels: Cow::Owned(self.pixels.into_owned()),
        }
    }
}
