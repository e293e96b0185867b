//! XWD file header and color-map entry codecs.
//!
//! The on-disk header is 25 consecutive big-endian `u32` words — 100 bytes
//! total — regardless of the byte order the dump declares for its pixel
//! data. Field values are taken as-is; nothing here rejects a zero width
//! or an out-of-range visual class, that is left to whoever consumes the
//! geometry.

/// Fixed byte length of the XWD file header.
pub const HEADER_LEN: usize = 100;

/// Byte length of one color-map table record.
pub const COLORMAP_ENTRY_LEN: usize = 12;

/// The XWD file header, in format-mandated field order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XwdHeader {
    /// Total header size in bytes, including the window name that
    /// follows the fixed 100-byte block.
    pub header_size: u32,
    pub file_version: u32,
    /// XYBitmap (0), XYPixmap (1) or ZPixmap (2).
    pub pixmap_format: u32,
    pub pixmap_depth: u32,
    pub pixmap_width: u32,
    pub pixmap_height: u32,
    pub x_offset: u32,
    /// Declared pixel byte order; not interpreted by this crate.
    pub byte_order: u32,
    pub bitmap_unit: u32,
    pub bitmap_bit_order: u32,
    pub bitmap_pad: u32,
    pub bits_per_pixel: u32,
    pub bytes_per_line: u32,
    pub visual_class: u32,
    pub red_mask: u32,
    pub green_mask: u32,
    pub blue_mask: u32,
    pub bits_per_rgb: u32,
    pub number_of_colors: u32,
    /// Number of 12-byte color-map records following the window name.
    pub colormap_entries: u32,
    pub window_width: u32,
    pub window_height: u32,
    pub window_x: u32,
    pub window_y: u32,
    pub window_border_width: u32,
}

fn be32(buf: &[u8; HEADER_LEN], off: usize) -> u32 {
    u32::from_be_bytes([buf[off], buf[off + 1], buf[off + 2], buf[off + 3]])
}

impl XwdHeader {
    /// Parse the fixed 100-byte header block.
    ///
    /// Reads 25 big-endian words at offsets 0, 4, …, 96. No field is
    /// validated; whatever the dump declares is propagated.
    pub fn parse(buf: &[u8; HEADER_LEN]) -> XwdHeader {
        XwdHeader {
            header_size: be32(buf, 0),
            file_version: be32(buf, 4),
            pixmap_format: be32(buf, 8),
            pixmap_depth: be32(buf, 12),
            pixmap_width: be32(buf, 16),
            pixmap_height: be32(buf, 20),
            x_offset: be32(buf, 24),
            byte_order: be32(buf, 28),
            bitmap_unit: be32(buf, 32),
            bitmap_bit_order: be32(buf, 36),
            bitmap_pad: be32(buf, 40),
            bits_per_pixel: be32(buf, 44),
            bytes_per_line: be32(buf, 48),
            visual_class: be32(buf, 52),
            red_mask: be32(buf, 56),
            green_mask: be32(buf, 60),
            blue_mask: be32(buf, 64),
            bits_per_rgb: be32(buf, 68),
            number_of_colors: be32(buf, 72),
            colormap_entries: be32(buf, 76),
            window_width: be32(buf, 80),
            window_height: be32(buf, 84),
            window_x: be32(buf, 88),
            window_y: be32(buf, 92),
            window_border_width: be32(buf, 96),
        }
    }

    /// Serialize the fixed header block back to its 100-byte wire form.
    ///
    /// Exact inverse of [`XwdHeader::parse`]. This covers only the fixed
    /// block — window name, color-map table and pixels are not part of it.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let fields = [
            self.header_size,
            self.file_version,
            self.pixmap_format,
            self.pixmap_depth,
            self.pixmap_width,
            self.pixmap_height,
            self.x_offset,
            self.byte_order,
            self.bitmap_unit,
            self.bitmap_bit_order,
            self.bitmap_pad,
            self.bits_per_pixel,
            self.bytes_per_line,
            self.visual_class,
            self.red_mask,
            self.green_mask,
            self.blue_mask,
            self.bits_per_rgb,
            self.number_of_colors,
            self.colormap_entries,
            self.window_width,
            self.window_height,
            self.window_x,
            self.window_y,
            self.window_border_width,
        ];

        let mut out = [0u8; HEADER_LEN];
        for (chunk, field) in out.chunks_exact_mut(4).zip(fields) {
            chunk.copy_from_slice(&field.to_be_bytes());
        }
        out
    }

    /// Bytes of window name between the fixed block and the color-map
    /// table (`header_size - 100`, clamped at zero).
    pub fn window_name_len(&self) -> u64 {
        u64::from(self.header_size).saturating_sub(HEADER_LEN as u64)
    }

    /// Byte span of the color-map table.
    pub fn colormap_len(&self) -> u64 {
        COLORMAP_ENTRY_LEN as u64 * u64::from(self.colormap_entries)
    }

    /// Offset of the pixel data from the start of the dump:
    /// `header_size + 12 * colormap_entries`.
    pub fn pixmap_offset(&self) -> u64 {
        u64::from(self.header_size) + self.colormap_len()
    }

    /// Byte span of the pixel data at 32 bpp: `4 * width * height`.
    ///
    /// Saturates at `u64::MAX` for absurd dimensions, which no real
    /// buffer can satisfy anyway.
    pub fn pixmap_len(&self) -> u64 {
        (4 * u64::from(self.pixmap_width)).saturating_mul(u64::from(self.pixmap_height))
    }
}

/// One record of the color-map table: `colormap_entries` of these sit
/// between the window name and the pixel data.
///
/// The decoder skips the table — pixels are always treated as literal
/// truecolor, never as palette indices — but the record codec is public
/// for callers that want the raw palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColormapEntry {
    pub entry_number: u32,
    pub red: u16,
    pub green: u16,
    pub blue: u16,
    pub flags: u8,
    pub padding: u8,
}

impl ColormapEntry {
    /// Parse one 12-byte color-map record.
    pub fn parse(buf: &[u8; COLORMAP_ENTRY_LEN]) -> ColormapEntry {
        ColormapEntry {
            entry_number: u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]),
            red: u16::from_be_bytes([buf[4], buf[5]]),
            green: u16::from_be_bytes([buf[6], buf[7]]),
            blue: u16::from_be_bytes([buf[8], buf[9]]),
            flags: buf[10],
            padding: buf[11],
        }
    }

    /// Serialize back to the 12-byte wire form.
    pub fn to_bytes(&self) -> [u8; COLORMAP_ENTRY_LEN] {
        let mut out = [0u8; COLORMAP_ENTRY_LEN];
        out[0..4].copy_from_slice(&self.entry_number.to_be_bytes());
        out[4..6].copy_from_slice(&self.red.to_be_bytes());
        out[6..8].copy_from_slice(&self.green.to_be_bytes());
        out[8..10].copy_from_slice(&self.blue.to_be_bytes());
        out[10] = self.flags;
        out[11] = self.padding;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise_block(seed: u32) -> [u8; HEADER_LEN] {
        let mut state = seed;
        let mut buf = [0u8; HEADER_LEN];
        for b in buf.iter_mut() {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            *b = state as u8;
        }
        buf
    }

    #[test]
    fn header_roundtrip_over_noise() {
        for seed in [0xDEAD_BEEF, 1, 0x1234_5678, u32::MAX] {
            let buf = noise_block(seed);
            let header = XwdHeader::parse(&buf);
            assert_eq!(header.to_bytes(), buf, "seed {seed:#x}");
        }
    }

    #[test]
    fn fields_land_at_fixed_offsets() {
        let mut buf = [0u8; HEADER_LEN];
        buf[0..4].copy_from_slice(&104u32.to_be_bytes());
        buf[16..20].copy_from_slice(&1920u32.to_be_bytes());
        buf[20..24].copy_from_slice(&1080u32.to_be_bytes());
        buf[44..48].copy_from_slice(&32u32.to_be_bytes());
        buf[76..80].copy_from_slice(&256u32.to_be_bytes());
        buf[96..100].copy_from_slice(&2u32.to_be_bytes());

        let header = XwdHeader::parse(&buf);
        assert_eq!(header.header_size, 104);
        assert_eq!(header.pixmap_width, 1920);
        assert_eq!(header.pixmap_height, 1080);
        assert_eq!(header.bits_per_pixel, 32);
        assert_eq!(header.colormap_entries, 256);
        assert_eq!(header.window_border_width, 2);
    }

    #[test]
    fn unvalidated_fields_pass_through() {
        // Zero dimensions and a nonsense pixmap format are accepted.
        let buf = [0u8; HEADER_LEN];
        let header = XwdHeader::parse(&buf);
        assert_eq!(header.pixmap_width, 0);
        assert_eq!(header.pixmap_height, 0);

        let mut buf = [0xFFu8; HEADER_LEN];
        buf[8..12].copy_from_slice(&99u32.to_be_bytes());
        let header = XwdHeader::parse(&buf);
        assert_eq!(header.pixmap_format, 99);
    }

    #[test]
    fn derived_geometry() {
        let header = XwdHeader {
            header_size: 107,
            pixmap_width: 640,
            pixmap_height: 480,
            colormap_entries: 256,
            ..Default::default()
        };
        assert_eq!(header.window_name_len(), 7);
        assert_eq!(header.colormap_len(), 3072);
        assert_eq!(header.pixmap_offset(), 107 + 3072);
        assert_eq!(header.pixmap_len(), 4 * 640 * 480);

        // header_size below 100 must not underflow the name length
        let short = XwdHeader {
            header_size: 40,
            ..Default::default()
        };
        assert_eq!(short.window_name_len(), 0);
    }

    #[test]
    fn pixmap_len_saturates() {
        let header = XwdHeader {
            pixmap_width: 1 << 16,
            pixmap_height: 1 << 16,
            ..Default::default()
        };
        assert_eq!(header.pixmap_len(), 4u64 << 32);

        // 4 * (2^32-1)^2 exceeds u64; the span must clamp, not wrap
        let huge = XwdHeader {
            pixmap_width: u32::MAX,
            pixmap_height: u32::MAX,
            ..Default::default()
        };
        assert_eq!(huge.pixmap_len(), u64::MAX);
    }

    #[test]
    fn colormap_entry_roundtrip() {
        let entry = ColormapEntry {
            entry_number: 17,
            red: 0xFFFF,
            green: 0x8000,
            blue: 0x1234,
            flags: 7,
            padding: 0,
        };
        let bytes = entry.to_bytes();
        assert_eq!(ColormapEntry::parse(&bytes), entry);

        let wire: [u8; COLORMAP_ENTRY_LEN] =
            [0, 0, 0, 17, 0xFF, 0xFF, 0x80, 0x00, 0x12, 0x34, 7, 0];
        assert_eq!(bytes, wire);
    }
}
