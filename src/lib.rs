//! # zenxwd
//!
//! Decoder for the XWD (X Window Dump) raster format, the output of the
//! X11 `xwd(1)` screenshot tool: a 100-byte big-endian header, an optional
//! window name, an optional color-map table, and a raw pixel buffer.
//!
//! ## Zero-Copy Decoding
//!
//! Three entry points trade copy cost against buffer-lifetime obligations:
//!
//! - [`decode_stream`] reads from any `std::io::Read` into a fresh pixel
//!   buffer (safe, copying; requires the `std` feature).
//! - [`decode`] parses an in-memory dump and borrows the pixel region
//!   directly from the input — no allocation or copy of pixel data.
//! - [`decode_pixels`] takes an already-parsed [`XwdHeader`] plus a bare
//!   pixel buffer and borrows it directly.
//!
//! The borrowing variants tie the [`XwdImage`] lifetime to the source
//! buffer, so "do not mutate the buffer while the image is alive" is
//! enforced by the borrow checker rather than by documentation.
//!
//! ## Supported Pixmaps
//!
//! Only the layout `xwd` actually produces on truecolor displays is
//! supported: 32 bits per pixel, one word per pixel, bytes ordered
//! B,G,R,pad within each word. The header's `bits_per_pixel`,
//! `bytes_per_line` and `byte_order` fields are parsed and exposed but not
//! interpreted.
//!
//! ## Non-Goals
//!
//! - Encoding/writing XWD files
//! - 1/4/8/16/24-bpp pixmaps and XY-format (planar) dumps
//! - Palette application — the color-map table is decodable via
//!   [`ColormapEntry`] but indexed-color lookup is never performed
//!
//! ## Usage
//!
//! ```no_run
//! let data: &[u8] = &[]; // your XWD bytes
//!
//! let image = zenxwd::decode(data)?;
//! let top_left = image.color_at(0, 0);
//! println!("{}x{} {:?}", image.width(), image.height(), top_left);
//! # Ok::<(), zenxwd::XwdError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod color;
mod decode;
mod error;
mod header;
mod rows;

// Re-exports
pub use color::{Bounds, Color, ColorModel};
#[cfg(feature = "std")]
pub use decode::decode_stream;
pub use decode::{XwdImage, decode, decode_pixels};
pub use error::XwdError;
pub use header::{COLORMAP_ENTRY_LEN, ColormapEntry, HEADER_LEN, XwdHeader};
pub use rows::Rows;
