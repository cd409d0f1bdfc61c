// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raster images the canvas can display and probe.

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;
use peniko::color::Rgba8;
use peniko::{ImageData, ImageFormat};

/// Read access to an immutable raster image.
///
/// The canvas never writes pixels; it only asks for the size and samples
/// single pixels under the cursor.
pub trait RasterImage {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Color of pixel `(x, y)`, or `None` outside the image.
    fn pixel(&self, x: u32, y: u32) -> Option<Rgba8>;

    /// Pixel size as a [`Size`].
    fn size(&self) -> Size {
        Size::new(f64::from(self.width()), f64::from(self.height()))
    }

    /// Returns `true` if the image has no pixels.
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl<T: RasterImage + ?Sized> RasterImage for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        (**self).pixel(x, y)
    }
}

impl<T: RasterImage + ?Sized> RasterImage for Arc<T> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        (**self).pixel(x, y)
    }
}

/// Error returned when a pixel buffer does not match its dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageDataError {
    /// The buffer length differs from `width * height * 3`.
    LengthMismatch {
        /// Bytes required for the given dimensions.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },
    /// `width * height * 3` does not fit in `usize`.
    TooLarge {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

impl fmt::Display for ImageDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "pixel buffer holds {actual} bytes, dimensions require {expected}"
            ),
            Self::TooLarge { width, height } => {
                write!(f, "a {width}x{height} RGB buffer does not fit in memory")
            }
        }
    }
}

impl core::error::Error for ImageDataError {}

/// Owned, tightly packed 8‑bit RGB image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbImage {
    /// Creates a black image.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 3` overflows `usize`.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = Self::byte_len(width, height).expect("RgbImage: dimensions overflow usize");
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Creates an image by evaluating `f` for every pixel, row by row.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 3` overflows `usize`.
    #[must_use]
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 3]) -> Self {
        let len = Self::byte_len(width, height).expect("RgbImage: dimensions overflow usize");
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wraps an existing packed RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ImageDataError::LengthMismatch`] if `data` is not exactly
    /// `width * height * 3` bytes, and [`ImageDataError::TooLarge`] if that
    /// product overflows `usize`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ImageDataError> {
        let expected =
            Self::byte_len(width, height).ok_or(ImageDataError::TooLarge { width, height })?;
        if data.len() != expected {
            return Err(ImageDataError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Overwrites pixel `(x, y)`; out‑of‑range writes are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 3].copy_from_slice(&rgb);
        }
    }

    /// Raw packed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize * self.width as usize + x as usize) * 3)
    }

    fn byte_len(width: u32, height: u32) -> Option<usize> {
        (width as usize).checked_mul(height as usize)?.checked_mul(3)
    }
}

impl RasterImage for RgbImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        let i = self.index(x, y)?;
        Some(Rgba8 {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: 255,
        })
    }
}

/// Peniko images with 8‑bit RGBA or BGRA rows and no padding.
impl RasterImage for ImageData {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)?
            .checked_mul(4)?;
        let px = self.data.data().get(i..i.checked_add(4)?)?;
        match self.format {
            ImageFormat::Rgba8 => Some(Rgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }),
            ImageFormat::Bgra8 => Some(Rgba8 {
                r: px[2],
                g: px[1],
                b: px[0],
                a: px[3],
            }),
            // Unknown layouts are not probed.
            _ => None,
        }
    }
}
