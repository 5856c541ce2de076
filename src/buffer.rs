//! Rendering buffers
//!
//! Two layouts of the same row-major, top-left origin image: one packed
//! word per pixel, or four channel bytes per pixel.  Both are written
//! through [Target](../trait.Target.html).

use crate::color::Rgba8;
use crate::error::Error;
use crate::error::Result;
use crate::ppm;
use crate::Target;

use std::path::Path;

/// Check that `len` elements hold a `width` x `height` image of `per_pixel`
fn check_size(width: usize, height: usize, per_pixel: usize, len: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::ZeroSize { width, height });
    }
    let expected = width * height * per_pixel;
    if len != expected {
        return Err(Error::BufferSize { expected, actual: len });
    }
    Ok(())
}

/// Frame buffer of packed colors
///
/// One `u32` per pixel as produced by [Rgba8::pack](struct.Rgba8.html#method.pack)
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Framebuffer {
    /// Pixel data, row-major, stride = width
    pub data: Vec<u32>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
}

impl Framebuffer {
    /// Create a new buffer of width, height, cleared to zero
    ///
    ///     use trifill::{Framebuffer, Rgba8};
    ///
    ///     let fb = Framebuffer::new(4, 3);
    ///     assert_eq!(fb.data.len(), 12);
    ///     assert_eq!(fb.get(3, 2), Rgba8::transparent());
    ///
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, data: vec![0; width * height] }
    }
    /// Wrap existing storage, which must hold exactly width * height words
    pub fn from_vec(data: Vec<u32>, width: usize, height: usize) -> Result<Self> {
        check_size(width, height, 1, data.len())?;
        Ok(Self { data, width, height })
    }
    /// Set all pixels to zero
    pub fn clear(&mut self) {
        self.fill(Rgba8::transparent());
    }
    /// Set all pixels to `c`
    pub fn fill(&mut self, c: Rgba8) {
        let v = c.pack();
        self.data.iter_mut().for_each(|p| *p = v);
    }
    /// Color at (x,y)
    pub fn get(&self, x: usize, y: usize) -> Rgba8 {
        assert!(x < self.width, "request {} >= {} width :: get", x, self.width);
        assert!(y < self.height, "request {} >= {} height :: get", y, self.height);
        Rgba8::unpack(self.data[y * self.width + x])
    }
    /// Pixel data as bytes, R, G, B, A per pixel
    pub fn to_rgba(&self) -> Vec<u8> {
        self.data.iter().flat_map(|v| v.to_le_bytes().to_vec()).collect()
    }
    /// Number of pixels that differ from `c`
    pub fn count_not(&self, c: Rgba8) -> usize {
        let v = c.pack();
        self.data.iter().filter(|&&p| p != v).count()
    }
    /// Write the image to a file, format chosen by the extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        ppm::write_file(&self.to_rgba(), self.width, self.height, filename)
    }
}

impl Target for Framebuffer {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn put_pixel(&mut self, x: usize, y: usize, c: Rgba8) {
        self.data[y * self.width + x] = c.pack();
    }
    fn copy_hline(&mut self, x1: usize, x2: usize, y: usize, c: Rgba8) {
        let row = y * self.width;
        let v = c.pack();
        self.data[row + x1 ..= row + x2].iter_mut().for_each(|p| *p = v);
    }
}

/// Buffer of 4 channel bytes per pixel
///
/// The same layout as an HTML canvas `ImageData` or an `image::RgbaImage`
#[derive(Debug,Default,Clone,PartialEq)]
pub struct RgbaBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
}

impl RgbaBuffer {
    /// Bytes per pixel
    pub const BPP: usize = 4;

    /// Create a new buffer of width, height, cleared to zero
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, data: vec![0; width * height * Self::BPP] }
    }
    /// Wrap existing storage, which must hold exactly width * height * 4 bytes
    ///
    ///     use trifill::RgbaBuffer;
    ///
    ///     assert!(RgbaBuffer::from_vec(vec![0; 16], 2, 2).is_ok());
    ///     assert!(RgbaBuffer::from_vec(vec![0; 15], 2, 2).is_err());
    ///
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize) -> Result<Self> {
        check_size(width, height, Self::BPP, data.len())?;
        Ok(Self { data, width, height })
    }
    /// Set all components to zero
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 0);
    }
    /// Color at (x,y)
    pub fn get(&self, x: usize, y: usize) -> Rgba8 {
        assert!(x < self.width, "request {} >= {} width :: get", x, self.width);
        assert!(y < self.height, "request {} >= {} height :: get", y, self.height);
        let i = (y * self.width + x) * Self::BPP;
        let p = &self.data[i .. i + Self::BPP];
        Rgba8::new(p[0], p[1], p[2], p[3])
    }
    /// Write the image to a file, format chosen by the extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        ppm::write_file(&self.data, self.width, self.height, filename)
    }
}

impl Target for RgbaBuffer {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn put_pixel(&mut self, x: usize, y: usize, c: Rgba8) {
        let i = (y * self.width + x) * Self::BPP;
        self.data[i .. i + Self::BPP].copy_from_slice(&c.to_bytes());
    }
    fn copy_hline(&mut self, x1: usize, x2: usize, y: usize, c: Rgba8) {
        let row = y * self.width;
        let bytes = c.to_bytes();
        let span = &mut self.data[(row + x1) * Self::BPP .. (row + x2 + 1) * Self::BPP];
        for p in span.chunks_exact_mut(Self::BPP) {
            p.copy_from_slice(&bytes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framebuffer_hline() {
        let mut fb = Framebuffer::new(10, 3);
        let red = Rgba8::new(255, 0, 0, 255);
        fb.copy_hline(2, 5, 1, red);
        for x in 0 .. 10 {
            let want = if (2..=5).contains(&x) { red } else { Rgba8::transparent() };
            assert_eq!(fb.get(x, 1), want);
            assert_eq!(fb.get(x, 0), Rgba8::transparent());
        }
        assert_eq!(fb.count_not(Rgba8::transparent()), 4);
        fb.put_pixel(9, 2, Rgba8::white());
        assert_eq!(fb.data[29], 0xffff_ffff);
        fb.clear();
        assert_eq!(fb.count_not(Rgba8::transparent()), 0);
    }

    #[test]
    fn rgba_layouts_agree() {
        let mut fb = Framebuffer::new(5, 4);
        let mut rb = RgbaBuffer::new(5, 4);
        let c = Rgba8::new(100, 180, 240, 255);
        for t in [&mut fb as &mut dyn Target, &mut rb as &mut dyn Target].iter_mut() {
            t.copy_hline(0, 4, 0, c);
            t.put_pixel(3, 3, Rgba8::black());
        }
        assert_eq!(fb.to_rgba(), rb.data);
        assert_eq!(rb.get(3, 3), Rgba8::black());
    }

    #[test]
    fn size_checks() {
        assert!(Framebuffer::from_vec(vec![0; 12], 4, 3).is_ok());
        match Framebuffer::from_vec(vec![0; 11], 4, 3) {
            Err(Error::BufferSize { expected: 12, actual: 11 }) => {},
            other => panic!("unexpected {:?}", other),
        }
        match RgbaBuffer::from_vec(vec![], 0, 3) {
            Err(Error::ZeroSize { width: 0, height: 3 }) => {},
            other => panic!("unexpected {:?}", other),
        }
    }
}
