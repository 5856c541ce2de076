//! Reading and writing of image files
//!
//! Buffers are exchanged as RGBA bytes; the file format follows the
//! extension (png, bmp).

use crate::error::Result;

use std::path::Path;

/// Read an image file as RGBA bytes, returning (data, width, height)
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write RGBA bytes of a `width` x `height` image to a file
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<()> {
    image::save_buffer(filename, buf, width as u32, height as u32, image::ExtendedColorType::Rgba8)?;
    Ok(())
}

/// Compare two image files pixel by pixel
///
/// Differences are reported through the `log` facade
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        log::warn!("image sizes differ: {}x{} vs {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(p1,p2)) in d1.chunks_exact(4).zip(d2.chunks_exact(4)).enumerate() {
        if p1 != p2 {
            log::debug!("pixel [{},{}]: {:?} {:?}", i % w1, i / w1, p1, p2);
            flag = false;
        }
    }
    Ok(flag)
}
