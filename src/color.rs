//! Colors

/// Color as Red, Green, Blue
///
/// The flat color a triangle is drawn with
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
}

/// Color as Red, Green, Blue, and Alpha
///
/// What ends up in a target; triangles are opaque so alpha is always 255
/// for written pixels
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Fully transparent black, the contents of a cleared target
    pub fn transparent() -> Self {
        Self::new(0,0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Pack into a single word with red in the lowest byte
    ///
    /// The in-memory layout of the word on a little endian machine is the
    /// byte order R, G, B, A
    ///
    ///     use trifill::Rgba8;
    ///
    ///     let c = Rgba8::new(0x11, 0x22, 0x33, 0xff);
    ///     assert_eq!(c.pack(), 0xff33_2211);
    ///     assert_eq!(Rgba8::unpack(c.pack()), c);
    ///
    pub fn pack(&self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }
    /// Unpack a word created by [pack](#method.pack)
    pub fn unpack(v: u32) -> Self {
        let [r, g, b, a] = v.to_le_bytes();
        Self::new(r, g, b, a)
    }
    /// Components as bytes, R, G, B, A
    pub fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Rgb8> for Rgba8 {
    fn from(c: Rgb8) -> Rgba8 {
        Rgba8::new( c.r, c.g, c.b, 255 )
    }
}
impl From<Rgba8> for Rgb8 {
    fn from(c: Rgba8) -> Rgb8 {
        Rgb8::new( c.r, c.g, c.b )
    }
}
impl From<[u8;3]> for Rgb8 {
    fn from(c: [u8;3]) -> Rgb8 {
        Rgb8::new( c[0], c[1], c[2] )
    }
}
