/// Fixed pixel row separating the top band from the bottom band.
///
/// The background renderer, the secondary overlay and the bottom icon row all
/// anchor to this row regardless of canvas height.
pub const SPLIT_ROW: u32 = 198;

/// Premultiplied RGBA8 pixel (r,g,b already multiplied by a).
pub type PremulRgba8 = [u8; 4];

/// Straight (non-premultiplied) RGBA8 color, serialized as `[r, g, b, a]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_premul(self) -> PremulRgba8 {
        premultiply([self.r, self.g, self.b, self.a])
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(v: [u8; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

pub fn premultiply(px: [u8; 4]) -> PremulRgba8 {
    let a = u16::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let mul = |c: u8| ((u16::from(c) * a + 127) / 255) as u8;
    [mul(px[0]), mul(px[1]), mul(px[2]), px[3]]
}

pub fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let a = u32::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    if a == 255 {
        return px;
    }
    let div = |c: u8| ((u32::from(c) * 255 + a / 2) / a).min(255) as u8;
    [div(px[0]), div(px[1]), div(px[2]), px[3]]
}

pub fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let out = premultiply([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&out);
    }
}

pub fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let out = unpremultiply([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&out);
    }
}
