use crate::foundation::error::{LoopreelError, LoopreelResult};
use crate::foundation::math::mul_div255;

pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }
    let inv = 255 - sa;
    let mut out = [0u8; 4];
    for i in 0..4 {
        let v = u16::from(src[i]) + mul_div255(u16::from(dst[i]), inv);
        out[i] = v.min(255) as u8;
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> LoopreelResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(LoopreelError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Flatten premultiplied pixels over an opaque background, writing opaque RGBA8 to `dst`.
pub fn flatten_over_bg(dst: &mut [u8], src_premul: &[u8], bg: [u8; 3]) -> LoopreelResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(LoopreelError::encode(
            "flatten_over_bg expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let inv = 255 - u16::from(s[3]);
        for i in 0..3 {
            let v = u16::from(s[i]) + mul_div255(u16::from(bg[i]), inv);
            d[i] = v.min(255) as u8;
        }
        d[3] = 255;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
