use crate::{buffer::ColorBuffer, surface::Surface};

/// Stretches every cell of `buf` into an `rx × ry` block of display pixels.
/// Hard-edged, no blending between neighbouring cells. The caller still has
/// to `present()` the surface.
pub fn blit(buf: &ColorBuffer, surface: &mut impl Surface) {
    if buf.rows() == 0 || buf.cols() == 0 {
        return;
    }
    let (width, height) = surface.size();
    let rx = width / buf.cols();
    let ry = height / buf.rows();

    for (l, c, color) in buf.cells() {
        surface.set_draw_color(color);
        for y in l * ry..(l + 1) * ry {
            for x in c * rx..(c + 1) * rx {
                surface.draw_point(x, y);
            }
        }
    }
}
