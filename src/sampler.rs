use crate::{
    algebra::Vec3,
    buffer::ColorBuffer,
    config::Config,
    ray::Ray,
    sphere::Sphere,
};

const EYE: Vec3 = Vec3(0.0, 0.0, 0.0);

/// Maps grid cells to points on the image plane and casts one ray per cell.
pub struct Sampler<'a> {
    config: &'a Config,
    sphere: Sphere,
    dx    : f64,
    dy    : f64,
}

impl<'a> Sampler<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            sphere: config.sphere(),
            dx: config.window.width / config.grid.columns as f64,
            dy: config.window.height / config.grid.rows as f64,
        }
    }

    /// Center of cell (row `l`, col `c`) on the image plane, `(x, y)`.
    /// Row 0 is the top edge, so `y` falls as `l` grows.
    pub fn cell_center(&self, l: usize, c: usize) -> (f64, f64) {
        let (w, h) = (self.config.window.width, self.config.window.height);
        let x = -w / 2.0 + self.dx / 2.0 + c as f64 * self.dx;
        let y = h / 2.0 - self.dy / 2.0 - l as f64 * self.dy;
        (x, y)
    }

    /// Primary ray from the eye through the center of cell `(l, c)`.
    pub fn ray(&self, l: usize, c: usize) -> Ray {
        let (x, y) = self.cell_center(l, c);
        // distance > 0, so the magnitude never vanishes
        Ray::through(EYE, Vec3(x, y, -self.config.window.distance))
    }

    pub fn hit(&self, l: usize, c: usize) -> bool {
        self.sphere.hit(&self.ray(l, c), self.config.discriminant)
    }

    /// Overwrites every cell of `buf` with the sphere or background color.
    pub fn fill(&self, buf: &mut ColorBuffer) {
        let (fg, bg) = (self.config.sphere_color(), self.config.background_color());
        for l in 0..buf.rows() {
            for c in 0..buf.cols() {
                buf.set(l, c, if self.hit(l, c) { fg } else { bg });
            }
        }
    }

    pub fn render(&self) -> ColorBuffer {
        let grid = self.config.grid;
        let mut buf = ColorBuffer::new(grid.rows, grid.columns, self.config.background_color());
        self.fill(&mut buf);
        buf
    }
}

/// Builds a fresh color buffer for `config`.
pub fn render(config: &Config) -> ColorBuffer {
    Sampler::new(config).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Discriminant;

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-12 }

    #[test]
    fn corner_cell_centers() {
        let config = Config::default();
        let s = Sampler::new(&config);
        let (x, y) = s.cell_center(0, 0);
        assert!(close(x, -0.49875) && close(y, 0.49875), "{x} {y}");
        let (x, y) = s.cell_center(399, 399);
        assert!(close(x, 0.49875) && close(y, -0.49875), "{x} {y}");
    }

    #[test]
    fn rows_run_top_to_bottom() {
        let config = Config::default();
        let s = Sampler::new(&config);
        assert!(s.cell_center(0, 0).1 > s.cell_center(1, 0).1);
        assert!(s.cell_center(0, 0).0 < s.cell_center(0, 1).0);
    }

    #[test]
    fn rays_start_at_eye_with_unit_direction() {
        let config = Config::default();
        let s = Sampler::new(&config);
        for (l, c) in [(0, 0), (0, 399), (123, 45), (200, 200), (399, 0)] {
            let r = s.ray(l, c);
            let (x, y) = s.cell_center(l, c);
            assert_eq!(r.origin, EYE);
            assert_eq!(r.direction, Vec3(x, y, -0.5).normalize());
            assert!((r.direction.norm() - 1.0).abs() < 1e-9);
            assert!(r.direction.2 < 0.0);
        }
    }

    #[test]
    fn center_is_sphere_and_corners_are_background() {
        let config = Config::default();
        let buf = render(&config);
        let (fg, bg) = (config.sphere_color(), config.background_color());
        assert_eq!(buf.get(199, 199), fg);
        assert_eq!(buf.get(200, 200), fg);
        for (l, c) in [(0, 0), (0, 399), (399, 0), (399, 399)] {
            assert_eq!(buf.get(l, c), bg);
        }
    }

    #[test]
    fn image_is_mirror_symmetric() {
        let config = Config::default();
        let buf = render(&config);
        let (n, m) = (buf.rows(), buf.cols());
        for l in 0..n {
            for c in 0..m {
                assert_eq!(buf.get(l, c), buf.get(l, m - 1 - c), "horizontal mirror at {l},{c}");
                assert_eq!(buf.get(l, c), buf.get(n - 1 - l, c), "vertical mirror at {l},{c}");
            }
        }
    }

    #[test]
    fn sphere_region_is_one_round_blob() {
        let config = Config::default();
        let buf = render(&config);
        let fg = config.sphere_color();

        let mut lit_rows = Vec::new();
        for l in 0..buf.rows() {
            let lit: Vec<usize> = (0..buf.cols()).filter(|&c| buf.get(l, c) == fg).collect();
            if lit.is_empty() { continue; }
            // one unbroken run per row
            assert_eq!(lit.len(), lit[lit.len() - 1] - lit[0] + 1, "row {l} is split");
            lit_rows.push((l, lit.len()));
        }
        // lit rows are contiguous
        let first = lit_rows[0].0;
        let last = lit_rows[lit_rows.len() - 1].0;
        assert_eq!(lit_rows.len(), last - first + 1);

        // as tall as it is wide
        let widest = lit_rows.iter().map(|&(_, w)| w).max().unwrap();
        assert_eq!(widest, lit_rows.len());

        // x² + y² <= 1/12 on the image plane: radius ≈ 115.5 cells
        assert!((225..=235).contains(&widest), "diameter {widest}");
    }

    #[test]
    fn textbook_formula_draws_a_smaller_disc() {
        let observed = Config::default();
        let textbook = Config { discriminant: Discriminant::Textbook, ..Config::default() };
        let fg = observed.sphere_color();
        let count = |buf: &ColorBuffer| buf.cells().filter(|&(_, _, p)| p == fg).count();
        let (a, b) = (count(&render(&observed)), count(&render(&textbook)));
        assert!(b > 0 && b < a, "observed {a}, textbook {b}");
    }

    #[test]
    fn rendering_is_repeatable() {
        let config = Config::default();
        assert_eq!(render(&config), render(&config));
    }

    #[test]
    fn fill_replaces_stale_contents() {
        let config = Config::default();
        let mut buf = ColorBuffer::new(400, 400, image::Rgba([0, 0, 0, 0]));
        Sampler::new(&config).fill(&mut buf);
        assert_eq!(buf, render(&config));
    }
}
