//! src/sphere.rs
//! -------------
//! Sphere with constant radius and a boolean ray test.

use crate::{algebra::Vec3, ray::Ray};
use serde::{Deserialize, Serialize};

/// Which constant term goes into the discriminant.
///
/// `Observed` subtracts `2r` (`dot(s,s) - r - r`), the silhouette this
/// program has always drawn. `Textbook` subtracts `r²`, the usual quadratic.
/// The two only agree at `r = 2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discriminant {
    #[default]
    Observed,
    Textbook,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64) -> Self { Self { center, radius } }

    /// `h = b² - c` for a ray with *unit* direction `rd`.
    pub fn discriminant(&self, ro: Vec3, rd: Vec3, formula: Discriminant) -> f64 {
        let s = ro.sub(self.center);
        let b = s.dot(rd);
        let c = match formula {
            Discriminant::Observed => s.dot(s) - self.radius - self.radius,
            Discriminant::Textbook => s.dot(s) - self.radius * self.radius,
        };
        b*b - c
    }

    /// True when the line through the ray meets the sphere.
    /// No distance is computed and an origin inside the sphere is not special.
    pub fn hit(&self, ray: &Ray, formula: Discriminant) -> bool {
        self.discriminant(ray.origin, ray.direction, formula) >= 0.0
    }
}
