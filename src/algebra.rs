use std::ops::{Add, Neg, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vec3(pub f64, pub f64, pub f64);

impl Vec3 {
    pub fn add(self, v: Self) -> Self { Self(self.0+v.0, self.1+v.1, self.2+v.2) }
    pub fn sub(self, v: Self) -> Self { Self(self.0-v.0, self.1-v.1, self.2-v.2) }
    pub fn dot(self, v: Self) -> f64 { self.0*v.0 + self.1*v.1 + self.2*v.2 }
    pub fn norm(self) -> f64 { self.dot(self).sqrt() }
    pub fn neg(self) -> Self { Self(-self.0,-self.1,-self.2) }

    /// Divides each component by the Euclidean magnitude.
    /// A zero vector yields NaN components; callers guarantee a non-zero input.
    pub fn normalize(self) -> Self {
        let m = self.norm();
        Self(self.0/m, self.1/m, self.2/m)
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, v: Self) -> Self { Vec3::add(self, v) }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, v: Self) -> Self { Vec3::sub(self, v) }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self { Vec3::neg(self) }
}
