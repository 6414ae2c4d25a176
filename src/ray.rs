use crate::algebra::Vec3;

/// Half-line `origin + t·direction`, `t >= 0`.
/// `direction` should be unit length before it reaches an intersection test;
/// nothing here enforces that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin   : Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self { Self { origin, direction } }

    /// Ray from `origin` towards `target`, direction normalized.
    pub fn through(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, target.sub(origin).normalize())
    }
}
