pub mod algebra;
pub mod app;
pub mod buffer;
pub mod config;
pub mod display;
pub mod presenter;
pub mod ray;
pub mod sampler;
pub mod sphere;
pub mod surface;
