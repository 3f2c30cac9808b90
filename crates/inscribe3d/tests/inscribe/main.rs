#[macro_use]
extern crate approx;

mod decomposition;
mod grid;
mod location;
mod meshes;
mod solvers;
