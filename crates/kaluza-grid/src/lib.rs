//! N-dimensional periodic lattices for Kaluza simulations.
//!
//! This crate defines [`GridShape`] — the fixed-shape, uniform-spacing
//! lattice descriptor every field lives on — together with the three field
//! storage types ([`ScalarGrid`], [`ComplexGrid`], [`VectorGrid`]), the
//! periodic central-difference operators ([`ops::laplacian`],
//! [`ops::biharmonic`], [`ops::gradient`]), and the N-dimensional FFT
//! ([`fft::forward`], [`fft::inverse`]) used by the spectral Poisson solver.
//!
//! # Numeric policy
//!
//! All computation is `f64`. Operators are pure: they allocate their output
//! and never clamp, renormalize, or otherwise stabilize values — instability
//! is a caller concern addressed by step-size choice.
//!
//! # Boundary behavior
//!
//! Every operator wraps periodically: index arithmetic is modular over each
//! axis extent, so there are no edge special cases.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod complex;
pub mod error;
pub mod fft;
pub mod ops;
pub mod scalar;
pub mod shape;
pub mod vector;

pub use complex::ComplexGrid;
pub use error::GridError;
pub use scalar::ScalarGrid;
pub use shape::GridShape;
pub use vector::VectorGrid;
