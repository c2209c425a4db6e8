//! # betacf
//!
//! Continued fractions and the Beta function family, no-std compatible.
//! Everything is generic over `f32`/`f64` and stack-only.
//!
//! ## Quick start
//!
//! ```
//! use betacf::special::{log_beta, regularized_beta};
//!
//! // ln B(p, q) stays accurate where lgamma(p) + lgamma(q) − lgamma(p+q) cancels
//! let lb = log_beta(20.0_f64, 30.0);
//! assert!((lb + 33.968820791977386).abs() < 1e-12);
//!
//! // Regularized incomplete beta I_x(a, b)
//! let i = regularized_beta(0.5_f64, 2.0, 3.0).unwrap();
//! assert!((i - 0.6875).abs() < 1e-14);
//! ```
//!
//! ## Modules
//!
//! - [`special`]: Generic continued-fraction evaluation
//!   ([`special::ContinuedFraction`], [`special::from_fn`]) by the modified
//!   Lentz algorithm, the log-beta function with its log-gamma difference
//!   helpers, the regularized incomplete beta function, and the gamma
//!   functions they rest on. Regularized incomplete gamma P(a,x) / Q(a,x).
//!
//! - [`stats`]: Student's t and Beta distributions built on
//!   [`special::log_beta`] and [`special::regularized_beta`].
//!
//! - [`traits`]: [`FloatScalar`], the real-float bound used throughout.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//! | `libm`  | no       | Pure-Rust software float for `no_std` builds |
//!
//! A `no_std` build (`default-features = false`) must enable `libm`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("enable either the `std` or the `libm` feature for float math");

pub mod special;
pub mod stats;
pub mod traits;

pub use traits::FloatScalar;
