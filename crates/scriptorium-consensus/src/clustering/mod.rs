//! Bundled density clusterer. The pipeline only sees it through
//! [`scriptorium_core::traits::DensityClusterer`].

pub mod optics;

pub use optics::OpticsClusterer;
