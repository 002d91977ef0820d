//! `bulkscale` is not a library.
//! This interface is unstable and subject to change at any time.
//! Please use this documentation only if you are developing `bulkscale`.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod decode;
mod encode;
pub mod error;
mod filename_utils;
pub mod plan;
mod resize;
mod scan;
