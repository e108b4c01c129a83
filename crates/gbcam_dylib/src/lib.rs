//! Forces dynamic linking of `gbcam-rs` internals when the `dynamic_linking` feature is enabled.

#![allow(clippy::single_component_path_imports)]

#[allow(unused_imports)]
use gbcam_internal;
