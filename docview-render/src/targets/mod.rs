//! Built-in output targets.
//!
//! Each submodule implements [`RenderTarget`](crate::target::RenderTarget)
//! for one concrete output syntax. Targets only consume the render tree; all
//! structural decisions (order, grouping, identity) were already made by the
//! renderer.

pub mod html;
pub mod icons;
pub mod json;
pub mod treeviz;
