//! Rendering of the memory-layout diagrams in rustdoc.
//!
//! With the `doc` feature, `svgbob` fences become inline SVG. Without it the diagram text
//! is passed through unchanged as a plain fenced block.

#[cfg(feature = "doc")]
macro_rules! layout_doc {
    ($($t:tt)*) => (svgbobdoc::transform!($($t)*));
}

#[cfg(not(feature = "doc"))]
macro_rules! layout_doc {
    ($( #![doc = $line:literal] )*) => (core::concat!($( $line, "\n" ),*));
    ($( #[doc = $line:literal] )*) => (core::concat!($( $line, "\n" ),*));
}

pub(crate) use layout_doc;
