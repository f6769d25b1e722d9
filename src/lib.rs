//! Background subtraction for mass-spectrometry peak lists.
//!
//! [`data::filter::filter`] is the whole contract: parse a pasted sample list
//! and a pasted background list, then drop every sample peak lying within
//! 5 ppm (of the sample's own m/z) of some background m/z.

pub mod data;
