use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Size of pixels buffer don't match to image dimensions")]
pub struct InvalidPixelsSize;

/// Returned by queries which need at least one pixel
/// (e.g. [GenericImage::max](crate::GenericImage::max)).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Operation is not supported for an empty image")]
pub struct EmptyImageError;
