use std::num::NonZeroU32;

use rayon::current_num_threads;
use rayon::prelude::*;

use crate::images::{GenericImage, ImageBandMut};

#[inline]
pub(crate) fn split_h_image_for_threading<T: Send>(
    image: &mut GenericImage<T>,
) -> Option<impl ParallelIterator<Item = ImageBandMut<'_, T>>> {
    let num_parts = num_parts_for_threading(image.width(), image.height())?;
    let bands = image.split_by_height_mut(num_parts)?;
    Some(bands.into_par_iter())
}

/// Count of bands worth processing in parallel,
/// or `None` if the image should be processed in the current thread.
fn num_parts_for_threading(width: u32, height: u32) -> Option<NonZeroU32> {
    let max_num_parts = calculate_max_h_parts_number(width, height);
    let num_threads = current_num_threads() as u32;
    if num_threads > 1 && max_num_parts > 1 {
        NonZeroU32::new(num_threads.min(max_num_parts))
    } else {
        None
    }
}

/// It is not optimal to split images on too small parts.
/// We have to calculate minimal height of one part.
/// For small images, it is equal to `constant / area`.
/// For tall images, it is equal to `height / 256`.
fn calculate_max_h_parts_number(width: u32, height: u32) -> u32 {
    if width == 0 || height == 0 {
        return 1;
    }
    let area = height.saturating_mul(height.max(width));
    let min_height = ((1 << 14) / area).max(height / 256);
    height / min_height.max(1)
}
