use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb, RgbImage, Rgba, RgbaImage};

use crate::images::GenericImage;
use crate::pixels::{pack_argb, unpack_rgb};

// Implementations for single channel versions of ImageBuffer

macro_rules! impl_from_luma_buffer {
    ($component:ty) => {
        impl From<&ImageBuffer<Luma<$component>, Vec<$component>>> for GenericImage<$component> {
            fn from(image: &ImageBuffer<Luma<$component>, Vec<$component>>) -> Self {
                GenericImage::from_fn(image.width(), image.height(), |x, y| {
                    image.get_pixel(x, y).0[0]
                })
            }
        }
    };
}

impl_from_luma_buffer!(u8);
impl_from_luma_buffer!(u16);

/// Pixels are packed into opaque `0xFFRRGGBB` values.
impl From<&RgbImage> for GenericImage<u32> {
    fn from(image: &RgbImage) -> Self {
        GenericImage::from_fn(image.width(), image.height(), |x, y| {
            let Rgb([r, g, b]) = *image.get_pixel(x, y);
            pack_argb(r, g, b)
        })
    }
}

/// Pixels are packed into `0xAARRGGBB` values.
impl From<&RgbaImage> for GenericImage<u32> {
    fn from(image: &RgbaImage) -> Self {
        GenericImage::from_fn(image.width(), image.height(), |x, y| {
            let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
            u32::from_be_bytes([a, r, g, b])
        })
    }
}

/// Luma of the image, converted by [DynamicImage::to_luma8].
impl From<&DynamicImage> for GenericImage<u8> {
    fn from(image: &DynamicImage) -> Self {
        match image {
            DynamicImage::ImageLuma8(buffer) => buffer.into(),
            _ => (&image.to_luma8()).into(),
        }
    }
}

/// Colours of the image packed into `0xAARRGGBB` values.
impl From<&DynamicImage> for GenericImage<u32> {
    fn from(image: &DynamicImage) -> Self {
        match image {
            DynamicImage::ImageRgb8(buffer) => buffer.into(),
            DynamicImage::ImageRgba8(buffer) => buffer.into(),
            _ => (&image.to_rgba8()).into(),
        }
    }
}

impl GenericImage<u8> {
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width(), self.height(), |x, y| Luma([self.get(x, y)]))
    }
}

impl GenericImage<u32> {
    /// Alpha channel of packed pixels is dropped.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            Rgb(unpack_rgb(self.get(x, y)))
        })
    }
}
