use edgemap::{EdgeDetector, GenericImage, ImageVisualizer};
use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb, RgbImage, Rgba, RgbaImage};

#[test]
fn gray_image_conversion() {
    let gray = GrayImage::from_fn(4, 3, |x, y| Luma([(x * 10 + y) as u8]));
    let image = GenericImage::<u8>::from(&gray);
    assert_eq!((image.width(), image.height()), (4, 3));
    assert_eq!(image.get(3, 2), 32);
    assert_eq!(image.to_gray_image(), gray);

    let gray16: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_pixel(2, 2, Luma([1000]));
    let image = GenericImage::<u16>::from(&gray16);
    assert_eq!(image.to_vec(), vec![1000; 4]);
}

#[test]
fn rgb_image_conversion() {
    let rgb = RgbImage::from_pixel(2, 1, Rgb([0x12, 0x34, 0x56]));
    let image = GenericImage::<u32>::from(&rgb);
    assert_eq!(image.to_vec(), vec![0xFF12_3456; 2]);
    assert_eq!(image.to_rgb_image(), rgb);

    let rgba = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 4]));
    let image = GenericImage::<u32>::from(&rgba);
    assert_eq!(image.get(0, 0), 0x0401_0203);
    assert_eq!(image.to_rgb_image().get_pixel(0, 0), &Rgb([1, 2, 3]));
}

#[test]
fn dynamic_image_conversion() {
    let dynamic = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, Rgb([255, 255, 255])));
    let packed = GenericImage::<u32>::from(&dynamic);
    assert_eq!(packed.to_vec(), vec![0xFFFF_FFFF; 6]);
    let gray = GenericImage::<u8>::from(&dynamic);
    assert_eq!(gray.to_vec(), vec![255; 6]);

    let dynamic = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([7])));
    assert_eq!(GenericImage::<u8>::from(&dynamic).to_vec(), vec![7; 4]);
    assert_eq!(GenericImage::<u32>::from(&dynamic).get(1, 1), 0xFF07_0707);
}

#[test]
fn render_edges_into_gray_image() {
    let source = GrayImage::from_fn(16, 8, |x, _| Luma([if x < 8 { 0 } else { 255 }]));
    let magnitude = EdgeDetector::default().detect_edges(&GenericImage::<u8>::from(&source));
    let rendered = ImageVisualizer::default().visualize(&magnitude).to_gray_image();
    assert_eq!(rendered.dimensions(), (16, 8));
    assert_eq!(rendered.get_pixel(2, 4), &Luma([0]));
    assert!(rendered.get_pixel(7, 4).0[0] > 0);
}
