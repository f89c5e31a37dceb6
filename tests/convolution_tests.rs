use edgemap::pixels::{pack_argb, unpack_rgb, Sample, Scalar, Triple};
use edgemap::{
    convolve, gaussian_mask, Convolution, GaussianBlur, GenericImage, PackedRgbCanvas,
    ScalarCanvas, SobelDirection, SobelOperator, SquareKernel,
};


mod sobel {
    use super::*;

    #[test]
    fn gradient_of_constant_image() {
        let image = testing::constant_image(6, 5, 128u8);

        let gx = SobelOperator::x().apply(&image);
        assert_eq!((gx.width(), gx.height()), (6, 5));
        for y in 0..5 {
            for x in 1..5 {
                assert_eq!(gx.get(x, y), 0., "gx({}, {})", x, y);
            }
            // Zero padding behind borders
            assert!(gx.get(0, y) > 0.);
            assert!(gx.get(5, y) < 0.);
        }
        assert_eq!(gx.get(0, 2), 512.);
        assert_eq!(gx.get(0, 0), 384.);

        let gy = SobelOperator::y().apply(&image);
        for y in 1..4 {
            for x in 0..6 {
                assert_eq!(gy.get(x, y), 0., "gy({}, {})", x, y);
            }
        }
        assert!(gy.get(3, 0) > 0.);
        assert!(gy.get(3, 4) < 0.);
    }

    #[test]
    fn gradient_of_vertical_step() {
        let image = testing::vertical_step_image(8, 6, 4);
        let gx = SobelOperator::x().apply(&image);

        for y in 1..5 {
            assert_eq!(gx.get(3, y), 1020.);
            assert_eq!(gx.get(4, y), 1020.);
            for x in [0, 1, 2, 5, 6] {
                assert_eq!(gx.get(x, y), 0.);
            }
            assert_eq!(gx.get(7, y), -1020.);
        }

        let gy = SobelOperator::y().apply(&image);
        for y in 1..5 {
            for x in 0..8 {
                assert_eq!(gy.get(x, y), 0.);
            }
        }
    }

    #[test]
    fn gradient_of_horizontal_step() {
        let image = GenericImage::from_fn(5, 6, |_, y| if y < 3 { 10. } else { 20. });
        let gy = SobelOperator::new(SobelDirection::Y).apply(&image);
        for x in 1..4 {
            assert_eq!(gy.get(x, 2), 40.);
            assert_eq!(gy.get(x, 3), 40.);
            assert_eq!(gy.get(x, 1), 0.);
        }
    }

    #[test]
    fn operators() {
        assert_eq!(SobelOperator::x().direction(), SobelDirection::X);
        assert_eq!(SobelOperator::y().direction(), SobelDirection::Y);
        assert_eq!(SobelOperator::y().mask().weight(1, 0), -2.);
    }
}

mod gauss {
    use super::*;

    #[test]
    fn blur_constant_gray_image() {
        let image = testing::constant_image(5, 5, 100u8);
        let blurred = GaussianBlur::new().blur_gray(&image);
        assert_eq!((blurred.width(), blurred.height()), (5, 5));
        // 100 * sum of weights, truncated
        assert_eq!(blurred.get(2, 2), 77);
        assert_eq!(blurred.get(1, 3), 77);
        // Only four cells of the mask are inside of the image
        assert_eq!(blurred.get(0, 0), 41);
    }

    #[test]
    fn blur_gray_into_floats() {
        let image = testing::constant_image(3, 3, 100u8);
        let blurred = GaussianBlur::new().gray::<f64>().apply(&image);
        testing::assert_close(blurred.get(1, 1), 77.948_37, 1e-4);
    }

    #[test]
    fn blur_constant_rgb_image() {
        let image = testing::constant_image(4, 4, 0x10C8_6400);
        let blurred = GaussianBlur::new().blur_rgb(&image);
        assert_eq!((blurred.width(), blurred.height()), (4, 4));
        for pixel in blurred.pixels() {
            assert_eq!(pixel >> 24, 0xFF);
        }
        assert_eq!(unpack_rgb(blurred.get(1, 2)), [155, 77, 0]);
    }

    #[test]
    fn rgb_channels_are_saturated() {
        let brighten: Convolution<f64, Triple<f64>, _> =
            Convolution::new(SquareKernel::new(1), |_, _| 2., PackedRgbCanvas);
        let image = testing::constant_image(2, 2, pack_argb(200, 100, 10));
        let result = brighten.apply(&image);
        assert_eq!(result.get(1, 1), pack_argb(255, 200, 20));

        let darken: Convolution<f64, Triple<f64>, _> =
            Convolution::new(SquareKernel::new(1), |_, _| -1., PackedRgbCanvas);
        assert_eq!(darken.apply(&image).get(0, 0), pack_argb(0, 0, 0));
    }

    #[test]
    fn blur_of_impulse_reproduces_mask() {
        let mut image: GenericImage<f64> = GenericImage::new(5, 5);
        image.set(2, 2, 1.);
        let blur = GaussianBlur::new().side(3).sigma(0.7);
        let blurred = blur.gray::<f64>().apply(&image);
        let mask = gaussian_mask(SquareKernel::new(3), 0.7);
        for j in 0..3 {
            for i in 0..3 {
                testing::assert_close(blurred.get(i + 1, j + 1), mask.weight(i, j), 1e-12);
            }
        }
        assert_eq!(blurred.get(0, 0), 0.);
    }

    #[test]
    #[should_panic]
    fn even_kernel_size() {
        GaussianBlur::new().side(4);
    }

    #[test]
    #[should_panic]
    fn non_positive_sigma() {
        GaussianBlur::new().sigma(0.);
    }
}

mod driver {
    use super::*;

    #[test]
    fn convolve_triples_into_packed_pixels() {
        let mask = SquareKernel::new(3).compute_mask(|i, j| if i == 1 && j == 1 { 1. } else { 0. });
        let image = GenericImage::from_fn(3, 2, |x, y| Triple::new(x as u8, y as u8, 7u8));
        let result = convolve::<f64, Triple<f64>, _, _>(&mask, &PackedRgbCanvas, &image);
        assert_eq!(result.get(2, 1), pack_argb(2, 1, 7));
    }

    #[test]
    fn convolution_of_empty_image() {
        let image: GenericImage<u8> = GenericImage::new(0, 3);
        let result = SobelOperator::x().apply(&image);
        assert_eq!((result.width(), result.height()), (0, 3));
        assert!(result.is_empty());
    }

    #[test]
    fn convolve_unsized_source() {
        let image = testing::gray_pattern_image(7, 5);
        let source: &(dyn Sample<Scalar<f64>> + Sync) = &image;
        let result = SobelOperator::x().apply(source);
        assert_eq!((result.width(), result.height()), (7, 5));
        assert_eq!(result, SobelOperator::x().apply(&image));

        let mask = gaussian_mask(SquareKernel::new(3), 1.);
        let blurred = convolve::<f64, Scalar<f64>, _, _>(&mask, &ScalarCanvas::<u8>::new(), source);
        assert_eq!(blurred, GaussianBlur::new().blur_gray(&image));
    }

    /// Big images are processed by bands in the `rayon` thread pool.
    #[test]
    fn convolve_is_independent_of_processing_order() {
        let image = testing::gray_pattern_image(300, 257);
        let mask = gaussian_mask(SquareKernel::new(5), 1.2);
        let convolution: Convolution<f64, Scalar<f64>, ScalarCanvas<f64>> =
            Convolution::from_mask(mask.clone(), ScalarCanvas::new());
        let result = convolution.apply(&image);

        let expected = GenericImage::from_fn(300, 257, |x, y| {
            let value: Scalar<f64> = mask.evaluate(x, y, &image);
            value.0
        });
        assert_eq!(result, expected);
    }

    #[test]
    fn convolve_by_bands_in_thread_pool() {
        let image = testing::gray_pattern_image(300, 257);
        let sobel = SobelOperator::y();
        let expected = GenericImage::from_fn(300, 257, |x, y| {
            let value: Scalar<f64> = sobel.mask().evaluate(x, y, &image);
            value.0
        });

        for thread_count in [1, 2, 4, 7] {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(thread_count)
                .build()
                .unwrap();
            let result = pool.install(|| sobel.apply(&image));
            assert_eq!(result, expected, "threads: {}", thread_count);
        }
    }

    #[test]
    fn convolution_is_stateless() {
        let sobel = SobelOperator::x();
        let image = testing::gray_pattern_image(20, 10);
        let first = sobel.apply(&image);
        let second = sobel.apply(&image);
        assert_eq!(first, second);
    }
}
