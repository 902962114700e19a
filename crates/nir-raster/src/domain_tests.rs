//! Domain-critical regression tests for nir-raster.
//!
//! These tests exercise the full decode, mix and encode path. Each test
//! documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::NirConverter;
    use crate::buffer::PixelBuffer;
    use crate::codec::bmp::{
        BmpFileHeader, BmpInfoHeader, FILE_HEADER_SIZE, GRAY_PALETTE_SIZE, INFO_HEADER_SIZE,
    };
    use crate::codec::pnm::{pgm_header_len, read_ppm, read_ppm_with_header};
    use crate::codec::{ContainerFormat, DecodeError, FormatError};
    use crate::kernel::{transform, WeightTriple};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn ppm(width: usize, height: usize, samples: &[u8]) -> Vec<u8> {
        let mut bytes = format!("P6\n{} {}\n255\n", width, height).into_bytes();
        bytes.extend_from_slice(samples);
        bytes
    }

    fn random_rgb(rng: &mut StdRng, width: usize, height: usize) -> PixelBuffer {
        let mut samples = vec![0u8; width * height * 3];
        rng.fill(&mut samples[..]);
        PixelBuffer::new(width, height, 3, samples).unwrap()
    }

    fn encode(format: ContainerFormat, image: &PixelBuffer) -> Vec<u8> {
        let mut out = Vec::new();
        format.encode(&mut out, image).unwrap();
        out
    }

    /// Split an encoded bitmap into its two header records and the bytes
    /// after the palette (if any).
    fn parse_bmp(bytes: &[u8]) -> (BmpFileHeader, BmpInfoHeader, &[u8]) {
        let file_bytes: [u8; FILE_HEADER_SIZE] = bytes[..FILE_HEADER_SIZE].try_into().unwrap();
        let info_bytes: [u8; INFO_HEADER_SIZE] = bytes
            [FILE_HEADER_SIZE..FILE_HEADER_SIZE + INFO_HEADER_SIZE]
            .try_into()
            .unwrap();
        let file = BmpFileHeader::from_bytes(&file_bytes).expect("BM signature");
        let info = BmpInfoHeader::from_bytes(&info_bytes);
        (file, info, &bytes[file.pixel_offset as usize..])
    }

    // ========================================================================
    // GAP 1: Reference mix values
    // ========================================================================

    /// If this breaks, it means: the default weights, normalization or
    /// rounding changed. Red, green, blue and white with the default
    /// weights are 191.25, 63.75, 0 and 255 before rounding.
    #[test]
    fn test_reference_two_by_two() {
        let bytes = ppm(2, 2, &[255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255]);
        let rgb = read_ppm(&bytes[..]).unwrap();
        let nir = transform(&rgb, WeightTriple::DEFAULT, false).unwrap();

        assert_eq!(nir.width(), 2);
        assert_eq!(nir.height(), 2);
        assert_eq!(nir.channels(), 1);
        assert_eq!(
            nir.samples(),
            &[191, 64, 0, 255],
            "REGRESSION: default mix of R, G, B, white must be 191, 64, 0, 255"
        );
    }

    /// If this breaks, it means: the gamma path stopped linearizing, or
    /// started re-encoding the mixed value back to sRGB.
    #[test]
    fn test_gamma_darkens_mid_gray() {
        let rgb = PixelBuffer::new(1, 1, 3, vec![128, 128, 128]).unwrap();
        let plain = transform(&rgb, WeightTriple::DEFAULT, false).unwrap();
        let gamma = transform(&rgb, WeightTriple::DEFAULT, true).unwrap();

        assert_eq!(plain.samples(), &[128]);
        assert_eq!(gamma.samples(), &[55]);
    }

    // ========================================================================
    // GAP 2: Mix invariants over arbitrary content
    // ========================================================================

    /// If this breaks, it means: normalization lost precision or the
    /// quantizer is biased. Any normalized mix of a gray pixel must return
    /// the same gray level.
    #[test]
    fn test_gray_is_preserved_without_gamma() {
        let weights = [
            WeightTriple::DEFAULT,
            WeightTriple::new(1.0, 1.0, 1.0),
            WeightTriple::new(0.2, 0.3, 0.5),
            WeightTriple::new(0.0, 0.0, 7.0),
        ];
        let samples: Vec<u8> = (0..=255u8).flat_map(|v| [v, v, v]).collect();
        let rgb = PixelBuffer::new(256, 1, 3, samples).unwrap();

        for w in weights {
            let nir = transform(&rgb, w, false).unwrap();
            for (v, out) in nir.samples().iter().enumerate() {
                assert_eq!(*out as usize, v, "gray {v} with weights {w}");
            }
        }
    }

    /// If this breaks, it means: linear-light output exceeded the plain mix
    /// for some gray level, so the decoding curve is wrong somewhere.
    #[test]
    fn test_gamma_never_brightens_gray() {
        let samples: Vec<u8> = (0..=255u8).flat_map(|v| [v, v, v]).collect();
        let rgb = PixelBuffer::new(256, 1, 3, samples).unwrap();
        let plain = transform(&rgb, WeightTriple::DEFAULT, false).unwrap();
        let gamma = transform(&rgb, WeightTriple::DEFAULT, true).unwrap();

        for (p, g) in plain.samples().iter().zip(gamma.samples()) {
            assert!(g <= p);
        }
        assert_eq!(gamma.samples()[0], 0);
        assert_eq!(gamma.samples()[255], 255);
    }

    /// If this breaks, it means: the kernel reads state it should not
    /// (uninitialized output, shared scratch, mutated input).
    #[test]
    fn test_transform_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(0x4e49_52);
        for _ in 0..8 {
            let width = rng.gen_range(1..40);
            let height = rng.gen_range(1..40);
            let rgb = random_rgb(&mut rng, width, height);
            let before = rgb.clone();
            let w = WeightTriple::new(rng.gen(), rng.gen(), rng.gen());
            let gamma = rng.gen_bool(0.5);

            let first = transform(&rgb, w, gamma).unwrap();
            let second = transform(&rgb, w, gamma).unwrap();
            assert_eq!(first, second);
            assert_eq!(rgb, before);
        }
    }

    /// If this breaks, it means: a degenerate weight triple produced NaN
    /// samples instead of falling back to the red channel.
    #[test]
    fn test_zero_weights_fall_back_to_red() {
        let rgb = PixelBuffer::new(1, 1, 3, vec![200, 10, 20]).unwrap();
        for w in [
            WeightTriple::new(0.0, 0.0, 0.0),
            WeightTriple::new(-1.0, 0.5, 0.0),
            WeightTriple::new(f32::NAN, 1.0, 1.0),
        ] {
            let nir = transform(&rgb, w, false).unwrap();
            assert_eq!(nir.samples(), &[200], "weights {w}");
        }
    }

    // ========================================================================
    // GAP 3: Container output matches the reference layouts
    // ========================================================================

    /// If this breaks, it means: the PGM header text or raster order
    /// changed.
    #[test]
    fn test_pgm_output_parses_back() {
        let mut rng = StdRng::seed_from_u64(7);
        let rgb = random_rgb(&mut rng, 5, 3);
        let nir = transform(&rgb, WeightTriple::DEFAULT, false).unwrap();
        let out = encode(ContainerFormat::TextPgm, &nir);

        let header_len = pgm_header_len(5, 3);
        assert_eq!(&out[..header_len], b"P5\n5 3\n255\n");
        assert_eq!(&out[header_len..], nir.samples());
    }

    /// If this breaks, it means: bitmap rows are no longer bottom-up, the
    /// padding is not zeroed, or the palette is not the identity gray ramp.
    #[test]
    fn test_gray_bitmap_layout() {
        let gray = PixelBuffer::new(3, 2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let out = encode(ContainerFormat::BitmapGray8, &gray);
        let (file, info, pixels) = parse_bmp(&out);

        assert_eq!(file.file_size as usize, out.len());
        assert_eq!(file.pixel_offset, 1078);
        assert_eq!(info.width, 3);
        assert_eq!(info.height, 2);
        assert_eq!(info.bits_per_pixel, 8);
        assert_eq!(info.colors_used, 0);
        assert_eq!(info.compression, 0);

        let palette = &out[FILE_HEADER_SIZE + INFO_HEADER_SIZE..][..GRAY_PALETTE_SIZE];
        for (i, entry) in palette.chunks_exact(4).enumerate() {
            assert_eq!(entry, &[i as u8, i as u8, i as u8, 0]);
        }

        // Row size 4: bottom row first, one zero pad byte each.
        assert_eq!(pixels, &[4, 5, 6, 0, 1, 2, 3, 0]);
    }

    /// If this breaks, it means: the RGB bitmap stopped swapping to BGR or
    /// lost its bottom-up order.
    #[test]
    fn test_rgb_bitmap_layout() {
        let rgb = PixelBuffer::new(1, 2, 3, vec![10, 20, 30, 40, 50, 60]).unwrap();
        let out = encode(ContainerFormat::BitmapRgb24, &rgb);
        let (file, info, pixels) = parse_bmp(&out);

        assert_eq!(file.pixel_offset, 54);
        assert_eq!(file.file_size, 54 + 8);
        assert_eq!(info.bits_per_pixel, 24);
        assert_eq!(info.colors_used, 0);
        assert_eq!(pixels, &[60, 50, 40, 0, 30, 20, 10, 0]);
    }

    /// If this breaks, it means: a 1x1 image is mis-sized in some
    /// container.
    #[test]
    fn test_single_pixel_in_every_format() {
        let rgb = read_ppm(&ppm(1, 1, &[0, 255, 0])[..]).unwrap();
        let nir = NirConverter::new().convert(&rgb).unwrap();
        assert_eq!(nir.samples(), &[64]);

        let pgm = encode(ContainerFormat::TextPgm, &nir);
        assert_eq!(pgm, b"P5\n1 1\n255\n\x40");

        let gray = encode(ContainerFormat::BitmapGray8, &nir);
        assert_eq!(gray.len(), 1078 + 4);
        assert_eq!(&gray[1078..], &[64, 0, 0, 0]);

        let bgr = encode(ContainerFormat::BitmapRgb24, &rgb);
        assert_eq!(bgr.len(), 54 + 4);
        assert_eq!(&bgr[54..], &[0, 255, 0, 0]);
    }

    /// If this breaks, it means: the size formulas drifted from
    /// `54 + 1024 + padded(w) * h` and `54 + padded(3w) * h`.
    #[test]
    fn test_bitmap_size_formulas() {
        let padded = |n: u64| (n + 3) / 4 * 4;
        for (w, h) in [(1, 1), (2, 3), (3, 1), (4, 4), (5, 2), (641, 3)] {
            assert_eq!(
                ContainerFormat::BitmapGray8.encoded_len(w, h).unwrap(),
                54 + 1024 + padded(w as u64) * h as u64
            );
            assert_eq!(
                ContainerFormat::BitmapRgb24.encoded_len(w, h).unwrap(),
                54 + padded(3 * w as u64) * h as u64
            );
        }
    }

    // ========================================================================
    // GAP 4: Decoder rejects malformed input
    // ========================================================================

    /// If this breaks, it means: the decoder accepts inputs it cannot
    /// represent and hands garbage to the kernel.
    #[test]
    fn test_decoder_rejections() {
        let cases: &[(&[u8], &str)] = &[
            (b"P3\n1 1\n255\n", "magic"),
            (b"P5\n1 1\n255\n\x00", "magic"),
            (b"P6\n0 1\n255\n", "width"),
            (b"P6\n1 -2\n255\n", "height"),
            (b"P6\n1 1\n256\n\x00\x00\x00\x00\x00\x00", "maxval"),
            (b"P6\n1 1\n0\n\x00\x00\x00", "maxval"),
            (b"P6\n1 x\n255\n", "height"),
            (b"P6\n1 1\n", "maxval"),
        ];
        for (bytes, field) in cases {
            match read_ppm(*bytes) {
                Err(DecodeError::Format(err)) => {
                    let matches_field = match &err {
                        FormatError::BadMagic { .. } => *field == "magic",
                        FormatError::MissingToken { field: f }
                        | FormatError::InvalidNumber { field: f, .. }
                        | FormatError::OutOfRange { field: f, .. }
                        | FormatError::TokenTooLong { field: f } => f == field,
                        FormatError::ImageTooLarge { .. } => false,
                    };
                    assert!(matches_field, "{:?}: got {err:?}", String::from_utf8_lossy(bytes));
                }
                other => panic!("{:?}: expected format error, got {other:?}", bytes),
            }
        }
    }

    /// If this breaks, it means: a short raster is silently zero-filled.
    #[test]
    fn test_truncated_raster() {
        let bytes = ppm(2, 2, &[1, 2, 3, 4, 5]);
        assert!(matches!(
            read_ppm(&bytes[..]),
            Err(DecodeError::Truncated {
                expected: 12,
                actual: 5
            })
        ));
    }

    /// If this breaks, it means: a small maxval is being rescaled. Samples
    /// are taken as raw bytes regardless of maxval.
    #[test]
    fn test_small_maxval_is_not_rescaled() {
        let (header, rgb) = read_ppm_with_header(&b"P6 1 1 15\n\x0f\x00\x00"[..]).unwrap();
        assert_eq!(header.maxval, 15);
        assert_eq!(rgb.samples(), &[15, 0, 0]);
    }
}
