//! Validates determinism, two-tone closure and error boundedness of the dithering engine

use pixelmorph::raster::{BLACK, Bitmap, WHITE, bitmap::luminance, dither};

fn gradient(width: usize, height: usize) -> Bitmap {
    Bitmap::from_fn(width, height, |x, _| {
        let level = (x * 255 / width.max(1)) as u8;
        [level, level, level]
    })
}

fn checkerboard(size: usize) -> Bitmap {
    Bitmap::from_fn(size, size, |x, y| if (x + y) % 2 == 0 { BLACK } else { WHITE })
}

fn luminance_sum(bitmap: &Bitmap) -> f64 {
    let mut sum = 0.0;
    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            sum += bitmap.luminance(x, y).unwrap_or(0.0);
        }
    }
    sum
}

#[test]
fn test_dither_is_deterministic() {
    let input = gradient(16, 16);
    assert_eq!(dither(&input), dither(&input));
}

#[test]
fn test_dither_output_is_two_tone() {
    let input = gradient(16, 16);
    let output = dither(&input);

    assert_eq!(output.width(), 16);
    assert_eq!(output.height(), 16);

    for y in 0..output.height() {
        for x in 0..output.width() {
            let pixel = output.get(x, y).expect("pixel in bounds");
            assert!(
                pixel == BLACK || pixel == WHITE,
                "pixel at ({x}, {y}) is {pixel:?}, expected pure black or white"
            );
        }
    }
}

#[test]
fn test_dither_does_not_mutate_input() {
    let input = gradient(8, 8);
    let copy = input.clone();
    let _output = dither(&input);
    assert_eq!(input, copy);
}

#[test]
fn test_single_pixel_quantizes_to_nearest_level() {
    let dark = Bitmap::new(1, 1, [30, 30, 30]);
    let light = Bitmap::new(1, 1, [220, 220, 220]);

    assert_eq!(dither(&dark).get(0, 0), Some(BLACK));
    assert_eq!(dither(&light).get(0, 0), Some(WHITE));
}

#[test]
fn test_two_tone_input_passes_through() {
    // Pure black/white pixels carry zero quantization error
    let input = checkerboard(8);
    assert_eq!(dither(&input), input);
}

#[test]
fn test_quantization_error_stays_bounded() {
    // Error diffusion preserves mean intensity up to edge-dropped
    // contributions; the difference must not grow with pixel count
    let input = Bitmap::new(8, 8, [128, 128, 128]);
    let output = dither(&input);

    let drift = (luminance_sum(&output) - luminance_sum(&input)).abs();
    assert!(
        drift < 8.0,
        "intensity drift {drift} indicates runaway error accumulation"
    );
}

#[test]
fn test_mid_gray_produces_both_tones() {
    let input = Bitmap::new(16, 16, [128, 128, 128]);
    let output = dither(&input);

    let mut black = 0usize;
    let mut white = 0usize;
    for y in 0..output.height() {
        for x in 0..output.width() {
            if output.get(x, y) == Some(BLACK) {
                black += 1;
            } else {
                white += 1;
            }
        }
    }

    assert!(black > 0 && white > 0, "mid gray should dither to a mix");
    // Roughly half of each tone for a mid-gray field
    let ratio = white as f64 / (black + white) as f64;
    assert!((0.3..=0.7).contains(&ratio), "white ratio {ratio} is off");
}

#[test]
fn test_luminance_weights() {
    assert!(luminance([0, 0, 0]).abs() < f64::EPSILON);
    assert!((luminance([255, 255, 255]) - 1.0).abs() < 1e-9);
    assert!(luminance([0, 255, 0]) > luminance([255, 0, 0]));
    assert!(luminance([255, 0, 0]) > luminance([0, 0, 255]));
}
