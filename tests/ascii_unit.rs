//! Unit tests for the pixel buffer, resampler and ASCII renderer.
//!
//! These tests verify the numeric core:
//! - Brightness weighting
//! - The glyph ramp at every boundary
//! - Nearest-neighbor resizing
//! - Plain and colored rendering

use ascii_converter::ascii::*;
use ascii_converter::bitmap::{resize, ImageBuffer, Pixel};

fn gray(v: u8) -> Pixel {
    Pixel::rgb(v, v, v)
}

fn checker(width: u32, height: u32) -> ImageBuffer {
    ImageBuffer::from_fn(width, height, |x, y| {
        Pixel::new((x * 17) as u8, (y * 31) as u8, ((x + y) * 5) as u8, 200)
    })
}

// ==================== Brightness Tests ====================

#[test]
fn test_brightness_gray_is_identity() {
    // (2v + 3v + v) / 6 = v
    for v in 0..=255u8 {
        assert_eq!(gray(v).brightness(), u32::from(v));
    }
}

#[test]
fn test_brightness_integer_division() {
    // (2*10 + 3*20 + 31) / 6 = 111 / 6 = 18
    assert_eq!(brightness(10, 20, 31), 18);
    assert_eq!(Pixel::new(10, 20, 31, 0).brightness(), 18);
}

#[test]
fn test_brightness_channel_order() {
    // Green weighs most, then red, then blue
    let r = brightness(255, 0, 0);
    let g = brightness(0, 255, 0);
    let b = brightness(0, 0, 255);
    assert!(g > r, "green ({}) should be brighter than red ({})", g, r);
    assert!(r > b, "red ({}) should be brighter than blue ({})", r, b);
}

// ==================== Glyph Ramp Tests ====================

#[test]
fn test_glyph_boundaries() {
    assert_eq!(glyph_for(25), ' ');
    assert_eq!(glyph_for(26), '.');
    assert_eq!(glyph_for(225), '%');
    assert_eq!(glyph_for(226), '@');
}

#[test]
fn test_glyph_every_value_matches_table() {
    for b in 0..=255u32 {
        let expected = match b {
            0..=25 => ' ',
            26..=50 => '.',
            51..=75 => ':',
            76..=100 => '-',
            101..=125 => '=',
            126..=150 => '+',
            151..=175 => '*',
            176..=200 => '#',
            201..=225 => '%',
            _ => '@',
        };
        assert_eq!(glyph_for(b), expected, "brightness {}", b);
    }
}

#[test]
fn test_glyph_monotonic() {
    let ramp: Vec<char> = GLYPH_RAMP
        .iter()
        .map(|&(_, c)| c)
        .chain([BRIGHTEST_GLYPH])
        .collect();
    let pos = |c: char| ramp.iter().position(|&s| s == c).unwrap();
    for b in 1..=255u32 {
        assert!(pos(glyph_for(b)) >= pos(glyph_for(b - 1)));
    }
}

// ==================== Resize Tests ====================

#[test]
fn test_resize_identity() {
    let src = checker(7, 5);
    let out = resize(&src, 1.0, 1.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn test_resize_double_copies_blocks() {
    let src = checker(4, 3);
    let out = resize(&src, 2.0, 2.0).unwrap();
    assert_eq!(out.dimensions(), (8, 6));

    for y in 0..3 {
        for x in 0..4 {
            let p = src.pixel(x, y);
            assert_eq!(out.pixel(2 * x, 2 * y), p);
            assert_eq!(out.pixel(2 * x + 1, 2 * y), p);
            assert_eq!(out.pixel(2 * x, 2 * y + 1), p);
            assert_eq!(out.pixel(2 * x + 1, 2 * y + 1), p);
        }
    }
}

#[test]
fn test_resize_leaves_source_untouched() {
    let src = checker(3, 3);
    let copy = src.clone();
    let _ = resize(&src, 0.34, 2.5).unwrap();
    assert_eq!(src, copy);
}

#[test]
fn test_resize_output_pixels_come_from_source() {
    let src = checker(9, 7);
    let out = resize(&src, 0.7, 1.3).unwrap();
    assert_eq!(out.dimensions(), (6, 9));
    for p in out.pixels() {
        assert!(src.pixels().contains(p));
    }
}

#[test]
fn test_resize_awkward_scale_stays_in_bounds() {
    // 3 * 0.9 = 2.7 -> 2 columns; 1 / 0.9 = 1.11 -> column 1
    let src = checker(3, 3);
    let out = resize(&src, 0.9, 0.9).unwrap();
    assert_eq!(out.dimensions(), (2, 2));
    assert_eq!(out.pixel(1, 1), src.pixel(1, 1));
}

// ==================== Render Tests ====================

fn black_white() -> ImageBuffer {
    ImageBuffer::from_pixels(2, 1, vec![Pixel::BLACK, Pixel::WHITE]).unwrap()
}

#[test]
fn test_render_plain_black_white() {
    assert_eq!(render(&black_white(), RenderMode::Plain), " @\n");
}

#[test]
fn test_render_foreground_black_white() {
    let expected = format!(
        "\x1b[38;2;0;0;0m {}\x1b[38;2;255;255;255m@{}\n",
        RESET, RESET
    );
    assert_eq!(render(&black_white(), RenderMode::Foreground), expected);
}

#[test]
fn test_render_background_uses_48() {
    let buf = ImageBuffer::from_pixels(1, 1, vec![Pixel::rgb(12, 34, 56)]).unwrap();
    assert_eq!(
        render(&buf, RenderMode::Background),
        "\x1b[48;2;12;34;56m.\x1b[0m\n"
    );
}

#[test]
fn test_render_line_structure() {
    let buf = checker(5, 4);
    let text = render(&buf, RenderMode::Plain);
    let lines: Vec<&str> = text.split_terminator('\n').collect();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.chars().count() == 5));
    assert!(text.ends_with('\n'));
}

#[test]
fn test_render_colored_resets_every_glyph() {
    let buf = checker(3, 2);
    for mode in [RenderMode::Foreground, RenderMode::Background] {
        let text = render(&buf, mode);
        assert_eq!(text.matches(RESET).count(), 6);
        for line in text.lines() {
            assert!(line.ends_with(RESET));
        }
    }
}

#[test]
fn test_render_plain_follows_pixel_order() {
    let buf = checker(4, 2);
    let expected: String = (0..2)
        .map(|y| {
            let row: String = (0..4)
                .map(|x| glyph_for(buf.pixel(x, y).unwrap().brightness()))
                .collect();
            row + "\n"
        })
        .collect();
    assert_eq!(render(&buf, RenderMode::Plain), expected);
}
