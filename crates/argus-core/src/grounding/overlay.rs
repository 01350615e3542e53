//! Bounding-box overlay rendering.
//!
//! Draws one hollow rectangle per grounded tool onto the source image,
//! scaling normalized coordinates by the pixel dimensions. Tool names are
//! reported through a color legend returned alongside the PNG rather than
//! rasterized into the pixels.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use super::parser::Tool;
use crate::error::ClientError;

/// Rectangle stroke width in pixels.
const STROKE: u32 = 3;

/// Named colors cycled across tools, in draw order.
const PALETTE: [(&str, [u8; 4]); 9] = [
    ("red", [230, 57, 70, 255]),
    ("green", [42, 157, 143, 255]),
    ("blue", [69, 123, 157, 255]),
    ("yellow", [233, 196, 106, 255]),
    ("magenta", [199, 62, 157, 255]),
    ("cyan", [82, 182, 250, 255]),
    ("orange", [244, 162, 97, 255]),
    ("purple", [131, 56, 236, 255]),
    ("lime", [128, 237, 153, 255]),
];

/// One legend row: which color marks which tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub name: String,
    pub color: &'static str,
}

/// A rendered overlay: annotated PNG bytes plus the color legend.
#[derive(Debug, Clone)]
pub struct Overlay {
    pub png: Vec<u8>,
    pub legend: Vec<LegendEntry>,
    pub width: u32,
    pub height: u32,
}

/// Render bounding-box overlays onto the source image.
///
/// Coordinates are clamped to the image bounds; degenerate boxes draw as
/// thin lines. Dimensions are preserved.
pub fn render(image_bytes: &[u8], tools: &[Tool]) -> Result<Overlay, ClientError> {
    let source = image::load_from_memory(image_bytes)?;
    let mut canvas = source.to_rgba8();
    let (width, height) = (canvas.width(), canvas.height());

    let mut legend = Vec::with_capacity(tools.len());
    for (index, tool) in tools.iter().enumerate() {
        let (color_name, rgba) = PALETTE[index % PALETTE.len()];
        draw_rect(&mut canvas, &tool.bbox.scaled(width, height), Rgba(rgba));
        legend.push(LegendEntry {
            name: tool.name.clone(),
            color: color_name,
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(canvas).write_to(&mut buffer, ImageFormat::Png)?;

    Ok(Overlay {
        png: buffer.into_inner(),
        legend,
        width,
        height,
    })
}

/// A bounding box resolved to pixel coordinates, clamped to the image.
struct PixelRect {
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
}

impl super::parser::BoundingBox {
    fn scaled(&self, width: u32, height: u32) -> PixelRect {
        let clamp_x = |v: f32| ((v * width as f32) as i64).clamp(0, width as i64 - 1) as u32;
        let clamp_y = |v: f32| ((v * height as f32) as i64).clamp(0, height as i64 - 1) as u32;
        let (x1, x2) = (clamp_x(self.x1), clamp_x(self.x2));
        let (y1, y2) = (clamp_y(self.y1), clamp_y(self.y2));
        // Tolerate swapped corners rather than drawing nothing
        PixelRect {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }
}

/// Draw a hollow rectangle with [`STROKE`]-pixel edges growing inward.
fn draw_rect(canvas: &mut RgbaImage, rect: &PixelRect, color: Rgba<u8>) {
    for t in 0..STROKE {
        let top = rect.y1.saturating_add(t).min(rect.y2);
        let bottom = rect.y2.saturating_sub(t).max(rect.y1);
        for x in rect.x1..=rect.x2 {
            canvas.put_pixel(x, top, color);
            canvas.put_pixel(x, bottom, color);
        }

        let left = rect.x1.saturating_add(t).min(rect.x2);
        let right = rect.x2.saturating_sub(t).max(rect.x1);
        for y in rect.y1..=rect.y2 {
            canvas.put_pixel(left, y, color);
            canvas.put_pixel(right, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grounding::parser::BoundingBox;

    fn white_png(width: u32, height: u32) -> Vec<u8> {
        let canvas = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(canvas)
            .write_to(&mut buffer, ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    fn tool(name: &str, bbox: BoundingBox) -> Tool {
        Tool {
            name: name.to_string(),
            bbox,
        }
    }

    #[test]
    fn test_render_preserves_dimensions() {
        let png = white_png(200, 100);
        let overlay = render(
            &png,
            &[tool("hammer", BoundingBox { x1: 0.1, y1: 0.1, x2: 0.5, y2: 0.5 })],
        )
        .unwrap();
        assert_eq!((overlay.width, overlay.height), (200, 100));

        let rendered = image::load_from_memory(&overlay.png).unwrap();
        assert_eq!((rendered.width(), rendered.height()), (200, 100));
    }

    #[test]
    fn test_render_colors_box_corner() {
        let png = white_png(100, 100);
        let overlay = render(
            &png,
            &[tool("hammer", BoundingBox { x1: 0.2, y1: 0.2, x2: 0.8, y2: 0.8 })],
        )
        .unwrap();
        let rendered = image::load_from_memory(&overlay.png).unwrap().to_rgba8();
        // Top-left corner of the box takes the first palette color (red)
        assert_eq!(rendered.get_pixel(20, 20), &Rgba([230, 57, 70, 255]));
        // Center stays untouched
        assert_eq!(rendered.get_pixel(50, 50), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_legend_matches_tool_order() {
        let png = white_png(50, 50);
        let tools = vec![
            tool("hammer", BoundingBox { x1: 0.0, y1: 0.0, x2: 0.4, y2: 0.4 }),
            tool("wrench", BoundingBox { x1: 0.5, y1: 0.5, x2: 0.9, y2: 0.9 }),
        ];
        let overlay = render(&png, &tools).unwrap();
        assert_eq!(overlay.legend.len(), 2);
        assert_eq!(overlay.legend[0].name, "hammer");
        assert_eq!(overlay.legend[0].color, "red");
        assert_eq!(overlay.legend[1].name, "wrench");
        assert_eq!(overlay.legend[1].color, "green");
    }

    #[test]
    fn test_out_of_range_coordinates_are_clamped() {
        let png = white_png(40, 40);
        let overlay = render(
            &png,
            &[tool("outlier", BoundingBox { x1: -0.5, y1: 0.5, x2: 1.5, y2: 2.0 })],
        );
        assert!(overlay.is_ok());
    }

    #[test]
    fn test_invalid_image_bytes_error() {
        let result = render(b"not a png", &[]);
        assert!(result.is_err());
    }
}
