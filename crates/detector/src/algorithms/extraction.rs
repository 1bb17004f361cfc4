use image::GrayImage;
use imageproc::point::Point;
use crate::{error::Result, traits::ContourExtractor, types::Contour};

/// Imageproc-based contour extractor.
///
/// Returns outer and hole borders alike as a flat list, each reduced to its
/// direction-change points. imageproc finds borders in raster order; the list
/// is reversed so the last border found comes first (bottom-to-top,
/// right-to-left).
#[derive(Debug, Clone, Default)]
pub struct ImageprocContourExtractor;

impl ContourExtractor for ImageprocContourExtractor {
    fn extract_contours(&self, binary_image: &GrayImage) -> Result<Vec<Contour>> {
        let contours = imageproc::contours::find_contours::<i32>(binary_image);

        let result = contours
            .into_iter()
            .rev()
            .map(|contour| Contour::new(compress_chain(&contour.points)))
            .collect();

        Ok(result)
    }
}

/// Drop every point that continues the previous step in the same direction.
pub fn compress_chain(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let step = |from: Point<i32>, to: Point<i32>| (to.x - from.x, to.y - from.y);

    let kept: Vec<Point<i32>> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let curr = points[i];
            let next = points[(i + 1) % n];
            step(prev, curr) != step(curr, next)
        })
        .map(|i| points[i])
        .collect();

    // A ring always turns somewhere; guard against degenerate input anyway.
    if kept.is_empty() {
        points[..1].to_vec()
    } else {
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn block(img: &mut GrayImage, x0: u32, y0: u32, w: u32, h: u32) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }
    }

    #[test]
    fn compresses_rectangle_to_corners() {
        let mut img = GrayImage::new(20, 20);
        block(&mut img, 3, 4, 7, 6);

        let contours = ImageprocContourExtractor.extract_contours(&img).unwrap();
        assert_eq!(contours.len(), 1);

        let mut corners: Vec<(i32, i32)> =
            contours[0].points.iter().map(|p| (p.x, p.y)).collect();
        corners.sort();
        assert_eq!(corners, vec![(3, 4), (3, 9), (9, 4), (9, 9)]);
    }

    #[test]
    fn returns_bottom_blobs_first() {
        let mut img = GrayImage::new(30, 30);
        block(&mut img, 2, 2, 4, 4);
        block(&mut img, 20, 22, 4, 4);

        let contours = ImageprocContourExtractor.extract_contours(&img).unwrap();
        assert_eq!(contours.len(), 2);
        assert!(contours[0].points.iter().all(|p| p.y >= 22));
        assert!(contours[1].points.iter().all(|p| p.y <= 5));
    }

    #[test]
    fn hole_borders_are_returned_flat() {
        let mut img = GrayImage::new(30, 30);
        block(&mut img, 5, 5, 15, 15);
        for y in 9..15 {
            for x in 9..15 {
                img.put_pixel(x, y, Luma([0u8]));
            }
        }

        let contours = ImageprocContourExtractor.extract_contours(&img).unwrap();
        assert_eq!(contours.len(), 2);
    }

    #[test]
    fn single_pixel_blob_keeps_its_point() {
        let mut img = GrayImage::new(10, 10);
        img.put_pixel(4, 4, Luma([185u8]));

        let contours = ImageprocContourExtractor.extract_contours(&img).unwrap();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].points, vec![Point::new(4, 4)]);
    }

    #[test]
    fn empty_mask_has_no_contours() {
        let img = GrayImage::new(10, 10);
        assert!(ImageprocContourExtractor.extract_contours(&img).unwrap().is_empty());
    }

    #[test]
    fn compress_keeps_line_ends() {
        let line: Vec<Point<i32>> = [(0, 0), (1, 0), (2, 0), (3, 0), (2, 0), (1, 0)]
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect();
        assert_eq!(compress_chain(&line), vec![Point::new(0, 0), Point::new(3, 0)]);
    }
}
