pub mod builder;

use image::{DynamicImage, GrayImage};
use tracing::{debug, info, trace};
use crate::{
    algorithms::{contour_moments, to_grayscale},
    error::Result,
    traits::{ContourExtractor, ImagePreprocessor, ShapeClassifier},
    types::{AreaRange, CentroidRecord, Detection},
};

/// Detection pipeline: preprocessing chain, contour extraction, then
/// per-contour classification, moments and area filtering.
pub struct Pipeline {
    preprocessors: Vec<Box<dyn ImagePreprocessor>>,
    contour_extractor: Box<dyn ContourExtractor>,
    classifier: Box<dyn ShapeClassifier>,
    area_range: AreaRange,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    pub fn new(
        preprocessors: Vec<Box<dyn ImagePreprocessor>>,
        contour_extractor: Box<dyn ContourExtractor>,
        classifier: Box<dyn ShapeClassifier>,
        area_range: AreaRange,
    ) -> Self {
        Self {
            preprocessors,
            contour_extractor,
            classifier,
            area_range,
        }
    }

    /// Convert a decoded image to grayscale and run the pipeline on it.
    pub fn process_image(&self, image: &DynamicImage) -> Result<Detection> {
        let gray = to_grayscale(image)?;
        self.process(&gray)
    }

    /// Run the pipeline on a grayscale image.
    pub fn process(&self, image: &GrayImage) -> Result<Detection> {
        let mut mask = image.clone();
        for preprocessor in &self.preprocessors {
            mask = preprocessor.preprocess(&mask)?;
        }

        let contours = self.contour_extractor.extract_contours(&mask)?;
        debug!(count = contours.len(), "contours extracted");

        let mut records = Vec::new();
        for (position, contour) in contours.iter().enumerate() {
            let shape = self.classifier.classify(contour);
            let moments = contour_moments(contour);
            let area = moments.area();
            trace!(position, %shape, area, points = contour.len(), "contour classified");

            if !self.area_range.contains(area) {
                continue;
            }

            // Only reachable when the area range admits zero.
            let Some((x, y)) = moments.centroid() else {
                debug!(position, "zero-area contour skipped");
                continue;
            };

            let record = CentroidRecord {
                index: records.len(),
                x,
                y,
                area,
                shape,
            };
            debug!(index = record.index, x, y, area, %shape, "contour accepted");
            records.push(record);
        }

        info!(
            accepted = records.len(),
            contours = contours.len(),
            "detection finished"
        );

        Ok(Detection {
            records,
            contour_count: contours.len(),
            image_width: image.width(),
            image_height: image.height(),
        })
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!(
            "Pipeline: {} preprocessors, area range ({}, {})",
            self.preprocessors.len(),
            self.area_range.min,
            self.area_range.max
        )
    }
}
