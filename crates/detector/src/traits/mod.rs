use image::GrayImage;
use crate::{
    error::Result,
    types::{CentroidRecord, Contour, ShapeLabel},
};

/// Trait for image preprocessing algorithms
pub trait ImagePreprocessor: Send + Sync {
    /// Preprocess the grayscale image (e.g., blur, threshold)
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage>;
}

/// Trait for contour extraction algorithms
pub trait ContourExtractor: Send + Sync {
    /// Extract every closed boundary from a binary image, flat (no nesting)
    fn extract_contours(&self, image: &GrayImage) -> Result<Vec<Contour>>;
}

/// Trait for polygon shape classification
pub trait ShapeClassifier: Send + Sync {
    fn classify(&self, contour: &Contour) -> ShapeLabel;
}

/// Destination for accepted centroid records
pub trait RecordSink {
    fn accept(&mut self, record: &CentroidRecord) -> Result<()>;

    fn accept_all(&mut self, records: &[CentroidRecord]) -> Result<()> {
        for record in records {
            self.accept(record)?;
        }
        Ok(())
    }
}
