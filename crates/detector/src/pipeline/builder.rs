use crate::{
    pipeline::Pipeline,
    config::DetectorConfig,
    traits::{ImagePreprocessor, ContourExtractor, ShapeClassifier},
    types::{AreaRange, ThresholdRange},
    algorithms::{
        BinaryThreshold,
        GaussianBlur3x3,
        ImageprocContourExtractor,
        PolygonShapeClassifier,
    },
};

/// Builder for creating detection pipelines with a fluent API
pub struct PipelineBuilder {
    preprocessors: Vec<Box<dyn ImagePreprocessor>>,
    contour_extractor: Option<Box<dyn ContourExtractor>>,
    classifier: Option<Box<dyn ShapeClassifier>>,
    area_range: AreaRange,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            preprocessors: Vec::new(),
            contour_extractor: None,
            classifier: None,
            area_range: AreaRange::default(),
        }
    }

    /// Add a preprocessor to the pipeline
    pub fn add_preprocessor<P>(mut self, preprocessor: P) -> Self
    where
        P: ImagePreprocessor + 'static,
    {
        self.preprocessors.push(Box::new(preprocessor));
        self
    }

    /// Set the contour extractor (replaces any existing one)
    pub fn set_contour_extractor<E>(mut self, extractor: E) -> Self
    where
        E: ContourExtractor + 'static,
    {
        self.contour_extractor = Some(Box::new(extractor));
        self
    }

    /// Set the shape classifier (replaces any existing one)
    pub fn set_classifier<C>(mut self, classifier: C) -> Self
    where
        C: ShapeClassifier + 'static,
    {
        self.classifier = Some(Box::new(classifier));
        self
    }

    pub fn with_area_range(mut self, area_range: AreaRange) -> Self {
        self.area_range = area_range;
        self
    }

    /// Add the 3x3 Gaussian blur
    pub fn with_blur(self) -> Self {
        self.add_preprocessor(GaussianBlur3x3)
    }

    /// Add the binary threshold
    pub fn with_threshold(self, range: ThresholdRange) -> Self {
        self.add_preprocessor(BinaryThreshold::new(range.min, range.max))
    }

    /// Build the pipeline with default components if not specified
    pub fn build(self) -> Pipeline {
        let contour_extractor = self.contour_extractor
            .unwrap_or_else(|| Box::new(ImageprocContourExtractor));

        let classifier = self.classifier
            .unwrap_or_else(|| Box::new(PolygonShapeClassifier::default()));

        Pipeline::new(
            self.preprocessors,
            contour_extractor,
            classifier,
            self.area_range,
        )
    }

    /// Blur, threshold, extract and classify with the given configuration
    pub fn from_config(config: &DetectorConfig) -> Pipeline {
        Self::new()
            .with_blur()
            .with_threshold(config.threshold)
            .set_classifier(PolygonShapeClassifier {
                tolerance: config.approx_tolerance,
                square_aspect: config.square_aspect,
            })
            .with_area_range(config.area)
            .build()
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
