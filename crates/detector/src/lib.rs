//! # Blob Centroid Detector
//!
//! Finds small blob-like features in a thresholded grayscale image,
//! classifies their rough polygonal shape and reports their centroids.
//!
//! ## Core Features
//!
//! - **Trait-based Architecture**: preprocessors, contour extractors and shape
//!   classifiers are swappable
//! - **Pipeline System**: grayscale, 3x3 blur and binary threshold feed a flat
//!   contour extraction
//! - **Moment Filtering**: contours are accepted by polygon area (open interval)
//!   and reported by centroid
//! - **Annotation**: accepted centroids are marked on a copy of the source
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use detector::{DetectorConfig, PipelineBuilder, RecordSink, TableWriter};
//!
//! let config = DetectorConfig::default();
//! let pipeline = PipelineBuilder::from_config(&config);
//!
//! let image = detector::load_image("input.png")?;
//! let detection = pipeline.process_image(&image)?;
//!
//! let annotated = detector::annotate(
//!     &image,
//!     &detection.records,
//!     config.marker_radius,
//!     config.marker_color,
//! );
//! detector::save_annotated(&annotated, "output.png")?;
//!
//! let mut table = TableWriter::create("output.csv")?;
//! table.accept_all(&detection.records)?;
//! table.finish()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core modules
pub mod error;
pub mod config;
pub mod types;
pub mod traits;
pub mod algorithms;
pub mod pipeline;
pub mod io;

// Re-exports for convenience
pub use error::{DetectorError, Result};
pub use config::DetectorConfig;
pub use types::{AreaRange, CentroidRecord, Contour, Detection, Moments, ShapeLabel, ThresholdRange};
pub use traits::*;
pub use algorithms::*;
pub use pipeline::{Pipeline, builder::PipelineBuilder};
pub use io::*;
