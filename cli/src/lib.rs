use std::path::PathBuf;

use detector::{
    annotate, load_image, save_annotated, DetectorConfig, PipelineBuilder, RecordSink, Result,
    TableWriter, ThresholdRange,
};
use tracing::info;

/// One run of the tool: one input image, one annotated image, one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub input: PathBuf,
    pub output: PathBuf,
    pub csv: PathBuf,
    pub threshold: ThresholdRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows written to the table
    pub accepted: usize,
    /// Contours found before area filtering
    pub contours: usize,
}

/// Load, detect, annotate and write both outputs.
///
/// The table file is opened before any image work and is closed on every
/// return path; on error it may hold no rows.
pub fn run(invocation: &Invocation) -> Result<RunSummary> {
    let config = DetectorConfig::default().with_threshold(invocation.threshold);
    let mut table = TableWriter::create(&invocation.csv)?;

    let image = load_image(&invocation.input)?;
    info!(
        "Input image: {:?} ({}x{})",
        invocation.input,
        image.width(),
        image.height()
    );

    let pipeline = PipelineBuilder::from_config(&config);
    info!("{}, threshold {}", pipeline.info(), config.threshold);
    let detection = pipeline.process_image(&image)?;

    let annotated = annotate(
        &image,
        &detection.records,
        config.marker_radius,
        config.marker_color,
    );
    save_annotated(&annotated, &invocation.output)?;

    table.accept_all(&detection.records)?;
    table.finish()?;

    Ok(RunSummary {
        accepted: detection.accepted(),
        contours: detection.contour_count,
    })
}
