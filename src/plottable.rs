#![warn(missing_docs)]
//! Rendering of a [`Scene`] to a diagram file with plotters.
use crate::{
    error::{LensimError, LsResult},
    rays::{RaySegment, RayStyle},
    scene::{Scene, HALF_HEIGHT, HALF_WIDTH, LENS_HALF_EXTENT},
};
use plotters::{
    backend::DrawingBackend,
    chart::{ChartBuilder, ChartContext},
    coord::{cartesian::Cartesian2d, types::RangedCoordf64, Shift},
    element::{Circle, Text},
    prelude::{BitMapBackend, DrawingArea, IntoDrawingArea, SVGBackend},
    series::{DashedLineSeries, LineSeries},
    style::{Color, IntoFont, BLACK, RED, WHITE},
};
use std::path::Path;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Figure size of the rendered diagram in pixels.
const FIGURE_SIZE: (u32, u32) = (600, 400);

/// Supported diagram file formats, selected by the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum DiagramFormat {
    /// bitmap output
    #[strum(serialize = "png")]
    Png,
    /// vector output
    #[strum(serialize = "svg")]
    Svg,
}

impl DiagramFormat {
    /// Determine the format from a file path extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::iter().find(|format| format.to_string() == extension)
    }
}

/// Trait for adding the possibility to render an element to a diagram file.
pub trait Plottable {
    /// Render this element to the given file.
    ///
    /// # Errors
    /// This function returns a [`LensimError::Render`] if the file extension
    /// maps to no supported backend or the drawing backend fails.
    fn to_plot(&self, file_path: &Path) -> LsResult<()>;
}

impl Plottable for Scene {
    fn to_plot(&self, file_path: &Path) -> LsResult<()> {
        let format = DiagramFormat::from_path(file_path).ok_or_else(|| {
            LensimError::Render(format!(
                "no plotting backend for output file {}",
                file_path.display()
            ))
        })?;
        match format {
            DiagramFormat::Png => {
                let root = BitMapBackend::new(file_path, FIGURE_SIZE).into_drawing_area();
                draw_scene(self, &root)
            }
            DiagramFormat::Svg => {
                let root = SVGBackend::new(file_path, FIGURE_SIZE).into_drawing_area();
                draw_scene(self, &root)
            }
        }
    }
}

type Chart2d<'a, B> = ChartContext<'a, B, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn render_error<E: std::fmt::Display>(error: E) -> LensimError {
    LensimError::Render(format!("drawing failed: {error}"))
}

fn draw_ray_segment<B: DrawingBackend>(
    chart: &mut Chart2d<'_, B>,
    segment: &RaySegment,
) -> LsResult<()> {
    let endpoints = [segment.start_point(), segment.end_point()];
    let style = RED.stroke_width(1);
    match segment.style() {
        RayStyle::Incidence => {
            chart
                .draw_series(LineSeries::new(endpoints, style).point_size(2))
                .map_err(render_error)?;
        }
        RayStyle::Transmitted => {
            chart
                .draw_series(LineSeries::new(endpoints, style))
                .map_err(render_error)?;
        }
        RayStyle::Virtual => {
            chart
                .draw_series(DashedLineSeries::new(endpoints, 5, 3, style))
                .map_err(render_error)?;
        }
    }
    Ok(())
}

fn draw_scene<B: DrawingBackend>(scene: &Scene, root: &DrawingArea<B, Shift>) -> LsResult<()> {
    root.fill(&WHITE).map_err(render_error)?;
    // bare cartesian plane, no mesh or axis decoration
    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .build_cartesian_2d(-HALF_WIDTH..HALF_WIDTH, -HALF_HEIGHT..HALF_HEIGHT)
        .map_err(render_error)?;

    // optical axis and lens plane
    chart
        .draw_series(LineSeries::new(
            [(-HALF_WIDTH, 0.0), (HALF_WIDTH, 0.0)],
            BLACK.stroke_width(1),
        ))
        .map_err(render_error)?;
    chart
        .draw_series(LineSeries::new(
            [(0.0, -LENS_HALF_EXTENT), (0.0, LENS_HALF_EXTENT)],
            BLACK.stroke_width(1),
        ))
        .map_err(render_error)?;

    // focal points and their labels
    for mark in scene.focal_marks {
        chart
            .draw_series(std::iter::once(Circle::new((mark, 0.0), 2, BLACK.filled())))
            .map_err(render_error)?;
    }
    for label in &scene.focal_labels {
        chart
            .draw_series(std::iter::once(Text::new(
                label.text.clone(),
                label.position,
                ("sans-serif", 14).into_font(),
            )))
            .map_err(render_error)?;
    }

    // rays first, object and image on top
    for segment in &scene.rays {
        draw_ray_segment(&mut chart, segment)?;
    }
    chart
        .draw_series(LineSeries::new(
            [(scene.object.position, 0.0), (scene.object.position, scene.object.height)],
            BLACK.stroke_width(2),
        ))
        .map_err(render_error)?;
    if let Some(image) = &scene.image {
        chart
            .draw_series(LineSeries::new(
                [(image.position, 0.0), (image.position, image.height)],
                BLACK.stroke_width(2),
            ))
            .map_err(render_error)?;
        chart
            .draw_series(std::iter::once(Circle::new(
                (image.position, image.height),
                3,
                RED.filled(),
            )))
            .map_err(render_error)?;
    }

    // numeric readouts
    for readout in &scene.readouts {
        chart
            .draw_series(std::iter::once(Text::new(
                readout.text.clone(),
                readout.position,
                ("sans-serif", 14).into_font(),
            )))
            .map_err(render_error)?;
    }
    root.present().map_err(render_error)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        imaging::{compute_image_position, ObjectState},
        lens::LensSystem,
    };

    fn test_scene(distance: f64) -> Scene {
        let lens = LensSystem::default();
        let object = ObjectState::new(distance, 0.3).unwrap();
        let image = compute_image_position(distance, 0.3, lens.image_focal()).ok();
        Scene::new(&lens, &object, image.as_ref()).unwrap()
    }
    #[test]
    fn format_from_path() {
        assert_eq!(
            DiagramFormat::from_path(Path::new("simul.png")),
            Some(DiagramFormat::Png)
        );
        assert_eq!(
            DiagramFormat::from_path(Path::new("dir/diagram.SVG")),
            Some(DiagramFormat::Svg)
        );
        assert_eq!(DiagramFormat::from_path(Path::new("diagram.pdf")), None);
        assert_eq!(DiagramFormat::from_path(Path::new("diagram")), None);
    }
    #[test]
    fn unsupported_extension_errors() {
        let scene = test_scene(-1.8);
        assert!(matches!(
            scene.to_plot(Path::new("diagram.pdf")),
            Err(LensimError::Render(_))
        ));
    }
    #[test]
    fn render_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagram.svg");
        test_scene(-1.8).to_plot(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.is_empty());
        assert!(written.contains("<svg"));
    }
    #[test]
    fn render_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagram.png");
        test_scene(-1.8).to_plot(&path).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert!(!written.is_empty());
        // PNG signature
        assert_eq!(&written[..4], b"\x89PNG");
    }
    #[test]
    fn render_svg_at_infinity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagram.svg");
        test_scene(-1.0).to_plot(&path).unwrap();
        assert!(path.exists());
    }
}
