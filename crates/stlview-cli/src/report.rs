//! Text and JSON rendering of command results.

use serde::Serialize;
use stlview_core::{BoundingBoxSize, StlError};
use stlview_loader::ModelSummary;

/// One line of `stlview validate` output.
pub fn validation_line(path: &str, outcome: &Result<(), StlError>) -> String {
    match outcome {
        Ok(()) => format!("ok    {path}"),
        Err(err) => format!("FAIL  {path} [{}] {err}", err.kind()),
    }
}

/// Multi-line metrics block for one model.
pub fn info_block(summary: &ModelSummary<'_>) -> String {
    let info = &summary.info;
    format!(
        "{}\n  vertices: {}\n  faces:    {}\n  size:     {}",
        summary.name,
        info.vertex_count,
        info.face_count,
        format_size(&info.bounding_box)
    )
}

/// `X x Y x Z` with three decimals.
pub fn format_size(size: &BoundingBoxSize) -> String {
    format!("{:.3} x {:.3} x {:.3}", size.x, size.y, size.z)
}

/// Per-axis difference `right - left`.
pub fn size_delta(left: &BoundingBoxSize, right: &BoundingBoxSize) -> BoundingBoxSize {
    BoundingBoxSize {
        x: right.x - left.x,
        y: right.y - left.y,
        z: right.z - left.z,
    }
}

/// JSON body of `stlview compare --json`.
#[derive(Serialize)]
pub struct CompareReport<'a> {
    pub left: ModelSummary<'a>,
    pub right: ModelSummary<'a>,
    pub size_delta: BoundingBoxSize,
}

impl<'a> CompareReport<'a> {
    pub fn new(left: ModelSummary<'a>, right: ModelSummary<'a>) -> Self {
        let size_delta = size_delta(&left.info.bounding_box, &right.info.bounding_box);
        Self {
            left,
            right,
            size_delta,
        }
    }

    /// Side-by-side text form.
    pub fn to_text(&self) -> String {
        let l = &self.left.info;
        let r = &self.right.info;
        format!(
            "{:<10} {:>24} {:>24}\n{:<10} {:>24} {:>24}\n{:<10} {:>24} {:>24}\n{:<10} {:>24} {:>24}\n{:<10} {:>24}",
            "",
            self.left.name,
            self.right.name,
            "vertices",
            l.vertex_count,
            r.vertex_count,
            "faces",
            l.face_count,
            r.face_count,
            "size",
            format_size(&l.bounding_box),
            format_size(&r.bounding_box),
            "delta",
            format_size(&self.size_delta),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stlview_core::{ErrorKind, ModelInfo};

    fn summary(name: &str, x: f32) -> ModelSummary<'_> {
        ModelSummary {
            name,
            info: ModelInfo {
                vertex_count: 8,
                face_count: 12,
                bounding_box: BoundingBoxSize { x, y: 1.0, z: 2.0 },
            },
        }
    }

    #[test]
    fn test_validation_line() {
        assert_eq!(validation_line("a.stl", &Ok(())), "ok    a.stl");
        let err = ErrorKind::InvalidFormat.with_details("empty file cannot be loaded");
        let line = validation_line("b.stl", &Err(err));
        assert!(line.starts_with("FAIL  b.stl [invalid_format]"));
        assert!(line.ends_with("empty file cannot be loaded"));
    }

    #[test]
    fn test_info_block() {
        let text = info_block(&summary("cube.stl", 3.0));
        assert!(text.starts_with("cube.stl\n"));
        assert!(text.contains("faces:    12"));
        assert!(text.contains("3.000 x 1.000 x 2.000"));
    }

    #[test]
    fn test_compare_delta() {
        let report = CompareReport::new(summary("a.stl", 3.0), summary("b.stl", 5.5));
        assert_eq!(report.size_delta, BoundingBoxSize { x: 2.5, y: 0.0, z: 0.0 });
        assert!(report.to_text().contains("2.500 x 0.000 x 0.000"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["left"]["name"], "a.stl");
        assert_eq!(json["right"]["faceCount"], 12);
        assert_eq!(json["size_delta"]["x"], 2.5);
    }
}
