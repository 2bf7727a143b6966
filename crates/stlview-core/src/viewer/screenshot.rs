use chrono::NaiveDateTime;

/// File name for a PNG screenshot taken at `at`:
/// `stl-screenshot-YYYYMMDD-HHMMSS.png`.
pub fn screenshot_filename(at: NaiveDateTime) -> String {
    format!("stl-screenshot-{}.png", at.format("%Y%m%d-%H%M%S"))
}
