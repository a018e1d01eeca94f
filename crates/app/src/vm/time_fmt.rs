#[must_use]
pub fn format_secs(secs: f64) -> String {
    format!("{secs:.2}s")
}
