//! Before/after comparison slider geometry.

/// Handle position (0..=100 %) for a pointer at `client_x` over a slider
/// whose box starts at `left` and is `width` wide. `None` for a collapsed
/// slider.
pub fn position_percent(client_x: f64, left: f64, width: f64) -> Option<f64> {
    if !(width > 0.0) || !client_x.is_finite() {
        return None;
    }
    Some(((client_x - left) / width * 100.0).clamp(0.0, 100.0))
}

/// CSS `left` for the handle.
pub fn handle_left(percent: f64) -> String {
    format!("{percent}%")
}

/// CSS `clip-path` revealing the after image up to `percent`.
pub fn after_clip(percent: f64) -> String {
    format!("inset(0 {}% 0 0)", 100.0 - percent)
}
