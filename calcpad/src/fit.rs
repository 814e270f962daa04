//! Shrink the entry font until the number fits the display

/// Largest size between `min` and `max`, stepping down one point at a
/// time, at which `measure(size)` is no wider than `available_width`.
/// Text that is too wide even at `min` is drawn at `min`.
pub fn fit_font_size(max: f32, min: f32, available_width: f32, measure: impl Fn(f32) -> f32) -> f32 {
    let mut size = max;
    while size > min && measure(size) > available_width {
        size -= 1.0;
    }
    size.max(min)
}
