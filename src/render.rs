//! Text rendering of a score histogram for the terminal.

use crate::analyzers::types::Histogram;

const BAR: char = '#';

/// Widest bar, in characters. Taller bins are scaled down to fit.
const MAX_BAR_WIDTH: usize = 40;

/// Renders `hist` as one labelled bar per bin, with out-of-range counts
/// listed below when there are any.
pub fn render_histogram(title: &str, hist: &Histogram) -> String {
    let tallest = hist.counts.iter().copied().max().unwrap_or(0);
    let mut lines = vec![title.to_string()];

    for bin in hist.bins() {
        let label = format!(
            "[{}, {}{}",
            bin.lower,
            bin.upper,
            if bin.closed { ']' } else { ')' }
        );
        let bar: String = std::iter::repeat_n(BAR, bar_width(bin.count, tallest)).collect();
        lines.push(format!(
            "{label:<10} {bar:<width$} {}",
            bin.count,
            width = MAX_BAR_WIDTH
        ));
    }

    if hist.below_range > 0 {
        lines.push(format!("below 40:  {}", hist.below_range));
    }
    if hist.above_range > 0 {
        lines.push(format!("above 100: {}", hist.above_range));
    }

    lines.join("\n")
}

fn bar_width(count: usize, tallest: usize) -> usize {
    if tallest <= MAX_BAR_WIDTH {
        count
    } else {
        // Keep non-empty bins visible.
        (count * MAX_BAR_WIDTH).div_ceil(tallest)
    }
}
