//! Fixed color constants used by the generated chart configurations.

/// Chart.js palette for category charts (pie/doughnut), cycled by slice index
pub const CATEGORY_PALETTE: [&str; 5] = [
    "rgba(41, 98, 255, 0.8)",
    "rgba(21, 67, 96, 0.8)",
    "rgba(33, 150, 243, 0.8)",
    "rgba(2, 119, 189, 0.8)",
    "rgba(0, 77, 153, 0.8)",
];

/// Chart.js fill color for the single series of bar and line charts
pub const SERIES_COLOR: &str = CATEGORY_PALETTE[0];

/// Chart.js border color for every dataset
pub const BORDER_COLOR: &str = "rgba(13, 71, 161, 1)";

/// Chart.js axis grid lines
pub const GRID_COLOR: &str = "rgba(144, 164, 174, 0.3)";

/// Chart.js axis tick and legend text
pub const TEXT_COLOR: &str = "rgba(13, 71, 161, 1)";

/// ECharts bar series color
pub const ECHARTS_BAR_COLOR: &str = "#3b82f6";

/// ECharts line series color
pub const ECHARTS_LINE_COLOR: &str = "#2563eb";

/// ECharts pie slice palette, cycled by datum index
pub const ECHARTS_PIE_PALETTE: [&str; 3] = ["#2563eb", "#3b82f6", "#93c5fd"];

/// One palette color per slice for `count` slices, cycling past the end
pub fn category_colors(count: usize) -> Vec<&'static str> {
    (0..count)
        .map(|i| CATEGORY_PALETTE[i % CATEGORY_PALETTE.len()])
        .collect()
}

/// ECharts pie slice color for a datum index
pub fn echarts_pie_color(index: usize) -> &'static str {
    ECHARTS_PIE_PALETTE[index % ECHARTS_PIE_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_colors_cycle_modulo_palette() {
        let colors = category_colors(7);
        assert_eq!(colors.len(), 7);
        assert_eq!(colors[0], CATEGORY_PALETTE[0]);
        assert_eq!(colors[4], CATEGORY_PALETTE[4]);
        assert_eq!(colors[5], CATEGORY_PALETTE[0]);
        assert_eq!(colors[6], CATEGORY_PALETTE[1]);
    }

    #[test]
    fn test_distinct_colors_bounded_by_palette() {
        for count in [1, 3, 5, 12] {
            let colors = category_colors(count);
            let distinct: std::collections::HashSet<&str> = colors.iter().copied().collect();
            assert_eq!(distinct.len(), count.min(CATEGORY_PALETTE.len()));
        }
    }

    #[test]
    fn test_echarts_pie_color_cycles() {
        assert_eq!(echarts_pie_color(0), "#2563eb");
        assert_eq!(echarts_pie_color(2), "#93c5fd");
        assert_eq!(echarts_pie_color(3), "#2563eb");
    }
}
