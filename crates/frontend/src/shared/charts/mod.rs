//! Chart kinds, the row-to-axes adapter and the interop with the two
//! charting libraries loaded as page globals (Chart.js and ECharts).

pub mod chartjs;
pub mod config;
pub mod echarts;
pub mod palette;
pub mod panel;
pub mod table;

/// Kind of visualization a query page can render
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
    Doughnut,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Doughnut,
    ];

    /// Value understood by the chart libraries, also the `<option>` value
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
        }
    }

    /// Select label
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Line => "Line",
            ChartKind::Pie => "Pie",
            ChartKind::Doughnut => "Doughnut",
        }
    }

    pub fn parse(value: &str) -> Option<ChartKind> {
        ChartKind::ALL.into_iter().find(|k| k.as_str() == value)
    }

    /// Category charts color each slice from the palette; axis charts use a
    /// single series color and draw scales.
    pub fn is_category(self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Doughnut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(ChartKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ChartKind::parse("radar"), None);
        assert_eq!(ChartKind::parse(""), None);
    }

    #[test]
    fn test_category_split() {
        assert!(!ChartKind::Bar.is_category());
        assert!(!ChartKind::Line.is_category());
        assert!(ChartKind::Pie.is_category());
        assert!(ChartKind::Doughnut.is_category());
    }

    #[test]
    fn test_default_is_bar() {
        assert_eq!(ChartKind::default(), ChartKind::Bar);
    }
}
