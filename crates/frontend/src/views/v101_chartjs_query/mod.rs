pub mod view;

pub use view::ChartJsQueryView;
