pub mod view;

pub use view::EChartsQueryView;
