pub mod view;

pub use view::SqlChainView;
