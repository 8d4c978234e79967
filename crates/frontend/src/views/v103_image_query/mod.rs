pub mod view;

pub use view::ImageQueryView;
