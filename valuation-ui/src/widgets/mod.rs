mod result;

pub use result::result_panel;
