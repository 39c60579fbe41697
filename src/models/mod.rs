pub mod package;
pub mod reading;

pub use package::{check_correct_data, Package};
pub use reading::Reading;
