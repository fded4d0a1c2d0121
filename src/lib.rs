pub mod cli;
pub mod dispatch;
pub mod error;
pub mod package;
pub mod summary;
pub mod types;
pub mod utils;

pub use dispatch::{WorkoutCode, process_packages, read_package};
pub use error::{Result, WorkoutError};
pub use package::{Package, sample_packages};
pub use summary::Summary;
pub use types::{Discipline, Training, Workout};
