pub mod progress;

pub use progress::SpinnerProgress;
