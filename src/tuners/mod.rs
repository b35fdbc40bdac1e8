#[cfg(feature = "multi-threaded")]
mod standard_tuner;
mod single_threaded_tuner;

#[cfg(feature = "multi-threaded")]
pub use standard_tuner::StandardTuner;
pub use single_threaded_tuner::SingleThreadedTuner;
