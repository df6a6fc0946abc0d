pub mod frame_clock;
pub(crate) mod time_throttled_logger;
