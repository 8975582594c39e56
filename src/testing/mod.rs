mod capture;

pub use capture::CaptureWriter;
