pub mod recording_sink;
pub mod vec_stream;

pub use recording_sink::{RecordingHandle, RecordingSink};
pub use vec_stream::VecStream;
