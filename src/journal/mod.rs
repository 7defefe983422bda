mod state;
pub mod store;
pub mod voice;

pub use store::{GardenSnapshot, JournalStore, DEFAULT_STORAGE_KEY};
pub use voice::{parse_transcript, VoiceCommand};
