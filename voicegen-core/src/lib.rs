pub mod formatter;
pub mod menu;
pub mod settings;
pub mod voice;

// Public library API
pub use formatter::{Formatter, TerminalFormatter};
pub use menu::{Menu, MenuState, Prompter, VoiceServices};
pub use settings::{Credential, Settings, SettingsManager};
pub use voice::audio::Player;
pub use voice::tts::{
    AudioBuffer, ElevenLabs, ElevenLabsConfig, SynthesisRequest, Synthesizer, Voice, VoiceAdmin,
    VoiceDirectory, VoiceError,
};
