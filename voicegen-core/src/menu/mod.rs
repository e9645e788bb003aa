//! The interactive menu: a state machine driven by a [`Prompter`] that talks
//! to the voice services and reports through a [`Formatter`].

pub mod prompt;
pub mod selection;
pub mod state;


use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{info, warn};

use crate::formatter::Formatter;
use crate::voice::audio::Player;
use crate::voice::tts::provider::{Synthesizer, VoiceAdmin, VoiceDirectory};
use crate::voice::tts::types::{AudioBuffer, SynthesisRequest, Voice};

pub use prompt::Prompter;
pub use selection::{parse_voice_choice, SelectionError};
pub use state::{MainMenuOption, MenuState};

const SEPARATOR_WIDTH: usize = 50;

/// The remote operations the menu dispatches to
#[derive(Clone)]
pub struct VoiceServices {
    pub directory: Arc<dyn VoiceDirectory>,
    pub synthesizer: Arc<dyn Synthesizer>,
    pub admin: Arc<dyn VoiceAdmin>,
}

impl VoiceServices {
    /// Use one client for every operation
    pub fn from_client<C>(client: Arc<C>) -> Self
    where
        C: VoiceDirectory + Synthesizer + VoiceAdmin + 'static,
    {
        Self {
            directory: client.clone(),
            synthesizer: client.clone(),
            admin: client,
        }
    }
}

enum VoicePick {
    Picked(Voice),
    /// Listing failed or came back empty
    Unavailable,
    InputClosed,
}

pub struct Menu {
    services: VoiceServices,
    player: Box<dyn Player>,
    prompter: Box<dyn Prompter>,
    formatter: Box<dyn Formatter>,
    output_dir: PathBuf,
}

impl Menu {
    pub fn new(
        services: VoiceServices,
        player: Box<dyn Player>,
        prompter: Box<dyn Prompter>,
        formatter: Box<dyn Formatter>,
    ) -> Self {
        Self {
            services,
            player,
            prompter,
            formatter,
            output_dir: PathBuf::from("."),
        }
    }

    /// Directory saved audio is written to
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Drive the state machine until the user quits or input runs out. An
    /// error from any step is reported once and ends the loop.
    pub async fn run(&mut self) {
        self.formatter
            .print_system("Welcome to ElevenLabs Voice Generator!");

        let mut state = MenuState::MainMenu;
        while state != MenuState::Exit {
            state = match self.step(state).await {
                Ok(next) => next,
                Err(e) => {
                    tracing::error!(error = ?e, "menu loop failed");
                    self.formatter
                        .print_error(&format!("An error occurred: {e:#}"));
                    break;
                }
            };
        }

        info!("menu loop finished");
    }

    pub async fn step(&mut self, state: MenuState) -> Result<MenuState> {
        tracing::debug!(?state, "menu step");
        match state {
            MenuState::MainMenu => self.main_menu(),
            MenuState::GenerateSpeech => self.generate_speech().await,
            MenuState::EnterText { voice } => self.enter_text(voice).await,
            MenuState::EditVoice => self.edit_voice().await,
            MenuState::Exit => Ok(MenuState::Exit),
        }
    }

    fn main_menu(&mut self) -> Result<MenuState> {
        self.formatter.print_line("");
        self.formatter.print_line("Menu:");
        for (i, option) in MainMenuOption::iter().enumerate() {
            self.formatter.print_line(&format!("{}. {option}", i + 1));
        }

        let prompt = format!("Enter your choice (1-{}): ", MainMenuOption::count());
        let Some(input) = self.prompter.read_line(&prompt)? else {
            return Ok(MenuState::Exit);
        };

        let next = match MainMenuOption::parse(&input) {
            Some(MainMenuOption::GenerateSpeech) => MenuState::GenerateSpeech,
            Some(MainMenuOption::EditVoiceName) => MenuState::EditVoice,
            Some(MainMenuOption::Quit) => {
                self.formatter.print_line("Goodbye!");
                MenuState::Exit
            }
            None => {
                self.formatter
                    .print_warning("Invalid choice. Please try again.");
                MenuState::MainMenu
            }
        };

        info!(?next, "main menu selection");
        Ok(next)
    }

    async fn generate_speech(&mut self) -> Result<MenuState> {
        match self.pick_voice().await? {
            VoicePick::Picked(voice) => Ok(MenuState::EnterText { voice }),
            VoicePick::Unavailable => Ok(MenuState::MainMenu),
            VoicePick::InputClosed => Ok(MenuState::Exit),
        }
    }

    async fn enter_text(&mut self, voice: Voice) -> Result<MenuState> {
        let Some(text) = self.prompter.read_line(
            "Enter the text you want to convert to speech (or 'back' to return to menu): ",
        )?
        else {
            return Ok(MenuState::Exit);
        };

        let text = text.trim();
        if text.eq_ignore_ascii_case("back") {
            return Ok(MenuState::MainMenu);
        }
        if text.is_empty() {
            self.formatter.print_warning("Text cannot be empty.");
            return Ok(MenuState::EnterText { voice });
        }

        self.formatter.print_system("Generating speech...");
        let request = SynthesisRequest::new(&voice, text);

        match self.services.synthesizer.synthesize(&request).await {
            Ok(audio) => {
                self.formatter.print_system("Playing generated audio...");
                if let Err(e) = self.player.play(&audio).await {
                    warn!(error = ?e, "playback failed");
                    self.formatter
                        .print_error(&format!("Error playing audio: {e:#}"));
                }

                if !self.offer_save(&audio)? {
                    return Ok(MenuState::Exit);
                }
            }
            Err(e) => {
                warn!(error = %e, voice_id = %voice.id, "synthesis failed");
                self.formatter
                    .print_error(&format!("Error generating speech: {e}"));
            }
        }

        self.formatter.print_line(&"-".repeat(SEPARATOR_WIDTH));
        Ok(MenuState::EnterText { voice })
    }

    /// Ask whether to keep the clip and write it out. `Ok(false)` means
    /// input ran out while asking.
    fn offer_save(&mut self, audio: &AudioBuffer) -> Result<bool> {
        let Some(answer) = self
            .prompter
            .read_line("Do you want to save this audio? (yes/no): ")?
        else {
            return Ok(false);
        };
        if !answer.trim().eq_ignore_ascii_case("yes") {
            return Ok(true);
        }

        let Some(name) = self
            .prompter
            .read_line("Enter filename to save (without extension): ")?
        else {
            return Ok(false);
        };
        let name = name.trim();
        if name.is_empty() {
            self.formatter
                .print_warning("Filename cannot be empty. Audio not saved.");
            return Ok(true);
        }

        match audio.save(&self.output_dir, name) {
            Ok(path) => {
                info!(?path, bytes = audio.len(), "audio saved");
                self.formatter
                    .print_success(&format!("Audio saved as {}", path.display()));
            }
            Err(e) => {
                warn!(error = ?e, "saving audio failed");
                self.formatter
                    .print_error(&format!("Error saving audio: {e:#}"));
            }
        }
        Ok(true)
    }

    async fn edit_voice(&mut self) -> Result<MenuState> {
        let voice = match self.pick_voice().await? {
            VoicePick::Picked(voice) => voice,
            VoicePick::Unavailable => return Ok(MenuState::MainMenu),
            VoicePick::InputClosed => return Ok(MenuState::Exit),
        };

        let Some(new_name) = self.prompter.read_line("Enter new name for the voice: ")? else {
            return Ok(MenuState::Exit);
        };
        let new_name = new_name.trim();
        if new_name.is_empty() {
            self.formatter
                .print_warning("Name cannot be empty. Operation cancelled.");
            return Ok(MenuState::MainMenu);
        }

        match self.services.admin.rename_voice(&voice.id, new_name).await {
            Ok(()) => {
                info!(voice_id = %voice.id, %new_name, "voice renamed");
                self.formatter.print_success(&format!(
                    "Voice name updated successfully to: {new_name}"
                ));
            }
            Err(e) => {
                warn!(error = %e, voice_id = %voice.id, "rename failed");
                self.formatter
                    .print_error(&format!("Error editing voice: {e}"));
            }
        }

        Ok(MenuState::MainMenu)
    }

    /// Fetch, list and select a voice
    async fn pick_voice(&mut self) -> Result<VoicePick> {
        let voices = self.fetch_voices().await;
        if voices.is_empty() {
            self.formatter
                .print_warning("No voices available. Try again...");
            return Ok(VoicePick::Unavailable);
        }

        self.show_voices(&voices);
        let Some(voice) = self.choose_voice(&voices)? else {
            return Ok(VoicePick::InputClosed);
        };

        self.formatter
            .print_system(&format!("Selected voice: {}", voice.name));
        Ok(VoicePick::Picked(voice))
    }

    async fn fetch_voices(&mut self) -> Vec<Voice> {
        match self.services.directory.list_voices().await {
            Ok(voices) => voices,
            Err(e) => {
                warn!(error = %e, "listing voices failed");
                self.formatter
                    .print_error(&format!("Error fetching voices: {e}"));
                Vec::new()
            }
        }
    }

    fn show_voices(&mut self, voices: &[Voice]) {
        self.formatter.print_line("");
        self.formatter.print_line("Available voices:");
        for (i, voice) in voices.iter().enumerate() {
            let line = match &voice.category {
                Some(category) => format!("{}. {} ({category})", i + 1, voice.name),
                None => format!("{}. {}", i + 1, voice.name),
            };
            self.formatter.print_line(&line);
        }
    }

    /// Re-prompt until the input names one of `voices`
    fn choose_voice(&mut self, voices: &[Voice]) -> Result<Option<Voice>> {
        loop {
            let Some(input) = self
                .prompter
                .read_line("Enter the number of the voice you want to use: ")?
            else {
                return Ok(None);
            };

            match parse_voice_choice(&input, voices.len()) {
                Ok(index) => return Ok(Some(voices[index].clone())),
                Err(e) => self.formatter.print_warning(&e.to_string()),
            }
        }
    }
}
