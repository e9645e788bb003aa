use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use std::sync::Arc;
use voicegen_core::voice::audio::playback::DefaultOutputPlayer;
use voicegen_core::{
    ElevenLabs, ElevenLabsConfig, Menu, Prompter, SettingsManager, TerminalFormatter,
    VoiceServices,
};

/// Reads menu input through rustyline
struct LinePrompter {
    editor: DefaultEditor,
}

impl Prompter for LinePrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            // Ctrl-C abandons the current line; the prompt is re-issued
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e).context("Failed to read input"),
        }
    }
}

pub struct InteractiveApp {
    menu: Menu,
}

impl InteractiveApp {
    pub fn new(settings_path: Option<PathBuf>, no_color: bool) -> Result<Self> {
        let settings_manager = match settings_path {
            Some(path) => SettingsManager::from_path(path)?,
            None => SettingsManager::new()?,
        };
        let settings = settings_manager.settings();

        let credential = settings_manager.credential()?;
        let client = ElevenLabs::new(ElevenLabsConfig::from_settings(credential, settings));
        let prompter = LinePrompter {
            editor: DefaultEditor::new()?,
        };
        let formatter = TerminalFormatter::new(settings.output.use_colors && !no_color);

        let menu = Menu::new(
            VoiceServices::from_client(Arc::new(client)),
            Box::new(DefaultOutputPlayer),
            Box::new(prompter),
            Box::new(formatter),
        )
        .with_output_dir(settings.output_dir());

        Ok(Self { menu })
    }

    pub async fn run(&mut self) {
        self.menu.run().await;
    }
}
