use strum::{Display, EnumIter, IntoEnumIterator};

use crate::voice::tts::types::Voice;

/// Where the menu is. Every step consumes one state and yields the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    /// Pick a voice, then move on to text entry
    GenerateSpeech,
    /// Repeatedly read text for `voice` until `back`
    EnterText { voice: Voice },
    EditVoice,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum MainMenuOption {
    #[strum(to_string = "Generate Speech")]
    GenerateSpeech,
    #[strum(to_string = "Edit Voice Name")]
    EditVoiceName,
    #[strum(to_string = "Quit")]
    Quit,
}

impl MainMenuOption {
    /// Parse a 1-based menu number
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::iter().nth(number.checked_sub(1)?)
    }

    pub fn count() -> usize {
        Self::iter().count()
    }
}
