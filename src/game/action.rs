//! Player intents that drive a [`Game`](super::Game)

/// One mutating operation on the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartGame,
    StartRound,
    Type(char),
    Backspace,
    Submit,
    Undo,
    Acknowledge,
}

impl Action {
    /// Map a key name to an action
    ///
    /// Accepts "Enter", "Backspace" and single ASCII letters; anything else,
    /// including multi-letter strings, maps to nothing.
    ///
    /// # Examples
    /// ```
    /// use word_logic::game::Action;
    ///
    /// assert_eq!(Action::from_key("q"), Some(Action::Type('q')));
    /// assert_eq!(Action::from_key("Enter"), Some(Action::Submit));
    /// assert_eq!(Action::from_key("qu"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Submit),
            "Backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii_alphabetic() => Some(Self::Type(ch)),
                    _ => None,
                }
            }
        }
    }
}
