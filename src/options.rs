//! Game configuration options.

/// Configuration options for a cribbage game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_winning_score(61)
///     .with_cards_per_player(6)
///     .with_discards_per_player(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Score that wins the game.
    pub winning_score: u32,
    /// Cards dealt to each player.
    pub cards_per_player: usize,
    /// Cards each player lays away to the crib.
    pub discards_per_player: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            winning_score: 121,
            cards_per_player: 6,
            discards_per_player: 2,
        }
    }
}

impl GameOptions {
    /// Sets the winning score.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(61);
    /// assert_eq!(options.winning_score, 61);
    /// ```
    #[must_use]
    pub const fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_cards_per_player(5);
    /// assert_eq!(options.cards_per_player, 5);
    /// ```
    #[must_use]
    pub const fn with_cards_per_player(mut self, cards: usize) -> Self {
        self.cards_per_player = cards;
        self
    }

    /// Sets the number of cards each player discards to the crib.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_discards_per_player(1);
    /// assert_eq!(options.discards_per_player, 1);
    /// ```
    #[must_use]
    pub const fn with_discards_per_player(mut self, discards: usize) -> Self {
        self.discards_per_player = discards;
        self
    }
}
