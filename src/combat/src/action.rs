// src/combat/src/action.rs
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// What the player chose to do this turn
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum BattleAction {
    Attack,
    Skill,
    Item,
    Escape,
}

impl BattleAction {
    /// Map a 1-based menu choice to an action; anything else attacks
    pub fn from_choice(choice: u32) -> Self {
        match choice {
            2 => BattleAction::Skill,
            3 => BattleAction::Item,
            4 => BattleAction::Escape,
            _ => BattleAction::Attack,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BattleAction::Attack => "Attack",
            BattleAction::Skill => "Use a skill",
            BattleAction::Item => "Use an item",
            BattleAction::Escape => "Try to escape",
        }
    }
}

/// How a battle ended
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleResult {
    Victory,
    Defeat,
    Escaped,
    Error,
}

impl BattleResult {
    /// Post-battle regeneration applies after these results
    pub fn regenerates(&self) -> bool {
        matches!(self, BattleResult::Victory | BattleResult::Escaped)
    }
}

/// Effect of one resolved player action on the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnOutcome {
    /// The monster answers a consumed turn with a counter-attack
    pub consumed: bool,
    /// The player got away; the battle ends at once
    pub escaped: bool,
}

impl TurnOutcome {
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            escaped: false,
        }
    }

    /// Nothing happened: cancelled selection, missing mana, rejected action
    pub fn free() -> Self {
        Self::default()
    }

    pub fn escaped() -> Self {
        Self {
            consumed: false,
            escaped: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices_default_to_attack() {
        assert_eq!(BattleAction::from_choice(1), BattleAction::Attack);
        assert_eq!(BattleAction::from_choice(2), BattleAction::Skill);
        assert_eq!(BattleAction::from_choice(3), BattleAction::Item);
        assert_eq!(BattleAction::from_choice(4), BattleAction::Escape);
        assert_eq!(BattleAction::from_choice(0), BattleAction::Attack);
        assert_eq!(BattleAction::from_choice(99), BattleAction::Attack);
    }

    #[test]
    fn only_victory_and_escape_regenerate() {
        assert!(BattleResult::Victory.regenerates());
        assert!(BattleResult::Escaped.regenerates());
        assert!(!BattleResult::Defeat.regenerates());
        assert!(!BattleResult::Error.regenerates());
    }

    #[test]
    fn escape_does_not_consume() {
        let outcome = TurnOutcome::escaped();
        assert!(outcome.escaped && !outcome.consumed);
        assert_eq!(TurnOutcome::free(), TurnOutcome::default());
    }
}
