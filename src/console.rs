// src/console.rs
//! Line-based terminal front-end for a battle.

use std::io::{self, BufRead, Write};

use combat::{BattleAction, BattleConsole, Monster};
use error::CombatError;
use hero::{Player, Skill};
use items::ItemStack;
use tracing::{debug, warn};

const BAR_WIDTH: u32 = 20;

/// Reads choices from `input` and writes everything else to `output`
pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one trimmed line. End of input is an error.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer is a number in `0..=max`
    pub fn prompt_number(&mut self, prompt: &str, max: usize) -> io::Result<usize> {
        loop {
            let answer = self.prompt(prompt)?;
            match answer.parse::<usize>() {
                Ok(n) if n <= max => return Ok(n),
                _ => {
                    debug!(%answer, max, "rejected menu input");
                    writeln!(self.output, "Please enter a number between 0 and {}.", max)?;
                }
            }
        }
    }

    /// Yes unless the answer starts with `n`
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.prompt(&format!("{} [Y/n] ", question))?;
        Ok(!answer.to_ascii_lowercase().starts_with('n'))
    }

    fn select(&mut self, title: &str, entries: &[String]) -> Result<Option<usize>, CombatError> {
        writeln!(self.output, "{}", title)?;
        for (i, entry) in entries.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, entry)?;
        }
        writeln!(self.output, "  0. Back")?;

        let n = self.prompt_number("> ", entries.len())?;
        Ok(n.checked_sub(1))
    }
}

fn bar(current: u32, max: u32) -> String {
    let filled = if max == 0 {
        0
    } else {
        (current.min(max) * BAR_WIDTH / max) as usize
    };
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH as usize - filled)
    )
}

impl<R: BufRead, W: Write> BattleConsole for TextConsole<R, W> {
    fn show_status(&mut self, player: &Player, monster: &Monster) {
        let status = format!(
            "\n{} (Lv {}) HP {} {}/{}  MP {}/{}\n{} HP {} {}/{}",
            player.name,
            player.level(),
            bar(player.hp(), player.effective_max_hp()),
            player.hp(),
            player.effective_max_hp(),
            player.mana(),
            player.max_mana(),
            monster.name,
            bar(monster.hp(), monster.max_hp()),
            monster.hp(),
            monster.max_hp(),
        );
        self.narrate(&status);
    }

    fn choose_action(&mut self) -> Result<BattleAction, CombatError> {
        writeln!(self.output, "1. Attack  2. Skill  3. Item  4. Escape")?;
        let answer = self.prompt("> ")?;
        // anything unrecognised is a plain attack
        let action = answer
            .parse::<u32>()
            .map(BattleAction::from_choice)
            .unwrap_or(BattleAction::Attack);
        Ok(action)
    }

    fn choose_skill(&mut self, skills: &[Skill]) -> Result<Option<usize>, CombatError> {
        let entries: Vec<String> = skills
            .iter()
            .map(|s| format!("{} ({} MP) - {}", s.name, s.mana_cost, s.description))
            .collect();
        self.select("Choose a skill:", &entries)
    }

    fn choose_item(&mut self, items: &[ItemStack]) -> Result<Option<usize>, CombatError> {
        let entries: Vec<String> = items
            .iter()
            .map(|s| format!("{} x{}", s.name(), s.quantity))
            .collect();
        self.select("Choose an item:", &entries)
    }

    fn narrate(&mut self, line: &str) {
        if let Err(e) = writeln!(self.output, "{}", line) {
            warn!(error = %e, "failed to write battle narration");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> TextConsole<Cursor<Vec<u8>>, Vec<u8>> {
        TextConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn action_menu_falls_back_to_attack() {
        let mut c = console("2\nfoo\n9\n4\n");
        assert_eq!(c.choose_action().unwrap(), BattleAction::Skill);
        assert_eq!(c.choose_action().unwrap(), BattleAction::Attack);
        assert_eq!(c.choose_action().unwrap(), BattleAction::Attack);
        assert_eq!(c.choose_action().unwrap(), BattleAction::Escape);
    }

    #[test]
    fn zero_backs_out_of_a_menu() {
        let skills = vec![Skill::attack("Fireball", 1, 15, 1, 2.0)];
        let mut c = console("0\n");
        assert_eq!(c.choose_skill(&skills).unwrap(), None);
    }

    #[test]
    fn menu_reprompts_until_in_range() {
        let stacks = vec![
            ItemStack::new(items::catalog::healing_potion(), 2),
            ItemStack::new(items::catalog::mana_potion(), 1),
        ];
        let mut c = console("7\nabc\n2\n");
        assert_eq!(c.choose_item(&stacks).unwrap(), Some(1));

        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out.matches("between 0 and 2").count(), 2);
        assert!(out.contains("Healing Potion x2"));
    }

    #[test]
    fn closed_input_is_an_input_error() {
        let mut c = console("");
        assert!(matches!(c.choose_action(), Err(CombatError::Input(_))));
    }

    #[test]
    fn bars_are_fixed_width() {
        assert_eq!(bar(50, 100), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(bar(0, 0).len(), 22);
        assert_eq!(bar(120, 100), format!("[{}]", "#".repeat(20)));
    }
}
