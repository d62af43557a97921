//! Builders shared by the integration tests.
#![allow(dead_code)]

use std::io::Cursor;

use combat::{CombatRules, SeededRng};
use hero::{Class, Player, SkillCatalog};
use quests::QuestLog;
use terminal_quest::{Game, Profile, TextConsole};

pub type ScriptedConsole = TextConsole<Cursor<Vec<u8>>, Vec<u8>>;

/// Console fed from `lines`, one answer per line
pub fn console(lines: &[&str]) -> ScriptedConsole {
    let mut input = lines.join("\n");
    input.push('\n');
    TextConsole::new(Cursor::new(input.into_bytes()), Vec::new())
}

/// The same answer `times` times
pub fn repeat(answer: &str, times: usize) -> ScriptedConsole {
    console(&vec![answer; times])
}

pub fn output(console: ScriptedConsole) -> String {
    String::from_utf8(console.into_output()).expect("console output is utf-8")
}

pub fn new_player(class: Class) -> Player {
    Player::new("Tester", class, &SkillCatalog::standard())
}

/// A fresh character with the starter quests and a fixed seed
pub fn game(class: Class, seed: u64) -> Game {
    Game::new(
        Profile::new(new_player(class), QuestLog::new()),
        SeededRng::new(seed),
        CombatRules::default(),
    )
}
