// src/combat/src/combatant.rs

use error::StatError;
use hero::Player;

use crate::monster::Monster;
use crate::rng::BattleRng;

/// 表示可以参加战斗的活体
pub trait Combatant {
    /// 获取名称
    fn name(&self) -> &str;

    /// 获取当前生命值
    fn hp(&self) -> u32;

    /// 获取最大生命值
    fn max_hp(&self) -> u32;

    /// Attack before the per-hit random bonus
    fn attack_power(&self) -> u32;

    /// 获取防御力
    fn defense(&self) -> u32;

    /// Apply `raw` damage after defense; returns the damage actually dealt
    fn take_damage(&mut self, raw: i64) -> Result<u32, StatError>;

    /// 是否存活
    fn is_alive(&self) -> bool {
        self.hp() > 0
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hp(&self) -> u32 {
        Player::hp(self)
    }

    fn max_hp(&self) -> u32 {
        self.effective_max_hp()
    }

    fn attack_power(&self) -> u32 {
        self.effective_attack()
    }

    fn defense(&self) -> u32 {
        self.effective_defense()
    }

    fn take_damage(&mut self, raw: i64) -> Result<u32, StatError> {
        Player::take_damage(self, raw)
    }
}

impl Combatant for Monster {
    fn name(&self) -> &str {
        &self.name
    }

    fn hp(&self) -> u32 {
        Monster::hp(self)
    }

    fn max_hp(&self) -> u32 {
        Monster::max_hp(self)
    }

    fn attack_power(&self) -> u32 {
        self.attack
    }

    fn defense(&self) -> u32 {
        self.defense
    }

    fn take_damage(&mut self, raw: i64) -> Result<u32, StatError> {
        Monster::take_damage(self, raw)
    }
}

/// Plain attack: `attack_power + roll(0..=variance)` against the defender's
/// defense. Returns the damage dealt.
pub fn strike<A, D, R>(
    attacker: &A,
    defender: &mut D,
    variance: u32,
    rng: &mut R,
) -> Result<u32, StatError>
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
    R: BattleRng + ?Sized,
{
    let raw = attacker.attack_power() + rng.roll(0, variance);
    defender.take_damage(raw as i64)
}
