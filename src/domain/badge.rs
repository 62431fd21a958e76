/// Achievement badge tiers
///
/// Badges are cosmetic labels assigned from the current streak length.
/// Thresholds are total-ordered and the highest qualifying tier wins.

use serde::{Deserialize, Serialize};

/// A badge tier earned by a current-streak length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    /// No streak at all
    None,
    /// 1+ day streak
    GettingStarted,
    /// 3+ day streak
    SmallStreak,
    /// 7+ day streak
    OneWeekWarrior,
    /// 14+ day streak
    ConsistencyChamp,
    /// 30+ day streak
    HabitHero,
}

impl Badge {
    /// Pick the badge for a current-streak length
    pub fn for_streak(streak: u32) -> Self {
        match streak {
            0 => Badge::None,
            1..=2 => Badge::GettingStarted,
            3..=6 => Badge::SmallStreak,
            7..=13 => Badge::OneWeekWarrior,
            14..=29 => Badge::ConsistencyChamp,
            _ => Badge::HabitHero,
        }
    }

    /// Display label for this tier
    pub fn label(&self) -> &'static str {
        match self {
            Badge::None => "None",
            Badge::GettingStarted => "Getting Started",
            Badge::SmallStreak => "Small Streak",
            Badge::OneWeekWarrior => "One Week Warrior",
            Badge::ConsistencyChamp => "Consistency Champ",
            Badge::HabitHero => "Habit Hero",
        }
    }

    /// Emoji glyph shown next to the label
    pub fn emoji(&self) -> &'static str {
        match self {
            Badge::None => "",
            Badge::GettingStarted => "🐣",
            Badge::SmallStreak => "🌱",
            Badge::OneWeekWarrior => "🔥",
            Badge::ConsistencyChamp => "💪",
            Badge::HabitHero => "🏆",
        }
    }

    /// Minimum streak length required for this tier
    pub fn threshold(&self) -> u32 {
        match self {
            Badge::None => 0,
            Badge::GettingStarted => 1,
            Badge::SmallStreak => 3,
            Badge::OneWeekWarrior => 7,
            Badge::ConsistencyChamp => 14,
            Badge::HabitHero => 30,
        }
    }

    /// All earnable tiers in ascending threshold order
    pub fn tiers() -> [Badge; 5] {
        [
            Badge::GettingStarted,
            Badge::SmallStreak,
            Badge::OneWeekWarrior,
            Badge::ConsistencyChamp,
            Badge::HabitHero,
        ]
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.emoji().is_empty() {
            write!(f, "{}", self.label())
        } else {
            write!(f, "{} {}", self.emoji(), self.label())
        }
    }
}
