use crate::*;
use combat::QuestTracker;
use pretty_assertions::assert_eq;

fn log() -> QuestLog {
    QuestLog::with_quests(vec![
        KillQuest::any("First Blood", 1, 10),
        KillQuest::new("Goblin Menace", "Goblin", 2, 40),
    ])
}

#[test]
fn first_kill_completes_first_blood() {
    let mut quests = log();
    let done = quests.record_kill("Slime");
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].title, "First Blood");
    assert_eq!(quests.get("Goblin Menace").unwrap().progress, 0);
}

#[test]
fn targeted_quest_ignores_other_monsters() {
    let mut quests = log();
    quests.record_kill("Wolf");
    quests.record_kill("goblin");
    assert!(!quests.get("Goblin Menace").unwrap().completed);
    assert_eq!(quests.get("Goblin Menace").unwrap().remaining(), 1);

    quests.record_kill("Goblin");
    assert!(quests.get("Goblin Menace").unwrap().completed);
    assert_eq!(quests.kills(), 3);
}

#[test]
fn completed_quests_stop_counting() {
    let mut quests = log();
    quests.record_kill("Goblin");
    quests.record_kill("Goblin");
    assert!(quests.record_kill("Goblin").is_empty());
    assert_eq!(quests.get("Goblin Menace").unwrap().progress, 2);
    assert_eq!(quests.active().count(), 0);
    assert_eq!(quests.completion(), 1.0);
}

#[test]
fn tracker_notifications_feed_the_log() {
    let mut quests = log();
    {
        let tracker: &mut dyn QuestTracker = &mut quests;
        tracker.notify_kill("Goblin");
        tracker.notify_kill("Goblin");
    }

    let titles = quests.drain_completed();
    assert_eq!(titles, vec!["First Blood".to_string(), "Goblin Menace".to_string()]);
    assert_eq!(quests.reward_for(&titles), 50);
    assert!(quests.drain_completed().is_empty());
}

#[test]
fn pending_announcements_are_not_saved() {
    let mut quests = log();
    quests.record_kill("Slime");

    let json = serde_json::to_string(&quests).expect("Failed to serialize to JSON");
    let mut restored: QuestLog = serde_json::from_str(&json).expect("Failed to deserialize");
    assert!(restored.drain_completed().is_empty());
    assert!(restored.get("First Blood").unwrap().completed);
    assert_eq!(restored.kills(), 1);
}

#[test]
fn starter_quests_are_all_open() {
    let quests = QuestLog::default();
    assert_eq!(quests.active().count(), starter_quests().len());
    assert_eq!(quests.completion(), 0.0);
}
