use std::sync::Arc;
use std::thread;

use duel_content::ContentFactory;
use duel_core::{
    Action, Character, DuelEngine, DuelState, FixedRoll, PcgRng, PlayerId, Race, RuleTable, Side,
    Tier,
};
use duel_runtime::{
    DuelId, DuelRepository, DuelService, FileDuelRepo, HeuristicAdvisor, InMemoryDuelRepo,
    RuntimeError,
};
use tempfile::TempDir;

fn ada_vs_bran() -> (Character, Character) {
    (
        Character::new("a", "Ada", Race::Human),
        Character::new("b", "Bran", Race::Orc),
    )
}

#[test]
fn scripted_duel_through_file_repository() {
    let dir = TempDir::new().unwrap();
    let factory = ContentFactory::bundled();
    let roster = factory.load_roster().unwrap();
    let script = factory.load_script("reaper").unwrap();

    let repo = Arc::new(FileDuelRepo::new(dir.path()).unwrap());
    let service = DuelService::new(repo.clone(), factory.load_rules().unwrap());
    let id = service
        .create_duel(
            roster.spawn(&script.first).unwrap(),
            roster.spawn(&script.second).unwrap(),
            script.seed,
        )
        .unwrap();

    let state = service.load_duel(id).unwrap();
    let record = service
        .submit_turn(id, &state.active_player().id, state.turn, &script.turns[0])
        .unwrap();
    assert_eq!(record.actor_name, "Mort");

    let stored = repo.load(id).unwrap().unwrap();
    assert_eq!(stored.winner_name(), Some("Mort"));

    let err = service
        .submit_turn(id, &stored.active_player().id, stored.turn, &script.turns[1])
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Turn(_)));
}

#[test]
fn file_repository_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let (first, second) = ada_vs_bran();
    let state = DuelState::new(first, second, 11);

    let id = {
        let repo = FileDuelRepo::new(dir.path()).unwrap();
        repo.create(&state).unwrap()
    };

    let reopened = FileDuelRepo::new(dir.path()).unwrap();
    assert_eq!(reopened.load(id).unwrap(), Some(state.clone()));
    assert_eq!(reopened.list().unwrap(), vec![id]);

    let next = reopened.create(&state).unwrap();
    assert_eq!(next, DuelId(id.0 + 1));

    reopened.delete(id).unwrap();
    assert!(!reopened.exists(id));
    assert_eq!(reopened.list().unwrap(), vec![next]);
}

#[test]
fn resolution_is_byte_identical_for_a_fixed_seed() {
    let (first, second) = ada_vs_bran();
    let state = DuelState::new(first, second, 77);
    let rules = RuleTable::default();
    let rng = PcgRng;
    let engine = DuelEngine::new(&rules, &rng);
    let actions = [Action::Cast { tier: Tier::Strong }, Action::Dodge];

    let a = engine.resolve_turn(&state, &actions).unwrap();
    let b = engine.resolve_turn(&state, &actions).unwrap();

    assert_eq!(
        serde_json::to_string(&a.state).unwrap(),
        serde_json::to_string(&b.state).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&a.record).unwrap(),
        serde_json::to_string(&b.record).unwrap()
    );
}

#[test]
fn concurrent_submissions_for_one_turn_resolve_once() {
    let (first, second) = ada_vs_bran();
    let service = Arc::new(DuelService::new(
        Arc::new(InMemoryDuelRepo::new()),
        RuleTable::default(),
    ));
    let id = service.create_duel(first, second, 3).unwrap();

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = Arc::clone(&service);
                scope.spawn(move || {
                    service.submit_turn(
                        id,
                        &PlayerId::new("a"),
                        1,
                        &[Action::Cast { tier: Tier::Small }],
                    )
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let accepted = results.iter().filter(|r| r.is_ok()).count();
    let stale = results
        .iter()
        .filter(|r| matches!(r, Err(RuntimeError::StaleTurn { .. })))
        .count();
    assert_eq!(accepted, 1);
    assert_eq!(stale, 3);

    let state = service.load_duel(id).unwrap();
    assert_eq!(state.turn, 2);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn dodge_is_kept_by_the_service_but_not_by_storage() {
    let dir = TempDir::new().unwrap();
    let (first, second) = ada_vs_bran();
    let repo = Arc::new(FileDuelRepo::new(dir.path()).unwrap());
    let service = DuelService::with_rng(repo.clone(), RuleTable::default(), Arc::new(FixedRoll(10)));
    let id = service.create_duel(first, second, 5).unwrap();

    service
        .submit_turn(id, &PlayerId::new("a"), 1, &[Action::Dodge])
        .unwrap();
    assert!(service.load_duel(id).unwrap().flags.is_dodging(Side::First));
    assert!(!repo.load(id).unwrap().unwrap().flags.is_dodging(Side::First));

    // A fresh service has no session: the dodge is gone.
    let fresh = DuelService::with_rng(repo, RuleTable::default(), Arc::new(FixedRoll(10)));
    fresh
        .submit_turn(id, &PlayerId::new("b"), 2, &[Action::Cast { tier: Tier::Medium }])
        .unwrap();
    assert_eq!(
        fresh.load_duel(id).unwrap().players[0].resources.health.current,
        80
    );
}

#[tokio::test]
async fn advice_never_blocks_a_turn() {
    use std::time::Duration;

    use duel_runtime::{Advisor, AdvisoryError, AdvisoryProvider, AdvisoryRequest, Suggestion};

    struct Offline;

    #[async_trait::async_trait]
    impl AdvisoryProvider for Offline {
        async fn suggest(&self, _: &AdvisoryRequest) -> Result<Suggestion, AdvisoryError> {
            Err(AdvisoryError::Provider("connection refused".to_string()))
        }
    }

    let (first, second) = ada_vs_bran();
    let service = DuelService::new(Arc::new(InMemoryDuelRepo::new()), RuleTable::default());
    let id = service.create_duel(first, second, 8).unwrap();

    let request = service.advisory_request(id).unwrap();
    let offline = Advisor::new(Arc::new(Offline), Duration::from_millis(100));
    assert!(!offline.advise(&request).await.is_available());

    let heuristic = Advisor::new(
        Arc::new(HeuristicAdvisor::new(service.rules().clone())),
        Duration::from_millis(100),
    );
    assert!(heuristic.advise(&request).await.is_available());

    let record = service
        .submit_turn(id, &PlayerId::new("a"), 1, &[Action::Rest])
        .unwrap();
    assert_eq!(record.turn, 1);
}
