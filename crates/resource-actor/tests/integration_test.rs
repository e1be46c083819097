use async_trait::async_trait;
use resource_actor::{
    ActorEntity, Backend, FrameworkError, MemoryBackend, Repository, ResourceActor,
    ResourceClient, StagedWrite, StoreError,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Barista {
    id: u32,
    name: String,
    shots_pulled: u32,
}

#[derive(Debug)]
struct BaristaCreate {
    name: String,
}

#[derive(Debug)]
struct BaristaUpdate {
    name: Option<String>,
}

#[derive(Debug)]
enum BaristaAction {
    PullShots(u32),
    Retire,
}

#[derive(Debug, thiserror::Error)]
enum BaristaError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("too many shots: {0}")]
    Exhausted(u32),
    #[error("retired baristas stay on the books")]
    Protected,
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[async_trait]
impl ActorEntity for Barista {
    type Id = u32;
    type Create = BaristaCreate;
    type Update = BaristaUpdate;
    type Action = BaristaAction;
    type ActionResult = u32;
    type Context = ();
    type Error = BaristaError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn assign_id(sequence: u32, _params: &BaristaCreate) -> u32 {
        sequence
    }

    fn sequence_of(id: &u32) -> Option<u32> {
        Some(*id)
    }

    fn from_create_params(id: u32, params: BaristaCreate) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(BaristaError::EmptyName);
        }
        Ok(Self {
            id,
            name: params.name,
            shots_pulled: 0,
        })
    }

    async fn on_update(
        &mut self,
        update: BaristaUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if self.shots_pulled == u32::MAX {
            return Err(BaristaError::Protected);
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: BaristaAction,
        _ctx: &Self::Context,
    ) -> Result<u32, Self::Error> {
        match action {
            BaristaAction::PullShots(count) => {
                if self.shots_pulled + count > 10 {
                    return Err(BaristaError::Exhausted(self.shots_pulled + count));
                }
                self.shots_pulled += count;
                Ok(self.shots_pulled)
            }
            BaristaAction::Retire => {
                self.shots_pulled = u32::MAX;
                Ok(self.shots_pulled)
            }
        }
    }
}

const KEY: &str = "baristas.json";

async fn start(backend: &Arc<MemoryBackend>) -> ResourceClient<Barista> {
    let repository = Repository::new(backend.clone() as Arc<dyn Backend>, KEY);
    let (actor, client) = ResourceActor::<Barista>::open(10, repository).await.unwrap();
    tokio::spawn(actor.run(()));
    client
}

fn stored(backend: &MemoryBackend) -> Vec<Barista> {
    serde_json::from_slice(&backend.get(KEY).expect("nothing stored")).unwrap()
}

fn create(name: &str) -> BaristaCreate {
    BaristaCreate { name: name.into() }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let backend = Arc::new(MemoryBackend::new());
    let client = start(&backend).await;

    // 1. Create
    let alice = client.create(create("Alice")).await.unwrap();
    assert_eq!(alice.id, 1);

    // 2. Action
    let pulled = client
        .perform_action(alice.id, BaristaAction::PullShots(3))
        .await
        .unwrap();
    assert_eq!(pulled, 3);
    assert_eq!(client.get(1).await.unwrap().unwrap().shots_pulled, 3);

    // 3. Update
    let updated = client
        .update(
            1,
            BaristaUpdate {
                name: Some("Bob".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Bob");
    assert_eq!(stored(&backend), vec![updated]);

    // 4. Delete
    client.delete(1).await.unwrap();
    assert!(client.get(1).await.unwrap().is_none());
    assert!(stored(&backend).is_empty());
}

#[tokio::test]
async fn sequence_never_reuses_deleted_ids() {
    let backend = Arc::new(MemoryBackend::new());
    let client = start(&backend).await;

    for name in ["a", "b", "c"] {
        client.create(create(name)).await.unwrap();
    }
    client.delete(3).await.unwrap();

    let next = client.create(create("d")).await.unwrap();
    assert_eq!(next.id, 4);

    // A rejected create does not consume a number.
    assert!(client.create(create("")).await.is_err());
    assert_eq!(client.create(create("e")).await.unwrap().id, 5);
}

#[tokio::test]
async fn sequence_resumes_after_highest_stored_id() {
    let backend = Arc::new(MemoryBackend::new());
    backend.insert(
        KEY,
        r#"[{"id": 7, "name": "x", "shots_pulled": 0}, {"id": 2, "name": "y", "shots_pulled": 0}]"#,
    );
    let client = start(&backend).await;

    let listed = client.list().await.unwrap();
    assert_eq!(listed.iter().map(|b| b.id).collect::<Vec<_>>(), vec![7, 2]);
    assert_eq!(client.create(create("z")).await.unwrap().id, 8);
}

#[tokio::test]
async fn failed_save_leaves_memory_untouched() {
    let backend = Arc::new(MemoryBackend::new());
    let client = start(&backend).await;
    client.create(create("Alice")).await.unwrap();

    backend.fail_next_commits(1);
    let result = client
        .perform_action(1, BaristaAction::PullShots(2))
        .await;
    assert!(matches!(result, Err(FrameworkError::Entity(_))));

    backend.fail_next_commits(1);
    let result = client.create(create("Bob")).await;
    assert!(matches!(result, Err(FrameworkError::Storage(_))));

    let alice = client.get(1).await.unwrap().unwrap();
    assert_eq!(alice.shots_pulled, 0);
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn hook_errors_reach_the_caller_typed() {
    let backend = Arc::new(MemoryBackend::new());
    let client = start(&backend).await;
    client.create(create("Alice")).await.unwrap();
    client
        .perform_action(1, BaristaAction::Retire)
        .await
        .unwrap();

    let err = client.delete(1).await.unwrap_err();
    assert!(matches!(
        err.downcast_entity::<BaristaError>(),
        Ok(BaristaError::Protected)
    ));

    let err = client.delete(99).await.unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(id) if id == "99"));
}

#[tokio::test]
async fn transaction_is_all_or_nothing() {
    let backend = Arc::new(MemoryBackend::new());
    let client = start(&backend).await;
    client.create(create("Alice")).await.unwrap();
    client.create(create("Bob")).await.unwrap();
    let commits_before = backend.commit_count();

    // Bob would exceed his limit, so Alice's shots must not land either.
    let companion = StagedWrite::new("ledger.json", b"[\"pending\"]".to_vec());
    let result = client
        .transact(
            vec![
                (1, BaristaAction::PullShots(4)),
                (2, BaristaAction::PullShots(11)),
            ],
            vec![companion.clone()],
        )
        .await;
    assert!(result.is_err());
    assert_eq!(backend.commit_count(), commits_before);
    assert!(backend.get("ledger.json").is_none());
    assert_eq!(client.get(1).await.unwrap().unwrap().shots_pulled, 0);

    // Unknown ids reject the whole transaction as well.
    let result = client
        .transact(
            vec![
                (1, BaristaAction::PullShots(4)),
                (42, BaristaAction::PullShots(1)),
            ],
            vec![],
        )
        .await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));

    let results = client
        .transact(
            vec![
                (1, BaristaAction::PullShots(4)),
                (2, BaristaAction::PullShots(5)),
            ],
            vec![companion],
        )
        .await
        .unwrap();
    assert_eq!(results, vec![4, 5]);
    assert_eq!(backend.commit_count(), commits_before + 1);
    assert_eq!(backend.get("ledger.json").unwrap(), b"[\"pending\"]");
    let shots: Vec<u32> = stored(&backend).iter().map(|b| b.shots_pulled).collect();
    assert_eq!(shots, vec![4, 5]);
}

#[tokio::test]
async fn transaction_commit_failure_changes_nothing() {
    let backend = Arc::new(MemoryBackend::new());
    let client = start(&backend).await;
    client.create(create("Alice")).await.unwrap();

    backend.fail_next_commits(1);
    let result = client
        .transact(vec![(1, BaristaAction::PullShots(1))], vec![])
        .await;
    assert!(matches!(result, Err(FrameworkError::Storage(_))));
    assert_eq!(client.get(1).await.unwrap().unwrap().shots_pulled, 0);
    assert_eq!(stored(&backend)[0].shots_pulled, 0);
}
