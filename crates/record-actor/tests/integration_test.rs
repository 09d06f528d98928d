use async_trait::async_trait;
use record_actor::telemetry::try_setup_tracing;
use record_actor::{RecordEntity, RecordStore, RegistryActor, RegistryClient, RegistryError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tempfile::TempDir;

record_actor::record_id!(Member);

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Member {
    name: String,
    is_admin: bool,
}

#[derive(Debug)]
struct MemberCreate {
    name: String,
}

#[derive(Debug)]
struct MemberUpdate {
    name: Option<String>,
}

#[derive(Debug)]
enum MemberAction {
    PromoteToAdmin,
}

#[derive(Debug, thiserror::Error)]
enum MemberError {
    #[error("Name must not be blank")]
    BlankName,
}

#[async_trait]
impl RecordEntity for Member {
    type Id = MemberId;
    type Create = MemberCreate;
    type Update = MemberUpdate;
    type Action = MemberAction;
    type ActionResult = bool;
    type Context = ();
    type Error = MemberError;

    fn from_create_params(_id: MemberId, params: MemberCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(MemberError::BlankName);
        }
        Ok(Self {
            name: params.name,
            is_admin: false,
        })
    }

    async fn on_update(
        &mut self,
        update: MemberUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MemberAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            MemberAction::PromoteToAdmin => {
                if self.is_admin {
                    Ok(false)
                } else {
                    self.is_admin = true;
                    Ok(true)
                }
            }
        }
    }
}

fn start(dir: &TempDir) -> RegistryClient<Member> {
    try_setup_tracing();
    let (actor, client) =
        RegistryActor::<Member>::new(10, RecordStore::new(dir.path()), "members.json");
    tokio::spawn(actor.run(()));
    client
}

fn read_store(dir: &TempDir) -> serde_json::Value {
    let text = std::fs::read_to_string(dir.path().join("members.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

// --- Tests ---

#[tokio::test]
async fn test_registry_full_lifecycle() {
    let dir = TempDir::new().unwrap();
    let client = start(&dir);
    let id = MemberId::from(1u32);

    // 1. Create
    let payload = MemberCreate {
        name: "Alice".into(),
    };
    let created = client.create(id.clone(), payload).await.unwrap();
    assert_eq!(created, id);
    assert_eq!(
        read_store(&dir),
        json!({"1": {"name": "Alice", "is_admin": false}})
    );

    // 2. Perform Action: Promote
    let changed = client
        .perform_action(id.clone(), MemberAction::PromoteToAdmin)
        .await
        .unwrap();
    assert!(changed);

    let member = client.get(id.clone()).await.unwrap().unwrap();
    assert!(member.is_admin);

    // 3. Promote again leaves the record as it was
    let changed_again = client
        .perform_action(id.clone(), MemberAction::PromoteToAdmin)
        .await
        .unwrap();
    assert!(!changed_again);

    // 4. Update
    let update = MemberUpdate {
        name: Some("Bob".into()),
    };
    let updated = client.update(id.clone(), update).await.unwrap();
    assert_eq!(updated.name, "Bob");
    assert_eq!(read_store(&dir)["1"]["name"], "Bob");

    // 5. Delete
    client.delete(id.clone()).await.unwrap();
    assert!(client.get(id.clone()).await.unwrap().is_none());
    assert_eq!(read_store(&dir), json!({}));
}

#[tokio::test]
async fn test_duplicate_create_is_refused() {
    let dir = TempDir::new().unwrap();
    let client = start(&dir);

    let first = MemberCreate {
        name: "Alice".into(),
    };
    let second = MemberCreate { name: "Eve".into() };
    client.create(MemberId::from("m"), first).await.unwrap();
    let result = client.create(MemberId::from("m"), second).await;

    assert!(matches!(result, Err(RegistryError::AlreadyExists(id)) if id == "m"));
    let kept = client.get(MemberId::from("m")).await.unwrap().unwrap();
    assert_eq!(kept.name, "Alice");
}

#[tokio::test]
async fn test_missing_records_are_not_found() {
    let dir = TempDir::new().unwrap();
    let client = start(&dir);
    let ghost = MemberId::from("ghost");

    assert!(client.get(ghost.clone()).await.unwrap().is_none());
    assert!(matches!(
        client.delete(ghost.clone()).await,
        Err(RegistryError::NotFound(_))
    ));
    assert!(matches!(
        client
            .update(ghost.clone(), MemberUpdate { name: None })
            .await,
        Err(RegistryError::NotFound(_))
    ));
    assert!(matches!(
        client
            .perform_action(ghost, MemberAction::PromoteToAdmin)
            .await,
        Err(RegistryError::NotFound(_))
    ));
    assert!(!dir.path().join("members.json").exists());
}

#[tokio::test]
async fn test_entity_errors_can_be_recovered() {
    let dir = TempDir::new().unwrap();
    let client = start(&dir);

    let blank = MemberCreate { name: "  ".into() };
    let error = client
        .create(MemberId::from(1u32), blank)
        .await
        .unwrap_err();

    assert!(matches!(
        error.into_entity_error::<MemberError>(),
        Ok(MemberError::BlankName)
    ));
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_out_of_band_edits_are_seen() {
    let dir = TempDir::new().unwrap();
    let client = start(&dir);

    let payload = MemberCreate {
        name: "Alice".into(),
    };
    client.create(MemberId::from(1u32), payload).await.unwrap();

    std::fs::write(
        dir.path().join("members.json"),
        r#"{"1": {"name": "Edited", "is_admin": true}, "7": {"name": "Added", "is_admin": false}}"#,
    )
    .unwrap();

    let edited = client.get(MemberId::from(1u32)).await.unwrap().unwrap();
    assert_eq!(edited.name, "Edited");
    assert!(edited.is_admin);

    let ids: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|(id, _)| id.to_string())
        .collect();
    assert_eq!(ids, vec!["1", "7"]);
}

#[tokio::test]
async fn test_corrupt_record_is_reported_and_skipped() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("members.json"),
        r#"{"1": {"name": "Alice", "is_admin": false}, "2": {"name": 5}}"#,
    )
    .unwrap();
    let client = start(&dir);

    let result = client.get(MemberId::from(2u32)).await;
    assert!(matches!(result, Err(RegistryError::CorruptRecord { id, .. }) if id == "2"));

    let listed = client.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].0, MemberId::from(1u32));
}

#[tokio::test]
async fn test_contains_checks_keys_without_decoding() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("members.json"),
        r#"{"1": {"name": "Alice", "is_admin": false}, "2": {"name": "Bob"}}"#,
    )
    .unwrap();
    let client = start(&dir);

    assert!(client.contains(MemberId::from(1u32)).await.unwrap());
    assert!(client.contains(MemberId::from(2u32)).await.unwrap());
    assert!(!client.contains(MemberId::from(3u32)).await.unwrap());
    assert!(matches!(
        client.get(MemberId::from(2u32)).await,
        Err(RegistryError::CorruptRecord { .. })
    ));
}
