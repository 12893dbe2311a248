use flight_booking::domain::entities::{NewPassenger, UpdatePassenger};
use flight_booking::domain::repositories::PassengerRepository;
use flight_booking::domain::scope::OwnerScope;
use flight_booking::infrastructure::persistence::PgPassengerRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_passenger(owner: &str) -> NewPassenger {
    NewPassenger {
        lastname: "Muster".to_string(),
        firstname: "Max".to_string(),
        age: 34,
        nationality: "CH".to_string(),
        created_by: owner.to_string(),
    }
}

fn update(owner: Option<&str>) -> UpdatePassenger {
    UpdatePassenger {
        lastname: "Meier".to_string(),
        firstname: "Anna".to_string(),
        age: 29,
        nationality: "AT".to_string(),
        created_by: owner.map(str::to_string),
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_list_respects_owner_scope(pool: PgPool) {
    let repo = PgPassengerRepository::new(Arc::new(pool));
    repo.create(new_passenger("alice")).await.unwrap();
    repo.create(new_passenger("alice")).await.unwrap();
    repo.create(new_passenger("bob")).await.unwrap();

    assert_eq!(repo.list(&OwnerScope::Any).await.unwrap().len(), 3);
    assert_eq!(
        repo.list(&OwnerScope::owner("alice")).await.unwrap().len(),
        2
    );
    assert!(
        repo.list(&OwnerScope::owner("carol"))
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_find_foreign_passenger_is_none(pool: PgPool) {
    let repo = PgPassengerRepository::new(Arc::new(pool));
    let bobs = repo.create(new_passenger("bob")).await.unwrap();

    assert!(
        repo.find_by_id(bobs.id, &OwnerScope::owner("alice"))
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        repo.find_by_id(bobs.id, &OwnerScope::Any)
            .await
            .unwrap()
            .is_some()
    );
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_user_update_keeps_owner(pool: PgPool) {
    let repo = PgPassengerRepository::new(Arc::new(pool));
    let created = repo.create(new_passenger("alice")).await.unwrap();

    let updated = repo
        .update(created.id, update(None), &OwnerScope::owner("alice"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.lastname, "Meier");
    assert_eq!(updated.created_by, "alice");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_foreign_update_and_delete_touch_nothing(pool: PgPool) {
    let repo = PgPassengerRepository::new(Arc::new(pool));
    let bobs = repo.create(new_passenger("bob")).await.unwrap();
    let alice = OwnerScope::owner("alice");

    assert!(
        repo.update(bobs.id, update(None), &alice)
            .await
            .unwrap()
            .is_none()
    );
    assert!(!repo.delete(bobs.id, &alice).await.unwrap());

    let unchanged = repo
        .find_by_id(bobs.id, &OwnerScope::Any)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, bobs);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_admin_update_reassigns_owner(pool: PgPool) {
    let repo = PgPassengerRepository::new(Arc::new(pool));
    let created = repo.create(new_passenger("alice")).await.unwrap();

    let updated = repo
        .update(created.id, update(Some("bob")), &OwnerScope::Any)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.created_by, "bob");
    assert!(
        repo.find_by_id(created.id, &OwnerScope::owner("bob"))
            .await
            .unwrap()
            .is_some()
    );
}
