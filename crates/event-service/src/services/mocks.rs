//! In-memory doubles of the repository and gateway ports, shared by the
//! service unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use event_core::entities::{Attendee, Event, NewEvent, User};
use event_core::traits::{
    AssetGateway, EventRepository, RepoResult, UploadedAsset, UserRepository,
};
use event_core::value_objects::{EventId, UserId};
use event_core::DomainError;
use event_db::PgPool;

use super::context::{ServiceContext, ServiceContextBuilder};

const MOCK_ASSET_URL: &str = "https://cdn.example.com/mock.jpg";

/// A stored credential pair
pub struct StoredUser {
    pub user: User,
    pub password_hash: String,
}

/// Shared backing state, inspectable from tests
pub struct MockState {
    pub users: Mutex<Vec<StoredUser>>,
    pub events: Mutex<Vec<Event>>,
    uploads: AtomicUsize,
    fail_uploads: AtomicBool,
}

impl MockState {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            users: Mutex::new(Vec::new()),
            events: Mutex::new(Vec::new()),
            uploads: AtomicUsize::new(0),
            fail_uploads: AtomicBool::new(false),
        })
    }

    /// Number of upload calls the gateway has seen
    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }

    /// Make every subsequent upload fail
    pub fn fail_uploads(&self) {
        self.fail_uploads.store(true, Ordering::SeqCst);
    }

    /// URL the mock gateway hands out on success
    pub fn gateway_url(&self) -> &'static str {
        MOCK_ASSET_URL
    }
}

struct InMemoryUserRepository {
    state: Arc<MockState>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let users = self.state.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|stored| stored.user.email == email)
            .map(|stored| stored.user.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let users = self.state.users.lock().unwrap();
        Ok(users.iter().any(|stored| stored.user.email == email))
    }

    async fn create(&self, username: &str, email: &str, password_hash: &str) -> RepoResult<User> {
        let mut users = self.state.users.lock().unwrap();
        if users.iter().any(|stored| stored.user.email == email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        let user = User {
            id: UserId::new(Uuid::new_v4()),
            username: username.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        users.push(StoredUser {
            user: user.clone(),
            password_hash: password_hash.to_string(),
        });
        Ok(user)
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        let users = self.state.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|stored| stored.user.id == id)
            .map(|stored| stored.password_hash.clone()))
    }
}

struct InMemoryEventRepository {
    state: Arc<MockState>,
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        let events = self.state.events.lock().unwrap();
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn list_all(&self) -> RepoResult<Vec<Event>> {
        Ok(self.state.events.lock().unwrap().clone())
    }

    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let created = Event {
            id: EventId::new(Uuid::new_v4()),
            event_name: event.event_name.clone(),
            description: event.description.clone(),
            date: event.date.clone(),
            image_url: event.image_url.clone(),
            creator_id: event.creator_id.clone(),
            attendees: Vec::new(),
            created_at: Utc::now(),
        };
        self.state.events.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn add_attendee(&self, event_id: EventId, attendee: &Attendee) -> RepoResult<()> {
        let mut events = self.state.events.lock().unwrap();
        let event = events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or(DomainError::EventNotFound(event_id))?;
        if event.has_attendee(&attendee.attendee_id) {
            return Err(DomainError::AlreadyRegistered);
        }
        event.attendees.push(attendee.clone());
        Ok(())
    }

    async fn find_by_creator(&self, creator_id: &str) -> RepoResult<Vec<Event>> {
        let events = self.state.events.lock().unwrap();
        Ok(events
            .iter()
            .filter(|e| e.is_created_by(creator_id))
            .cloned()
            .collect())
    }

    async fn find_by_attendee(&self, attendee_id: &str) -> RepoResult<Vec<Event>> {
        let events = self.state.events.lock().unwrap();
        Ok(events
            .iter()
            .filter(|e| e.has_attendee(attendee_id))
            .cloned()
            .collect())
    }
}

struct CountingGateway {
    state: Arc<MockState>,
}

#[async_trait]
impl AssetGateway for CountingGateway {
    async fn upload_image(&self, _bytes: Vec<u8>) -> RepoResult<UploadedAsset> {
        self.state.uploads.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_uploads.load(Ordering::SeqCst) {
            return Err(DomainError::UploadFailed("mock upload failure".to_string()));
        }
        Ok(UploadedAsset {
            url: MOCK_ASSET_URL.to_string(),
        })
    }
}

/// Build a context wired to in-memory doubles, returning the shared state
/// for assertions. The pool is lazy and never connects.
pub fn test_context() -> (ServiceContext, Arc<MockState>) {
    let state = MockState::new();
    let pool = PgPool::connect_lazy("postgres://localhost/unused").unwrap();

    let ctx = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(Arc::new(InMemoryUserRepository {
            state: Arc::clone(&state),
        }))
        .event_repo(Arc::new(InMemoryEventRepository {
            state: Arc::clone(&state),
        }))
        .asset_gateway(Arc::new(CountingGateway {
            state: Arc::clone(&state),
        }))
        .build()
        .unwrap();

    (ctx, state)
}
