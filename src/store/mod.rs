//! In-memory data store.
//!
//! Single source of truth for all entities during the process lifetime.
//! Nothing survives a restart except photo binaries, which land on disk via
//! [`FileStore`]. Each collection is a `BTreeMap` keyed by a per-collection
//! monotonically increasing id, so listing returns insertion order.

mod files;

pub use files::FileStore;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::{
    Category, CreateCategoryRequest, CreateEventRequest, CreateNoteRequest, CreateUserRequest,
    CreateWarrantyRequest, DashboardSummary, ExportData, MaintenanceEvent, Note, Photo,
    PhotoUpload, UpdateCategoryRequest, UpdateEventRequest, UpdateNoteRequest, UpdatePhotoRequest,
    UpdateWarrantyRequest, User, Warranty,
};

/// Default window for the dashboard's upcoming-warranty count.
const SUMMARY_UPCOMING_DAYS: i64 = 30;

#[derive(Debug, Default)]
struct Collections {
    users: BTreeMap<i64, User>,
    categories: BTreeMap<i64, Category>,
    photos: BTreeMap<i64, Photo>,
    notes: BTreeMap<i64, Note>,
    warranties: BTreeMap<i64, Warranty>,
    events: BTreeMap<i64, MaintenanceEvent>,

    next_user_id: i64,
    next_category_id: i64,
    next_photo_id: i64,
    next_note_id: i64,
    next_warranty_id: i64,
    next_event_id: i64,
}

impl Collections {
    fn new() -> Self {
        Self {
            next_user_id: 1,
            next_category_id: 1,
            next_photo_id: 1,
            next_note_id: 1,
            next_warranty_id: 1,
            next_event_id: 1,
            ..Self::default()
        }
    }
}

/// In-memory store for all application data.
#[derive(Debug)]
pub struct Store {
    inner: RwLock<Collections>,
    files: FileStore,
}

impl Store {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            inner: RwLock::new(Collections::new()),
            files: FileStore::new(upload_dir),
        }
    }

    /// Create the stock categories. Called once at startup.
    pub async fn seed_default_categories(&self) {
        let defaults = [
            ("Plumbing", "#3b82f6"),
            ("Electrical", "#10b981"),
            ("HVAC", "#f59e0b"),
            ("Appliances", "#8b5cf6"),
            ("Garden", "#ec4899"),
        ];

        for (name, color) in defaults {
            self.create_category(CreateCategoryRequest {
                name: name.to_string(),
                color: color.to_string(),
            })
            .await;
        }
    }

    // ==================== USER OPERATIONS ====================

    pub async fn get_user(&self, id: i64) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }

    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        let inner = self.inner.read().await;
        inner
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> User {
        let mut inner = self.inner.write().await;
        let id = inner.next_user_id;
        inner.next_user_id += 1;

        let user = User {
            id,
            username: request.username,
            password: request.password,
        };
        inner.users.insert(id, user.clone());
        user
    }

    // ==================== CATEGORY OPERATIONS ====================

    pub async fn list_categories(&self) -> Vec<Category> {
        self.inner.read().await.categories.values().cloned().collect()
    }

    pub async fn get_category(&self, id: i64) -> Option<Category> {
        self.inner.read().await.categories.get(&id).cloned()
    }

    pub async fn create_category(&self, request: CreateCategoryRequest) -> Category {
        let mut inner = self.inner.write().await;
        let id = inner.next_category_id;
        inner.next_category_id += 1;

        let category = Category {
            id,
            name: request.name,
            color: request.color,
        };
        inner.categories.insert(id, category.clone());
        category
    }

    pub async fn update_category(
        &self,
        id: i64,
        request: UpdateCategoryRequest,
    ) -> Option<Category> {
        let mut inner = self.inner.write().await;
        let category = inner.categories.get_mut(&id)?;

        if let Some(name) = request.name {
            category.name = name;
        }
        if let Some(color) = request.color {
            category.color = color;
        }
        Some(category.clone())
    }

    pub async fn delete_category(&self, id: i64) -> bool {
        self.inner.write().await.categories.remove(&id).is_some()
    }

    // ==================== PHOTO OPERATIONS ====================

    pub async fn list_photos(&self) -> Vec<Photo> {
        self.inner.read().await.photos.values().cloned().collect()
    }

    pub async fn get_photo(&self, id: i64) -> Option<Photo> {
        self.inner.read().await.photos.get(&id).cloned()
    }

    pub async fn photos_by_category(&self, category_id: i64) -> Vec<Photo> {
        let inner = self.inner.read().await;
        inner
            .photos
            .values()
            .filter(|p| p.category_id == Some(category_id))
            .cloned()
            .collect()
    }

    pub async fn recent_photos(&self, limit: usize) -> Vec<Photo> {
        let inner = self.inner.read().await;
        let mut photos: Vec<Photo> = inner.photos.values().cloned().collect();
        photos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        photos.truncate(limit);
        photos
    }

    /// Create a photo, writing its binary content to disk first. If the file
    /// write fails the entity is not stored.
    pub async fn create_photo(
        &self,
        upload: PhotoUpload,
        bytes: &[u8],
    ) -> Result<Photo, AppError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_photo_id;
        inner.next_photo_id += 1;

        let extension = Path::new(&upload.original_name)
            .extension()
            .and_then(|e| e.to_str());
        let file_name = self.files.save(id, extension, bytes).await?;

        let photo = Photo {
            id,
            title: upload.title,
            description: upload.description,
            file_path: file_name,
            content_type: upload.content_type,
            category_id: upload.category_id,
            created_at: Utc::now(),
        };
        inner.photos.insert(id, photo.clone());
        Ok(photo)
    }

    pub async fn update_photo(&self, id: i64, request: UpdatePhotoRequest) -> Option<Photo> {
        let mut inner = self.inner.write().await;
        let photo = inner.photos.get_mut(&id)?;

        if let Some(title) = request.title {
            photo.title = title;
        }
        if let Some(description) = request.description {
            photo.description = Some(description);
        }
        if let Some(category_id) = request.category_id {
            photo.category_id = Some(category_id);
        }
        Some(photo.clone())
    }

    /// Delete a photo and best-effort remove its backing file. Map removal
    /// decides the result; file errors are only logged.
    pub async fn delete_photo(&self, id: i64) -> bool {
        let mut inner = self.inner.write().await;
        match inner.photos.remove(&id) {
            Some(photo) => {
                self.files.remove(&photo.file_path).await;
                true
            }
            None => false,
        }
    }

    /// Fetch a photo's binary content and content type.
    pub async fn photo_file(&self, id: i64) -> Option<(Vec<u8>, String)> {
        let photo = self.get_photo(id).await?;
        let bytes = self.files.read(&photo.file_path).await?;
        Some((bytes, photo.content_type))
    }

    // ==================== NOTE OPERATIONS ====================

    pub async fn list_notes(&self) -> Vec<Note> {
        self.inner.read().await.notes.values().cloned().collect()
    }

    pub async fn get_note(&self, id: i64) -> Option<Note> {
        self.inner.read().await.notes.get(&id).cloned()
    }

    pub async fn notes_by_category(&self, category_id: i64) -> Vec<Note> {
        let inner = self.inner.read().await;
        inner
            .notes
            .values()
            .filter(|n| n.category_id == Some(category_id))
            .cloned()
            .collect()
    }

    pub async fn recent_notes(&self, limit: usize) -> Vec<Note> {
        let inner = self.inner.read().await;
        let mut notes: Vec<Note> = inner.notes.values().cloned().collect();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notes.truncate(limit);
        notes
    }

    pub async fn create_note(&self, request: CreateNoteRequest) -> Note {
        let mut inner = self.inner.write().await;
        let id = inner.next_note_id;
        inner.next_note_id += 1;

        let note = Note {
            id,
            title: request.title,
            content: request.content,
            category_id: request.category_id,
            created_at: Utc::now(),
        };
        inner.notes.insert(id, note.clone());
        note
    }

    pub async fn update_note(&self, id: i64, request: UpdateNoteRequest) -> Option<Note> {
        let mut inner = self.inner.write().await;
        let note = inner.notes.get_mut(&id)?;

        if let Some(title) = request.title {
            note.title = title;
        }
        if let Some(content) = request.content {
            note.content = content;
        }
        if let Some(category_id) = request.category_id {
            note.category_id = Some(category_id);
        }
        Some(note.clone())
    }

    pub async fn delete_note(&self, id: i64) -> bool {
        self.inner.write().await.notes.remove(&id).is_some()
    }

    // ==================== WARRANTY OPERATIONS ====================

    pub async fn list_warranties(&self) -> Vec<Warranty> {
        self.inner.read().await.warranties.values().cloned().collect()
    }

    pub async fn get_warranty(&self, id: i64) -> Option<Warranty> {
        self.inner.read().await.warranties.get(&id).cloned()
    }

    pub async fn warranties_by_category(&self, category_id: i64) -> Vec<Warranty> {
        let inner = self.inner.read().await;
        inner
            .warranties
            .values()
            .filter(|w| w.category_id == Some(category_id))
            .cloned()
            .collect()
    }

    /// Warranties expiring within `[now, now + days]`, soonest first.
    /// Already expired warranties are excluded.
    pub async fn upcoming_warranties(&self, days: i64) -> Vec<Warranty> {
        let now = Utc::now();
        let end = now + Duration::days(days);

        let inner = self.inner.read().await;
        let mut upcoming: Vec<Warranty> = inner
            .warranties
            .values()
            .filter(|w| w.expiration_date >= now && w.expiration_date <= end)
            .cloned()
            .collect();
        upcoming.sort_by(|a, b| a.expiration_date.cmp(&b.expiration_date));
        upcoming
    }

    pub async fn create_warranty(&self, request: CreateWarrantyRequest) -> Warranty {
        let mut inner = self.inner.write().await;
        let id = inner.next_warranty_id;
        inner.next_warranty_id += 1;

        let warranty = Warranty {
            id,
            title: request.title,
            description: request.description,
            location: request.location,
            expiration_date: request.expiration_date,
            category_id: request.category_id,
            created_at: Utc::now(),
        };
        inner.warranties.insert(id, warranty.clone());
        warranty
    }

    pub async fn update_warranty(
        &self,
        id: i64,
        request: UpdateWarrantyRequest,
    ) -> Option<Warranty> {
        let mut inner = self.inner.write().await;
        let warranty = inner.warranties.get_mut(&id)?;

        if let Some(title) = request.title {
            warranty.title = title;
        }
        if let Some(description) = request.description {
            warranty.description = Some(description);
        }
        if let Some(location) = request.location {
            warranty.location = Some(location);
        }
        if let Some(expiration_date) = request.expiration_date {
            warranty.expiration_date = expiration_date;
        }
        if let Some(category_id) = request.category_id {
            warranty.category_id = Some(category_id);
        }
        Some(warranty.clone())
    }

    pub async fn delete_warranty(&self, id: i64) -> bool {
        self.inner.write().await.warranties.remove(&id).is_some()
    }

    // ==================== MAINTENANCE EVENT OPERATIONS ====================

    pub async fn list_events(&self) -> Vec<MaintenanceEvent> {
        self.inner.read().await.events.values().cloned().collect()
    }

    pub async fn get_event(&self, id: i64) -> Option<MaintenanceEvent> {
        self.inner.read().await.events.get(&id).cloned()
    }

    pub async fn events_by_category(&self, category_id: i64) -> Vec<MaintenanceEvent> {
        let inner = self.inner.read().await;
        inner
            .events
            .values()
            .filter(|e| e.category_id == Some(category_id))
            .cloned()
            .collect()
    }

    /// Most recent events by event date (timeline order), not creation time.
    pub async fn recent_events(&self, limit: usize) -> Vec<MaintenanceEvent> {
        let inner = self.inner.read().await;
        let mut events: Vec<MaintenanceEvent> = inner.events.values().cloned().collect();
        events.sort_by(|a, b| b.date.cmp(&a.date));
        events.truncate(limit);
        events
    }

    pub async fn create_event(&self, request: CreateEventRequest) -> MaintenanceEvent {
        let mut inner = self.inner.write().await;
        let id = inner.next_event_id;
        inner.next_event_id += 1;

        let event = MaintenanceEvent {
            id,
            title: request.title,
            description: request.description,
            cost: request.cost,
            photo_ids: request.photo_ids,
            receipt_photo_ids: request.receipt_photo_ids,
            category_id: request.category_id,
            date: request.date,
            created_at: Utc::now(),
        };
        inner.events.insert(id, event.clone());
        event
    }

    pub async fn update_event(
        &self,
        id: i64,
        request: UpdateEventRequest,
    ) -> Option<MaintenanceEvent> {
        let mut inner = self.inner.write().await;
        let event = inner.events.get_mut(&id)?;

        if let Some(title) = request.title {
            event.title = title;
        }
        if let Some(description) = request.description {
            event.description = description;
        }
        if let Some(cost) = request.cost {
            event.cost = Some(cost);
        }
        if let Some(photo_ids) = request.photo_ids {
            event.photo_ids = Some(photo_ids);
        }
        if let Some(receipt_photo_ids) = request.receipt_photo_ids {
            event.receipt_photo_ids = Some(receipt_photo_ids);
        }
        if let Some(category_id) = request.category_id {
            event.category_id = Some(category_id);
        }
        if let Some(date) = request.date {
            event.date = date;
        }
        Some(event.clone())
    }

    pub async fn delete_event(&self, id: i64) -> bool {
        self.inner.write().await.events.remove(&id).is_some()
    }

    // ==================== AGGREGATES ====================

    /// Snapshot of every collection for bulk download.
    pub async fn export(&self) -> ExportData {
        let inner = self.inner.read().await;
        ExportData {
            categories: inner.categories.values().cloned().collect(),
            photos: inner.photos.values().cloned().collect(),
            notes: inner.notes.values().cloned().collect(),
            warranties: inner.warranties.values().cloned().collect(),
            maintenance_events: inner.events.values().cloned().collect(),
        }
    }

    /// Per-collection counts for the dashboard.
    pub async fn summary(&self) -> DashboardSummary {
        let upcoming = self.upcoming_warranties(SUMMARY_UPCOMING_DAYS).await.len();

        let inner = self.inner.read().await;
        DashboardSummary {
            categories: inner.categories.len(),
            photos: inner.photos.len(),
            notes: inner.notes.len(),
            warranties: inner.warranties.len(),
            maintenance_events: inner.events.len(),
            upcoming_warranties: upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> Store {
        Store::new(dir.path().join("uploads"))
    }

    fn note_request(title: &str) -> CreateNoteRequest {
        CreateNoteRequest {
            title: title.to_string(),
            content: "content".to_string(),
            category_id: None,
        }
    }

    fn warranty_request(title: &str, expiration: DateTime<Utc>) -> CreateWarrantyRequest {
        CreateWarrantyRequest {
            title: title.to_string(),
            description: None,
            location: None,
            expiration_date: expiration,
            category_id: None,
        }
    }

    #[tokio::test]
    async fn test_ids_strictly_increase_and_never_reused() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let a = store.create_note(note_request("a")).await;
        let b = store.create_note(note_request("b")).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        // Deleting does not free the id for reuse
        assert!(store.delete_note(b.id).await);
        let c = store.create_note(note_request("c")).await;
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn test_counters_are_per_collection() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let note = store.create_note(note_request("n")).await;
        let category = store
            .create_category(CreateCategoryRequest {
                name: "Plumbing".to_string(),
                color: "#3b82f6".to_string(),
            })
            .await;

        assert_eq!(note.id, 1);
        assert_eq!(category.id, 1);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none_and_mutates_nothing() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let existing = store.create_note(note_request("keep")).await;

        let result = store
            .update_note(
                999,
                UpdateNoteRequest {
                    title: Some("changed".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(result.is_none());

        let unchanged = store.get_note(existing.id).await.unwrap();
        assert_eq!(unchanged.title, "keep");
        assert_eq!(store.list_notes().await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_merges_only_provided_fields() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let note = store.create_note(note_request("original")).await;
        let updated = store
            .update_note(
                note.id,
                UpdateNoteRequest {
                    content: Some("new content".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "original");
        assert_eq!(updated.content, "new content");
        assert_eq!(updated.created_at, note.created_at);
    }

    #[tokio::test]
    async fn test_update_null_field_does_not_clear() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let note = store
            .create_note(CreateNoteRequest {
                title: "titled".to_string(),
                content: "c".to_string(),
                category_id: Some(3),
            })
            .await;

        // An explicit null on the wire deserializes to None and is merged
        // the same as an absent field
        let request: UpdateNoteRequest = serde_json::from_value(serde_json::json!({
            "title": "renamed",
            "categoryId": null
        }))
        .unwrap();

        let updated = store.update_note(note.id, request).await.unwrap();
        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.category_id, Some(3));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent_safe() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let note = store.create_note(note_request("n")).await;
        assert!(store.delete_note(note.id).await);
        assert!(!store.delete_note(note.id).await);
    }

    #[tokio::test]
    async fn test_recent_notes_limit_order_and_deleted_exclusion() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store.create_note(note_request("first")).await;
        let second = store.create_note(note_request("second")).await;
        store.create_note(note_request("third")).await;

        let recent = store.recent_notes(2).await;
        assert_eq!(recent.len(), 2);
        assert!(recent[0].created_at >= recent[1].created_at);

        store.delete_note(second.id).await;
        let recent = store.recent_notes(10).await;
        assert_eq!(recent.len(), 2);
        assert!(recent.iter().all(|n| n.id != second.id));
    }

    #[tokio::test]
    async fn test_by_category_filters_and_unknown_category_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store
            .create_note(CreateNoteRequest {
                title: "tagged".to_string(),
                content: "c".to_string(),
                category_id: Some(7),
            })
            .await;
        store.create_note(note_request("untagged")).await;

        let tagged = store.notes_by_category(7).await;
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].title, "tagged");

        assert!(store.notes_by_category(999).await.is_empty());
    }

    #[tokio::test]
    async fn test_upcoming_warranties_window() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let now = Utc::now();
        let expired = store
            .create_warranty(warranty_request("expired", now - Duration::days(1)))
            .await;
        let soon = store
            .create_warranty(warranty_request("soon", now + Duration::days(5)))
            .await;
        let later = store
            .create_warranty(warranty_request("later", now + Duration::days(20)))
            .await;
        let far = store
            .create_warranty(warranty_request("far", now + Duration::days(90)))
            .await;

        let upcoming = store.upcoming_warranties(30).await;
        let ids: Vec<i64> = upcoming.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![soon.id, later.id]);
        assert!(!ids.contains(&expired.id));
        assert!(!ids.contains(&far.id));

        // Narrow window excludes the 5-day warranty
        let narrow = store.upcoming_warranties(3).await;
        assert!(narrow.is_empty());
    }

    #[tokio::test]
    async fn test_upcoming_warranty_boundary_is_inclusive() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        // Expiring exactly `days` from a moment just before the query runs:
        // still inside the window when the query computes its own "now".
        let boundary = store
            .create_warranty(warranty_request("boundary", Utc::now() + Duration::days(30)))
            .await;

        let upcoming = store.upcoming_warranties(30).await;
        assert!(upcoming.iter().any(|w| w.id == boundary.id));
    }

    #[tokio::test]
    async fn test_recent_events_sort_by_event_date() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let now = Utc::now();
        let older = store
            .create_event(CreateEventRequest {
                title: "older".to_string(),
                description: "d".to_string(),
                cost: None,
                photo_ids: None,
                receipt_photo_ids: None,
                category_id: None,
                date: now - Duration::days(10),
            })
            .await;
        let newer = store
            .create_event(CreateEventRequest {
                title: "newer".to_string(),
                description: "d".to_string(),
                cost: None,
                photo_ids: None,
                receipt_photo_ids: None,
                category_id: None,
                date: now - Duration::days(1),
            })
            .await;

        let recent = store.recent_events(1).await;
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, newer.id);

        let all = store.recent_events(10).await;
        assert_eq!(all[0].id, newer.id);
        assert_eq!(all[1].id, older.id);
    }

    #[tokio::test]
    async fn test_photo_file_lifecycle() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let upload = PhotoUpload {
            title: "Boiler".to_string(),
            description: None,
            original_name: "boiler.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            category_id: None,
        };
        let photo = store.create_photo(upload, b"fake image bytes").await.unwrap();
        assert_eq!(photo.file_path, "photo_1.jpg");

        let on_disk = dir.path().join("uploads").join(&photo.file_path);
        assert!(on_disk.exists());

        let (bytes, content_type) = store.photo_file(photo.id).await.unwrap();
        assert_eq!(bytes, b"fake image bytes");
        assert_eq!(content_type, "image/jpeg");

        assert!(store.delete_photo(photo.id).await);
        assert!(!on_disk.exists());
        assert!(store.photo_file(photo.id).await.is_none());
        assert!(!store.delete_photo(photo.id).await);
    }

    #[tokio::test]
    async fn test_export_snapshots_all_collections() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store.create_note(note_request("n")).await;
        store
            .create_warranty(warranty_request("w", Utc::now() + Duration::days(10)))
            .await;
        store.seed_default_categories().await;

        let export = store.export().await;
        assert_eq!(export.categories.len(), 5);
        assert_eq!(export.notes.len(), 1);
        assert_eq!(export.warranties.len(), 1);
        assert!(export.photos.is_empty());
        assert!(export.maintenance_events.is_empty());
    }

    #[tokio::test]
    async fn test_summary_counts() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store.seed_default_categories().await;
        store.create_note(note_request("n")).await;
        store
            .create_warranty(warranty_request("soon", Utc::now() + Duration::days(5)))
            .await;
        store
            .create_warranty(warranty_request("far", Utc::now() + Duration::days(120)))
            .await;

        let summary = store.summary().await;
        assert_eq!(summary.categories, 5);
        assert_eq!(summary.notes, 1);
        assert_eq!(summary.warranties, 2);
        assert_eq!(summary.upcoming_warranties, 1);
        assert_eq!(summary.photos, 0);
        assert_eq!(summary.maintenance_events, 0);
    }

    #[tokio::test]
    async fn test_user_lookup_by_username() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let user = store
            .create_user(CreateUserRequest {
                username: "homeowner".to_string(),
                password: "secret".to_string(),
            })
            .await;

        assert_eq!(store.get_user(user.id).await.unwrap().username, "homeowner");
        assert!(store.get_user_by_username("homeowner").await.is_some());
        assert!(store.get_user_by_username("nobody").await.is_none());
    }
}
