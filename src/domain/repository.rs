//! In-memory record storage keyed by numeric identifiers.
//!
//! [`Repository`] stores one collection in a `BTreeMap` behind a
//! [`tokio::sync::RwLock`], so listings always come back in id order and
//! writes to one collection never block reads of another.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::error::ConsoleError;

/// A record that can live in a [`Repository`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Typed identifier of the record.
    type Id: Copy + From<u32> + Into<u32> + Send + Sync;

    /// Collection name used in error messages and logs.
    const COLLECTION: &'static str;

    /// Returns the record's identifier.
    fn id(&self) -> Self::Id;
}

/// Central store for one collection of records.
///
/// # Concurrency
///
/// - Reads of the same collection run concurrently.
/// - Writes to the same collection are serialized.
/// - `create_unless` and `update_unless` check and write under one lock.
/// - Cross-collection checks done by the service layer are not atomic.
#[derive(Debug)]
pub struct Repository<T> {
    records: RwLock<BTreeMap<u32, T>>,
}

impl<T: Record> Repository<T> {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Assigns the next identifier (`max + 1`) and stores the record built
    /// from it, returning a copy.
    pub async fn create<F>(&self, build: F) -> T
    where
        F: FnOnce(T::Id) -> T,
    {
        let mut map = self.records.write().await;
        let next = map
            .last_key_value()
            .map_or(1, |(last, _)| last.saturating_add(1));
        let record = build(T::Id::from(next));
        map.insert(next, record.clone());
        record
    }

    /// Returns a copy of the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] if no such record exists.
    pub async fn get(&self, id: T::Id) -> Result<T, ConsoleError> {
        let raw: u32 = id.into();
        self.records
            .read()
            .await
            .get(&raw)
            .cloned()
            .ok_or(ConsoleError::not_found(T::COLLECTION, raw))
    }

    /// Returns `true` if a record with the given id exists.
    pub async fn contains(&self, id: T::Id) -> bool {
        self.records.read().await.contains_key(&id.into())
    }

    /// Applies `apply` to the stored record under the write lock.
    ///
    /// If `apply` fails the record is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] if no such record exists, or the
    /// error produced by `apply`.
    pub async fn update<F>(&self, id: T::Id, apply: F) -> Result<T, ConsoleError>
    where
        F: FnOnce(&mut T) -> Result<(), ConsoleError>,
    {
        let raw: u32 = id.into();
        let mut map = self.records.write().await;
        let stored = map
            .get_mut(&raw)
            .ok_or(ConsoleError::not_found(T::COLLECTION, raw))?;
        let mut draft = stored.clone();
        apply(&mut draft)?;
        *stored = draft.clone();
        Ok(draft)
    }

    /// Removes a record, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] if no such record exists.
    pub async fn remove(&self, id: T::Id) -> Result<T, ConsoleError> {
        let raw: u32 = id.into();
        self.records
            .write()
            .await
            .remove(&raw)
            .ok_or(ConsoleError::not_found(T::COLLECTION, raw))
    }

    /// Like [`Repository::create`], but refuses when any stored record
    /// satisfies `conflicts`. Check and insert share one write lock.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Conflict`] naming the first conflicting record.
    pub async fn create_unless<P, F>(&self, conflicts: P, build: F) -> Result<T, ConsoleError>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(T::Id) -> T,
    {
        let mut map = self.records.write().await;
        let clash = map
            .iter()
            .find(|(_, record)| conflicts(*record))
            .map(|(key, _)| *key);
        if let Some(existing) = clash {
            return Err(ConsoleError::Conflict(format!(
                "{} {existing} already covers this record",
                T::COLLECTION
            )));
        }
        let next = map
            .last_key_value()
            .map_or(1, |(last, _)| last.saturating_add(1));
        let record = build(T::Id::from(next));
        map.insert(next, record.clone());
        Ok(record)
    }

    /// Like [`Repository::update`], but refuses the change when the updated
    /// record and any other stored record satisfy `conflicts(updated, other)`.
    /// Check and write share one write lock.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`], the error produced by `apply`, or
    /// [`ConsoleError::Conflict`] naming the first conflicting record.
    pub async fn update_unless<P, F>(
        &self,
        id: T::Id,
        conflicts: P,
        apply: F,
    ) -> Result<T, ConsoleError>
    where
        P: Fn(&T, &T) -> bool,
        F: FnOnce(&mut T) -> Result<(), ConsoleError>,
    {
        let raw: u32 = id.into();
        let mut map = self.records.write().await;
        let mut draft = map
            .get(&raw)
            .cloned()
            .ok_or(ConsoleError::not_found(T::COLLECTION, raw))?;
        apply(&mut draft)?;
        let clash = map
            .iter()
            .find(|(key, other)| **key != raw && conflicts(&draft, *other))
            .map(|(key, _)| *key);
        if let Some(other) = clash {
            return Err(ConsoleError::Conflict(format!(
                "{collection} {raw} would duplicate {collection} {other}",
                collection = T::COLLECTION
            )));
        }
        map.insert(raw, draft.clone());
        Ok(draft)
    }

    /// Returns all records in id order.
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.values().cloned().collect()
    }

    /// Returns the records matching `predicate`, in id order.
    pub async fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .values()
            .filter(|r| predicate(*r))
            .cloned()
            .collect()
    }

    /// Returns `true` if any record matches `predicate`.
    pub async fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.records.read().await.values().any(predicate)
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns `true` if the repository holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T: Record> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Contact, ContactDraft, ContactId};

    fn draft(name: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "+591 700 00000".to_string(),
            role: "Coordinator".to_string(),
        }
    }

    async fn seeded() -> Repository<Contact> {
        let repo = Repository::new();
        for name in ["Ana", "Luis", "Marta"] {
            repo.create(|id| Contact::new(id, draft(name))).await;
        }
        repo
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = seeded().await;
        let ids: Vec<u32> = repo.list().await.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn create_after_removal_uses_max_plus_one() {
        let repo = seeded().await;
        let _ = repo.remove(ContactId::new(2)).await;
        let next = repo.create(|id| Contact::new(id, draft("Pedro"))).await;
        assert_eq!(next.id.get(), 4);

        let _ = repo.remove(ContactId::new(4)).await;
        let _ = repo.remove(ContactId::new(3)).await;
        let reused = repo.create(|id| Contact::new(id, draft("Rosa"))).await;
        assert_eq!(reused.id.get(), 2);
    }

    #[tokio::test]
    async fn get_nonexistent_returns_error() {
        let repo: Repository<Contact> = Repository::new();
        let Err(err) = repo.get(ContactId::new(9)).await else {
            panic!("expected not found");
        };
        assert_eq!(err.to_string(), "contact 9 not found");
    }

    #[tokio::test]
    async fn failed_update_leaves_record_untouched() {
        let repo = seeded().await;
        let result = repo
            .update(ContactId::new(1), |c| {
                c.name = "changed".to_string();
                Err(ConsoleError::InvalidRequest("nope".to_string()))
            })
            .await;
        assert!(result.is_err());

        let Ok(stored) = repo.get(ContactId::new(1)).await else {
            panic!("contact missing");
        };
        assert_eq!(stored.name, "Ana");
    }

    #[tokio::test]
    async fn filter_and_any() {
        let repo = seeded().await;
        let matched = repo.filter(|c| c.name.starts_with('M')).await;
        assert_eq!(matched.len(), 1);
        assert!(repo.any(|c| c.name == "Luis").await);
        assert!(!repo.any(|c| c.name == "Zoe").await);
        assert_eq!(repo.len().await, 3);
        assert!(!repo.is_empty().await);
    }

    #[tokio::test]
    async fn create_unless_refuses_on_conflict() {
        let repo = seeded().await;
        let blocked = repo
            .create_unless(|c| c.name == "Luis", |id| Contact::new(id, draft("Luis")))
            .await;
        assert!(matches!(blocked, Err(ConsoleError::Conflict(_))));
        assert_eq!(repo.len().await, 3);

        let Ok(created) = repo
            .create_unless(|c| c.name == "Pedro", |id| Contact::new(id, draft("Pedro")))
            .await
        else {
            panic!("no conflicting record exists");
        };
        assert_eq!(created.id.get(), 4);
    }

    #[tokio::test]
    async fn concurrent_create_unless_inserts_once() {
        let repo = std::sync::Arc::new(Repository::<Contact>::new());
        let mut handles = Vec::new();
        for _ in 0..16 {
            let repo = std::sync::Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create_unless(|c| c.name == "Ana", |id| Contact::new(id, draft("Ana")))
                    .await
                    .is_ok()
            }));
        }
        let mut created = 0;
        for handle in handles {
            if matches!(handle.await, Ok(true)) {
                created += 1;
            }
        }
        assert_eq!(created, 1);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn update_unless_checks_the_updated_record() {
        let repo = seeded().await;
        let clash = repo
            .update_unless(
                ContactId::new(1),
                |updated, other| updated.name == other.name,
                |c| {
                    c.name = "Marta".to_string();
                    Ok(())
                },
            )
            .await;
        assert!(matches!(clash, Err(ConsoleError::Conflict(_))));

        let Ok(stored) = repo.get(ContactId::new(1)).await else {
            panic!("contact missing");
        };
        assert_eq!(stored.name, "Ana");

        // A record never conflicts with its own previous state.
        let unchanged = repo
            .update_unless(
                ContactId::new(1),
                |updated, other| updated.name == other.name,
                |c| {
                    c.role = "Director".to_string();
                    Ok(())
                },
            )
            .await;
        assert!(unchanged.is_ok());
    }
}
