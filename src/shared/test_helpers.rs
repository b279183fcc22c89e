//! In-memory storage used by service and end-to-end tests.
//!
//! Enforces the same unique and foreign-key rules as the SQL schema so that
//! constraint-driven paths can be exercised without a database.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::app::Services;
use crate::core::config::ContactConfig;
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::repositories::{CategoryReader, CategoryWriter};
use crate::features::categories::services::CategoryService;
use crate::features::contacts::models::{ContactMessage, NewContactMessage};
use crate::features::contacts::repositories::{ContactReader, ContactWriter};
use crate::features::contacts::services::ContactService;
use crate::features::recipes::models::{CategorySnapshot, NewRecipe, Recipe};
use crate::features::recipes::repositories::{RecipeReader, RecipeWriter};
use crate::features::recipes::services::RecipeService;
use crate::modules::notifications::LogNotifier;
use crate::shared::storage::StorageError;

const CATEGORY_NAME_KEY: &str = "categories_name_key";
const CATEGORY_SLUG_KEY: &str = "categories_slug_key";
const RECIPE_SLUG_KEY: &str = "recipes_slug_key";
const RECIPE_CATEGORY_FKEY: &str = "recipes_category_id_fkey";

#[derive(Default)]
struct Tables {
    last_category_id: i64,
    last_recipe_id: i64,
    last_contact_id: i64,
    categories: BTreeMap<i64, Category>,
    recipes: BTreeMap<i64, Recipe>,
    contacts: BTreeMap<i64, ContactMessage>,
}

impl Tables {
    fn category_conflict(&self, name: &str, slug: &str, own_id: Option<i64>) -> Option<&'static str> {
        self.categories
            .values()
            .filter(|c| Some(c.id) != own_id)
            .find_map(|c| {
                if c.name == name {
                    Some(CATEGORY_NAME_KEY)
                } else if c.slug == slug {
                    Some(CATEGORY_SLUG_KEY)
                } else {
                    None
                }
            })
    }

    fn recipe_slug_taken(&self, slug: &str, own_id: Option<i64>) -> bool {
        self.recipes
            .values()
            .any(|r| r.slug == slug && Some(r.id) != own_id)
    }

    fn with_category(&self, recipe: &Recipe) -> Recipe {
        let mut recipe = recipe.clone();
        recipe.category = self
            .categories
            .get(&recipe.category_id)
            .map(CategorySnapshot::from);
        recipe
    }

    fn recipes_newest_first(&self, filter: impl Fn(&Recipe) -> bool) -> Vec<Recipe> {
        let mut recipes: Vec<Recipe> = self
            .recipes
            .values()
            .filter(|r| filter(r))
            .map(|r| self.with_category(r))
            .collect();
        recipes.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        recipes
    }
}

/// Every repository capability backed by one set of in-memory tables
#[derive(Default)]
pub struct InMemoryDatabase {
    tables: Mutex<Tables>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("in-memory tables poisoned")
    }

    pub fn category_count(&self) -> usize {
        self.tables().categories.len()
    }

    pub fn recipe_count(&self) -> usize {
        self.tables().recipes.len()
    }

    pub fn contact_count(&self) -> usize {
        self.tables().contacts.len()
    }
}

#[async_trait]
impl CategoryReader for InMemoryDatabase {
    async fn list(&self) -> Result<Vec<Category>, StorageError> {
        let mut categories: Vec<Category> = self.tables().categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn get_by_id(&self, id: i64) -> Result<Category, StorageError> {
        self.tables()
            .categories
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn get_by_name(&self, name: &str) -> Result<Category, StorageError> {
        self.tables()
            .categories
            .values()
            .find(|c| c.name == name)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

#[async_trait]
impl CategoryWriter for InMemoryDatabase {
    async fn create(&self, category: NewCategory) -> Result<Category, StorageError> {
        let mut tables = self.tables();
        if let Some(constraint) = tables.category_conflict(&category.name, &category.slug, None) {
            return Err(StorageError::Duplicate {
                constraint: constraint.to_string(),
            });
        }

        tables.last_category_id += 1;
        let now = Utc::now();
        let stored = Category {
            id: tables.last_category_id,
            name: category.name,
            slug: category.slug,
            created_at: now,
            updated_at: now,
        };
        tables.categories.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, category: &Category) -> Result<Category, StorageError> {
        let mut tables = self.tables();
        if !tables.categories.contains_key(&category.id) {
            return Err(StorageError::NotFound);
        }
        if let Some(constraint) =
            tables.category_conflict(&category.name, &category.slug, Some(category.id))
        {
            return Err(StorageError::Duplicate {
                constraint: constraint.to_string(),
            });
        }

        let mut stored = category.clone();
        stored.updated_at = Utc::now();
        tables.categories.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<(), StorageError> {
        let mut tables = self.tables();
        if tables.recipes.values().any(|r| r.category_id == id) {
            return Err(StorageError::ForeignKey {
                constraint: RECIPE_CATEGORY_FKEY.to_string(),
            });
        }
        tables
            .categories
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }
}

#[async_trait]
impl RecipeReader for InMemoryDatabase {
    async fn list(&self) -> Result<Vec<Recipe>, StorageError> {
        Ok(self.tables().recipes_newest_first(|_| true))
    }

    async fn get_by_id(&self, id: i64) -> Result<Recipe, StorageError> {
        let tables = self.tables();
        tables
            .recipes
            .get(&id)
            .map(|r| tables.with_category(r))
            .ok_or(StorageError::NotFound)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Recipe, StorageError> {
        let tables = self.tables();
        tables
            .recipes
            .values()
            .find(|r| r.slug == slug)
            .map(|r| tables.with_category(r))
            .ok_or(StorageError::NotFound)
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Recipe>, StorageError> {
        Ok(self
            .tables()
            .recipes_newest_first(move |r| r.category_id == category_id))
    }
}

#[async_trait]
impl RecipeWriter for InMemoryDatabase {
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, StorageError> {
        let mut tables = self.tables();
        if !tables.categories.contains_key(&recipe.category_id) {
            return Err(StorageError::ForeignKey {
                constraint: RECIPE_CATEGORY_FKEY.to_string(),
            });
        }
        if tables.recipe_slug_taken(&recipe.slug, None) {
            return Err(StorageError::Duplicate {
                constraint: RECIPE_SLUG_KEY.to_string(),
            });
        }

        tables.last_recipe_id += 1;
        let now = Utc::now();
        let stored = Recipe {
            id: tables.last_recipe_id,
            category_id: recipe.category_id,
            name: recipe.name,
            slug: recipe.slug,
            preparation_time: recipe.preparation_time,
            description: recipe.description,
            photo: recipe.photo,
            created_at: now,
            updated_at: now,
            category: None,
        };
        tables.recipes.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, recipe: &Recipe) -> Result<Recipe, StorageError> {
        let mut tables = self.tables();
        if !tables.recipes.contains_key(&recipe.id) {
            return Err(StorageError::NotFound);
        }
        if !tables.categories.contains_key(&recipe.category_id) {
            return Err(StorageError::ForeignKey {
                constraint: RECIPE_CATEGORY_FKEY.to_string(),
            });
        }
        if tables.recipe_slug_taken(&recipe.slug, Some(recipe.id)) {
            return Err(StorageError::Duplicate {
                constraint: RECIPE_SLUG_KEY.to_string(),
            });
        }

        let mut stored = recipe.clone();
        stored.category = None;
        stored.updated_at = Utc::now();
        tables.recipes.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<(), StorageError> {
        self.tables()
            .recipes
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }
}

#[async_trait]
impl ContactReader for InMemoryDatabase {
    async fn list(&self) -> Result<Vec<ContactMessage>, StorageError> {
        let mut messages: Vec<ContactMessage> = self.tables().contacts.values().cloned().collect();
        messages.sort_by(|a, b| (b.received_at, b.id).cmp(&(a.received_at, a.id)));
        Ok(messages)
    }

    async fn get_by_id(&self, id: i64) -> Result<ContactMessage, StorageError> {
        self.tables()
            .contacts
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

#[async_trait]
impl ContactWriter for InMemoryDatabase {
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, StorageError> {
        let mut tables = self.tables();
        tables.last_contact_id += 1;
        let now = Utc::now();
        let stored = ContactMessage {
            id: tables.last_contact_id,
            user_id: message.user_id,
            sender_name: message.sender_name,
            sender_email: message.sender_email,
            sender_phone: message.sender_phone,
            subject: message.subject,
            message: message.message,
            is_read: false,
            received_at: message.received_at,
            origin_ip: message.origin_ip,
            user_agent: message.user_agent,
            created_at: now,
            updated_at: now,
        };
        tables.contacts.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn mark_as_read(&self, id: i64) -> Result<ContactMessage, StorageError> {
        let mut tables = self.tables();
        let message = tables.contacts.get_mut(&id).ok_or(StorageError::NotFound)?;
        message.is_read = true;
        message.updated_at = Utc::now();
        Ok(message.clone())
    }
}

/// Fully wired services over one in-memory database.
pub fn in_memory_services(db: Arc<InMemoryDatabase>) -> Services {
    let categories = Arc::new(CategoryService::new(db.clone(), db.clone()));
    let recipes = Arc::new(RecipeService::new(db.clone(), db.clone(), categories.clone()));
    let contacts = Arc::new(ContactService::new(
        db.clone(),
        db,
        Arc::new(LogNotifier::new()),
        ContactConfig {
            admin_email: "admin@recipes.test".to_string(),
            from_email: "noreply@recipes.test".to_string(),
        },
    ));

    Services {
        categories,
        recipes,
        contacts,
    }
}
