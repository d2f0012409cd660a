use std::sync::Arc;

use crate::auth::credentials::UserStore;
use crate::database::DbPool;
use crate::services::product::ProductService;

/// Shared application state, cheap to clone into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
    pub products: ProductService,
    pub users: Arc<UserStore>,
}

impl AppState {
    pub fn new(db_pool: DbPool, users: UserStore) -> Self {
        Self {
            products: ProductService::new(db_pool.clone()),
            db_pool,
            users: Arc::new(users),
        }
    }
}
