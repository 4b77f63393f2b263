use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::CourseApi;
use crate::api::dto::{OrderAck, OrderItem, OrderRequest};
use crate::cart::{CartLedger, CartOutcome};
use crate::catalog::CatalogStore;
use crate::checkout;
use crate::error::AppError;
use crate::filter::filter_courses;
use crate::models::{CheckoutInput, Course, Filters, SortKey, seed_courses};
use crate::storage::SnapshotStore;

/// One storefront session: the catalog, the cart and the active filters,
/// wired to a remote API and a snapshot store. Constructed explicitly per
/// session; there is no shared global state.
pub struct Storefront {
    catalog: CatalogStore,
    cart: CartLedger,
    filters: Filters,
    cart_open: bool,
    api: Arc<dyn CourseApi>,
    store: Arc<dyn SnapshotStore>,
}

impl Storefront {
    /// Starts a session: persisted snapshots win over the seed, then a
    /// remote refresh is attempted. A failed fetch falls back silently to
    /// whatever is already loaded.
    pub async fn bootstrap(
        api: Arc<dyn CourseApi>,
        store: Arc<dyn SnapshotStore>,
    ) -> Result<Self, AppError> {
        let catalog = match store.load_catalog().await? {
            Some(courses) => {
                info!("catalog restored from snapshot ({} courses)", courses.len());
                CatalogStore::new(courses)
            }
            None => CatalogStore::new(seed_courses()),
        };
        let cart = match store.load_cart().await? {
            Some(entries) => {
                info!("cart restored from snapshot ({} entries)", entries.len());
                CartLedger::from_entries(entries)
            }
            None => CartLedger::new(),
        };

        let mut storefront = Self {
            catalog,
            cart,
            filters: Filters::default(),
            cart_open: false,
            api,
            store,
        };

        if let Err(err) = storefront.refresh_catalog().await {
            debug!("startup catalog fetch failed, using local data: {}", err);
        }
        Ok(storefront)
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn set_cart_open(&mut self, open: bool) {
        self.cart_open = open;
    }

    /// The course list as the active filters see it.
    pub fn visible_courses(&self) -> Vec<Course> {
        filter_courses(self.catalog.list(), &self.filters)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.filters.category = category;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.filters.sort = sort;
    }

    pub async fn add_to_cart(&mut self, course_id: &str) -> CartOutcome {
        let outcome = self.cart.add(&mut self.catalog, course_id);
        if let CartOutcome::Added { .. } = outcome {
            self.cart_open = true;
            self.persist().await;
        }
        outcome
    }

    pub async fn change_qty(&mut self, course_id: &str, delta: i64) -> CartOutcome {
        let outcome = self.cart.change_qty(&mut self.catalog, course_id, delta);
        match outcome {
            CartOutcome::Updated { .. } | CartOutcome::Removed => self.persist().await,
            _ => {}
        }
        outcome
    }

    /// Explicit cancel: every held seat goes back to the catalog.
    pub async fn cancel_cart(&mut self) {
        self.cart.clear(&mut self.catalog);
        self.cart_open = false;
        self.persist().await;
    }

    /// Validates, submits the ledger as an order and, on acceptance, resets
    /// the cart and refreshes the catalog. The reset is final even when the
    /// follow-up refresh fails; submission failures leave all state as-is.
    pub async fn checkout(&mut self, input: &CheckoutInput) -> Result<OrderAck, AppError> {
        checkout::validate(input, &self.cart)?;

        let order = self.order_request(input);
        let ack = self.api.submit_order(&order).await?;
        info!("order accepted: {}", ack.order_id);

        self.cart.reset();
        self.cart_open = false;
        self.persist().await;

        if let Err(err) = self.refresh_catalog().await {
            warn!("catalog refresh after checkout failed: {}", err);
        }
        Ok(ack)
    }

    /// Pulls the authoritative catalog and reconciles any held entries
    /// against the fresh seat counts.
    pub async fn refresh_catalog(&mut self) -> Result<(), AppError> {
        let courses = self.api.fetch_courses().await?;
        info!("catalog refreshed ({} courses)", courses.len());

        self.catalog.replace_all(courses);
        let report = self.cart.reconcile(&mut self.catalog);
        if !report.is_clean() {
            warn!(
                "cart reconciled after refresh: {} dropped, {} clamped",
                report.dropped.len(),
                report.clamped.len()
            );
        }
        self.persist().await;
        Ok(())
    }

    fn order_request(&self, input: &CheckoutInput) -> OrderRequest {
        let items = self
            .cart
            .entries()
            .map(|e| OrderItem {
                course_id: e.course.id.clone(),
                title: e.course.title.clone(),
                price: e.course.price,
                quantity: e.qty,
            })
            .collect();
        OrderRequest {
            customer_name: input.name.trim().to_string(),
            customer_phone: input.phone.trim().to_string(),
            customer_email: input.email.trim().to_string(),
            items,
            total_price: self.cart.total_price(),
        }
    }

    /// Explicit snapshot write after a mutation. Best-effort: a failed save
    /// never undoes the cart operation.
    async fn persist(&self) {
        let entries: Vec<_> = self.cart.entries().cloned().collect();
        if let Err(err) = self.store.save_cart(&entries).await {
            warn!("cart snapshot save failed: {}", err);
        }
        if let Err(err) = self.store.save_catalog(self.catalog.list()).await {
            warn!("catalog snapshot save failed: {}", err);
        }
    }
}
