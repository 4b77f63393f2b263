//! End-to-end run of the offline "simulate the order" mode: LocalCourseApi
//! plus no persistence, the first iteration of the storefront.

use std::sync::Arc;

use coursecart::api::LocalCourseApi;
use coursecart::cart::CartOutcome;
use coursecart::models::{CheckoutInput, Filters, SortKey};
use coursecart::services::Storefront;
use coursecart::storage::NoopSnapshotStore;

#[tokio::test]
async fn full_local_session() {
    let mut storefront = Storefront::bootstrap(Arc::new(LocalCourseApi), Arc::new(NoopSnapshotStore))
        .await
        .expect("bootstrap failed");

    assert_eq!(storefront.catalog().len(), 10);

    // browse
    storefront.set_query("python");
    storefront.set_sort(SortKey::PriceAsc);
    let visible = storefront.visible_courses();
    assert_eq!(visible.len(), 2);
    assert!(visible[0].price <= visible[1].price);
    storefront.set_query("");
    storefront.set_category(None);
    assert_eq!(storefront.filters(), &Filters {
        query: String::new(),
        category: None,
        sort: SortKey::PriceAsc,
    });

    // fill the cart
    assert_eq!(storefront.add_to_cart("c1").await, CartOutcome::Added { qty: 1 });
    assert_eq!(storefront.add_to_cart("c1").await, CartOutcome::Added { qty: 2 });
    assert_eq!(storefront.add_to_cart("c3").await, CartOutcome::Added { qty: 1 });
    assert_eq!(
        storefront.change_qty("c3", 1).await,
        CartOutcome::Updated { qty: 2 }
    );
    assert_eq!(storefront.cart().total_count(), 4);
    assert_eq!(storefront.catalog().find_by_id("c1").unwrap().seats_remaining, 3);

    // checkout against the simulated backend
    let input = CheckoutInput {
        name: "Ada Lovelace".to_string(),
        phone: "02079460000".to_string(),
        email: "ada@example.com".to_string(),
    };
    let ack = storefront.checkout(&input).await.expect("checkout failed");
    assert!(!ack.order_id.is_empty());

    // cart cleared, catalog refreshed from the (seeded) authoritative source
    assert!(storefront.cart().is_empty());
    assert_eq!(storefront.catalog().find_by_id("c1").unwrap().seats_remaining, 5);
}
