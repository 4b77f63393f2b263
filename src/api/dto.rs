use serde::{Deserialize, Serialize};

use crate::models::Course;

/// Course object as served by the remote catalog. The id arrives as either
/// `_id` (Mongo-backed deployments) or `id`; seat counts may come under a
/// few legacy names. Everything is normalized into [`Course`].
#[derive(Debug, Deserialize)]
pub struct RawCourse {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default, alias = "spaces", alias = "availableInventory")]
    pub seats_remaining: u32,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<RawCourse> for Course {
    fn from(raw: RawCourse) -> Self {
        Course {
            id: raw.id,
            title: raw.title,
            topic: raw.topic,
            location: raw.location,
            category: raw.category,
            price: raw.price,
            instructor: raw.instructor,
            rating: raw.rating,
            seats_remaining: raw.seats_remaining,
            image: raw.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub course_id: String,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    pub total_price: f64,
}

/// Raw order response: a server-assigned id means acceptance, an `error`
/// field means a user-reportable rejection, anything else is unexpected.
#[derive(Debug, Deserialize)]
pub struct OrderResponse {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAck {
    pub order_id: String,
}
