use serde::{Deserialize, Serialize};

/// Transient checkout form state; cleared by the caller after a successful
/// submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutInput {
    pub name: String,
    pub phone: String,
    /// May be empty; passed through to the order payload as-is.
    #[serde(default)]
    pub email: String,
}
