//! Dashboard summary counters.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::auth::AuthPolicy;
use crate::clients::RestClient;
use crate::rest::{ResourceError, ResourceOperation};

/// Headline numbers for the dashboard home page.
///
/// Known counters are typed; anything else the backend adds is kept in
/// `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardStats {
    /// Number of products.
    #[serde(default)]
    pub total_products: Option<u64>,

    /// Number of orders.
    #[serde(default)]
    pub total_orders: Option<u64>,

    /// Number of customers.
    #[serde(default)]
    pub total_customers: Option<u64>,

    /// Revenue as a decimal string or number, as sent.
    #[serde(default)]
    pub total_revenue: Option<Value>,

    /// Orders awaiting confirmation.
    #[serde(default)]
    pub pending_orders: Option<u64>,

    /// Counters this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DashboardStats {
    /// Fetches the current stats.
    ///
    /// # Errors
    ///
    /// Returns the mapped HTTP error.
    pub async fn fetch(client: &RestClient) -> Result<Self, ResourceError> {
        let response = client
            .get("dashboard-stats", Vec::new(), AuthPolicy::Admin)
            .await
            .map_err(|e| {
                ResourceError::from_rest(e, "Dashboard stats", ResourceOperation::Find, None)
            })?;
        Ok(response.decode()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_counters_are_kept() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"total_products": 40, "total_orders": 12, "total_revenue": "55000.00", "low_stock": 3}"#,
        )
        .unwrap();
        assert_eq!(stats.total_products, Some(40));
        assert_eq!(stats.extra["low_stock"], 3);
        assert!(stats.total_customers.is_none());
    }
}
