//! AI chef description client
//!
//! One stateless request against an external text-generation endpoint for a
//! florid dish blurb plus a drink pairing. Purely cosmetic: any failure at
//! all (connect, status, parse, missing field) degrades to fixed fallback
//! copy, and the caller never sees an error. Nothing here touches the
//! persisted stores.

use serde::{Deserialize, Serialize};
use shared::models::MenuItem;
use std::time::Duration;

pub const FALLBACK_DESCRIPTION: &str = "A delicious choice that satisfies the soul.";
pub const FALLBACK_PAIRING: &str = "Ice cold tea.";

/// Generated copy for one dish
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChefSuggestion {
    pub description: String,
    pub pairing_suggestion: String,
}

impl ChefSuggestion {
    /// Static copy used whenever the service is unreachable or misbehaves
    pub fn fallback() -> Self {
        Self {
            description: FALLBACK_DESCRIPTION.to_string(),
            pairing_suggestion: FALLBACK_PAIRING.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DescribeRequest<'a> {
    dish_name: &'a str,
    dish_description: &'a str,
    prompt: String,
}

/// Client for the description generation service
#[derive(Clone)]
pub struct ChefClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ChefClient {
    /// The timeout bounds how long a customer stares at a spinner before
    /// the fallback copy takes over.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Describe a dish. Infallible from the caller's perspective.
    pub async fn describe(&self, item: &MenuItem) -> ChefSuggestion {
        match self.request(item).await {
            Ok(suggestion) => suggestion,
            Err(e) => {
                tracing::warn!(dish = %item.name, error = %e, "Chef service unavailable, using fallback copy");
                ChefSuggestion::fallback()
            }
        }
    }

    async fn request(
        &self,
        item: &MenuItem,
    ) -> Result<ChefSuggestion, Box<dyn std::error::Error + Send + Sync>> {
        let prompt = format!(
            "You are a world-class food critic and chef. Describe the dish \"{}\" \
             which is described as \"{}\". Make it sound incredibly appetizing, \
             focusing on texture and aroma, and suggest a drink pairing.",
            item.name, item.description
        );
        let body = DescribeRequest {
            dish_name: &item.name,
            dish_description: &item.description,
            prompt,
        };

        let resp: serde_json::Value = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let description = resp["description"]
            .as_str()
            .ok_or("missing description field")?;
        let pairing_suggestion = resp["pairing_suggestion"]
            .as_str()
            .ok_or("missing pairing_suggestion field")?;

        Ok(ChefSuggestion {
            description: description.to_string(),
            pairing_suggestion: pairing_suggestion.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::Category;

    fn dish() -> MenuItem {
        MenuItem {
            id: "1".to_string(),
            name: "Nasi Cumi Hitam Original".to_string(),
            description: "Signature squid-ink rice".to_string(),
            price: Decimal::new(300, 2),
            image: String::new(),
            category: Category::Main,
            is_popular: true,
            is_available: true,
        }
    }

    #[tokio::test]
    async fn network_failure_yields_the_exact_fallback_pair() {
        // Nothing listens on the discard port; the connect fails immediately
        let client = ChefClient::new("http://127.0.0.1:9/describe", Duration::from_millis(500));
        let suggestion = client.describe(&dish()).await;

        assert_eq!(
            suggestion,
            ChefSuggestion {
                description: "A delicious choice that satisfies the soul.".to_string(),
                pairing_suggestion: "Ice cold tea.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn fallback_matches_the_published_constants() {
        let fallback = ChefSuggestion::fallback();
        assert_eq!(fallback.description, FALLBACK_DESCRIPTION);
        assert_eq!(fallback.pairing_suggestion, FALLBACK_PAIRING);
    }
}
