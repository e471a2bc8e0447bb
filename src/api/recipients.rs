//! Recipients service.

use std::sync::Arc;

use crate::client::paginated::{list_iter, ListIter};
use crate::client::{path_segment, ClientInner, Form};
use crate::models::{Deleted, Recipient, RecipientListParams, RecipientParams};
use crate::Result;

/// Service for transfer recipient operations.
pub struct RecipientsService {
    inner: Arc<ClientInner>,
}

impl RecipientsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a recipient.
    pub async fn create(&self, params: &RecipientParams) -> Result<Recipient> {
        self.inner.post("/recipients", Form::encode(params)?).await
    }

    /// Get a recipient.
    pub async fn get(&self, id: &str) -> Result<Recipient> {
        self.inner
            .get(&format!("/recipients/{}", path_segment(id)?), Form::new())
            .await
    }

    /// Update a recipient.
    pub async fn update(&self, id: &str, params: &RecipientParams) -> Result<Recipient> {
        self.inner
            .post(&format!("/recipients/{}", path_segment(id)?), Form::encode(params)?)
            .await
    }

    /// Delete a recipient.
    pub async fn delete(&self, id: &str) -> Result<Deleted> {
        self.inner
            .delete(&format!("/recipients/{}", path_segment(id)?))
            .await
    }

    /// List recipients.
    pub fn list(&self, params: &RecipientListParams) -> ListIter<Recipient> {
        list_iter(
            self.inner.clone(),
            Ok("/recipients".to_string()),
            Form::encode(params),
            params.list.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::transport::testing::RecordingTransport;
    use crate::client::Method;
    use crate::models::{CardDetails, ListParams, RecipientType};
    use crate::{ApiKey, ClientConfig, StripeClient};

    use super::*;

    fn client(transport: RecordingTransport) -> (StripeClient, Arc<RecordingTransport>) {
        let transport = Arc::new(transport);
        let client = StripeClient::with_transport(
            ApiKey::new("sk_test_recipients"),
            ClientConfig::default(),
            transport.clone(),
        );
        (client, transport)
    }

    #[tokio::test]
    async fn test_create_with_debit_card() {
        let (client, transport) = client(RecordingTransport::new().respond(
            200,
            json!({"id": "rp_1", "name": "Recipient Name", "type": "individual",
                   "cards": {"object": "list", "has_more": false, "url": "/v1/recipients/rp_1/cards",
                             "data": [{"id": "card_1", "object": "card"}]}}),
        ));

        let recipient = client
            .recipients()
            .create(&RecipientParams {
                name: Some("Recipient Name".into()),
                recipient_type: Some(RecipientType::Individual),
                card: Some(CardDetails {
                    number: Some("4000056655665556".into()),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(recipient.cards.unwrap().data[0].id, "card_1");

        let request = &transport.requests()[0];
        assert_eq!(request.path, "/recipients");
        let keys: Vec<_> = request.form.keys().collect();
        assert_eq!(keys, vec!["name", "type", "card[number]"]);
    }

    #[tokio::test]
    async fn test_get_update_delete() {
        let (client, transport) = client(
            RecordingTransport::new()
                .respond(200, json!({"id": "rp_1", "migrated_to": "acct_1"}))
                .respond(200, json!({"id": "rp_1", "description": "moved"}))
                .respond(200, json!({"id": "rp_1", "deleted": true})),
        );
        let recipients = client.recipients();

        let recipient = recipients.get("rp_1").await.unwrap();
        assert_eq!(recipient.migrated_to.unwrap().id(), "acct_1");
        recipients
            .update(
                "rp_1",
                &RecipientParams {
                    description: Some("moved".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        recipients.delete("rp_1").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[1].path, "/recipients/rp_1");
        assert_eq!(requests[1].form.len(), 1);
        assert_eq!(requests[2].method, Method::DELETE);
    }

    #[tokio::test]
    async fn test_list_puts_resource_fields_before_paging() {
        let (client, transport) = client(RecordingTransport::new().respond(
            200,
            json!({"object": "list", "has_more": false, "url": "/v1/recipients", "data": []}),
        ));

        let params = RecipientListParams {
            verified: Some(false),
            list: ListParams::new().limit(3).filter("created", "gte", "0"),
        };
        let mut iter = client.recipients().list(&params);
        assert!(!iter.next().await);
        assert!(iter.is_exhausted());

        let request = &transport.requests()[0];
        let keys: Vec<_> = request.form.keys().collect();
        assert_eq!(keys, vec!["verified", "limit", "created[gte]"]);
        assert_eq!(request.form.get("verified"), Some("false"));
    }
}
