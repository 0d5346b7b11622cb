use std::sync::Arc;

use async_trait::async_trait;

use crate::api::bank::{ApiError, BankClient};
use crate::models::Account;
use crate::pager::{Notifier, PageController, PageSource, PagingPolicy};

/// Pages of the signed-in user's accounts
pub struct AccountSource {
    client: Arc<BankClient>,
}

impl AccountSource {
    pub fn new(client: Arc<BankClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for AccountSource {
    type Item = Account;

    async fn fetch_page(&self, start: u32, count: u32) -> Result<Vec<Account>, ApiError> {
        let response = self.client.get_accounts(start, count).await?;
        Ok(response.accounts.into_iter().map(Account::from).collect())
    }
}

pub type AccountListController = PageController<AccountSource>;

/// Controller for the account list page
pub fn account_list(
    client: Arc<BankClient>,
    notifier: Arc<dyn Notifier>,
    policy: PagingPolicy,
) -> AccountListController {
    PageController::new(AccountSource::new(client), notifier, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    use axum::extract::Query;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    use crate::models::AccountId;

    struct Silent;

    impl Notifier for Silent {
        fn alert(&self, _message: &str) {}
    }

    /// Backend with 23 accounts, paged like the Django view
    async fn backend() -> Arc<BankClient> {
        let app = Router::new().route(
            "/account/get",
            get(|Query(params): Query<HashMap<String, usize>>| async move {
                let start = params["start"];
                let end = (start + params["count"]).min(23);
                let accounts: Vec<_> = (start.min(end)..end)
                    .map(|i| {
                        json!({
                            "id": i + 1,
                            "number": format!("{:010}", i + 1),
                            "type": "Checking",
                            "balance": "100.00",
                            "maturity": "n/a"
                        })
                    })
                    .collect();
                Json(json!({ "accounts": accounts }))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Arc::new(BankClient::new(&format!("http://{}", addr), Duration::from_secs(5)).unwrap())
    }

    #[tokio::test]
    async fn test_account_list_pages_through_backend() {
        let controller = account_list(backend().await, Arc::new(Silent), PagingPolicy::hardened());
        let bottom = crate::pager::ScrollPosition::new(10.0, 30.0, 20.0);

        controller.mount().await;
        let state = controller.snapshot().await;
        assert_eq!(state.items.len(), 20);
        assert_eq!(state.items[0].id, AccountId(1));

        controller.on_scroll(bottom).await;
        controller.on_scroll(bottom).await;
        controller.on_scroll(bottom).await;

        let state = controller.snapshot().await;
        let ids: Vec<i64> = state.items.iter().map(|a| a.id.0).collect();
        assert_eq!(ids, (1..=23).collect::<Vec<_>>());
        assert_eq!(state.cursor, 40);
        assert!(state.exhausted);
        assert!(!state.busy);
    }
}
