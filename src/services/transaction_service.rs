use std::sync::Arc;

use async_trait::async_trait;

use crate::api::bank::{ApiError, BankClient};
use crate::models::{AccountId, Transaction};
use crate::pager::{Notifier, PageController, PageSource, PagingPolicy};

/// Pages of one account's transaction history.
///
/// The account id comes from the mount context and is fixed for the
/// lifetime of the source.
pub struct TransactionSource {
    client: Arc<BankClient>,
    account_id: AccountId,
}

impl TransactionSource {
    pub fn new(client: Arc<BankClient>, account_id: AccountId) -> Self {
        Self { client, account_id }
    }
}

#[async_trait]
impl PageSource for TransactionSource {
    type Item = Transaction;

    async fn fetch_page(&self, start: u32, count: u32) -> Result<Vec<Transaction>, ApiError> {
        let response = self.client.get_transactions(self.account_id, start, count).await?;
        Ok(response.transactions.into_iter().map(Transaction::from).collect())
    }
}

pub type TransactionListController = PageController<TransactionSource>;

/// Controller for the transaction list on an account's detail page
pub fn transaction_list(
    client: Arc<BankClient>,
    account_id: AccountId,
    notifier: Arc<dyn Notifier>,
    policy: PagingPolicy,
) -> TransactionListController {
    PageController::new(TransactionSource::new(client, account_id), notifier, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    use crate::pager::{LoadOutcome, PagingPolicy};

    #[derive(Default)]
    struct Counting(std::sync::Mutex<usize>);

    impl Notifier for Counting {
        fn alert(&self, _message: &str) {
            *self.0.lock().unwrap() += 1;
        }
    }

    #[tokio::test]
    async fn test_foreign_account_surfaces_one_alert() {
        // Django raises Http404 for accounts owned by someone else
        let app = Router::new().route(
            "/transactions",
            get(|Query(_): Query<HashMap<String, String>>| async { (StatusCode::NOT_FOUND, "<h1>Not Found</h1>") }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        let client = Arc::new(BankClient::new(&format!("http://{}", addr), Duration::from_secs(5)).unwrap());

        let notifier = Arc::new(Counting::default());
        let controller = transaction_list(client, AccountId(99), notifier.clone(), PagingPolicy::compatible());

        assert_eq!(controller.mount().await, LoadOutcome::Failed);
        assert_eq!(*notifier.0.lock().unwrap(), 1);
        assert!(controller.snapshot().await.busy);
    }
}
