use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::api::bank::BankClient;
use crate::models::{Account, AccountId};
use crate::pager::{LoadOutcome, Notifier, PageController, PageSource, PagingPolicy, ScrollPosition};
use crate::services::{account_list, transaction_list, AccountListController, TransactionListController};
use crate::views::{render_list, ListRow};

/// What is on screen right now, already rendered
pub struct Frame {
    pub text: String,
    pub loaded: usize,
    pub cursor: u32,
    pub exhausted: bool,
}

/// One mounted list view
pub enum Screen {
    Accounts(AccountListController),
    Transactions {
        account: String,
        controller: TransactionListController,
    },
}

impl Screen {
    pub fn accounts(client: Arc<BankClient>, notifier: Arc<dyn Notifier>, policy: PagingPolicy) -> Self {
        Screen::Accounts(account_list(client, notifier, policy))
    }

    /// Account detail view; `account` is the label shown in the title
    pub fn transactions(
        client: Arc<BankClient>,
        account_id: AccountId,
        account: String,
        notifier: Arc<dyn Notifier>,
        policy: PagingPolicy,
    ) -> Self {
        Screen::Transactions {
            account,
            controller: transaction_list(client, account_id, notifier, policy),
        }
    }

    pub fn mount(&self, redraw: &UnboundedSender<()>) {
        match self {
            Screen::Accounts(controller) => spawn_load(controller, None, redraw),
            Screen::Transactions { controller, .. } => spawn_load(controller, None, redraw),
        }
    }

    pub async fn unmount(&self) {
        match self {
            Screen::Accounts(controller) => controller.unmount().await,
            Screen::Transactions { controller, .. } => controller.unmount().await,
        }
    }

    /// Deliver one scroll event to the view's listener
    pub fn scrolled(&self, position: ScrollPosition, redraw: &UnboundedSender<()>) {
        match self {
            Screen::Accounts(controller) => spawn_load(controller, Some(position), redraw),
            Screen::Transactions { controller, .. } => spawn_load(controller, Some(position), redraw),
        }
    }

    /// Render the view; `links` is the origin row links resolve against, `None` for plain text
    pub async fn frame(&self, links: Option<&str>) -> Frame {
        match self {
            Screen::Accounts(controller) => frame_of(controller, "Accounts", links).await,
            Screen::Transactions { account, controller } => {
                let title = format!("Transactions of account {}", account);
                frame_of(controller, &title, links).await
            }
        }
    }

    /// Loaded account matching an id or number, accounts view only
    pub async fn find_account(&self, key: &str) -> Option<Account> {
        let Screen::Accounts(controller) = self else {
            return None;
        };
        controller
            .snapshot()
            .await
            .items
            .into_iter()
            .find(|account| account.number == key || account.id.to_string() == key)
    }
}

fn spawn_load<S: PageSource>(
    controller: &PageController<S>,
    position: Option<ScrollPosition>,
    redraw: &UnboundedSender<()>,
) {
    let controller = controller.clone();
    let redraw = redraw.clone();
    tokio::spawn(async move {
        let outcome = match position {
            Some(position) => controller.on_scroll(position).await,
            None => controller.mount().await,
        };
        if outcome != LoadOutcome::Skipped {
            // Receiver is gone once the app quits
            let _ = redraw.send(());
        }
    });
}

async fn frame_of<S>(controller: &PageController<S>, title: &str, links: Option<&str>) -> Frame
where
    S: PageSource,
    S::Item: ListRow,
{
    let state = controller.snapshot().await;
    let mut text = format!("{}\n", title);
    text.push_str(&render_list(&state, links));
    Frame {
        text,
        loaded: state.items.len(),
        cursor: state.cursor,
        exhausted: state.exhausted,
    }
}
