use super::render::{Controls, render};
use super::state::{FetchCommand, RequestToken, ViewEvent, ViewState, reduce};
use super::transport::{CatalogApi, ClientError};
use crate::domain::BookPage;

/// カタログビュー
///
/// 状態を一元的に保持し、操作ごとに状態遷移関数を適用して、
/// 発行されたクエリを`CatalogApi`経由で実行する。
pub struct CatalogView<A> {
    api: A,
    state: ViewState,
}

impl<A: CatalogApi> CatalogView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn controls(&self) -> Controls {
        Controls::for_state(&self.state)
    }

    pub fn render(&self) -> String {
        render(&self.state)
    }

    /// 操作を適用し、発行すべきクエリを返す
    ///
    /// クエリを並行に実行する呼び出し側は、結果を`complete`に渡すこと。
    pub fn begin(&mut self, event: ViewEvent) -> Option<FetchCommand> {
        let (state, command) = reduce(std::mem::take(&mut self.state), event);
        self.state = state;
        command
    }

    /// クエリの結果を適用する
    ///
    /// 最新でないトークンの結果は破棄される。
    pub fn complete(&mut self, token: RequestToken, result: Result<BookPage, ClientError>) {
        let event = match result {
            Ok(page) => ViewEvent::FetchSucceeded { token, page },
            Err(e) => ViewEvent::FetchFailed {
                token,
                message: e.to_string(),
            },
        };
        let command = self.begin(event);
        debug_assert!(command.is_none(), "completion must not issue a query");
    }

    /// 操作を適用し、クエリが発行された場合は完了まで実行する
    pub async fn dispatch(&mut self, event: ViewEvent) {
        if let Some(command) = self.begin(event) {
            let result = self.api.fetch_page(&command.request).await;
            self.complete(command.token, result);
        }
    }

    /// 初回表示（初期状態でのクエリ）
    pub async fn mount(&mut self) {
        self.dispatch(ViewEvent::Mounted).await;
    }

    pub async fn change_page(&mut self, page: i64) {
        self.dispatch(ViewEvent::ChangePage(page)).await;
    }

    pub async fn change_page_size(&mut self, page_size: i64) {
        self.dispatch(ViewEvent::ChangePageSize(page_size)).await;
    }

    pub async fn toggle_sort_order(&mut self) {
        self.dispatch(ViewEvent::ToggleSortOrder).await;
    }

    pub async fn next_page(&mut self) {
        let next = self.state.current_page + 1;
        self.change_page(next).await;
    }

    pub async fn previous_page(&mut self) {
        let previous = self.state.current_page - 1;
        self.change_page(previous).await;
    }
}
