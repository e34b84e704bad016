use crate::domain::{
    Book, BookPage, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PageRequest, PaginationInfo, SortOrder,
};

/// ページサイズの選択肢（固定）
pub const PAGE_SIZE_OPTIONS: [i64; 4] = [5, 10, 25, 50];

/// クエリ1件ごとに割り当てられる単調増加のトークン
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// 発行すべきクエリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchCommand {
    pub token: RequestToken,
    pub request: PageRequest,
}

/// ビューに対する操作と、クエリの完了通知
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// 初回表示
    Mounted,
    /// ページ移動（1 <= n <= total_pages の場合のみ受け付ける）
    ChangePage(i64),
    /// ページサイズ変更（`PAGE_SIZE_OPTIONS`の値のみ。ページは1に戻る）
    ChangePageSize(i64),
    /// ソート順の反転（ページは維持する）
    ToggleSortOrder,
    FetchSucceeded {
        token: RequestToken,
        page: BookPage,
    },
    FetchFailed {
        token: RequestToken,
        message: String,
    },
}

/// ビューの状態
///
/// 全ての状態遷移は`reduce`を通す。表示内容が変わる遷移はクエリを1件だけ返し、
/// 各クエリには単調増加のトークンが付く。最新トークンの結果のみ反映される。
///
/// 状態遷移：
/// - Idle → Loading（クエリ発行時）
/// - Loading → Idle（最新クエリの成功：一覧とページング情報を置き換える）
/// - Loading → Idle（最新クエリの失敗：一覧とページング情報は直前の成功時のまま）
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub current_page: i64,
    pub page_size: i64,
    pub sort_order: SortOrder,
    pub pagination: PaginationInfo,
    pub books: Vec<Book>,
    pub loading: bool,
    /// 最後に失敗したクエリのエラー（表示はしない）
    pub last_error: Option<String>,
    latest_token: Option<RequestToken>,
    issued: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            current_page: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
            sort_order: SortOrder::Asc,
            pagination: PaginationInfo::empty(DEFAULT_PAGE_SIZE),
            books: Vec::new(),
            // 最初の応答までは読み込み中として表示する
            loading: true,
            last_error: None,
            latest_token: None,
            issued: 0,
        }
    }

    /// 最後に発行したクエリのトークン
    pub fn latest_token(&self) -> Option<RequestToken> {
        self.latest_token
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.pagination.total_pages
    }

    fn is_latest(&self, token: RequestToken) -> bool {
        self.latest_token == Some(token)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// 状態遷移関数
///
/// 次の状態と、発行すべきクエリ（あれば1件）を返す。
pub fn reduce(state: ViewState, event: ViewEvent) -> (ViewState, Option<FetchCommand>) {
    match event {
        ViewEvent::Mounted => {
            let (page, size, order) = (state.current_page, state.page_size, state.sort_order);
            issue_fetch(state, page, size, order)
        }

        ViewEvent::ChangePage(page) => {
            // 範囲外や同じページへの移動は黙って無視する
            if page < 1 || page > state.pagination.total_pages || page == state.current_page {
                return (state, None);
            }
            let (size, order) = (state.page_size, state.sort_order);
            issue_fetch(state, page, size, order)
        }

        ViewEvent::ChangePageSize(size) => {
            if !PAGE_SIZE_OPTIONS.contains(&size)
                || (size == state.page_size && state.current_page == DEFAULT_PAGE_NUMBER)
            {
                return (state, None);
            }
            // 旧サイズでのオフセットは意味を失うため先頭ページに戻す
            let order = state.sort_order;
            issue_fetch(state, DEFAULT_PAGE_NUMBER, size, order)
        }

        ViewEvent::ToggleSortOrder => {
            let (page, size, order) = (state.current_page, state.page_size, state.sort_order);
            issue_fetch(state, page, size, order.toggled())
        }

        ViewEvent::FetchSucceeded { token, page } => {
            if !state.is_latest(token) {
                tracing::debug!(token = token.value(), "discarding stale book page");
                return (state, None);
            }
            let mut state = state;
            state.books = page.data;
            state.pagination = page.pagination;
            state.loading = false;
            state.last_error = None;
            (state, None)
        }

        ViewEvent::FetchFailed { token, message } => {
            if !state.is_latest(token) {
                tracing::debug!(token = token.value(), "discarding stale fetch failure");
                return (state, None);
            }
            // 直前の成功時の一覧とページング情報はそのまま残す
            tracing::error!(token = token.value(), error = %message, "Error fetching books");
            let mut state = state;
            state.loading = false;
            state.last_error = Some(message);
            (state, None)
        }
    }
}

fn issue_fetch(
    mut state: ViewState,
    current_page: i64,
    page_size: i64,
    sort_order: SortOrder,
) -> (ViewState, Option<FetchCommand>) {
    let request = match PageRequest::new(current_page, page_size, sort_order) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring view change that cannot be queried");
            return (state, None);
        }
    };

    state.current_page = current_page;
    state.page_size = page_size;
    state.sort_order = sort_order;
    state.issued += 1;
    let token = RequestToken(state.issued);
    state.latest_token = Some(token);
    state.loading = true;

    (state, Some(FetchCommand { token, request }))
}
