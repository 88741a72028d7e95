use async_trait::async_trait;
use macroscout_engine::{BackendError, CatalogBackend};
use macroscout_model::{
    DetailRecord, FilterState, ItemSlug, ResultItem, SkuId, SortState, VariantId, ViewerId,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Semaphore;

/// Scripted collaborator: responses are queued per operation, calls are
/// counted, and an optional gate holds each call until the test releases
/// it, so in-flight interleavings can be driven deterministically.
/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

pub struct ScriptedBackend {
    search_pages: Mutex<VecDeque<Result<Vec<ResultItem>, BackendError>>>,
    toggle_results: Mutex<VecDeque<Result<(), BackendError>>>,
    detail_results: Mutex<VecDeque<Result<Option<DetailRecord>, BackendError>>>,
    pub search_calls: AtomicUsize,
    pub toggle_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    gate: Option<Semaphore>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            search_pages: Mutex::new(VecDeque::new()),
            toggle_results: Mutex::new(VecDeque::new()),
            detail_results: Mutex::new(VecDeque::new()),
            search_calls: AtomicUsize::new(0),
            toggle_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Backend whose calls block until [`release`](Self::release).
    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::new()
        }
    }

    pub fn release(&self) {
        self.gate
            .as_ref()
            .expect("release requires a gated backend")
            .add_permits(1);
    }

    pub fn push_page(&self, items: Vec<ResultItem>) {
        self.search_pages.lock().expect("script").push_back(Ok(items));
    }

    pub fn push_page_err(&self, err: BackendError) {
        self.search_pages.lock().expect("script").push_back(Err(err));
    }

    pub fn push_toggle(&self, result: Result<(), BackendError>) {
        self.toggle_results
            .lock()
            .expect("script")
            .push_back(result);
    }

    pub fn push_detail(&self, result: Result<Option<DetailRecord>, BackendError>) {
        self.detail_results
            .lock()
            .expect("script")
            .push_back(result);
    }

    pub fn detail_call_count(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn search_call_count(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn toggle_call_count(&self) -> usize {
        self.toggle_calls.load(Ordering::SeqCst)
    }

    async fn wait_gate(&self) {
        if let Some(gate) = &self.gate {
            let permit = gate.acquire().await.expect("gate never closes");
            permit.forget();
        }
    }
}

#[async_trait]
impl CatalogBackend for ScriptedBackend {
    async fn search(
        &self,
        _filters: &FilterState,
        _sort: SortState,
        _limit: usize,
        _offset: usize,
    ) -> Result<Vec<ResultItem>, BackendError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_gate().await;
        self.search_pages
            .lock()
            .expect("script")
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn get_detail(&self, _slug: &ItemSlug) -> Result<Option<DetailRecord>, BackendError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_gate().await;
        self.detail_results
            .lock()
            .expect("script")
            .pop_front()
            .unwrap_or(Ok(None))
    }

    async fn submit_favorite_toggle(
        &self,
        _variant_id: &VariantId,
        _viewer: &ViewerId,
        _prior_favorited: bool,
    ) -> Result<(), BackendError> {
        self.toggle_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_gate().await;
        self.toggle_results
            .lock()
            .expect("script")
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

pub fn make_item(id: &str, favorited: bool, favorite_count: u64) -> ResultItem {
    ResultItem {
        variant_id: VariantId::parse(id).expect("variant id"),
        sku_id: SkuId::parse(&format!("sku-{id}")).expect("sku id"),
        name: format!("item {id}"),
        flavor: Some("chocolate".to_string()),
        protein_g: 24,
        calories: 120,
        carbs_g: 3,
        sugar_g: 1,
        favorited,
        favorite_count,
    }
}

/// A full page of `count` distinct items with ids `{prefix}0..{prefix}N`.
pub fn page_of(prefix: &str, count: usize) -> Vec<ResultItem> {
    (0..count)
        .map(|i| make_item(&format!("{prefix}{i}"), false, 0))
        .collect()
}
