//! Recording and scripted implementations of the pipeline traits.
//!
//! Every double is `Send + Sync` and records what it saw behind a mutex or
//! atomic so tests can assert on calls after `augment` returns.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, ThreadId};
use std::time::Duration;

use augur_core::errors::{AugurResult, ModelError, RetrievalError};
use augur_core::models::{ChatMessage, Content, Query, QueryToContents, TextSegment};
use augur_core::traits::{
    ChatModel, ContentAggregator, ContentInjector, ContentRetriever, Executor, QueryRouter,
    QueryTransformer, RetrievalTask, ScoringModel,
};

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Returns a fixed list and records each call.
pub struct StaticRetriever {
    name: String,
    contents: Vec<Content>,
    calls: AtomicUsize,
    queries: Mutex<Vec<Query>>,
    threads: Mutex<Vec<ThreadId>>,
}

impl StaticRetriever {
    pub fn new(name: impl Into<String>, contents: Vec<Content>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            contents,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            threads: Mutex::new(Vec::new()),
        })
    }

    pub fn with_texts(name: impl Into<String>, texts: &[&str]) -> Arc<Self> {
        Self::new(name, texts.iter().map(|t| Content::from(*t)).collect())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<Query> {
        lock(&self.queries).clone()
    }

    /// Threads that ran `retrieve`, in call order.
    pub fn threads(&self) -> Vec<ThreadId> {
        lock(&self.threads).clone()
    }
}

impl ContentRetriever for StaticRetriever {
    fn retrieve(&self, query: &Query) -> AugurResult<Vec<Content>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        lock(&self.queries).push(query.clone());
        lock(&self.threads).push(thread::current().id());
        Ok(self.contents.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Always fails with [`RetrievalError::Failed`].
pub struct FailingRetriever {
    name: String,
    reason: String,
    calls: AtomicUsize,
}

impl FailingRetriever {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            reason: reason.into(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ContentRetriever for FailingRetriever {
    fn retrieve(&self, _query: &Query) -> AugurResult<Vec<Content>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RetrievalError::Failed {
            retriever: self.name.clone(),
            reason: self.reason.clone(),
        }
        .into())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Tracks how many retrievals overlap in time.
#[derive(Default)]
pub struct ConcurrencyGauge {
    active: AtomicUsize,
    peak: AtomicUsize,
}

impl ConcurrencyGauge {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Highest number of retrievals observed running at once.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    fn enter(&self) {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
    }

    fn exit(&self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Sleeps before returning its contents, reporting to a shared gauge.
pub struct SlowRetriever {
    name: String,
    contents: Vec<Content>,
    delay: Duration,
    gauge: Arc<ConcurrencyGauge>,
}

impl SlowRetriever {
    pub fn new(
        name: impl Into<String>,
        texts: &[&str],
        delay: Duration,
        gauge: Arc<ConcurrencyGauge>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            contents: texts.iter().map(|t| Content::from(*t)).collect(),
            delay,
            gauge,
        })
    }
}

impl ContentRetriever for SlowRetriever {
    fn retrieve(&self, _query: &Query) -> AugurResult<Vec<Content>> {
        self.gauge.enter();
        thread::sleep(self.delay);
        self.gauge.exit();
        Ok(self.contents.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Routes by exact query text, with a fallback selection for unknown text.
pub struct RecordingRouter {
    routes: HashMap<String, Vec<Arc<dyn ContentRetriever>>>,
    fallback: Vec<Arc<dyn ContentRetriever>>,
    queries: Mutex<Vec<Query>>,
}

impl RecordingRouter {
    pub fn new(fallback: Vec<Arc<dyn ContentRetriever>>) -> Self {
        Self {
            routes: HashMap::new(),
            fallback,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Route nothing unless a text-specific route matches.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_route(
        mut self,
        query_text: impl Into<String>,
        retrievers: Vec<Arc<dyn ContentRetriever>>,
    ) -> Self {
        self.routes.insert(query_text.into(), retrievers);
        self
    }

    pub fn queries(&self) -> Vec<Query> {
        lock(&self.queries).clone()
    }
}

impl QueryRouter for RecordingRouter {
    fn route(&self, query: &Query) -> AugurResult<Vec<Arc<dyn ContentRetriever>>> {
        lock(&self.queries).push(query.clone());
        Ok(self
            .routes
            .get(&query.text)
            .unwrap_or(&self.fallback)
            .clone())
    }
}

/// Rewrites the incoming query into a fixed list of texts.
///
/// Generated queries keep the input's metadata.
pub struct FixedTransformer {
    texts: Vec<String>,
    seen: Mutex<Vec<Query>>,
}

impl FixedTransformer {
    pub fn new(texts: &[&str]) -> Self {
        Self {
            texts: texts.iter().map(|t| t.to_string()).collect(),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Queries this transformer was asked to transform.
    pub fn seen(&self) -> Vec<Query> {
        lock(&self.seen).clone()
    }
}

impl QueryTransformer for FixedTransformer {
    fn transform(&self, query: &Query) -> AugurResult<Vec<Query>> {
        lock(&self.seen).push(query.clone());
        Ok(self.texts.iter().map(|t| query.rewritten(t.as_str())).collect())
    }
}

/// Concatenates like the default aggregator and keeps every input it saw.
#[derive(Default)]
pub struct RecordingAggregator {
    inputs: Mutex<Vec<QueryToContents>>,
}

impl RecordingAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> Vec<QueryToContents> {
        lock(&self.inputs).clone()
    }

    pub fn calls(&self) -> usize {
        lock(&self.inputs).len()
    }
}

impl ContentAggregator for RecordingAggregator {
    fn aggregate(&self, query_to_contents: &QueryToContents) -> AugurResult<Vec<Content>> {
        lock(&self.inputs).push(query_to_contents.clone());
        Ok(query_to_contents
            .iter()
            .flat_map(|(_, lists)| lists.iter().flatten().cloned())
            .collect())
    }
}

/// Appends contents line by line and records every call.
#[derive(Default)]
pub struct RecordingInjector {
    calls: Mutex<Vec<(Vec<Content>, ChatMessage)>>,
}

impl RecordingInjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(Vec<Content>, ChatMessage)> {
        lock(&self.calls).clone()
    }
}

impl ContentInjector for RecordingInjector {
    fn inject(&self, contents: &[Content], chat_message: &ChatMessage) -> AugurResult<ChatMessage> {
        lock(&self.calls).push((contents.to_vec(), chat_message.clone()));
        let mut text = chat_message.text.clone();
        for content in contents {
            text.push('\n');
            text.push_str(content.text());
        }
        Ok(chat_message.with_text(text))
    }
}

/// Runs tasks sequentially and counts interactions.
#[derive(Default)]
pub struct CountingExecutor {
    batches: AtomicUsize,
    tasks: AtomicUsize,
}

impl CountingExecutor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of `execute_all` calls.
    pub fn batches(&self) -> usize {
        self.batches.load(Ordering::SeqCst)
    }

    /// Total tasks submitted across all batches.
    pub fn tasks(&self) -> usize {
        self.tasks.load(Ordering::SeqCst)
    }
}

impl Executor for CountingExecutor {
    fn execute_all<'a>(&self, tasks: Vec<RetrievalTask<'a>>) -> AugurResult<Vec<Vec<Content>>> {
        self.batches.fetch_add(1, Ordering::SeqCst);
        self.tasks.fetch_add(tasks.len(), Ordering::SeqCst);
        tasks.into_iter().map(|task| task()).collect()
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// Replies from a script and records every prompt.
///
/// Replies are consumed in order; the last one repeats once the script runs out.
pub struct ScriptedChatModel {
    replies: Vec<Result<String, String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedChatModel {
    pub fn replying(reply: impl Into<String>) -> Arc<Self> {
        Self::script(vec![Ok(reply.into())])
    }

    pub fn failing(reason: impl Into<String>) -> Arc<Self> {
        Self::script(vec![Err(reason.into())])
    }

    pub fn script(replies: Vec<Result<String, String>>) -> Arc<Self> {
        Arc::new(Self {
            replies,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }
}

impl ChatModel for ScriptedChatModel {
    fn chat(&self, prompt: &str) -> AugurResult<String> {
        let mut prompts = lock(&self.prompts);
        let turn = prompts.len();
        prompts.push(prompt.to_string());
        let reply = self
            .replies
            .get(turn)
            .or_else(|| self.replies.last())
            .cloned()
            .unwrap_or_else(|| Err("empty script".to_string()));
        reply.map_err(|reason| ModelError::Failed { reason }.into())
    }
}

/// Scores segments from a text-to-score table; unknown text scores 0.
pub struct ScriptedScoringModel {
    scores: HashMap<String, f64>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedScoringModel {
    pub fn new(scores: &[(&str, f64)]) -> Arc<Self> {
        Arc::new(Self {
            scores: scores.iter().map(|(t, s)| (t.to_string(), *s)).collect(),
            queries: Mutex::new(Vec::new()),
        })
    }

    /// Query text of every `score_all` call.
    pub fn queries(&self) -> Vec<String> {
        lock(&self.queries).clone()
    }
}

impl ScoringModel for ScriptedScoringModel {
    fn score_all(&self, segments: &[TextSegment], query: &str) -> AugurResult<Vec<f64>> {
        lock(&self.queries).push(query.to_string());
        Ok(segments
            .iter()
            .map(|s| self.scores.get(&s.text).copied().unwrap_or(0.0))
            .collect())
    }
}
