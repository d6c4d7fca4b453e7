//! Similarity ranking contract and result types.

/// Maximum number of characters kept in a document excerpt.
pub const EXCERPT_CHAR_LIMIT: usize = 200;

/// Upper bound for the `top_k` request parameter.
pub const MAX_TOP_K: usize = 50;

/// Guard a raw similarity score.
///
/// Non-finite values become 0.0; everything else is clamped into
/// `0.0..=1.0`.
#[must_use]
pub fn sanitise_similarity(score: f32) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Calculate a lexical or semantic similarity between two texts.
///
/// Scores are in `0.0..=1.0` with 1.0 meaning identical token content.
/// Implementations must be thread-safe and must return 0.0 rather than
/// fault when both inputs are empty. Use [`TextSimilarity::sanitise`] to
/// apply the range guards.
pub trait TextSimilarity: Send + Sync {
    /// Return the similarity of `document` to `query`.
    fn similarity(&self, query: &str, document: &str) -> f32;

    /// Clamp and validate a raw score; see [`sanitise_similarity`].
    #[must_use]
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        sanitise_similarity(score)
    }
}

/// One ranked document in a similarity response.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedDocument {
    /// Position of the document in the caller's input sequence.
    pub document_index: usize,
    /// Up to [`EXCERPT_CHAR_LIMIT`] characters of the document, with a
    /// `...` marker appended when truncated.
    pub excerpt: String,
    /// Similarity score in `0.0..=1.0`.
    pub score: f32,
    /// 1-based position in the ranked output, assigned after sorting.
    pub rank: usize,
}

/// Documents ranked against a query, best first.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimilarityResult {
    /// Ranked documents, highest score first, ranks `1..=len`.
    pub ranked: Vec<RankedDocument>,
    /// Opaque query representation; `None` for the lexical ranker.
    #[cfg_attr(feature = "serde", serde(default))]
    pub query_vector: Option<Vec<f32>>,
}

impl SimilarityResult {
    /// Fallback result: no ranked documents.
    #[must_use]
    pub fn fallback() -> Self {
        Self::default()
    }
}

/// Parameters for a similarity invocation.
///
/// # Examples
/// ```
/// use curator_core::SimilarityRequest;
///
/// let json = r#"{"query": "rust", "documents": []}"#;
/// let request: SimilarityRequest = serde_json::from_str(json).expect("valid JSON");
/// assert_eq!(request.top_k, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimilarityRequest {
    /// Query text.
    pub query: String,
    /// Documents to rank against the query.
    pub documents: Vec<String>,
    /// Maximum number of results, in `1..=50`.
    #[cfg_attr(feature = "serde", serde(default = "default_top_k"))]
    pub top_k: usize,
}

impl SimilarityRequest {
    /// Build a request with the default `top_k`.
    #[must_use]
    pub fn new(query: impl Into<String>, documents: Vec<String>) -> Self {
        Self {
            query: query.into(),
            documents,
            top_k: default_top_k(),
        }
    }
}

const fn default_top_k() -> usize {
    5
}
