//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of stages.
//! [`Pipeline::run`] executes them in order, threading artifacts between
//! stages and notifying a [`PipelineObserver`] at each boundary.
//!
//! `Pipeline` is generic over its stage types, so every combination is
//! monomorphized; the zero-sized default stages cost nothing at runtime.

use crate::pipeline::artifacts::KeywordAnalysis;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReportBuilder, STAGE_CANDIDATES, STAGE_FORMAT, STAGE_GRAPH,
    STAGE_PREPROCESS, STAGE_RANK,
};
use crate::pipeline::traits::{
    CandidateSelector, CooccurrenceGraphBuilder, GraphBuilder, PosCandidateSelector,
    ExtraStopwordPreprocessor, PowerIterationRanker, Preprocessor, Ranker,
};
use crate::types::{AnnotatedSentence, TextRankConfig};

// ============================================================================
// Pipeline: statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Pre` | [`Preprocessor`] | [`ExtraStopwordPreprocessor`] |
/// | `Sel` | [`CandidateSelector`] | [`PosCandidateSelector`] |
/// | `GB`  | [`GraphBuilder`] | [`CooccurrenceGraphBuilder`] |
/// | `Rnk` | [`Ranker`] | [`PowerIterationRanker`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Pre, Sel, GB, Rnk> {
    pub preprocessor: Pre,
    pub selector: Sel,
    pub graph_builder: GB,
    pub ranker: Rnk,
}

/// The default TextRank keyword pipeline.
pub type TextRankPipeline = Pipeline<
    ExtraStopwordPreprocessor,
    PosCandidateSelector,
    CooccurrenceGraphBuilder,
    PowerIterationRanker,
>;

impl TextRankPipeline {
    /// Extra-stopword marking, POS candidate selection, windowed
    /// co-occurrence graph and damped power iteration.
    pub fn textrank() -> Self {
        PipelineBuilder::new().build()
    }
}

impl Default for TextRankPipeline {
    fn default() -> Self {
        Self::textrank()
    }
}

// ============================================================================
// Pipeline::run: execute stages in order
// ============================================================================

impl<Pre, Sel, GB, Rnk> Pipeline<Pre, Sel, GB, Rnk>
where
    Pre: Preprocessor,
    Sel: CandidateSelector,
    GB: GraphBuilder,
    Rnk: Ranker,
{
    /// Execute the pipeline on `sentences`.
    ///
    /// Stages run in order:
    /// 1. Preprocess (on a private copy of the input)
    /// 2. Select candidates and build the vocabulary
    /// 3. Build the normalized graph
    /// 4. Rank
    /// 5. Sort into the keyword list
    ///
    /// `cfg` is assumed validated. Every call starts from fresh artifacts.
    pub fn run(
        &self,
        sentences: &[AnnotatedSentence],
        cfg: &TextRankConfig,
        observer: &mut impl PipelineObserver,
    ) -> KeywordAnalysis {
        let sentences = run_stage(
            &mut *observer,
            STAGE_PREPROCESS,
            || {
                let mut owned = sentences.to_vec();
                self.preprocessor.preprocess(&mut owned, cfg);
                owned
            },
            |report, _| report,
        );
        observer.on_sentences(&sentences);

        let candidates = run_stage(
            &mut *observer,
            STAGE_CANDIDATES,
            || self.selector.select(&sentences, cfg),
            |report, set| report.nodes(set.vocabulary.len()),
        );
        observer.on_candidates(&candidates);
        trace_debug!(
            sentences = candidates.sentences.len(),
            tokens = candidates.num_tokens(),
            vocabulary = candidates.vocabulary.len(),
            "candidates selected"
        );

        let graph = run_stage(
            &mut *observer,
            STAGE_GRAPH,
            || self.graph_builder.build(&candidates, cfg),
            |report, g| report.nodes(g.num_nodes()).edges(g.num_edges()),
        );
        observer.on_graph(&graph);
        trace_debug!(
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            pairs = graph.num_pairs(),
            "graph built"
        );

        let ranked = run_stage(
            &mut *observer,
            STAGE_RANK,
            || self.ranker.rank(&graph, cfg),
            |report, out| {
                report
                    .iterations(out.iterations)
                    .converged(out.converged())
                    .residual(out.delta)
            },
        );
        observer.on_rank(&ranked);
        trace_debug!(
            iterations = ranked.iterations,
            state = ?ranked.state,
            residual = ranked.delta,
            "ranking finished"
        );

        run_stage(
            &mut *observer,
            STAGE_FORMAT,
            || KeywordAnalysis::new(&candidates.vocabulary, &ranked, graph.num_edges(), cfg.top_n),
            |report, _| report,
        )
    }
}

/// Time `body` as stage `name` inside its own span. `metrics` adds the
/// stage-specific fields of the report from the stage output.
fn run_stage<O, T>(
    observer: &mut O,
    name: &'static str,
    body: impl FnOnce() -> T,
    metrics: impl FnOnce(StageReportBuilder, &T) -> StageReportBuilder,
) -> T
where
    O: PipelineObserver + ?Sized,
{
    trace_stage!(name);
    observer.on_stage_start(name);
    let clock = StageClock::start();
    let output = body();
    let report = metrics(StageReportBuilder::new(clock.elapsed()), &output).build();
    observer.on_stage_end(name, &report);
    output
}

// ============================================================================
// PipelineBuilder: fluent construction with custom stages
// ============================================================================

/// Fluent builder for a [`Pipeline`] with custom stages.
///
/// Starts from the default TextRank stages.
///
/// ```
/// # use textrank_keywords::pipeline::runner::PipelineBuilder;
/// # use textrank_keywords::pipeline::traits::*;
/// let pipeline = PipelineBuilder::new()
///     .preprocessor(StopwordPreprocessor)
///     .build();
/// ```
pub struct PipelineBuilder<
    Pre = ExtraStopwordPreprocessor,
    Sel = PosCandidateSelector,
    GB = CooccurrenceGraphBuilder,
    Rnk = PowerIterationRanker,
> {
    preprocessor: Pre,
    selector: Sel,
    graph_builder: GB,
    ranker: Rnk,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        PipelineBuilder {
            preprocessor: ExtraStopwordPreprocessor,
            selector: PosCandidateSelector,
            graph_builder: CooccurrenceGraphBuilder,
            ranker: PowerIterationRanker,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Pre, Sel, GB, Rnk> PipelineBuilder<Pre, Sel, GB, Rnk> {
    pub fn preprocessor<P: Preprocessor>(self, p: P) -> PipelineBuilder<P, Sel, GB, Rnk> {
        PipelineBuilder {
            preprocessor: p,
            selector: self.selector,
            graph_builder: self.graph_builder,
            ranker: self.ranker,
        }
    }

    pub fn selector<S: CandidateSelector>(self, s: S) -> PipelineBuilder<Pre, S, GB, Rnk> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            selector: s,
            graph_builder: self.graph_builder,
            ranker: self.ranker,
        }
    }

    pub fn graph_builder<G: GraphBuilder>(self, g: G) -> PipelineBuilder<Pre, Sel, G, Rnk> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            selector: self.selector,
            graph_builder: g,
            ranker: self.ranker,
        }
    }

    pub fn ranker<R: Ranker>(self, r: R) -> PipelineBuilder<Pre, Sel, GB, R> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            selector: self.selector,
            graph_builder: self.graph_builder,
            ranker: r,
        }
    }

    pub fn build(self) -> Pipeline<Pre, Sel, GB, Rnk> {
        Pipeline {
            preprocessor: self.preprocessor,
            selector: self.selector,
            graph_builder: self.graph_builder,
            ranker: self.ranker,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
