//! GA evolutionary loop execution.
//!
//! [`GaEngine`] is the population manager and optimization loop:
//! seeding → scoring → selection → crossover → mutation → replace → repeat.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --seed--> Ready --step--> Running --step (last)--> Terminated
//! ```
//!
//! Stepping an engine that is not `Ready` or `Running` fails with
//! [`GaError::InvalidState`].

use super::config::{GaConfig, Seeding};
use super::operators::{Order1Crossover, SwapMutation};
use super::selection::RouletteWheel;
use super::types::{BestSolution, Crossover, Mutation, Objective, ScoredTour, Selector, Tour};
use crate::error::GaError;
use crate::random::{create_rng, GaRng};
use crate::tsp::{City, TourLength};
use rand::Rng;
use tracing::{debug, info, instrument, trace};

/// Lifecycle state of a [`GaEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed, no population yet.
    Uninitialized,
    /// Population seeded, no generation run yet.
    Ready,
    /// At least one generation has run and more remain.
    Running,
    /// The configured number of generations has elapsed.
    Terminated,
}

/// Per-generation summary passed to the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Index of the scored generation (0 = seeded population).
    pub generation: usize,
    /// Best cost seen across the whole run so far.
    pub best_cost: f64,
    /// Best cost within this generation.
    pub generation_best_cost: f64,
    /// Mean cost of this generation.
    pub mean_cost: f64,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best tour found during the entire run.
    pub best: Tour,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best-so-far cost after scoring each generation, seeded population
    /// first. Has `generations + 1` entries and never increases.
    pub cost_history: Vec<f64>,
}

type Observer = Box<dyn FnMut(&GenerationStats)>;

/// State that exists only once the engine has been seeded.
struct Run {
    config: GaConfig,
    rng: GaRng,
    population: Vec<Tour>,
    best: Option<BestSolution>,
    generation: usize,
    cost_history: Vec<f64>,
}

/// Population manager and optimization loop.
///
/// The four strategies are injected at construction; the engine owns its
/// population exclusively for the duration of a run.
///
/// # Usage
///
/// ```
/// use tsp_ga::ga::{GaConfig, GaEngine};
/// use tsp_ga::tsp::City;
///
/// let cities = vec![
///     City::from((0, 0)),
///     City::from((10, 0)),
///     City::from((10, 10)),
///     City::from((0, 10)),
/// ];
/// let mut engine = GaEngine::tsp(cities);
/// engine.seed(GaConfig::default().with_segment_length(2).with_generations(50).with_seed(42))?;
/// let result = engine.run()?;
/// assert!(result.best_cost >= 40.0 - 1e-9);
/// # Ok::<(), tsp_ga::GaError>(())
/// ```
pub struct GaEngine<O, X = Order1Crossover, M = SwapMutation, S = RouletteWheel> {
    objective: O,
    crossover: X,
    mutation: M,
    selection: S,
    observer: Option<Observer>,
    state: EngineState,
    run: Option<Run>,
}

impl GaEngine<TourLength> {
    /// Engine for the Euclidean TSP with the standard operators.
    pub fn tsp(cities: Vec<City>) -> Self {
        Self::new(
            TourLength::new(cities),
            Order1Crossover,
            SwapMutation,
            RouletteWheel::default(),
        )
    }
}

impl<O, X, M, S> GaEngine<O, X, M, S>
where
    O: Objective,
    X: Crossover,
    M: Mutation,
    S: Selector,
{
    pub fn new(objective: O, crossover: X, mutation: M, selection: S) -> Self {
        Self {
            objective,
            crossover,
            mutation,
            selection,
            observer: None,
            state: EngineState::Uninitialized,
            run: None,
        }
    }

    /// Registers a callback invoked after every scored generation.
    pub fn with_observer(mut self, observer: impl FnMut(&GenerationStats) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Number of generations completed so far.
    pub fn generation(&self) -> usize {
        self.run.as_ref().map_or(0, |run| run.generation)
    }

    /// The current population; empty before seeding.
    pub fn population(&self) -> &[Tour] {
        self.run
            .as_ref()
            .map(|run| run.population.as_slice())
            .unwrap_or_default()
    }

    /// The best tour observed so far.
    ///
    /// Fails with [`GaError::InvalidState`] until a population has been scored.
    pub fn best_solution(&self) -> Result<&BestSolution, GaError> {
        self.run
            .as_ref()
            .and_then(|run| run.best.as_ref())
            .ok_or_else(|| GaError::invalid_state("no generation has been scored yet"))
    }

    /// Validates `config` and builds the initial population.
    ///
    /// Transitions `Uninitialized → Ready`.
    ///
    /// # Errors
    /// - [`GaError::InvalidState`] if the engine was already seeded or the
    ///   problem has fewer than two cities
    /// - [`GaError::InvalidArgument`] for an invalid configuration
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            population_size = config.population_size,
            generations = config.generations,
            segment_length = config.segment_length
        )
    )]
    pub fn seed(&mut self, config: GaConfig) -> Result<(), GaError> {
        if self.state != EngineState::Uninitialized {
            return Err(GaError::invalid_state(format!(
                "seed requires an uninitialized engine, state is {:?}",
                self.state
            )));
        }
        let n = self.objective.city_count();
        config.validate(n)?;

        let mut rng = create_rng(config.seed.unwrap_or_else(rand::random));
        let population = (0..config.population_size)
            .map(|_| match &config.seeding {
                Seeding::Identity => Tour::identity(n),
                Seeding::Shuffle => Tour::shuffled(n, &mut rng),
                Seeding::Template(tour) => Ok(tour.clone()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            city_count = n,
            population_size = config.population_size,
            generations = config.generations,
            "population seeded"
        );

        self.run = Some(Run {
            cost_history: Vec::with_capacity(config.generations + 1),
            config,
            rng,
            population,
            best: None,
            generation: 0,
        });
        self.state = EngineState::Ready;
        Ok(())
    }

    /// Runs one generation and returns the resulting state.
    ///
    /// After the last configured generation the final population is scored
    /// once more and the engine becomes `Terminated`. With zero configured
    /// generations the first call only scores the seeded population.
    pub fn step(&mut self) -> Result<EngineState, GaError> {
        let Self {
            objective,
            crossover,
            mutation,
            selection,
            observer,
            state,
            run,
        } = self;

        let run = match (*state, run.as_mut()) {
            (EngineState::Ready | EngineState::Running, Some(run)) => run,
            (current, _) => {
                return Err(GaError::invalid_state(format!(
                    "cannot step an engine in state {current:?}"
                )))
            }
        };

        if run.generation < run.config.generations {
            // (a) score
            let scored = score_population(objective, &run.population);

            // (c) breed a full replacement before touching the current one
            let mut next = Vec::with_capacity(run.config.population_size);
            while next.len() < run.config.population_size {
                let parent1 = selection.select(&scored, &mut run.rng)?;
                let parent2 = selection.select(&scored, &mut run.rng)?;
                let mut child =
                    crossover.crossover(parent1, parent2, run.config.segment_length, &mut run.rng)?;
                if run.rng.random_range(0.0..1.0) < run.config.mutation_rate {
                    mutation.mutate(&mut child, &mut run.rng)?;
                }
                next.push(child);
            }

            // (b) track best, only once the generation has bred successfully
            let stats = record_generation(run, &scored);
            notify(observer, &stats);
            debug!(
                generation = stats.generation,
                best_cost = stats.best_cost,
                generation_best_cost = stats.generation_best_cost,
                "generation scored"
            );
            if run.config.report_interval > 0 && stats.generation % run.config.report_interval == 0
            {
                info!(
                    generation = stats.generation,
                    best_cost = stats.best_cost,
                    mean_cost = stats.mean_cost,
                    "progress"
                );
            }

            // (d) replace
            run.population = next;
            run.generation += 1;
            *state = EngineState::Running;
        }

        if run.generation >= run.config.generations {
            let scored = score_population(objective, &run.population);
            let stats = record_generation(run, &scored);
            notify(observer, &stats);
            info!(
                generations = run.generation,
                best_cost = stats.best_cost,
                "optimization terminated"
            );
            *state = EngineState::Terminated;
        }

        Ok(*state)
    }

    /// Steps a seeded engine until it terminates.
    pub fn run(&mut self) -> Result<GaResult, GaError> {
        while self.step()? != EngineState::Terminated {}

        let best = self.best_solution()?.clone();
        let (generations, cost_history) = self
            .run
            .as_ref()
            .map(|run| (run.generation, run.cost_history.clone()))
            .unwrap_or_default();

        Ok(GaResult {
            best_cost: best.cost,
            best: best.tour,
            generations,
            cost_history,
        })
    }
}

/// Score every tour. Completes before any selection begins.
fn score_population<O: Objective>(objective: &O, population: &[Tour]) -> Vec<ScoredTour> {
    population
        .iter()
        .map(|tour| {
            let cost = objective.evaluate(tour);
            trace!(cost, "tour evaluated");
            ScoredTour {
                tour: tour.clone(),
                cost,
            }
        })
        .collect()
}

/// Find the scored tour with the lowest cost.
fn find_best(scored: &[ScoredTour]) -> Option<&ScoredTour> {
    scored.iter().min_by(|a, b| {
        a.cost
            .partial_cmp(&b.cost)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// Update the run's best solution and history from a scored generation.
fn record_generation(run: &mut Run, scored: &[ScoredTour]) -> GenerationStats {
    let generation_best = find_best(scored);
    if let Some(candidate) = generation_best {
        let improves = run
            .best
            .as_ref()
            .map_or(true, |best| candidate.cost < best.cost);
        if improves {
            run.best = Some(candidate.clone());
        }
    }

    let best_cost = run.best.as_ref().map_or(f64::INFINITY, |best| best.cost);
    run.cost_history.push(best_cost);

    let mean_cost = if scored.is_empty() {
        f64::NAN
    } else {
        scored.iter().map(|s| s.cost).sum::<f64>() / scored.len() as f64
    };

    GenerationStats {
        generation: run.generation,
        best_cost,
        generation_best_cost: generation_best.map_or(f64::INFINITY, |s| s.cost),
        mean_cost,
    }
}

fn notify(observer: &mut Option<Observer>, stats: &GenerationStats) {
    if let Some(callback) = observer.as_mut() {
        callback(stats);
    }
}

// ============================================================================
// Tests
// ============================================================================
