//! Generic state-space search.
//!
//! Every search starts from one state and repeatedly hands a popped state to an `expand` callback
//! together with a [`Frontier`], which the callback pushes successor states onto. States are
//! deduplicated by an identity computed with `id_of`; how a repeated identity is treated depends on
//! the search:
//!
//! - [`search_best`] and [`search_all`] keep the best state per identity under a comparison and
//!   re-expand an identity whenever it improves.
//! - [`search_no_repeats`] admits each identity once, first come first served.
//! - [`search_memoizing`] recurses depth first and caches the value computed for each identity.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::marker::PhantomData;

/// The order in which pushed states are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Expand states in the order they were pushed.
    #[default]
    BreadthFirst,
    /// Expand the most recently pushed state first.
    DepthFirst,
}

impl Traversal {
    fn pop<S>(self, queue: &mut VecDeque<S>) -> Option<S> {
        match self {
            Self::BreadthFirst => queue.pop_front(),
            Self::DepthFirst => queue.pop_back(),
        }
    }
}

enum Admission<'a, S> {
    Improving(&'a dyn Fn(&S, &S) -> Ordering),
    FirstSeen,
}

impl<S> Clone for Admission<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Admission<'_, S> {}

/// Handle for pushing successor states during an expansion.
///
/// Pushes take effect immediately, so a later push in the same expansion sees the earlier ones.
pub struct Frontier<'a, S, Id> {
    queue: &'a mut VecDeque<S>,
    seen: &'a mut HashMap<Id, S>,
    id_of: &'a dyn Fn(&S) -> Id,
    admission: Admission<'a, S>,
    target: Option<&'a Id>,
    best: &'a mut Option<S>,
}

impl<S: Clone, Id: Eq + Hash> Frontier<'_, S, Id> {
    /// Offer a successor state.
    ///
    /// Returns whether the state was admitted: it was the first of its identity, it improved on
    /// the best known state of its identity, or it reached the target with a new best.
    pub fn push(&mut self, state: S) -> bool {
        let id = (self.id_of)(&state);

        let compare = match self.admission {
            Admission::FirstSeen => {
                if self.seen.contains_key(&id) {
                    return false;
                }
                self.seen.insert(id, state.clone());
                self.queue.push_back(state);
                return true;
            }
            Admission::Improving(compare) => compare,
        };

        if self.target == Some(&id) {
            let improves = self
                .best
                .as_ref()
                .is_none_or(|best| compare(&state, best).is_lt());
            if improves {
                *self.best = Some(state);
            }
            return improves;
        }

        let improves = self
            .seen
            .get(&id)
            .is_none_or(|known| compare(&state, known).is_lt());
        if improves {
            self.seen.insert(id, state.clone());
            self.queue.push_back(state);
        }
        improves
    }

    /// The best known state for an identity so far.
    #[must_use]
    pub fn known(&self, id: &Id) -> Option<&S> {
        self.seen.get(id)
    }

    /// The best state found at the target so far.
    #[must_use]
    pub fn best(&self) -> Option<&S> {
        self.best.as_ref()
    }
}

/// The outcome of [`search_best`].
#[derive(Debug, Clone)]
pub struct BestSearch<S, Id> {
    /// The best state reached for every identity other than the target.
    pub seen: HashMap<Id, S>,
    /// The best state reaching the target, if any did.
    pub best: Option<S>,
}

fn explore<S, Id, E>(
    start: S,
    id_of: &dyn Fn(&S) -> Id,
    admission: Admission<'_, S>,
    target: Option<&Id>,
    traversal: Traversal,
    mut expand: E,
) -> BestSearch<S, Id>
where
    S: Clone,
    Id: Eq + Hash,
    E: FnMut(&S, &mut Frontier<'_, S, Id>),
{
    let mut queue = VecDeque::from([start.clone()]);
    let mut seen = HashMap::from([(id_of(&start), start)]);
    let mut best = None;
    let mut expanded = 0_usize;

    while let Some(state) = traversal.pop(&mut queue) {
        if let Admission::Improving(compare) = admission {
            if best
                .as_ref()
                .is_some_and(|best| compare(best, &state).is_le())
            {
                continue;
            }
            if seen
                .get(&id_of(&state))
                .is_some_and(|known| compare(known, &state).is_lt())
            {
                continue;
            }
        }

        expanded += 1;
        let mut frontier = Frontier {
            queue: &mut queue,
            seen: &mut seen,
            id_of,
            admission,
            target,
            best: &mut best,
        };
        expand(&state, &mut frontier);
    }

    log::debug!(
        "{traversal:?} search expanded {expanded} states over {} identities",
        seen.len()
    );
    BestSearch { seen, best }
}

/// Search for the best state reaching `target`, keeping the best state per identity along the way.
///
/// States compare with `compare`, where [`Ordering::Less`] means better. A pushed state replaces
/// the known state of its identity and is queued only if it is strictly better. States reaching the
/// target are recorded as the best candidate and never expanded. A popped state is skipped if it
/// cannot beat the current best or has since been superseded for its identity.
#[expect(
    clippy::needless_pass_by_value,
    reason = "the target is an identity like the ones `id_of` returns"
)]
#[must_use]
pub fn search_best<S, Id, F, C, E>(
    start: S,
    target: Id,
    id_of: F,
    compare: C,
    traversal: Traversal,
    expand: E,
) -> BestSearch<S, Id>
where
    S: Clone,
    Id: Eq + Hash,
    F: Fn(&S) -> Id,
    C: Fn(&S, &S) -> Ordering,
    E: FnMut(&S, &mut Frontier<'_, S, Id>),
{
    explore(
        start,
        &id_of,
        Admission::Improving(&compare),
        Some(&target),
        traversal,
        expand,
    )
}

/// [`search_best`] with smaller states being better.
#[must_use]
pub fn search_best_by_ord<S, Id, F, E>(
    start: S,
    target: Id,
    id_of: F,
    traversal: Traversal,
    expand: E,
) -> BestSearch<S, Id>
where
    S: Clone + Ord,
    Id: Eq + Hash,
    F: Fn(&S) -> Id,
    E: FnMut(&S, &mut Frontier<'_, S, Id>),
{
    search_best(start, target, id_of, S::cmp, traversal, expand)
}

/// Push handle for searches where states are plain identities scored by step count.
pub struct StepFrontier<'f, 'a, Id> {
    inner: &'f mut Frontier<'a, (Id, usize), Id>,
    steps: usize,
}

impl<Id: Clone + Eq + Hash> StepFrontier<'_, '_, Id> {
    /// Offer a neighbor one step further than the state being expanded.
    pub fn push(&mut self, id: Id) -> bool {
        self.inner.push((id, self.steps + 1))
    }

    /// Steps from the start to the state being expanded.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// The outcome of [`search_best_steps`].
#[derive(Debug, Clone)]
pub struct StepSearch<Id> {
    /// Fewest steps to every identity reached, other than the target.
    pub steps: HashMap<Id, usize>,
    /// The target with the fewest steps to it, if reachable.
    pub best: Option<(Id, usize)>,
}

fn by_steps<Id>(a: &(Id, usize), b: &(Id, usize)) -> Ordering {
    a.1.cmp(&b.1)
}

fn step_map<Id: Eq + Hash>(seen: HashMap<Id, (Id, usize)>) -> HashMap<Id, usize> {
    seen.into_iter()
        .map(|(id, (_, steps))| (id, steps))
        .collect()
}

/// Fewest steps from `start` to `target`, where every push is one step.
#[must_use]
pub fn search_best_steps<Id, E>(
    start: Id,
    target: Id,
    traversal: Traversal,
    mut expand: E,
) -> StepSearch<Id>
where
    Id: Clone + Eq + Hash,
    E: FnMut(&Id, &mut StepFrontier<'_, '_, Id>),
{
    let search = search_best(
        (start, 0),
        target,
        |(id, _): &(Id, usize)| id.clone(),
        by_steps,
        traversal,
        |(id, steps): &(Id, usize), frontier: &mut Frontier<'_, (Id, usize), Id>| {
            expand(
                id,
                &mut StepFrontier {
                    inner: frontier,
                    steps: *steps,
                },
            );
        },
    );

    StepSearch {
        steps: step_map(search.seen),
        best: search.best,
    }
}

/// Explore everything reachable from `start`, keeping the best state per identity.
///
/// Admission and skipping follow [`search_best`] without a target.
#[must_use]
pub fn search_all<S, Id, F, C, E>(
    start: S,
    id_of: F,
    compare: C,
    traversal: Traversal,
    expand: E,
) -> HashMap<Id, S>
where
    S: Clone,
    Id: Eq + Hash,
    F: Fn(&S) -> Id,
    C: Fn(&S, &S) -> Ordering,
    E: FnMut(&S, &mut Frontier<'_, S, Id>),
{
    explore(
        start,
        &id_of,
        Admission::Improving(&compare),
        None,
        traversal,
        expand,
    )
    .seen
}

/// [`search_all`] with smaller states being better.
#[must_use]
pub fn search_all_by_ord<S, Id, F, E>(
    start: S,
    id_of: F,
    traversal: Traversal,
    expand: E,
) -> HashMap<Id, S>
where
    S: Clone + Ord,
    Id: Eq + Hash,
    F: Fn(&S) -> Id,
    E: FnMut(&S, &mut Frontier<'_, S, Id>),
{
    search_all(start, id_of, S::cmp, traversal, expand)
}

/// Fewest steps from `start` to every reachable identity.
#[must_use]
pub fn search_all_steps<Id, E>(start: Id, traversal: Traversal, mut expand: E) -> HashMap<Id, usize>
where
    Id: Clone + Eq + Hash,
    E: FnMut(&Id, &mut StepFrontier<'_, '_, Id>),
{
    let seen = search_all(
        (start, 0),
        |(id, _): &(Id, usize)| id.clone(),
        by_steps,
        traversal,
        |(id, steps): &(Id, usize), frontier: &mut Frontier<'_, (Id, usize), Id>| {
            expand(
                id,
                &mut StepFrontier {
                    inner: frontier,
                    steps: *steps,
                },
            );
        },
    );
    step_map(seen)
}

/// Flood from `start`, admitting each identity only the first time it is pushed.
///
/// Every admitted state is expanded exactly once. The result maps each identity to its first
/// state.
#[must_use]
pub fn search_no_repeats<S, Id, F, E>(
    start: S,
    id_of: F,
    traversal: Traversal,
    expand: E,
) -> HashMap<Id, S>
where
    S: Clone,
    Id: Eq + Hash,
    F: Fn(&S) -> Id,
    E: FnMut(&S, &mut Frontier<'_, S, Id>),
{
    explore(
        start,
        &id_of,
        Admission::FirstSeen,
        None,
        traversal,
        expand,
    )
    .seen
}

/// [`search_no_repeats`] where a state is its own identity.
#[must_use]
pub fn search_no_repeats_states<S, E>(start: S, traversal: Traversal, expand: E) -> HashSet<S>
where
    S: Clone + Eq + Hash,
    E: FnMut(&S, &mut Frontier<'_, S, S>),
{
    search_no_repeats(start, S::clone, traversal, expand)
        .into_keys()
        .collect()
}

/// Recursion handle for memoized searches.
pub struct Recurse<'a, S, Id, O> {
    id_of: &'a dyn Fn(&S) -> Id,
    run: &'a dyn Fn(&S, &mut Recurse<'_, S, Id, O>) -> O,
    cache: &'a mut HashMap<Id, O>,
}

impl<S, Id: Eq + Hash, O: Clone> Recurse<'_, S, Id, O> {
    /// The value of `state`, computed once per identity.
    pub fn next(&mut self, state: &S) -> O {
        let id = (self.id_of)(state);
        if let Some(output) = self.cache.get(&id) {
            return output.clone();
        }
        let run = self.run;
        let output = run(state, self);
        self.cache.insert(id, output.clone());
        output
    }

    /// Number of identities with a cached value.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

/// A memoized recursive function over states.
///
/// `run` computes the value of a state and calls [`Recurse::next`] for the values of other states.
/// Values are cached by identity across every [`evaluate`](Self::evaluate) call. The state passed
/// to `evaluate` itself is always run, not looked up.
pub struct Memoizer<S, Id, O, F, R> {
    id_of: F,
    run: R,
    cache: HashMap<Id, O>,
    state: PhantomData<fn(&S)>,
}

impl<S, Id, O, F, R> Memoizer<S, Id, O, F, R>
where
    Id: Eq + Hash,
    O: Clone,
    F: Fn(&S) -> Id,
    R: Fn(&S, &mut Recurse<'_, S, Id, O>) -> O,
{
    #[must_use]
    pub fn new(id_of: F, run: R) -> Self {
        Self {
            id_of,
            run,
            cache: HashMap::new(),
            state: PhantomData,
        }
    }

    pub fn evaluate(&mut self, start: &S) -> O {
        let run = &self.run;
        let mut recurse = Recurse {
            id_of: &self.id_of,
            run,
            cache: &mut self.cache,
        };
        let output = run(start, &mut recurse);
        log::debug!("memoized search cached {} values", self.cache.len());
        output
    }

    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

/// Evaluate a memoized recursive function once. See [`Memoizer`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "matches the other searches, which take their start state by value"
)]
#[must_use]
pub fn search_memoizing<S, Id, O, F, R>(start: S, id_of: F, run: R) -> O
where
    Id: Eq + Hash,
    O: Clone,
    F: Fn(&S) -> Id,
    R: Fn(&S, &mut Recurse<'_, S, Id, O>) -> O,
{
    Memoizer::new(id_of, run).evaluate(&start)
}

/// [`search_memoizing`] where a state is its own identity.
#[must_use]
pub fn search_memoizing_states<S, O, R>(start: S, run: R) -> O
where
    S: Clone + Eq + Hash,
    O: Clone,
    R: Fn(&S, &mut Recurse<'_, S, S, O>) -> O,
{
    search_memoizing(start, S::clone, run)
}
