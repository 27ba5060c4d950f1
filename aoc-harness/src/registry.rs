//! Solver registry for managing and creating solver instances

use crate::answer::Expected;
use crate::error::{ParseError, RegistrationError, SolverError};
use crate::input::InputKind;
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::{Part, Solver, SolverExt};

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Days per event (1-25)
pub const DAYS_PER_EVENT: usize = 25;

/// Calculate the slot index of a day, returning None if out of bounds
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    if day == 0 || day as usize > DAYS_PER_EVENT {
        return None;
    }
    Some((day - 1) as usize)
}

/// Reconstruct the day from a slot index
#[inline]
fn from_index(index: usize) -> u8 {
    index as u8 + 1
}

// ============================================================================
// Factory Types
// ============================================================================

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn Fn(&str, InputKind) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The day number (1-25)
    pub day: u8,
    /// Tags attached at registration
    pub tags: &'static [&'static str],
    /// Declared sample answer of part 1
    pub part_1_expected: Expected,
    /// Declared sample answer of part 2
    pub part_2_expected: Expected,
}

impl SolverInfo {
    /// The declared sample answer of the given part
    pub fn expected(&self, part: Part) -> Expected {
        match part {
            Part::One => self.part_1_expected,
            Part::Two => self.part_2_expected,
        }
    }
}

/// Factory entry with metadata
struct SolverEntry {
    factory: SolverFactory,
    info: SolverInfo,
}

/// Builder for constructing a SolverRegistry with fluent API
///
/// The builder rejects duplicate days and days outside 1..=25; the registry
/// it builds is immutable.
///
/// # Example
///
/// ```ignore
/// # use aoc_harness::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with one slot per day
    pub fn new() -> Self {
        Self {
            entries: (0..DAYS_PER_EVENT).map(|_| None).collect(),
        }
    }

    /// Register a solver factory for a day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Day out of range or already registered
    pub fn register<F>(mut self, info: SolverInfo, factory: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&str, InputKind) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync + 'static,
    {
        let index = calc_index(info.day).ok_or(RegistrationError::InvalidDay(info.day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(info.day));
        }

        self.entries[index] = Some(SolverEntry {
            factory: Box::new(factory),
            info,
        });
        Ok(self)
    }

    /// Register a concrete solver type for a day
    ///
    /// The factory parses the input into a [`SolverInstance`] of `S`; the
    /// expectations are read from the solver's constants.
    pub fn register_solver<S>(self, day: u8, tags: &'static [&'static str]) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        let info = SolverInfo {
            day,
            tags,
            part_1_expected: S::expected(Part::One),
            part_2_expected: S::expected(Part::Two),
        };
        self.register(info, move |input: &str, kind: InputKind| {
            let instance = SolverInstance::<S>::new(day, kind, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver>)
        })
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_harness::RegistryBuilder;
    /// // Register only solvers tagged as "grid"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
pub struct SolverRegistry {
    entries: Vec<Option<SolverEntry>>,
}

impl SolverRegistry {
    /// Look up the entry of a day
    fn entry(&self, day: u8) -> Option<&SolverEntry> {
        calc_index(day).and_then(|i| self.entries.get(i)?.as_ref())
    }

    /// Create a solver instance for a day by parsing the given input
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver(
        &self,
        day: u8,
        input: &str,
        kind: InputKind,
    ) -> Result<Box<dyn DynSolver>, SolverError> {
        let entry = self.entry(day).ok_or(SolverError::NotFound(day))?;
        (entry.factory)(input, kind).map_err(SolverError::ParseError)
    }

    /// Get metadata for a specific day
    pub fn info(&self, day: u8) -> Option<SolverInfo> {
        self.entry(day).map(|e| e.info)
    }

    /// Check if a solver exists for a day
    pub fn contains(&self, day: u8) -> bool {
        self.entry(day).is_some()
    }

    /// Iterate over metadata for all registered solvers, ordered by day
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                debug_assert_eq!(e.info.day, from_index(i));
                e.info
            })
        })
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if no solver is registered
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// This trait has no associated types, so differently typed solvers can sit
/// behind the same `&'static dyn RegisterableSolver` in a [`SolverPlugin`].
/// Every [`Solver`] gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(day, tags)
    }
}

/// Plugin information for automatic solver registration
///
/// Usually submitted by `#[derive(AutoRegisterSolver)]`, but can be written
/// by hand:
///
/// ```no_run
/// use aoc_harness::{Answer, AocParser, InputKind, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type Parsed = ();
///
///     fn parse(_: &str) -> Result<Self::Parsed, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1Solver {
///     fn part_1(_: &(), _: InputKind) -> Result<Answer, SolveError> {
///         Ok(Answer::from(0))
///     }
///
///     fn part_2(_: &(), _: InputKind) -> Result<Answer, SolveError> {
///         Ok(Answer::from(0))
///     }
/// }
///
/// aoc_harness::inventory::submit! {
///     SolverPlugin {
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "grid", "graph", "parsing")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);

/// Macro to register a solver type with a registry builder variable
///
/// Panics if the day is invalid or already taken, which makes it suitable
/// for tests and small programs.
///
/// # Example
///
/// ```
/// use aoc_harness::{register_solver, Answer, AocParser, InputKind, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct MyDay1Solver;
///
/// impl AocParser for MyDay1Solver {
///     type Parsed = ();
///
///     fn parse(_: &str) -> Result<Self::Parsed, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for MyDay1Solver {
///     fn part_1(_: &(), _: InputKind) -> Result<Answer, SolveError> {
///         Ok(Answer::from(1))
///     }
///
///     fn part_2(_: &(), _: InputKind) -> Result<Answer, SolveError> {
///         Ok(Answer::from(2))
///     }
/// }
///
/// let mut builder = RegistryBuilder::new();
/// register_solver!(builder, MyDay1Solver, 1);
/// let registry = builder.build();
/// assert!(registry.contains(1));
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $day:expr) => {
        $builder = $builder
            .register_solver::<$solver>($day, &[])
            .expect("Failed to register solver");
    };
}
