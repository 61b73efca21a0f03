/// Process-wide facade for the collision index
///
/// Holds the global logger and an optional session-wide collision index
/// with an explicit lifecycle: `initialize` once, `create_collision_index`
/// at session start, `destroy_collision_index` / `shutdown` at session end.
///
/// Code that can pass its index around explicitly should simply own a
/// `CollisionIndex`; the shared slot exists for consumers that need one
/// index reachable from many places or threads. The returned
/// `Arc<Mutex<CollisionIndex>>` is the single exclusive lock serializing
/// every mutation and query.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::index::{CollisionIndex, CollisionIndexConfig};
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Shared collision index type handed out by the engine
pub type SharedCollisionIndex = Arc<Mutex<CollisionIndex>>;

/// Internal state structure holding the session singletons
struct EngineState {
    /// Session-wide collision index
    collision_index: RwLock<Option<SharedCollisionIndex>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            collision_index: RwLock::new(None),
        }
    }
}

// ===== PUBLIC API =====

/// Engine singleton manager
///
/// # Example
///
/// ```no_run
/// use collision_index::collision::{Engine, CollisionIndexConfig};
/// use collision_index::glam::Vec3;
///
/// Engine::initialize()?;
/// Engine::create_collision_index(CollisionIndexConfig::default())?;
///
/// let index = Engine::collision_index()?;
/// let handle = index.lock().unwrap().register(Vec3::ZERO, Vec3::ONE, true);
///
/// Engine::shutdown();
/// # Ok::<(), collision_index::collision::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Log an error before handing it back to the caller
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::collision_error!("collision::Engine", "Initialization failed: {}", msg);
            }
            Error::LockPoisoned(msg) => {
                crate::collision_error!("collision::Engine", "Lock poisoned: {}", msg);
            }
            _ => {
                crate::collision_error!("collision::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get().ok_or_else(|| Self::log_and_return_error(
            Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
        ))
    }

    /// Initialize the engine
    ///
    /// Must be called once before creating the shared collision index.
    /// Calling it again is harmless.
    ///
    /// # Errors
    ///
    /// Currently always succeeds, but returns Result for future extensibility.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Shutdown the engine and drop the shared collision index
    ///
    /// Handles held by consumers become meaningless for a new index created
    /// afterwards; consumers must re-register.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut index) = state.collision_index.write() {
                *index = None;
            }
        }
    }

    // ===== COLLISION INDEX API =====

    /// Create the session-wide collision index
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A collision index already exists
    /// - The configuration is invalid
    /// - The slot lock is poisoned
    pub fn create_collision_index(config: CollisionIndexConfig) -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.collision_index.write()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("CollisionIndex slot".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("CollisionIndex already exists. Call Engine::destroy_collision_index() first.".to_string())
            ));
        }

        let index = CollisionIndex::with_config(&config)?;
        *lock = Some(Arc::new(Mutex::new(index)));

        crate::collision_info!("collision::Engine", "CollisionIndex created ({:?})", config.broad_phase);

        Ok(())
    }

    /// Get the session-wide collision index
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - The collision index has not been created
    pub fn collision_index() -> Result<SharedCollisionIndex> {
        let state = Self::state()?;

        let lock = state.collision_index.read()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("CollisionIndex slot".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("CollisionIndex not created. Call Engine::create_collision_index() first.".to_string())
            ))
    }

    /// Destroy the session-wide collision index
    ///
    /// Clones of the `Arc` handed out earlier stay usable until dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized
    pub fn destroy_collision_index() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.collision_index.write()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("CollisionIndex slot".to_string())
            ))?;

        *lock = None;

        crate::collision_info!("collision::Engine", "CollisionIndex destroyed");

        Ok(())
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        Self::shutdown();
    }

    // ===== LOGGING API =====

    /// Replace the logger
    ///
    /// # Example
    ///
    /// ```no_run
    /// use collision_index::collision::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct Silent;
    /// impl Logger for Silent {
    ///     fn log(&self, _entry: &LogEntry) {}
    /// }
    ///
    /// Engine::set_logger(Silent);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        Self::set_logger(DefaultLogger);
    }

    /// Log a message without file:line (used by the collision_* macros)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }

    /// Log a message with file:line (used by collision_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }

    fn dispatch(entry: LogEntry) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&entry);
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
