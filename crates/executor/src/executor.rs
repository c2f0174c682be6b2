//! The Executor - single entry point for content procedures.
//!
//! The Executor is a stateless dispatcher that validates commands, routes
//! them to the content type's implementation and returns its result as-is.

use std::sync::Arc;

use tracing::{debug, warn};

use contentdb_core::{Limits, RequestContext};
use contentdb_engine::{ContentRegistry, Services};

use crate::handlers::{read, write};
use crate::schema::SchemaValidator;
use crate::{Command, Output, Result};

/// The procedure executor.
///
/// The Executor is **stateless**: it holds the read-only registry and the
/// services but keeps nothing per request. Each dispatch builds its own
/// storage context.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across tasks; concurrent
/// dispatches share no mutable state.
///
/// # Example
///
/// ```ignore
/// use contentdb_executor::{Command, Executor, GetIn};
///
/// let executor = Executor::new(Arc::new(registry), Arc::new(services));
///
/// let output = executor
///     .execute(
///         Command::Get(GetIn {
///             content_type_id: "note".into(),
///             id: "42".into(),
///             version: Version::INITIAL,
///             options: None,
///         }),
///         &RequestContext::new(),
///     )
///     .await?;
/// ```
pub struct Executor {
    registry: Arc<ContentRegistry>,
    services: Arc<Services>,
    limits: Limits,
}

impl Executor {
    /// Create an executor over a registry that is no longer being modified.
    pub fn new(registry: Arc<ContentRegistry>, services: Arc<Services>) -> Self {
        Self {
            registry,
            services,
            limits: Limits::default(),
        }
    }

    /// Replace the identifier and payload limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// The registry this executor dispatches against
    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    /// The services this executor was built with
    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Validate a command, then dispatch it.
    ///
    /// Validation failures are returned before any implementation runs.
    pub async fn execute(&self, cmd: Command, request: &RequestContext) -> Result<Output> {
        let validator = SchemaValidator::new(&self.registry, self.services.config(), &self.limits);
        if let Err(e) = validator.validate(&cmd) {
            warn!(
                procedure = cmd.procedure(),
                content_type = %cmd.content_type_id(),
                request_id = %request.request_id,
                error = %e,
                "rejected invalid input"
            );
            return Err(e);
        }
        self.dispatch(cmd, request).await
    }

    /// Dispatch an already-validated command.
    ///
    /// Fails with `ContentTypeNotFound` if nothing is registered for the
    /// command's content type; any other error comes from the implementation
    /// and is returned unchanged. No retries.
    pub async fn dispatch(&self, cmd: Command, request: &RequestContext) -> Result<Output> {
        debug!(
            procedure = cmd.procedure(),
            content_type = %cmd.content_type_id(),
            version = %cmd.version(),
            request_id = %request.request_id,
            "dispatching"
        );

        let registry = self.registry.as_ref();
        match cmd {
            Command::Get(input) => read::get(registry, request, input).await,
            Command::BulkGet(input) => read::bulk_get(registry, request, input).await,
            Command::Search(input) => read::search(registry, request, input).await,
            Command::Create(input) => write::create(registry, request, input).await,
            Command::Update(input) => write::update(registry, request, input).await,
            Command::Delete(input) => write::delete(registry, request, input).await,
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail.
    pub async fn execute_many(
        &self,
        cmds: Vec<Command>,
        request: &RequestContext,
    ) -> Vec<Result<Output>> {
        let mut results = Vec::with_capacity(cmds.len());
        for cmd in cmds {
            results.push(self.execute(cmd, request).await);
        }
        results
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("registry", &self.registry)
            .field("limits", &self.limits)
            .finish()
    }
}
