//! Input validation applied before dispatch.
//!
//! This is the only request-path layer that produces `Error::Validation`;
//! content type implementations never do. It checks identifiers, payload
//! shape, batch and page sizes, search cursors and whether the requested
//! version is known to the content type. Unregistered content types pass
//! through so the dispatcher can report them as not found.

use contentdb_core::{ContentTypeId, Error, Limits, Options, Result, Value, Version};
use contentdb_engine::{ContentConfig, ContentRegistry};

use crate::command::Command;

/// Validates commands against limits, configuration and the registry.
pub struct SchemaValidator<'a> {
    registry: &'a ContentRegistry,
    config: &'a ContentConfig,
    limits: &'a Limits,
}

impl<'a> SchemaValidator<'a> {
    /// Create a validator
    pub fn new(registry: &'a ContentRegistry, config: &'a ContentConfig, limits: &'a Limits) -> Self {
        SchemaValidator {
            registry,
            config,
            limits,
        }
    }

    /// Validate one command.
    pub fn validate(&self, cmd: &Command) -> Result<()> {
        self.validate_content_type(cmd.content_type_id())?;
        self.validate_version(cmd.content_type_id(), cmd.version())?;

        match cmd {
            Command::Get(input) => self.validate_id(&input.id),
            Command::BulkGet(input) => {
                if input.ids.is_empty() {
                    return Err(Error::validation("ids must not be empty"));
                }
                if input.ids.len() > self.config.max_bulk_get {
                    return Err(Error::validation(format!(
                        "too many ids: {} exceeds maximum {}",
                        input.ids.len(),
                        self.config.max_bulk_get
                    )));
                }
                input.ids.iter().try_for_each(|id| self.validate_id(id))
            }
            Command::Create(input) => {
                self.validate_data(&input.data)?;
                validate_create_options(input.options.as_ref())
            }
            Command::Update(input) => {
                self.validate_id(&input.id)?;
                self.validate_data(&input.data)
            }
            Command::Delete(input) => self.validate_id(&input.id),
            Command::Search(input) => {
                if let Some(limit) = input.query.limit {
                    if limit == 0 || limit > self.config.max_search_limit {
                        return Err(Error::validation(format!(
                            "limit must be between 1 and {}",
                            self.config.max_search_limit
                        )));
                    }
                }
                match input.query.cursor.as_deref() {
                    Some(cursor) if cursor.parse::<usize>().is_err() => {
                        Err(Error::validation(format!("invalid cursor '{}'", cursor)))
                    }
                    _ => Ok(()),
                }
            }
        }
    }

    fn validate_content_type(&self, id: &ContentTypeId) -> Result<()> {
        Ok(self.limits.validate_content_type_id(id.as_str())?)
    }

    fn validate_id(&self, id: &str) -> Result<()> {
        Ok(self.limits.validate_id(id)?)
    }

    fn validate_data(&self, data: &Value) -> Result<()> {
        if !data.is_object() {
            return Err(Error::validation(format!(
                "item data must be an object, got {}",
                type_name(data)
            )));
        }
        Ok(self.limits.validate_value(data)?)
    }

    fn validate_version(&self, id: &ContentTypeId, requested: Version) -> Result<()> {
        if !self.config.strict_versions {
            return Ok(());
        }
        match self.registry.latest_version(id) {
            Some(latest) if requested > latest => Err(Error::validation(format!(
                "Invalid version. Latest version is [{}]",
                latest
            ))),
            _ => Ok(()),
        }
    }
}

fn validate_create_options(options: Option<&Options>) -> Result<()> {
    match options.and_then(|o| o.get("id")) {
        Some(Value::String(id)) if !id.is_empty() => Ok(()),
        Some(_) => Err(Error::validation("option 'id' must be a non-empty string")),
        None => Ok(()),
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
