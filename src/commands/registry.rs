use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use strum_macros::{Display, EnumIter};

use super::context::CommandContext;
use super::exchange::ExchangeError;

/// Closed set of command identifiers. The string forms are the literal
/// names UI trigger sites historically used to look commands up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CommandId {
    #[strum(serialize = "exchange money")]
    ExchangeMoney,
    #[strum(serialize = "swap")]
    Swap,
    #[strum(serialize = "show info")]
    ShowInfo,
}

#[derive(Debug, Clone)]
pub enum CommandError {
    /// No command registered under the identifier. A programmer error, not
    /// a user-facing condition.
    Unknown(CommandId),
    Exchange(ExchangeError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(id) => write!(f, "no command registered for \"{}\"", id),
            CommandError::Exchange(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ExchangeError> for CommandError {
    fn from(err: ExchangeError) -> Self {
        CommandError::Exchange(err)
    }
}

/// A zero-argument action behind a command identifier. Commands receive the
/// registry so one command can re-invoke another by identifier.
pub trait Command {
    fn execute(
        &self,
        registry: &CommandRegistry,
        ctx: &mut CommandContext<'_>,
    ) -> Result<(), CommandError>;
}

/// Mapping from identifier to action. Registration overwrites any existing
/// binding; invocation runs synchronously on the calling thread.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<CommandId, Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: CommandId, command: Arc<dyn Command>) {
        self.commands.insert(id, command);
    }

    pub fn invoke(
        &self,
        id: CommandId,
        ctx: &mut CommandContext<'_>,
    ) -> Result<(), CommandError> {
        let command = self
            .commands
            .get(&id)
            .cloned()
            .ok_or(CommandError::Unknown(id))?;
        command.execute(self, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{ContextFixture, SpyFetcher};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Recorder {
        hits: Arc<AtomicUsize>,
        tag: usize,
        last_tag: Arc<AtomicUsize>,
    }

    impl Command for Recorder {
        fn execute(
            &self,
            _registry: &CommandRegistry,
            _ctx: &mut CommandContext<'_>,
        ) -> Result<(), CommandError> {
            self.hits.fetch_add(1, Ordering::SeqCst);
            self.last_tag.store(self.tag, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn invoking_unregistered_command_fails() {
        let registry = CommandRegistry::new();
        let mut fixture = ContextFixture::new(SpyFetcher::new(vec![]));

        let result = registry.invoke(CommandId::Swap, &mut fixture.context());

        assert!(matches!(
            result,
            Err(CommandError::Unknown(CommandId::Swap))
        ));
    }

    #[test]
    fn reregistration_overwrites_previous_binding() {
        let hits = Arc::new(AtomicUsize::new(0));
        let last_tag = Arc::new(AtomicUsize::new(0));
        let mut registry = CommandRegistry::new();
        registry.register(
            CommandId::ExchangeMoney,
            Arc::new(Recorder {
                hits: Arc::clone(&hits),
                tag: 1,
                last_tag: Arc::clone(&last_tag),
            }),
        );
        registry.register(
            CommandId::ExchangeMoney,
            Arc::new(Recorder {
                hits: Arc::clone(&hits),
                tag: 2,
                last_tag: Arc::clone(&last_tag),
            }),
        );

        let mut fixture = ContextFixture::new(SpyFetcher::new(vec![]));
        registry
            .invoke(CommandId::ExchangeMoney, &mut fixture.context())
            .unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(last_tag.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn identifier_strings_match_the_registry_names() {
        assert_eq!(CommandId::ExchangeMoney.to_string(), "exchange money");
        assert_eq!(CommandId::Swap.to_string(), "swap");
        assert_eq!(CommandId::ShowInfo.to_string(), "show info");
    }

    #[test]
    fn identifier_strings_are_distinct() {
        use strum::IntoEnumIterator;

        let names: std::collections::HashSet<String> =
            CommandId::iter().map(|id| id.to_string()).collect();

        assert_eq!(names.len(), CommandId::iter().count());
    }
}
