use super::context::{CommandContext, ContentView};
use super::registry::{Command, CommandError, CommandRegistry};

/// Switches the central panel back to the static info view.
pub struct ShowInfoCommand;

impl Command for ShowInfoCommand {
    fn execute(
        &self,
        _registry: &CommandRegistry,
        ctx: &mut CommandContext<'_>,
    ) -> Result<(), CommandError> {
        *ctx.content = ContentView::Info;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::registry::CommandId;
    use crate::commands::testing::{ContextFixture, SpyFetcher};
    use std::sync::Arc;

    #[test]
    fn show_info_switches_content_view() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandId::ShowInfo, Arc::new(ShowInfoCommand));

        let mut fixture = ContextFixture::new(SpyFetcher::new(vec![]));
        fixture.content = ContentView::Chart;

        registry
            .invoke(CommandId::ShowInfo, &mut fixture.context())
            .unwrap();

        assert_eq!(fixture.content, ContentView::Info);
    }
}
