use super::context::CommandContext;
use super::registry::{Command, CommandError, CommandId, CommandRegistry};

/// Swaps the selection *indices* of the source and target selectors, then
/// re-invokes the exchange command through the registry.
///
/// Note this is an index swap, not a value swap: both selectors list the
/// same currencies here, but if the lists ever diverged in order the swap
/// would pick different currencies than the two currently shown. Kept
/// deliberately; do not switch to value-based swapping without a product
/// decision.
pub struct SwapCommand;

impl Command for SwapCommand {
    fn execute(
        &self,
        registry: &CommandRegistry,
        ctx: &mut CommandContext<'_>,
    ) -> Result<(), CommandError> {
        // Don't touch the selectors while a fetch is pending: the exchange
        // command would drop the re-invocation, leaving the shown selectors
        // out of step with the result that later arrives.
        if ctx.exchange_job.is_some() {
            log::info!("exchange in flight; ignoring swap");
            return Ok(());
        }

        let source_idx = ctx.inputs.source_idx;
        ctx.inputs.source_idx = ctx.inputs.target_idx;
        ctx.inputs.target_idx = source_idx;

        registry.invoke(CommandId::ExchangeMoney, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{ContextFixture, SpyFetcher};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingExchange(Arc<AtomicUsize>);

    impl Command for CountingExchange {
        fn execute(
            &self,
            _registry: &CommandRegistry,
            _ctx: &mut CommandContext<'_>,
        ) -> Result<(), CommandError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn swap_exchanges_indices_and_reinvokes_exchange_once() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let mut registry = CommandRegistry::new();
        registry.register(
            CommandId::ExchangeMoney,
            Arc::new(CountingExchange(Arc::clone(&invocations))),
        );
        registry.register(CommandId::Swap, Arc::new(SwapCommand));

        let mut fixture = ContextFixture::new(SpyFetcher::new(vec![]));
        fixture.inputs.source_idx = 0;
        fixture.inputs.target_idx = 2;

        registry
            .invoke(CommandId::Swap, &mut fixture.context())
            .unwrap();

        assert_eq!(fixture.inputs.source_idx, 2);
        assert_eq!(fixture.inputs.target_idx, 0);
        assert_eq!(invocations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn swap_during_pending_fetch_leaves_selectors_untouched() {
        use poll_promise::Promise;

        let invocations = Arc::new(AtomicUsize::new(0));
        let mut registry = CommandRegistry::new();
        registry.register(
            CommandId::ExchangeMoney,
            Arc::new(CountingExchange(Arc::clone(&invocations))),
        );
        registry.register(CommandId::Swap, Arc::new(SwapCommand));

        let mut fixture = ContextFixture::new(SpyFetcher::new(vec![]));
        fixture.inputs.source_idx = 0;
        fixture.inputs.target_idx = 2;
        fixture.exchange_job = Some(Promise::from_ready(Err(
            crate::commands::ExchangeError::InvalidInput,
        )));

        registry
            .invoke(CommandId::Swap, &mut fixture.context())
            .unwrap();

        assert_eq!(fixture.inputs.source_idx, 0);
        assert_eq!(fixture.inputs.target_idx, 2);
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn swap_without_exchange_registered_reports_unknown() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandId::Swap, Arc::new(SwapCommand));

        let mut fixture = ContextFixture::new(SpyFetcher::new(vec![]));
        let result = registry.invoke(CommandId::Swap, &mut fixture.context());

        assert!(matches!(
            result,
            Err(CommandError::Unknown(CommandId::ExchangeMoney))
        ));
    }
}
