//! Then steps for logging backend selection BDD scenarios.

use super::world::{SelectionWorld, configurator, run_async};
use logctl::logging_backend::{
    domain::LoggerDescriptor,
    ports::LoggingBackend,
    services::{ResolveError, SelectionError},
};
use rstest_bdd_macros::then;

#[then(r#"the backend is bound to the configurator for context "{context}""#)]
fn bound_to_configurator(world: &SelectionWorld, context: String) -> Result<(), eyre::Report> {
    let expected = configurator(&context)?;
    let bound = world.backend()?.object_name();
    if bound != Some(&expected) {
        return Err(eyre::eyre!("expected binding to {expected}, found {bound:?}"));
    }
    Ok(())
}

#[then("selection fails listing {count:usize} candidates")]
fn selection_is_ambiguous(world: &SelectionWorld, count: usize) -> Result<(), eyre::Report> {
    match &world.selection {
        Some(Err(SelectionError::Resolve(ResolveError::Ambiguous { candidates, .. })))
            if candidates.len() == count =>
        {
            Ok(())
        }
        Some(Err(err)) => Err(eyre::eyre!(
            "expected ambiguity with {count} candidates, got {err}"
        )),
        Some(Ok(backend)) => Err(eyre::eyre!(
            "expected ambiguity, selected {} backend",
            backend.kind()
        )),
        None => Err(eyre::eyre!("no selection in scenario world")),
    }
}

#[then(r#"the reported level of "{logger}" is "{level}""#)]
fn reported_level(
    world: &SelectionWorld,
    logger: String,
    level: String,
) -> Result<(), eyre::Report> {
    let levels = run_async(
        world
            .backend()?
            .effective_levels(&[LoggerDescriptor::new(logger.as_str())]),
    )
    .map_err(|err| eyre::eyre!("level query failed: {err}"))?;
    match levels.as_slice() {
        [reported] if reported.name() == logger && reported.level() == level => Ok(()),
        other => Err(eyre::eyre!("expected {logger} at {level}, got {other:?}")),
    }
}

#[then("no loggers are reported")]
fn no_loggers(world: &SelectionWorld) -> Result<(), eyre::Report> {
    match &world.logger_names {
        Some(names) if names.is_empty() => Ok(()),
        other => Err(eyre::eyre!("expected an empty logger listing, got {other:?}")),
    }
}

#[then("no bridge call was made")]
fn no_bridge_call(world: &SelectionWorld) -> Result<(), eyre::Report> {
    let calls = world
        .bridge
        .call_count()
        .map_err(|err| eyre::eyre!("call count unavailable: {err}"))?;
    if calls != 0 {
        return Err(eyre::eyre!("expected no bridge calls, found {calls}"));
    }
    Ok(())
}
