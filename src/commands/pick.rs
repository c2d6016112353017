//! Pick command - the interactive inline picker

use crate::EmojError;
use crate::config::EmojConfig;
use crate::connectivity::Probe;
use crate::search::LookupGateway;
use crate::session::{Session, SessionHandler};
use crate::ui::{FinderOutcome, InlineFinder};
use log::info;

type Result<T> = std::result::Result<T, EmojError>;

/// Run one interactive session
///
/// # Errors
/// Returns an error if the terminal cannot be driven or the picked emoji
/// cannot be handed off.
pub fn execute(
    config: &EmojConfig,
    gateway: LookupGateway,
    probe: &dyn Probe,
    handler: &mut dyn SessionHandler,
) -> Result<FinderOutcome> {
    let max_results = gateway.max_results();
    let mut session = Session::new(gateway, config.debounce(), config.tone());
    let finder = InlineFinder::new(max_results);

    let outcome = finder.run(&mut session, probe, &config.probe_host, handler)?;
    info!("Session finished: {outcome:?}");
    Ok(outcome)
}
